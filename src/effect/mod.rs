//! Effectful computation models: State, Writer and Reader.
//!
//! Each definition threads one kind of ancillary data through a chain of
//! binds:
//!
//! - [`StateMonad`]: a state passed from step to step
//! - [`WriterMonad`]: a log accumulated with its [`Monoid`](crate::typeclass::Monoid)
//! - [`ReaderMonad`]: a read-only environment shared by every step
//!
//! State and Reader values are deferred functions; nothing runs until
//! [`run_state`] or [`run_reader`] supplies the initial input.
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::{StateMonad, run_state, state_get, state_put};
//! use monadic::typeclass::MonadDefinition;
//!
//! let state = StateMonad::<u32>::new();
//! let tick = state
//!     .bind(state_get(), |count| Ok(state_put(count + 1)))
//!     .unwrap();
//! assert_eq!(run_state(&tick, 0), Ok(((), 1)));
//! ```

mod reader;
mod state;
mod writer;

pub use reader::{ReaderMonad, ReaderValue, ask, asks, local, reader_return, run_reader};
pub use state::{
    StateMonad, StateValue, eval_state, exec_state, run_state, state_get, state_gets,
    state_modify, state_new, state_put, state_return,
};
pub use writer::{
    WriterMonad, WriterValue, exec_writer, run_writer, writer_censor, writer_listen,
    writer_new, writer_return, writer_tell,
};
