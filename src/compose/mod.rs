//! Composing monadic computations.
//!
//! - [`domonad`]: a do-notation interpreter over named [`BindingStep`]s
//! - [`Environment`]: the persistent name-to-value map those steps read
//! - Combinators such as [`m_sequence`], [`m_map`], [`m_comp`] and
//!   [`m_filter`], written once against [`MonadDefinition`](crate::typeclass::MonadDefinition)
//!
//! # Examples
//!
//! ```rust
//! use monadic::compose::{BindingStep, domonad, m_when};
//! use monadic::effect::{WriterMonad, run_writer, writer_return, writer_tell};
//! use monadic::typeclass::MonadDefinition;
//!
//! let writer = WriterMonad::<Vec<String>>::new();
//! let steps = vec![
//!     BindingStep::constant("x", writer_return(3)),
//!     BindingStep::new("y", move |environment| {
//!         let x: i32 = *environment.lookup("x")?;
//!         let logged = m_when(writer, x > 2, writer_tell(vec![format!("x = {x}")]))?;
//!         writer.bind(logged, move |()| Ok(writer_return(x * 2)))
//!     }),
//! ];
//! let result = domonad(writer, steps, |environment| {
//!     Ok(writer_return(*environment.lookup("y")?))
//! });
//!
//! assert_eq!(result.and_then(run_writer), Ok((6, vec!["x = 3".to_string()])));
//! ```

mod combinators;
mod do_notation;
mod environment;

pub use combinators::{
    Kleisli, m_chain, m_comp, m_filter, m_fmap, m_guard, m_join, m_lift, m_lift2, m_map,
    m_plus_all, m_reduce, m_sequence, m_unless, m_until, m_when,
};
pub use do_notation::{BindingStep, domonad, domonad_value};
pub use environment::{Environment, EnvironmentIter};
