//! Control-flow computation models: Maybe, List and Either.
//!
//! These three definitions decide, at each `bind`, whether and how often the
//! rest of the computation runs:
//!
//! - [`MaybeMonad`]: `None` stops the chain (MonadPlus)
//! - [`ListMonad`]: every element continues the chain (MonadPlus)
//! - [`EitherMonad`]: `Left` stops the chain and carries an error value
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{MaybeMonad, maybe_return, maybe_zero};
//! use monadic::typeclass::MonadDefinition;
//!
//! let stopped = MaybeMonad.bind(maybe_zero::<i32>(), |n| Ok(maybe_return(n + 1)));
//! assert_eq!(stopped.map(|value| value.is_none()), Ok(true));
//! ```

mod either;
mod list;
mod maybe;

pub use either::{Either, EitherMonad, EitherValue, either_catch, either_left, either_right};
pub use list::{ListMonad, ListValue, list_from, list_return, list_zero};
pub use maybe::{MaybeMonad, MaybeValue, maybe_from, maybe_return, maybe_zero};
