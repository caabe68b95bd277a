//! The monad abstraction and the algebra it rests on.
//!
//! - [`MonadDefinition`]: the `unit`/`bind` (+ optional `zero`/`plus`)
//!   capability bundle every computation model implements
//! - [`MonadicValue`]: the tagged union of values those definitions produce
//! - [`Variant`]: names the seven computation models
//! - [`Semigroup`], [`Monoid`]: the contract a Writer log must satisfy
//! - [`Identity`], [`IdentityMonad`]: the effect-free model
//! - [`Sum`]: numeric wrapper usable as a Writer log
//!
//! # Examples
//!
//! ## Using Monoid
//!
//! ```rust
//! use monadic::typeclass::{Monoid, Semigroup, Sum};
//!
//! let value = String::from("hello");
//! assert_eq!(String::empty().combine(value.clone()), value);
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//! ```
//!
//! ## Using a definition directly
//!
//! ```rust
//! use monadic::control::{ListMonad, list_from};
//! use monadic::typeclass::MonadDefinition;
//!
//! let pairs = ListMonad.bind(list_from([1, 2]), |x: i32| {
//!     Ok(list_from([x * 10, x * 100]))
//! });
//! assert_eq!(pairs.and_then(|value| value.into_vec()), Ok(vec![10, 100, 20, 200]));
//! ```

mod identity;
mod monad;
mod monoid;
mod semigroup;
mod value;
mod wrappers;

pub use identity::{Identity, IdentityMonad, IdentityValue, identity_return, run_identity};
pub use monad::MonadDefinition;
pub(crate) use monad::definition_marker;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use value::{MonadicValue, ReaderFunction, StateFunction, Variant};
pub use wrappers::Sum;
