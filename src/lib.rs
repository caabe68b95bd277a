//! # monadic
//!
//! Monad definitions, a do-notation interpreter and monad-polymorphic
//! combinators for Rust.
//!
//! ## Overview
//!
//! A computation model is chosen by passing a [`MonadDefinition`](typeclass::MonadDefinition)
//! value; every value it works on is a [`MonadicValue`](typeclass::MonadicValue)
//! tagged with that model. The library provides:
//!
//! - **Type Classes**: `MonadDefinition`, `Semigroup`, `Monoid`
//! - **Control Models**: Identity, Maybe, List, Either
//! - **Effect Models**: State, Writer, Reader
//! - **Composition**: the `domonad` interpreter and combinators such as
//!   `m_sequence`, `m_map`, `m_comp`, `m_filter`
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `Identity`, `Either` and `Variant`
//!
//! ## Example
//!
//! ```rust
//! use monadic::prelude::*;
//!
//! fn parse_int(input: &str) -> EitherValue<String, i32> {
//!     input
//!         .parse()
//!         .map_or_else(|_| either_left(format!("Invalid number: {input}")), either_right)
//! }
//!
//! let steps = vec![
//!     BindingStep::new("a", |_| Ok(parse_int("42"))),
//!     BindingStep::new("b", |_| Ok(parse_int("10"))),
//! ];
//! let sum = domonad(EitherMonad::new(), steps, |environment| {
//!     Ok(either_right(environment.lookup("a")? + environment.lookup("b")?))
//! });
//!
//! assert_eq!(sum.and_then(|value| value.into_result()), Ok(Ok(52)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use monadic::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::*;
    pub use crate::control::*;
    pub use crate::effect::*;
    pub use crate::error::{MonadError, MonadResult};
    pub use crate::typeclass::*;
}

pub mod compose;
pub mod control;
pub mod effect;
pub mod error;
pub mod typeclass;
