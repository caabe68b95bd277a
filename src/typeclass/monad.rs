//! Monad definition - the capability bundle every computation model supplies.
//!
//! A [`MonadDefinition`] is a stateless, `Copy` marker value that knows how to
//! wrap a plain value (`unit`, Haskell's `return`) and how to sequence a
//! computation (`bind`). Definitions that are also MonadPlus (Maybe and List)
//! override `zero` and `plus`; for every other definition those operations
//! fail with [`MonadError::UnsupportedOperation`].
//!
//! # Laws
//!
//! All definitions must satisfy, under the variant's own equality:
//!
//! ## Left Identity Law
//!
//! ```text
//! bind(unit(a), f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! bind(m, unit) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! bind(bind(m, f), g) == bind(m, |x| bind(f(x), g))
//! ```
//!
//! MonadPlus definitions additionally satisfy
//! `plus(zero(), m) == m == plus(m, zero())`.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{MaybeMonad, maybe_return};
//! use monadic::typeclass::MonadDefinition;
//!
//! let halved = MaybeMonad.bind(maybe_return(10), |n: i32| {
//!     Ok(if n % 2 == 0 { maybe_return(n / 2) } else { MaybeMonad.zero()? })
//! });
//! assert_eq!(halved.and_then(|value| value.into_option()), Ok(Some(5)));
//! ```

use super::Monoid;
use super::value::{MonadicValue, Variant};
use crate::error::{MonadError, MonadResult};

/// A type class for monad definitions.
///
/// The associated types name the ancillary data the stateful arms of
/// [`MonadicValue`] carry. Definitions that do not use one set it to `()`.
pub trait MonadDefinition: Copy + Default + std::fmt::Debug + 'static {
    /// The state threaded by `State` computations.
    type State: 'static;

    /// The log accumulated by `Writer` computations.
    type Log: Monoid + Clone + 'static;

    /// The environment read by `Reader` computations.
    type Environment: 'static;

    /// The error carried by `Either`'s `Left`.
    type Error: Clone + 'static;

    /// The variant whose values this definition accepts.
    const VARIANT: Variant;

    /// Wraps a plain value (`return`).
    fn unit<A>(&self, value: A) -> MonadicValue<A, Self>
    where
        A: Clone + 'static;

    /// Sequences `value` with `function`, passing the unwrapped result on.
    ///
    /// # Errors
    ///
    /// Returns [`MonadError::TypeMismatch`] when `value`, or the value
    /// `function` returns, is tagged for another variant, and propagates any
    /// error `function` returns. Definitions whose values are deferred
    /// functions report those errors when the computation is run.
    fn bind<A, B, F>(
        &self,
        value: MonadicValue<A, Self>,
        function: F,
    ) -> MonadResult<MonadicValue<B, Self>>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> MonadResult<MonadicValue<B, Self>> + 'static;

    /// Returns `true` when `zero` and `plus` are available.
    fn supports_plus(&self) -> bool {
        Self::VARIANT.supports_plus()
    }

    /// The identity element of `plus`.
    ///
    /// # Errors
    ///
    /// Returns [`MonadError::UnsupportedOperation`] unless overridden.
    fn zero<A>(&self) -> MonadResult<MonadicValue<A, Self>>
    where
        A: 'static,
    {
        Err(MonadError::unsupported(Self::VARIANT, "zero"))
    }

    /// Combines two alternatives.
    ///
    /// # Errors
    ///
    /// Returns [`MonadError::UnsupportedOperation`] unless overridden.
    fn plus<A>(
        &self,
        _left: MonadicValue<A, Self>,
        _right: MonadicValue<A, Self>,
    ) -> MonadResult<MonadicValue<A, Self>>
    where
        A: 'static,
    {
        Err(MonadError::unsupported(Self::VARIANT, "plus"))
    }
}

/// Implements the marker traits `MonadDefinition` requires for a definition
/// generic over one ancillary type. Deriving them would bound the parameter.
macro_rules! definition_marker {
    ($name:ident < $parameter:ident >) => {
        impl<$parameter> $name<$parameter> {
            /// Creates the definition.
            pub const fn new() -> Self {
                Self(::std::marker::PhantomData)
            }
        }

        impl<$parameter> Clone for $name<$parameter> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$parameter> Copy for $name<$parameter> {}

        impl<$parameter> Default for $name<$parameter> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<$parameter> ::std::fmt::Debug for $name<$parameter> {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                formatter.write_str(stringify!($name))
            }
        }
    };
}

pub(crate) use definition_marker;
