//! Identity - the computation model with no effect at all.
//!
//! [`Identity`] is the simplest possible wrapper around a value and
//! [`IdentityMonad`] the simplest definition: `bind(m, f) = f(m)`. It is the
//! baseline against which the other models' behavior is compared.

use super::value::{MonadicValue, Variant};
use super::MonadDefinition;
use crate::error::{MonadError, MonadResult};

/// Wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use monadic::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

/// The Identity monad definition.
///
/// # Examples
///
/// ```rust
/// use monadic::typeclass::{IdentityMonad, MonadDefinition, identity_return, run_identity};
///
/// let doubled = IdentityMonad.bind(identity_return(21), |n: i32| Ok(identity_return(n * 2)));
/// assert_eq!(doubled.and_then(run_identity), Ok(42));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityMonad;

impl MonadDefinition for IdentityMonad {
    type State = ();
    type Log = ();
    type Environment = ();
    type Error = ();

    const VARIANT: Variant = Variant::Identity;

    fn unit<A>(&self, value: A) -> MonadicValue<A, Self>
    where
        A: Clone + 'static,
    {
        identity_return(value)
    }

    fn bind<A, B, F>(
        &self,
        value: MonadicValue<A, Self>,
        function: F,
    ) -> MonadResult<MonadicValue<B, Self>>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> MonadResult<MonadicValue<B, Self>> + 'static,
    {
        match value {
            MonadicValue::Identity(Identity(inner)) => {
                function(inner)?.ensure_variant(Self::VARIANT)
            }
            other => Err(MonadError::mismatch(Self::VARIANT, other.variant())),
        }
    }
}

/// An Identity computation producing `A`.
pub type IdentityValue<A> = MonadicValue<A, IdentityMonad>;

/// Wraps `value` in the Identity monad.
pub fn identity_return<A>(value: A) -> IdentityValue<A> {
    MonadicValue::Identity(Identity(value))
}

/// Extracts the value of an Identity computation.
///
/// # Errors
///
/// Returns [`MonadError::TypeMismatch`] when `value` is not tagged Identity.
pub fn run_identity<A, D: MonadDefinition>(value: MonadicValue<A, D>) -> MonadResult<A> {
    value.into_identity()
}
