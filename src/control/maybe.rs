//! Maybe - optional values with short-circuiting.
//!
//! `bind(None, f) = None` and `bind(Some(x), f) = f(x)`. Maybe is MonadPlus:
//! `zero` is `None` and `plus` keeps the first `Some`.

use crate::error::{MonadError, MonadResult};
use crate::typeclass::{MonadDefinition, MonadicValue, Variant};

/// The Maybe monad definition.
///
/// # Examples
///
/// ```rust
/// use monadic::control::{MaybeMonad, maybe_return, maybe_zero};
/// use monadic::typeclass::MonadDefinition;
///
/// let first = MaybeMonad.plus(maybe_zero(), maybe_return(3));
/// assert_eq!(first.and_then(|value| value.into_option()), Ok(Some(3)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaybeMonad;

impl MonadDefinition for MaybeMonad {
    type State = ();
    type Log = ();
    type Environment = ();
    type Error = ();

    const VARIANT: Variant = Variant::Maybe;

    fn unit<A>(&self, value: A) -> MonadicValue<A, Self>
    where
        A: Clone + 'static,
    {
        maybe_return(value)
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
            MonadicValue::Maybe(Some(inner)) => function(inner)?.ensure_variant(Self::VARIANT),
            MonadicValue::Maybe(None) => {
                tracing::trace!("None short-circuits bind");
                Ok(maybe_zero())
            }
            other => Err(MonadError::mismatch(Self::VARIANT, other.variant())),
        }
    }

    fn zero<A>(&self) -> MonadResult<MonadicValue<A, Self>>
    where
        A: 'static,
    {
        Ok(maybe_zero())
    }

    fn plus<A>(
        &self,
        left: MonadicValue<A, Self>,
        right: MonadicValue<A, Self>,
    ) -> MonadResult<MonadicValue<A, Self>>
    where
        A: 'static,
    {
        match (left, right) {
            (MonadicValue::Maybe(Some(value)), MonadicValue::Maybe(_)) => Ok(maybe_return(value)),
            (MonadicValue::Maybe(None), right @ MonadicValue::Maybe(_)) => Ok(right),
            (MonadicValue::Maybe(_), other) | (other, _) => {
                Err(MonadError::mismatch(Self::VARIANT, other.variant()))
            }
        }
    }
}

/// A Maybe computation producing `A`.
pub type MaybeValue<A> = MonadicValue<A, MaybeMonad>;

/// Wraps `value` as `Some(value)`.
pub fn maybe_return<A>(value: A) -> MaybeValue<A> {
    MonadicValue::Maybe(Some(value))
}

/// The empty Maybe value, `None`.
pub fn maybe_zero<A>() -> MaybeValue<A> {
    MonadicValue::Maybe(None)
}

/// Lifts a standard `Option` into the Maybe monad.
pub fn maybe_from<A>(option: Option<A>) -> MaybeValue<A> {
    MonadicValue::Maybe(option)
}
