//! List - non-deterministic choice.
//!
//! A List value is the ordered sequence of every outcome of a computation.
//! `bind(l, f)` concatenates `f(x)` for each `x` of `l` in order, so a chain
//! of binds enumerates the Cartesian product of the choices with the first
//! bind varying slowest. Results are materialized eagerly.
//!
//! List is MonadPlus: `zero` is `[]` and `plus` is concatenation.

use crate::error::{MonadError, MonadResult};
use crate::typeclass::{MonadDefinition, MonadicValue, Variant};

/// The List monad definition.
///
/// # Examples
///
/// ```rust
/// use monadic::control::{ListMonad, list_from};
/// use monadic::typeclass::MonadDefinition;
///
/// let both = ListMonad.plus(list_from([1, 2]), list_from([3]));
/// assert_eq!(both.and_then(|value| value.into_vec()), Ok(vec![1, 2, 3]));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListMonad;

impl MonadDefinition for ListMonad {
    type State = ();
    type Log = ();
    type Environment = ();
    type Error = ();

    const VARIANT: Variant = Variant::List;

    fn unit<A>(&self, value: A) -> MonadicValue<A, Self>
    where
        A: Clone + 'static,
    {
        list_return(value)
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
        let choices = match value {
            MonadicValue::List(choices) => choices,
            other => return Err(MonadError::mismatch(Self::VARIANT, other.variant())),
        };
        let mut outcomes = Vec::with_capacity(choices.len());
        for choice in choices {
            outcomes.extend(function(choice)?.into_vec()?);
        }
        Ok(MonadicValue::List(outcomes))
    }

    fn zero<A>(&self) -> MonadResult<MonadicValue<A, Self>>
    where
        A: 'static,
    {
        Ok(list_zero())
    }

    fn plus<A>(
        &self,
        left: MonadicValue<A, Self>,
        right: MonadicValue<A, Self>,
    ) -> MonadResult<MonadicValue<A, Self>>
    where
        A: 'static,
    {
        let mut combined = left.into_vec()?;
        combined.extend(right.into_vec()?);
        Ok(MonadicValue::List(combined))
    }
}

/// A List computation producing `A`.
pub type ListValue<A> = MonadicValue<A, ListMonad>;

/// The single-outcome list `[value]`.
pub fn list_return<A>(value: A) -> ListValue<A> {
    MonadicValue::List(vec![value])
}

/// The empty list, a computation with no outcomes.
pub fn list_zero<A>() -> ListValue<A> {
    MonadicValue::List(Vec::new())
}

/// Collects `values` into a List computation, keeping their order.
pub fn list_from<A, I>(values: I) -> ListValue<A>
where
    I: IntoIterator<Item = A>,
{
    MonadicValue::List(values.into_iter().collect())
}
