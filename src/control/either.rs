//! Either - two-track error handling.
//!
//! [`Either<L, R>`] is a value that is either `Left(L)` or `Right(R)`. Under
//! [`EitherMonad`], `Left` is the error track: binding a `Left` skips the
//! continuation and returns the `Left` unchanged, so the first failure in a
//! chain is the result of the whole chain.
//!
//! A `Left` is an ordinary computed value. It is never reported as a
//! [`MonadError`].
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{EitherMonad, EitherValue, either_left, either_right};
//! use monadic::typeclass::MonadDefinition;
//!
//! fn parse_int(input: &str) -> EitherValue<String, i32> {
//!     input
//!         .parse()
//!         .map_or_else(|_| either_left(format!("Invalid number: {input}")), either_right)
//! }
//!
//! let sum = EitherMonad::new().bind(parse_int("42"), |a| {
//!     EitherMonad::new().bind(parse_int("10"), move |b| Ok(either_right(a + b)))
//! });
//! assert_eq!(sum.and_then(|value| value.into_result()), Ok(Ok(52)));
//! ```

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::error::{MonadError, MonadResult};
use crate::typeclass::{MonadDefinition, MonadicValue, Variant, definition_marker};

/// A value that can be one of two types.
///
/// By convention `Left` represents failure and `Right` success.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// assert_eq!(success.map_right(|x| x * 2), Either::Right(84));
///
/// let failure: Either<String, i32> = Either::Left("error".to_string());
/// assert_eq!(failure.fold(|e| e.len(), |_| 0), 5);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts into `Some(l)` for `Left(l)`, otherwise `None`.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into `Some(r)` for `Right(r)`, otherwise `None`.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Applies a function to the left value if present.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value if present.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Eliminates the `Either` by applying one of two functions.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

/// The Either monad definition, with `E` as the type of the `Left` track.
pub struct EitherMonad<E>(PhantomData<fn() -> E>);

definition_marker!(EitherMonad<E>);

impl<E: Clone + 'static> MonadDefinition for EitherMonad<E> {
    type State = ();
    type Log = ();
    type Environment = ();
    type Error = E;

    const VARIANT: Variant = Variant::Either;

    fn unit<A>(&self, value: A) -> MonadicValue<A, Self>
    where
        A: Clone + 'static,
    {
        either_right(value)
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
            MonadicValue::Either(Either::Left(error)) => {
                tracing::trace!("Left short-circuits bind");
                Ok(MonadicValue::Either(Either::Left(error)))
            }
            MonadicValue::Either(Either::Right(inner)) => {
                function(inner)?.ensure_variant(Self::VARIANT)
            }
            other => Err(MonadError::mismatch(Self::VARIANT, other.variant())),
        }
    }
}

/// An Either computation with error type `E` producing `A`.
pub type EitherValue<E, A> = MonadicValue<A, EitherMonad<E>>;

/// Creates a `Left(error)` value.
pub fn either_left<E: Clone + 'static, A>(error: E) -> EitherValue<E, A> {
    MonadicValue::Either(Either::Left(error))
}

/// Creates a `Right(value)` value.
pub fn either_right<E: Clone + 'static, A>(value: A) -> EitherValue<E, A> {
    MonadicValue::Either(Either::Right(value))
}

/// Recovers from a `Left` by running `handler` on its error.
///
/// `Right` values pass through untouched.
///
/// # Errors
///
/// Returns [`MonadError::TypeMismatch`] when `value` or the handler's result
/// is not tagged Either.
///
/// # Examples
///
/// ```rust
/// use monadic::control::{either_catch, either_left, either_right};
///
/// let failed = either_left::<String, usize>("oops".to_string());
/// let recovered = either_catch(failed, |error| Ok(either_right(error.len())));
/// assert_eq!(recovered.and_then(|value| value.into_result()), Ok(Ok(4)));
/// ```
pub fn either_catch<E, A, F>(value: EitherValue<E, A>, handler: F) -> MonadResult<EitherValue<E, A>>
where
    E: Clone + 'static,
    F: FnOnce(E) -> MonadResult<EitherValue<E, A>>,
{
    match value {
        MonadicValue::Either(Either::Left(error)) => {
            handler(error)?.ensure_variant(Variant::Either)
        }
        MonadicValue::Either(right) => Ok(MonadicValue::Either(right)),
        other => Err(MonadError::mismatch(Variant::Either, other.variant())),
    }
}
