//! The tagged union of monadic values.
//!
//! A [`MonadicValue`] holds exactly one computation model. Which arms a
//! [`MonadDefinition`] accepts is fixed by the definition: `MaybeMonad::bind`
//! only understands `Maybe`, `StateMonad::bind` only `State`, and so on.
//! Anything else is reported as [`MonadError::TypeMismatch`] rather than
//! coerced.
//!
//! # Equality
//!
//! `State` and `Reader` values are deferred functions and have no structural
//! equality: `==` is always `false` for them. Compare them observationally by
//! running them (see [`run_state`](crate::effect::run_state) and
//! [`run_reader`](crate::effect::run_reader)).

use std::fmt;
use std::rc::Rc;

use super::{Identity, MonadDefinition};
use crate::control::Either;
use crate::error::{MonadError, MonadResult};

/// The deferred function stored in the `State` arm.
pub type StateFunction<A, S> = Rc<dyn Fn(S) -> MonadResult<(A, S)>>;

/// The deferred function stored in the `Reader` arm.
pub type ReaderFunction<A, R> = Rc<dyn Fn(&R) -> MonadResult<A>>;

/// Names the seven computation models.
///
/// # Examples
///
/// ```rust
/// use monadic::typeclass::Variant;
///
/// assert_eq!(Variant::Writer.to_string(), "Writer");
/// assert!(Variant::List.supports_plus());
/// assert!(!Variant::State.supports_plus());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// Plain values with no effect.
    Identity,
    /// Optional values; `None` short-circuits.
    Maybe,
    /// Non-deterministic choice over an ordered sequence of outcomes.
    List,
    /// Explicit state threading.
    State,
    /// Append-only logging.
    Writer,
    /// Environment-dependent computation.
    Reader,
    /// Two-track error handling; `Left` short-circuits.
    Either,
}

impl Variant {
    /// Returns the variant's name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identity => "Identity",
            Self::Maybe => "Maybe",
            Self::List => "List",
            Self::State => "State",
            Self::Writer => "Writer",
            Self::Reader => "Reader",
            Self::Either => "Either",
        }
    }

    /// Returns `true` for the MonadPlus-capable variants (Maybe and List).
    pub const fn supports_plus(self) -> bool {
        matches!(self, Self::Maybe | Self::List)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// A value produced by one of the seven monad definitions.
///
/// `A` is the result type and `D` the definition whose associated types
/// supply the state, log, environment and error types of the stateful arms.
///
/// # Examples
///
/// ```rust
/// use monadic::control::{MaybeMonad, maybe_return};
/// use monadic::typeclass::{MonadicValue, Variant};
///
/// let value: MonadicValue<i32, MaybeMonad> = maybe_return(5);
/// assert_eq!(value.variant(), Variant::Maybe);
/// assert!(value.is_some());
/// assert_eq!(value.into_option(), Ok(Some(5)));
/// ```
pub enum MonadicValue<A, D: MonadDefinition> {
    /// A raw value.
    Identity(Identity<A>),
    /// `Some(value)` or `None`.
    Maybe(Option<A>),
    /// Every outcome of a non-deterministic computation, in order.
    List(Vec<A>),
    /// A function `state -> (value, new_state)`.
    State(StateFunction<A, D::State>),
    /// A value paired with its log.
    Writer(A, D::Log),
    /// A function `environment -> value`.
    Reader(ReaderFunction<A, D::Environment>),
    /// `Left(error)` or `Right(value)`.
    Either(Either<D::Error, A>),
}

impl<A, D: MonadDefinition> MonadicValue<A, D> {
    /// Returns the variant this value is tagged with.
    pub const fn variant(&self) -> Variant {
        match self {
            Self::Identity(_) => Variant::Identity,
            Self::Maybe(_) => Variant::Maybe,
            Self::List(_) => Variant::List,
            Self::State(_) => Variant::State,
            Self::Writer(_, _) => Variant::Writer,
            Self::Reader(_) => Variant::Reader,
            Self::Either(_) => Variant::Either,
        }
    }

    /// Passes the value through when it is tagged `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`MonadError::TypeMismatch`] for any other tag.
    pub fn ensure_variant(self, expected: Variant) -> MonadResult<Self> {
        if self.variant() == expected {
            Ok(self)
        } else {
            Err(MonadError::mismatch(expected, self.variant()))
        }
    }

    /// Returns `true` for `Maybe(Some(_))`.
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Maybe(Some(_)))
    }

    /// Returns `true` for `Maybe(None)`.
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::Maybe(None))
    }

    /// Returns `true` for `Either(Left(_))`.
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Either(Either::Left(_)))
    }

    /// Returns `true` for `Either(Right(_))`.
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Either(Either::Right(_)))
    }

    /// Unwraps an `Identity` value.
    ///
    /// # Errors
    ///
    /// Returns [`MonadError::TypeMismatch`] when the value is not `Identity`.
    pub fn into_identity(self) -> MonadResult<A> {
        match self {
            Self::Identity(Identity(value)) => Ok(value),
            other => Err(MonadError::mismatch(Variant::Identity, other.variant())),
        }
    }

    /// Unwraps a `Maybe` value.
    ///
    /// # Errors
    ///
    /// Returns [`MonadError::TypeMismatch`] when the value is not `Maybe`.
    pub fn into_option(self) -> MonadResult<Option<A>> {
        match self {
            Self::Maybe(option) => Ok(option),
            other => Err(MonadError::mismatch(Variant::Maybe, other.variant())),
        }
    }

    /// Unwraps a `List` value.
    ///
    /// # Errors
    ///
    /// Returns [`MonadError::TypeMismatch`] when the value is not `List`.
    pub fn into_vec(self) -> MonadResult<Vec<A>> {
        match self {
            Self::List(values) => Ok(values),
            other => Err(MonadError::mismatch(Variant::List, other.variant())),
        }
    }

    /// Unwraps an `Either` value.
    ///
    /// # Errors
    ///
    /// Returns [`MonadError::TypeMismatch`] when the value is not `Either`.
    pub fn into_either(self) -> MonadResult<Either<D::Error, A>> {
        match self {
            Self::Either(either) => Ok(either),
            other => Err(MonadError::mismatch(Variant::Either, other.variant())),
        }
    }

    /// Unwraps an `Either` value as a standard `Result` (`Right` is `Ok`).
    ///
    /// # Errors
    ///
    /// Returns [`MonadError::TypeMismatch`] when the value is not `Either`.
    pub fn into_result(self) -> MonadResult<Result<A, D::Error>> {
        self.into_either().map(Result::from)
    }

    /// Unwraps a `Writer` value into its value and log.
    ///
    /// # Errors
    ///
    /// Returns [`MonadError::TypeMismatch`] when the value is not `Writer`.
    pub fn into_writer(self) -> MonadResult<(A, D::Log)> {
        match self {
            Self::Writer(value, log) => Ok((value, log)),
            other => Err(MonadError::mismatch(Variant::Writer, other.variant())),
        }
    }
}

impl<A: Clone, D: MonadDefinition> Clone for MonadicValue<A, D> {
    fn clone(&self) -> Self {
        match self {
            Self::Identity(value) => Self::Identity(value.clone()),
            Self::Maybe(option) => Self::Maybe(option.clone()),
            Self::List(values) => Self::List(values.clone()),
            Self::State(function) => Self::State(Rc::clone(function)),
            Self::Writer(value, log) => Self::Writer(value.clone(), log.clone()),
            Self::Reader(function) => Self::Reader(Rc::clone(function)),
            Self::Either(either) => Self::Either(either.clone()),
        }
    }
}

impl<A, D> fmt::Debug for MonadicValue<A, D>
where
    A: fmt::Debug,
    D: MonadDefinition,
    D::Log: fmt::Debug,
    D::Error: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity(Identity(value)) => {
                formatter.debug_tuple("Identity").field(value).finish()
            }
            Self::Maybe(option) => formatter.debug_tuple("Maybe").field(option).finish(),
            Self::List(values) => formatter.debug_tuple("List").field(values).finish(),
            Self::State(_) => formatter.write_str("State(<function>)"),
            Self::Writer(value, log) => formatter
                .debug_tuple("Writer")
                .field(value)
                .field(log)
                .finish(),
            Self::Reader(_) => formatter.write_str("Reader(<function>)"),
            Self::Either(either) => formatter.debug_tuple("Either").field(either).finish(),
        }
    }
}

impl<A, D> PartialEq for MonadicValue<A, D>
where
    A: PartialEq,
    D: MonadDefinition,
    D::Log: PartialEq,
    D::Error: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Identity(left), Self::Identity(right)) => left == right,
            (Self::Maybe(left), Self::Maybe(right)) => left == right,
            (Self::List(left), Self::List(right)) => left == right,
            (Self::Writer(left, left_log), Self::Writer(right, right_log)) => {
                left == right && left_log == right_log
            }
            (Self::Either(left), Self::Either(right)) => left == right,
            _ => false,
        }
    }
}

// Deferred arms hold `Rc` closures, so computations stay on one thread while
// the zero-sized definitions remain freely shareable.
static_assertions::assert_not_impl_any!(MonadicValue<i32, crate::effect::StateMonad<i32>>: Send, Sync);
static_assertions::assert_not_impl_any!(MonadicValue<i32, crate::effect::ReaderMonad<i32>>: Send, Sync);
static_assertions::assert_impl_all!(crate::effect::StateMonad<String>: Copy, Send, Sync);
static_assertions::assert_impl_all!(crate::control::EitherMonad<String>: Copy, Send, Sync);
