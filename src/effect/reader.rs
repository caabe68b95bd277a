//! Reader Monad - computations that read from a shared environment.
//!
//! A Reader value encapsulates a function `&R -> A`. Every computation in a
//! chain sees the same environment; [`local`] runs a sub-computation against
//! a modified copy without affecting the rest.
//!
//! # Laws
//!
//! - Ask Local Law: `local(f, ask())` returns `f(environment)`
//! - Local Identity Law: `local(|r| r.clone(), m)` behaves like `m`
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::{ReaderMonad, asks, reader_return, run_reader};
//! use monadic::typeclass::MonadDefinition;
//!
//! struct Config {
//!     retries: u32,
//! }
//!
//! let reader = ReaderMonad::<Config>::new();
//! let doubled = reader
//!     .bind(asks(|config: &Config| config.retries), |retries| Ok(reader_return(retries * 2)))
//!     .unwrap();
//!
//! assert_eq!(run_reader(&doubled, &Config { retries: 3 }), Ok(6));
//! ```

use std::marker::PhantomData;
use std::rc::Rc;

use crate::error::{MonadError, MonadResult};
use crate::typeclass::{MonadDefinition, MonadicValue, Variant, definition_marker};

/// The Reader monad definition, reading an environment of type `R`.
pub struct ReaderMonad<R>(PhantomData<fn() -> R>);

definition_marker!(ReaderMonad<R>);

impl<R: 'static> MonadDefinition for ReaderMonad<R> {
    type State = ();
    type Log = ();
    type Environment = R;
    type Error = ();

    const VARIANT: Variant = Variant::Reader;

    fn unit<A>(&self, value: A) -> MonadicValue<A, Self>
    where
        A: Clone + 'static,
    {
        reader_return(value)
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
        let first = match value {
            MonadicValue::Reader(first) => first,
            other => return Err(MonadError::mismatch(Self::VARIANT, other.variant())),
        };
        Ok(MonadicValue::Reader(Rc::new(move |environment: &R| {
            let intermediate = first(environment)?;
            match function(intermediate)? {
                MonadicValue::Reader(second) => second(environment),
                other => Err(MonadError::mismatch(Variant::Reader, other.variant())),
            }
        })))
    }
}

/// A Reader computation over `R` producing `A`.
pub type ReaderValue<R, A> = MonadicValue<A, ReaderMonad<R>>;

/// A computation returning `value` regardless of the environment.
pub fn reader_return<R, A>(value: A) -> ReaderValue<R, A>
where
    R: 'static,
    A: Clone + 'static,
{
    MonadicValue::Reader(Rc::new(move |_: &R| Ok(value.clone())))
}

/// A computation returning a copy of the environment.
pub fn ask<R>() -> ReaderValue<R, R>
where
    R: Clone + 'static,
{
    MonadicValue::Reader(Rc::new(|environment: &R| Ok(environment.clone())))
}

/// A computation returning a projection of the environment.
pub fn asks<R, A, F>(projection: F) -> ReaderValue<R, A>
where
    R: 'static,
    F: Fn(&R) -> A + 'static,
{
    MonadicValue::Reader(Rc::new(move |environment: &R| Ok(projection(environment))))
}

/// Runs `computation` against the environment produced by `modifier`.
///
/// # Errors
///
/// Returns [`MonadError::TypeMismatch`] when `computation` is not tagged Reader.
///
/// # Examples
///
/// ```rust
/// use monadic::effect::{ask, local, run_reader};
///
/// let shifted = local(|depth: &u32| depth + 1, ask()).unwrap();
/// assert_eq!(run_reader(&shifted, &4), Ok(5));
/// ```
pub fn local<A, D, F>(
    modifier: F,
    computation: MonadicValue<A, D>,
) -> MonadResult<MonadicValue<A, D>>
where
    A: 'static,
    D: MonadDefinition,
    F: Fn(&D::Environment) -> D::Environment + 'static,
{
    match computation {
        MonadicValue::Reader(inner) => Ok(MonadicValue::Reader(Rc::new(
            move |environment: &D::Environment| inner(&modifier(environment)),
        ))),
        other => Err(MonadError::mismatch(Variant::Reader, other.variant())),
    }
}

/// Runs a Reader computation against `environment`.
///
/// # Errors
///
/// Returns [`MonadError::TypeMismatch`] when `computation` is not tagged
/// Reader, or when a function bound inside it returned a foreign value.
pub fn run_reader<A, D: MonadDefinition>(
    computation: &MonadicValue<A, D>,
    environment: &D::Environment,
) -> MonadResult<A> {
    match computation {
        MonadicValue::Reader(function) => function(environment),
        other => Err(MonadError::mismatch(Variant::Reader, other.variant())),
    }
}
