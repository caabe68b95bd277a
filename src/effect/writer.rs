//! Writer Monad - computations that accumulate a log.
//!
//! A Writer value is a pair `(value, log)`. Sequencing two Writer
//! computations joins their logs with [`Semigroup::combine`](crate::typeclass::Semigroup::combine), left log first,
//! so entries are never dropped or reordered. The log type must be a
//! [`Monoid`]; `writer_return` starts from [`Monoid::empty`].
//!
//! # Laws
//!
//! - Tell Monoid Law: `bind(tell(w1), |_| tell(w2)) == tell(w1.combine(w2))`
//! - Listen Tell Law: `listen(tell(w))` pairs `()` with `w`
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::{WriterMonad, run_writer, writer_return, writer_tell};
//! use monadic::typeclass::MonadDefinition;
//!
//! let writer = WriterMonad::<Vec<String>>::new();
//! let computation = writer
//!     .bind(writer_tell(vec!["step 1".to_string()]), move |()| {
//!         writer.bind(writer_tell(vec!["step 2".to_string()]), |()| Ok(writer_return(42)))
//!     })
//!     .and_then(run_writer);
//!
//! assert_eq!(computation, Ok((42, vec!["step 1".to_string(), "step 2".to_string()])));
//! ```

use std::marker::PhantomData;

use crate::error::{MonadError, MonadResult};
use crate::typeclass::{MonadDefinition, MonadicValue, Monoid, Variant, definition_marker};

/// The Writer monad definition, accumulating a log of type `W`.
pub struct WriterMonad<W>(PhantomData<fn() -> W>);

definition_marker!(WriterMonad<W>);

impl<W> MonadDefinition for WriterMonad<W>
where
    W: Monoid + Clone + 'static,
{
    type State = ();
    type Log = W;
    type Environment = ();
    type Error = ();

    const VARIANT: Variant = Variant::Writer;

    fn unit<A>(&self, value: A) -> MonadicValue<A, Self>
    where
        A: Clone + 'static,
    {
        writer_return(value)
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
        let (intermediate, first_log) = value.into_writer()?;
        let (result, second_log) = function(intermediate)?.into_writer()?;
        Ok(MonadicValue::Writer(result, first_log.combine(second_log)))
    }
}

/// A Writer computation with log `W` producing `A`.
pub type WriterValue<W, A> = MonadicValue<A, WriterMonad<W>>;

/// Returns `value` with an empty log.
pub fn writer_return<W, A>(value: A) -> WriterValue<W, A>
where
    W: Monoid + Clone + 'static,
{
    MonadicValue::Writer(value, W::empty())
}

/// Creates a Writer from a value and a log.
pub fn writer_new<W, A>(value: A, log: W) -> WriterValue<W, A>
where
    W: Monoid + Clone + 'static,
{
    MonadicValue::Writer(value, log)
}

/// Appends `log` to the output, returning `()`.
pub fn writer_tell<W>(log: W) -> WriterValue<W, ()>
where
    W: Monoid + Clone + 'static,
{
    MonadicValue::Writer((), log)
}

/// Pairs a Writer's value with the log it produced, keeping the log.
///
/// # Errors
///
/// Returns [`MonadError::TypeMismatch`] when `computation` is not tagged Writer.
///
/// # Examples
///
/// ```rust
/// use monadic::effect::{run_writer, writer_listen, writer_tell};
///
/// let listened = writer_listen(writer_tell(vec!["hello"])).and_then(run_writer);
/// assert_eq!(listened, Ok((((), vec!["hello"]), vec!["hello"])));
/// ```
pub fn writer_listen<A, D: MonadDefinition>(
    computation: MonadicValue<A, D>,
) -> MonadResult<MonadicValue<(A, D::Log), D>> {
    let (value, log) = computation.into_writer()?;
    Ok(MonadicValue::Writer((value, log.clone()), log))
}

/// Rewrites the log of a Writer with `modifier`.
///
/// # Errors
///
/// Returns [`MonadError::TypeMismatch`] when `computation` is not tagged Writer.
///
/// # Examples
///
/// ```rust
/// use monadic::effect::{exec_writer, writer_censor, writer_tell};
///
/// let censored = writer_censor(
///     |log| log.into_iter().filter(|entry| *entry != "secret").collect(),
///     writer_tell(vec!["public", "secret"]),
/// );
/// assert_eq!(censored.and_then(exec_writer), Ok(vec!["public"]));
/// ```
pub fn writer_censor<A, D, F>(
    modifier: F,
    computation: MonadicValue<A, D>,
) -> MonadResult<MonadicValue<A, D>>
where
    D: MonadDefinition,
    F: FnOnce(D::Log) -> D::Log,
{
    let (value, log) = computation.into_writer()?;
    Ok(MonadicValue::Writer(value, modifier(log)))
}

/// Extracts `(value, log)` from a Writer computation.
///
/// # Errors
///
/// Returns [`MonadError::TypeMismatch`] when `computation` is not tagged Writer.
pub fn run_writer<A, D: MonadDefinition>(
    computation: MonadicValue<A, D>,
) -> MonadResult<(A, D::Log)> {
    computation.into_writer()
}

/// Extracts only the log from a Writer computation.
///
/// # Errors
///
/// Returns [`MonadError::TypeMismatch`] when `computation` is not tagged Writer.
pub fn exec_writer<A, D: MonadDefinition>(computation: MonadicValue<A, D>) -> MonadResult<D::Log> {
    match computation {
        MonadicValue::Writer(_, log) => Ok(log),
        other => Err(MonadError::mismatch(Variant::Writer, other.variant())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Semigroup, Sum};
    use rstest::rstest;

    type Log = Vec<String>;

    const WRITER: WriterMonad<Log> = WriterMonad::new();

    fn entry(text: &str) -> Log {
        vec![text.to_string()]
    }

    #[rstest]
    fn writer_return_has_empty_log() {
        let computation: WriterValue<Log, i32> = writer_return(5);
        assert_eq!(run_writer(computation), Ok((5, Vec::new())));
    }

    #[rstest]
    fn bind_puts_first_log_before_second() {
        let computation = WRITER.bind(writer_new(1, entry("first")), |n| {
            Ok(writer_new(n + 1, entry("second")))
        });
        assert_eq!(
            computation.and_then(run_writer),
            Ok((2, vec!["first".to_string(), "second".to_string()]))
        );
    }

    #[rstest]
    fn tell_monoid_law() {
        let left = WRITER.bind(writer_tell(entry("a")), |()| Ok(writer_tell(entry("b"))));
        let right = writer_tell(entry("a").combine(entry("b")));
        assert_eq!(left, Ok(right));
    }

    #[rstest]
    fn sum_log_counts_steps() {
        let counter = WriterMonad::<Sum<u32>>::new();
        let computation = counter.bind(writer_new("x", Sum(1)), move |label| {
            counter.bind(writer_new(label.len(), Sum(2)), |length| {
                Ok(writer_new(length, Sum(3)))
            })
        });
        assert_eq!(computation.and_then(exec_writer), Ok(Sum(6)));
    }

    #[rstest]
    fn bind_rejects_foreign_input() {
        let foreign: WriterValue<Log, i32> = MonadicValue::List(vec![1]);
        let result = WRITER.bind(foreign, |n| Ok(writer_return(n)));
        assert_eq!(
            result,
            Err(MonadError::TypeMismatch {
                expected: Variant::Writer,
                found: Variant::List,
            })
        );
    }

    #[rstest]
    fn plus_is_unsupported() {
        let result = WRITER.plus(writer_return(1), writer_return(2));
        assert!(matches!(
            result,
            Err(MonadError::UnsupportedOperation { operation: "plus", .. })
        ));
    }
}
