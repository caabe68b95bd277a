//! Combinators generic over any [`MonadDefinition`].
//!
//! Every combinator takes the definition as its first argument and is
//! expressed only through `unit`, `bind` and, for the MonadPlus ones,
//! `zero`/`plus`. They therefore inherit each variant's semantics: a `None`
//! or `Left` stops a traversal, List explores every combination and State,
//! Writer and Reader thread their data left to right.
//!
//! # Examples
//!
//! ```rust
//! use monadic::compose::{m_map, m_sequence};
//! use monadic::control::{ListMonad, MaybeMonad, list_from, maybe_return};
//!
//! let all = m_sequence(MaybeMonad, vec![maybe_return(1), maybe_return(2)]);
//! assert_eq!(all.and_then(|value| value.into_option()), Ok(Some(vec![1, 2])));
//!
//! let combinations = m_map(ListMonad, [1, 2], |n| list_from([n, -n]));
//! assert_eq!(
//!     combinations.and_then(|value| value.into_vec()),
//!     Ok(vec![vec![1, 2], vec![1, -2], vec![-1, 2], vec![-1, -2]])
//! );
//! ```

use std::rc::Rc;

use crate::error::{MonadError, MonadResult};
use crate::typeclass::{MonadDefinition, MonadicValue};

/// A shared monadic function `A -> D<B>`, as composed by [`m_chain`].
pub type Kleisli<A, B, D> = Rc<dyn Fn(A) -> MonadResult<MonadicValue<B, D>>>;

/// Turns a sequence of computations into one computation of the sequence of results.
///
/// Results keep the order of `values`. Under List the result holds every
/// combination, the first computation varying slowest.
///
/// # Errors
///
/// Propagates errors from the definition's `bind`.
pub fn m_sequence<A, D>(
    definition: D,
    values: Vec<MonadicValue<A, D>>,
) -> MonadResult<MonadicValue<Vec<A>, D>>
where
    A: Clone + 'static,
    D: MonadDefinition,
{
    let mut accumulated = definition.unit(Vec::new());
    for value in values.into_iter().rev() {
        let rest = accumulated;
        accumulated = definition.bind(value, move |head: A| {
            definition.bind(rest.clone(), move |tail: Vec<A>| {
                let mut combined = Vec::with_capacity(tail.len() + 1);
                combined.push(head.clone());
                combined.extend(tail);
                Ok(definition.unit(combined))
            })
        })?;
    }
    Ok(accumulated)
}

/// Applies `function` to each item and sequences the results.
///
/// # Errors
///
/// See [`m_sequence`].
pub fn m_map<T, A, D, I, F>(definition: D, items: I, function: F) -> MonadResult<MonadicValue<Vec<A>, D>>
where
    A: Clone + 'static,
    D: MonadDefinition,
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> MonadicValue<A, D>,
{
    m_sequence(definition, items.into_iter().map(function).collect())
}

/// Kleisli composition: `x -> bind(first(x), second)`.
///
/// # Examples
///
/// ```rust
/// use monadic::compose::m_comp;
/// use monadic::control::{MaybeMonad, maybe_return, maybe_zero};
///
/// let halve = |n: i32| Ok(if n % 2 == 0 { maybe_return(n / 2) } else { maybe_zero() });
/// let quarter = m_comp(MaybeMonad, halve, halve);
///
/// assert_eq!(quarter(12).and_then(|value| value.into_option()), Ok(Some(3)));
/// assert_eq!(quarter(6).and_then(|value| value.into_option()), Ok(None));
/// ```
pub fn m_comp<A, B, C, D, F, G>(
    definition: D,
    first: F,
    second: G,
) -> impl Fn(A) -> MonadResult<MonadicValue<C, D>> + 'static
where
    A: 'static,
    B: 'static,
    C: 'static,
    D: MonadDefinition,
    F: Fn(A) -> MonadResult<MonadicValue<B, D>> + 'static,
    G: Fn(B) -> MonadResult<MonadicValue<C, D>> + 'static,
{
    let second = Rc::new(second);
    move |value: A| {
        let second = Rc::clone(&second);
        definition.bind(first(value)?, move |intermediate: B| second(intermediate))
    }
}

/// Lifts a plain function into one returning `unit` of its result.
pub fn m_lift<A, B, D, F>(definition: D, function: F) -> impl Fn(A) -> MonadicValue<B, D>
where
    B: Clone + 'static,
    D: MonadDefinition,
    F: Fn(A) -> B,
{
    move |value: A| definition.unit(function(value))
}

/// Two-argument form of [`m_lift`].
pub fn m_lift2<A1, A2, B, D, F>(
    definition: D,
    function: F,
) -> impl Fn(A1, A2) -> MonadicValue<B, D>
where
    B: Clone + 'static,
    D: MonadDefinition,
    F: Fn(A1, A2) -> B,
{
    move |first: A1, second: A2| definition.unit(function(first, second))
}

/// Keeps the items for which `predicate` yields `true` inside the monad.
///
/// Only MonadPlus definitions may filter. Each predicate is evaluated inside
/// `bind`, so under Maybe the first `None` stops the filter before any later
/// predicate runs. Under List a predicate yielding several booleans branches
/// the result.
///
/// # Errors
///
/// Returns [`MonadError::UnsupportedOperation`] for definitions without
/// `zero`/`plus`, before any predicate is evaluated.
///
/// # Examples
///
/// ```rust
/// use monadic::compose::m_filter;
/// use monadic::control::{ListMonad, list_return};
///
/// let evens = m_filter(ListMonad, 1..=6, |n: &i32| list_return(n % 2 == 0));
/// assert_eq!(evens.and_then(|value| value.into_vec()), Ok(vec![vec![2, 4, 6]]));
/// ```
pub fn m_filter<A, D, I, P>(
    definition: D,
    items: I,
    predicate: P,
) -> MonadResult<MonadicValue<Vec<A>, D>>
where
    A: Clone + 'static,
    D: MonadDefinition,
    I: IntoIterator<Item = A>,
    P: Fn(&A) -> MonadicValue<bool, D> + 'static,
{
    if !definition.supports_plus() {
        return Err(MonadError::unsupported(D::VARIANT, "filter"));
    }

    let predicate = Rc::new(predicate);
    let mut accumulated = definition.unit(Vec::new());
    for item in items {
        let predicate = Rc::clone(&predicate);
        accumulated = definition.bind(accumulated, move |kept: Vec<A>| {
            let candidate = item.clone();
            definition.bind(predicate(&item), move |keep: bool| {
                let mut kept = kept.clone();
                if keep {
                    kept.push(candidate.clone());
                }
                Ok(definition.unit(kept))
            })
        })?;
    }
    Ok(accumulated)
}

/// Runs `action` when `condition` holds, otherwise returns `unit(())`.
///
/// # Errors
///
/// Returns [`MonadError::TypeMismatch`] when `action` is tagged for another variant.
pub fn m_when<D: MonadDefinition>(
    definition: D,
    condition: bool,
    action: MonadicValue<(), D>,
) -> MonadResult<MonadicValue<(), D>> {
    if condition {
        action.ensure_variant(D::VARIANT)
    } else {
        Ok(definition.unit(()))
    }
}

/// Runs `action` unless `condition` holds, otherwise returns `unit(())`.
///
/// # Errors
///
/// See [`m_when`].
pub fn m_unless<D: MonadDefinition>(
    definition: D,
    condition: bool,
    action: MonadicValue<(), D>,
) -> MonadResult<MonadicValue<(), D>> {
    m_when(definition, !condition, action)
}

/// Maps a plain function over the result of `value`.
///
/// # Errors
///
/// Propagates errors from the definition's `bind`.
pub fn m_fmap<A, B, D, F>(
    definition: D,
    function: F,
    value: MonadicValue<A, D>,
) -> MonadResult<MonadicValue<B, D>>
where
    A: 'static,
    B: Clone + 'static,
    D: MonadDefinition,
    F: Fn(A) -> B + 'static,
{
    definition.bind(value, move |inner: A| Ok(definition.unit(function(inner))))
}

/// Flattens a computation producing computations.
///
/// # Errors
///
/// Propagates errors from the definition's `bind`.
///
/// # Examples
///
/// ```rust
/// use monadic::compose::m_join;
/// use monadic::control::{MaybeMonad, maybe_return};
///
/// let nested = maybe_return(maybe_return(7));
/// assert_eq!(m_join(MaybeMonad, nested), Ok(maybe_return(7)));
/// ```
pub fn m_join<A, D>(
    definition: D,
    nested: MonadicValue<MonadicValue<A, D>, D>,
) -> MonadResult<MonadicValue<A, D>>
where
    A: 'static,
    D: MonadDefinition,
{
    definition.bind(nested, |inner: MonadicValue<A, D>| Ok(inner))
}

/// Composes `steps` left to right; an empty list is `unit`.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
///
/// use monadic::compose::{Kleisli, m_chain};
/// use monadic::control::{MaybeMonad, maybe_return};
///
/// let increment: Kleisli<i32, i32, MaybeMonad> = Rc::new(|n| Ok(maybe_return(n + 1)));
/// let double: Kleisli<i32, i32, MaybeMonad> = Rc::new(|n| Ok(maybe_return(n * 2)));
/// let pipeline = m_chain(MaybeMonad, vec![increment, double]);
///
/// assert_eq!(pipeline(4), Ok(maybe_return(10)));
/// ```
pub fn m_chain<A, D>(
    definition: D,
    steps: Vec<Kleisli<A, A, D>>,
) -> impl Fn(A) -> MonadResult<MonadicValue<A, D>> + 'static
where
    A: Clone + 'static,
    D: MonadDefinition,
{
    let steps: Rc<[Kleisli<A, A, D>]> = steps.into();
    move |value: A| chain_from(definition, &steps, 0, value)
}

fn chain_from<A, D>(
    definition: D,
    steps: &Rc<[Kleisli<A, A, D>]>,
    index: usize,
    value: A,
) -> MonadResult<MonadicValue<A, D>>
where
    A: Clone + 'static,
    D: MonadDefinition,
{
    let Some(step) = steps.get(index) else {
        return Ok(definition.unit(value));
    };
    let rest = Rc::clone(steps);
    definition.bind(step(value)?, move |next: A| {
        chain_from(definition, &rest, index + 1, next)
    })
}

/// Monadic left fold: threads an accumulator through `function` for each item.
///
/// # Errors
///
/// Propagates errors from `function` and the definition's `bind`.
///
/// # Examples
///
/// ```rust
/// use monadic::compose::m_reduce;
/// use monadic::control::{MaybeMonad, maybe_return, maybe_zero};
///
/// let checked_sum = |total: u8, n: u8| Ok(total.checked_add(n).map_or_else(maybe_zero, maybe_return));
///
/// assert_eq!(m_reduce(MaybeMonad, checked_sum, 0, [1, 2, 3]), Ok(maybe_return(6)));
/// assert_eq!(m_reduce(MaybeMonad, checked_sum, 0, [200, 100]), Ok(maybe_zero()));
/// ```
pub fn m_reduce<A, T, D, I, F>(
    definition: D,
    function: F,
    initial: A,
    items: I,
) -> MonadResult<MonadicValue<A, D>>
where
    A: Clone + 'static,
    T: Clone + 'static,
    D: MonadDefinition,
    I: IntoIterator<Item = T>,
    F: Fn(A, T) -> MonadResult<MonadicValue<A, D>> + 'static,
{
    let function = Rc::new(function);
    let mut accumulated = definition.unit(initial);
    for item in items {
        let function = Rc::clone(&function);
        accumulated = definition.bind(accumulated, move |total: A| function(total, item.clone()))?;
    }
    Ok(accumulated)
}

/// Applies `step` inside the monad until `predicate` holds for the result.
///
/// The predicate is checked before each step, so an `initial` value that
/// already satisfies it is returned as `unit(initial)`. A predicate that
/// never holds does not terminate.
///
/// # Errors
///
/// Propagates errors from `step` and the definition's `bind`.
pub fn m_until<A, D, P, F>(
    definition: D,
    predicate: P,
    step: F,
    initial: A,
) -> MonadResult<MonadicValue<A, D>>
where
    A: Clone + 'static,
    D: MonadDefinition,
    P: Fn(&A) -> bool + 'static,
    F: Fn(A) -> MonadResult<MonadicValue<A, D>> + 'static,
{
    iterate_until(definition, &Rc::new((predicate, step)), initial)
}

fn iterate_until<A, D, P, F>(
    definition: D,
    loop_body: &Rc<(P, F)>,
    value: A,
) -> MonadResult<MonadicValue<A, D>>
where
    A: Clone + 'static,
    D: MonadDefinition,
    P: Fn(&A) -> bool + 'static,
    F: Fn(A) -> MonadResult<MonadicValue<A, D>> + 'static,
{
    let (predicate, step) = &**loop_body;
    if predicate(&value) {
        return Ok(definition.unit(value));
    }
    let rest = Rc::clone(loop_body);
    definition.bind(step(value)?, move |next: A| {
        iterate_until(definition, &rest, next)
    })
}

/// `unit(())` when `condition` holds, `zero` otherwise.
///
/// # Errors
///
/// Returns [`MonadError::UnsupportedOperation`] for definitions without
/// `zero`/`plus`.
///
/// # Examples
///
/// ```rust
/// use monadic::compose::m_guard;
/// use monadic::control::ListMonad;
/// use monadic::typeclass::MonadDefinition;
///
/// let odd = ListMonad.bind(monadic::control::list_from(1..=5), |n: i32| {
///     ListMonad.bind(m_guard(ListMonad, n % 2 == 1)?, move |()| Ok(ListMonad.unit(n)))
/// });
/// assert_eq!(odd.and_then(|value| value.into_vec()), Ok(vec![1, 3, 5]));
/// ```
pub fn m_guard<D: MonadDefinition>(
    definition: D,
    condition: bool,
) -> MonadResult<MonadicValue<(), D>> {
    if !definition.supports_plus() {
        return Err(MonadError::unsupported(D::VARIANT, "guard"));
    }
    if condition {
        Ok(definition.unit(()))
    } else {
        definition.zero()
    }
}

/// Combines `values` with `plus`, starting from `zero`.
///
/// # Errors
///
/// Returns [`MonadError::UnsupportedOperation`] for definitions without
/// `zero`/`plus`.
pub fn m_plus_all<A, D, I>(definition: D, values: I) -> MonadResult<MonadicValue<A, D>>
where
    A: 'static,
    D: MonadDefinition,
    I: IntoIterator<Item = MonadicValue<A, D>>,
{
    values
        .into_iter()
        .try_fold(definition.zero()?, |combined, value| {
            definition.plus(combined, value)
        })
}
