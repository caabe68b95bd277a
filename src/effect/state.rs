//! State Monad - stateful computation.
//!
//! A State value encapsulates a function `S -> (A, S)`: given the current
//! state it produces a result and the next state. Nothing runs until the
//! computation is given an initial state with [`run_state`], and the same
//! computation can be run any number of times.
//!
//! # Laws
//!
//! Besides the monad laws, the state primitives satisfy:
//!
//! - Get Put Law: `bind(state_get(), state_put)` leaves the state unchanged
//! - Put Get Law: `bind(state_put(s), |_| state_get())` returns `s`
//! - Put Put Law: `bind(state_put(s1), |_| state_put(s2))` equals `state_put(s2)`
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::{StateMonad, run_state, state_get, state_modify};
//! use monadic::typeclass::MonadDefinition;
//!
//! let state = StateMonad::<i32>::new();
//! let increment_then_read = state.bind(state_modify(|count: i32| count + 1), |()| Ok(state_get()));
//!
//! let computation = increment_then_read.unwrap();
//! assert_eq!(run_state(&computation, 0), Ok((1, 1)));
//! assert_eq!(run_state(&computation, 41), Ok((42, 42)));
//! ```

use std::marker::PhantomData;
use std::rc::Rc;

use crate::error::{MonadError, MonadResult};
use crate::typeclass::{MonadDefinition, MonadicValue, Variant, definition_marker};

/// The State monad definition, threading a state of type `S`.
pub struct StateMonad<S>(PhantomData<fn() -> S>);

definition_marker!(StateMonad<S>);

impl<S: 'static> MonadDefinition for StateMonad<S> {
    type State = S;
    type Log = ();
    type Environment = ();
    type Error = ();

    const VARIANT: Variant = Variant::State;

    fn unit<A>(&self, value: A) -> MonadicValue<A, Self>
    where
        A: Clone + 'static,
    {
        state_return(value)
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
            MonadicValue::State(first) => first,
            other => return Err(MonadError::mismatch(Self::VARIANT, other.variant())),
        };
        Ok(MonadicValue::State(Rc::new(move |state: S| {
            let (intermediate, next_state) = first(state)?;
            match function(intermediate)? {
                MonadicValue::State(second) => second(next_state),
                other => Err(MonadError::mismatch(Variant::State, other.variant())),
            }
        })))
    }
}

/// A State computation over `S` producing `A`.
pub type StateValue<S, A> = MonadicValue<A, StateMonad<S>>;

/// Creates a State computation from a transition function.
///
/// # Examples
///
/// ```rust
/// use monadic::effect::{run_state, state_new};
///
/// let computation = state_new(|s: i32| (s * 2, s + 1));
/// assert_eq!(run_state(&computation, 10), Ok((20, 11)));
/// ```
pub fn state_new<S, A, F>(transition: F) -> StateValue<S, A>
where
    S: 'static,
    F: Fn(S) -> (A, S) + 'static,
{
    MonadicValue::State(Rc::new(move |state: S| Ok(transition(state))))
}

/// A computation returning `value` and leaving the state untouched.
pub fn state_return<S, A>(value: A) -> StateValue<S, A>
where
    S: 'static,
    A: Clone + 'static,
{
    MonadicValue::State(Rc::new(move |state: S| Ok((value.clone(), state))))
}

/// A computation returning the current state.
pub fn state_get<S>() -> StateValue<S, S>
where
    S: Clone + 'static,
{
    MonadicValue::State(Rc::new(|state: S| Ok((state.clone(), state))))
}

/// A computation returning a projection of the current state.
///
/// # Examples
///
/// ```rust
/// use monadic::effect::{run_state, state_gets};
///
/// let length = state_gets(|items: &Vec<u8>| items.len());
/// assert_eq!(run_state(&length, vec![1, 2, 3]), Ok((3, vec![1, 2, 3])));
/// ```
pub fn state_gets<S, A, F>(projection: F) -> StateValue<S, A>
where
    S: 'static,
    F: Fn(&S) -> A + 'static,
{
    MonadicValue::State(Rc::new(move |state: S| Ok((projection(&state), state))))
}

/// A computation replacing the state with `new_state`.
pub fn state_put<S>(new_state: S) -> StateValue<S, ()>
where
    S: Clone + 'static,
{
    MonadicValue::State(Rc::new(move |_: S| Ok(((), new_state.clone()))))
}

/// A computation applying `modifier` to the state.
pub fn state_modify<S, F>(modifier: F) -> StateValue<S, ()>
where
    S: 'static,
    F: Fn(S) -> S + 'static,
{
    MonadicValue::State(Rc::new(move |state: S| Ok(((), modifier(state)))))
}

/// Runs a State computation from `initial_state`, returning `(value, final_state)`.
///
/// Every `bind` wraps the previous run function, so running a chain of `n`
/// binds nests `n` calls. Chains of tens of thousands of binds, such as an
/// `m_sequence` over that many State values, can overflow the thread stack.
///
/// # Errors
///
/// Returns [`MonadError::TypeMismatch`] when `computation` is not tagged
/// State, or when a function bound inside it returned a foreign value.
pub fn run_state<A, D: MonadDefinition>(
    computation: &MonadicValue<A, D>,
    initial_state: D::State,
) -> MonadResult<(A, D::State)> {
    match computation {
        MonadicValue::State(function) => function(initial_state),
        other => Err(MonadError::mismatch(Variant::State, other.variant())),
    }
}

/// Runs a State computation and returns only the result.
///
/// # Errors
///
/// See [`run_state`].
pub fn eval_state<A, D: MonadDefinition>(
    computation: &MonadicValue<A, D>,
    initial_state: D::State,
) -> MonadResult<A> {
    run_state(computation, initial_state).map(|(value, _)| value)
}

/// Runs a State computation and returns only the final state.
///
/// # Errors
///
/// See [`run_state`].
pub fn exec_state<A, D: MonadDefinition>(
    computation: &MonadicValue<A, D>,
    initial_state: D::State,
) -> MonadResult<D::State> {
    run_state(computation, initial_state).map(|(_, state)| state)
}
