//! Do-notation interpreter.
//!
//! [`domonad`] runs an ordered list of [`BindingStep`]s under one
//! [`MonadDefinition`]. Each step's expression sees the names bound by the
//! steps before it; its value is passed to `bind`, whose continuation
//! extends the environment and moves on to the next step. After the last
//! step the caller's continuation receives the full environment.
//!
//! Because every step is a real `bind`, each variant keeps its own
//! semantics: `None` and `Left` stop the block before later expressions are
//! evaluated, List explores every combination of choices with the first
//! step varying slowest, and State, Writer and Reader thread their data
//! through the nested binds.
//!
//! # Examples
//!
//! ```rust
//! use monadic::compose::{BindingStep, domonad};
//! use monadic::control::{MaybeMonad, maybe_return, maybe_zero};
//!
//! fn safe_divide(numerator: i32, denominator: i32) -> monadic::control::MaybeValue<i32> {
//!     if denominator == 0 { maybe_zero() } else { maybe_return(numerator / denominator) }
//! }
//!
//! let steps = vec![
//!     BindingStep::new("a", |_| Ok(safe_divide(10, 2))),
//!     BindingStep::new("b", |_| Ok(safe_divide(20, 4))),
//! ];
//! let sum = domonad(MaybeMonad, steps, |environment| {
//!     Ok(maybe_return(environment.lookup("a")? + environment.lookup("b")?))
//! });
//!
//! assert_eq!(sum.and_then(|value| value.into_option()), Ok(Some(10)));
//! ```

use std::fmt;
use std::rc::Rc;

use super::Environment;
use crate::error::MonadResult;
use crate::typeclass::{MonadDefinition, MonadicValue};

type StepExpression<V, D> = Rc<dyn Fn(&Environment<V>) -> MonadResult<MonadicValue<V, D>>>;

/// One `name <- expression` line of a do block.
pub struct BindingStep<V, D: MonadDefinition> {
    name: Rc<str>,
    expression: StepExpression<V, D>,
}

impl<V, D: MonadDefinition> BindingStep<V, D> {
    /// Creates a step binding the result of `expression` to `name`.
    ///
    /// `expression` receives the environment built by the preceding steps.
    pub fn new<F>(name: impl Into<Rc<str>>, expression: F) -> Self
    where
        F: Fn(&Environment<V>) -> MonadResult<MonadicValue<V, D>> + 'static,
    {
        Self {
            name: name.into(),
            expression: Rc::new(expression),
        }
    }

    /// Creates a step binding a fixed monadic value to `name`.
    pub fn constant(name: impl Into<Rc<str>>, value: MonadicValue<V, D>) -> Self
    where
        V: Clone + 'static,
    {
        Self::new(name, move |_: &Environment<V>| Ok(value.clone()))
    }

    /// The name this step binds.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluates the step's expression against `environment`.
    ///
    /// # Errors
    ///
    /// Propagates whatever the expression returns, typically
    /// [`MonadError::UnboundName`](crate::error::MonadError::UnboundName).
    pub fn evaluate(&self, environment: &Environment<V>) -> MonadResult<MonadicValue<V, D>> {
        (self.expression)(environment)
    }
}

impl<V, D: MonadDefinition> Clone for BindingStep<V, D> {
    fn clone(&self) -> Self {
        Self {
            name: Rc::clone(&self.name),
            expression: Rc::clone(&self.expression),
        }
    }
}

impl<V, D: MonadDefinition> fmt::Debug for BindingStep<V, D> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("BindingStep")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

struct Program<V, D: MonadDefinition, C> {
    definition: D,
    steps: Vec<BindingStep<V, D>>,
    continuation: C,
}

/// Runs `steps` in order under `definition`, then `continuation`.
///
/// With no steps, `continuation` is called with an empty environment.
///
/// # Errors
///
/// Propagates errors from step expressions, from `continuation` and from the
/// definition's `bind` (for example [`MonadError::TypeMismatch`] when a step
/// produces a value of another variant). For State and Reader those errors
/// surface when the returned computation is run.
///
/// [`MonadError::TypeMismatch`]: crate::error::MonadError::TypeMismatch
///
/// # Stack depth
///
/// Each step adds one nested `bind` frame, so stack use grows linearly with
/// the number of steps. Blocks of a few thousand steps are fine on the
/// default thread stack; tens of thousands can overflow it.
///
/// # Examples
///
/// ```rust
/// use monadic::compose::{BindingStep, domonad};
/// use monadic::control::{ListMonad, list_from, list_return};
///
/// let steps = vec![
///     BindingStep::constant("x", list_from([1, 2])),
///     BindingStep::new("y", |environment| {
///         let x: i32 = *environment.lookup("x")?;
///         Ok(list_from([x * 10, x * 100]))
///     }),
/// ];
/// let outcomes = domonad(ListMonad, steps, |environment| {
///     Ok(list_return(*environment.lookup("y")?))
/// });
///
/// assert_eq!(outcomes.and_then(|value| value.into_vec()), Ok(vec![10, 100, 20, 200]));
/// ```
pub fn domonad<V, B, D, C>(
    definition: D,
    steps: Vec<BindingStep<V, D>>,
    continuation: C,
) -> MonadResult<MonadicValue<B, D>>
where
    V: 'static,
    B: 'static,
    D: MonadDefinition,
    C: Fn(&Environment<V>) -> MonadResult<MonadicValue<B, D>> + 'static,
{
    tracing::debug!(variant = %D::VARIANT, steps = steps.len(), "interpreting do block");
    let program = Rc::new(Program {
        definition,
        steps,
        continuation,
    });
    interpret(&program, 0, &Environment::new())
}

/// Runs `steps` and returns `unit` of `projection` applied to the final environment.
///
/// # Errors
///
/// See [`domonad`]; errors returned by `projection` are propagated too.
///
/// # Examples
///
/// ```rust
/// use monadic::compose::{BindingStep, domonad_value};
/// use monadic::typeclass::{IdentityMonad, identity_return, run_identity};
///
/// let steps = vec![BindingStep::constant("answer", identity_return(42))];
/// let value = domonad_value(IdentityMonad, steps, |environment| {
///     environment.lookup("answer").copied()
/// });
///
/// assert_eq!(value.and_then(run_identity), Ok(42));
/// ```
pub fn domonad_value<V, B, D, P>(
    definition: D,
    steps: Vec<BindingStep<V, D>>,
    projection: P,
) -> MonadResult<MonadicValue<B, D>>
where
    V: 'static,
    B: Clone + 'static,
    D: MonadDefinition,
    P: Fn(&Environment<V>) -> MonadResult<B> + 'static,
{
    domonad(definition, steps, move |environment: &Environment<V>| {
        Ok(definition.unit(projection(environment)?))
    })
}

fn interpret<V, B, D, C>(
    program: &Rc<Program<V, D, C>>,
    index: usize,
    environment: &Environment<V>,
) -> MonadResult<MonadicValue<B, D>>
where
    V: 'static,
    B: 'static,
    D: MonadDefinition,
    C: Fn(&Environment<V>) -> MonadResult<MonadicValue<B, D>> + 'static,
{
    let Some(step) = program.steps.get(index) else {
        tracing::trace!(bindings = environment.len(), "running continuation");
        return (program.continuation)(environment)?.ensure_variant(D::VARIANT);
    };

    let value = step.evaluate(environment)?;
    tracing::trace!(name = step.name(), index, "binding step");

    let rest = Rc::clone(program);
    let name = Rc::clone(&step.name);
    let environment = environment.clone();
    program.definition.bind(value, move |bound: V| {
        interpret(&rest, index + 1, &environment.bind(Rc::clone(&name), bound))
    })
}
