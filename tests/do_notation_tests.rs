//! Scenario tests for the do-notation interpreter.
//!
//! Each variant is driven through `domonad` and checked against the result
//! of its own bind semantics: short-circuiting for Maybe and Either,
//! Cartesian expansion for List and threading for State, Writer and Reader.

use std::cell::Cell;
use std::rc::Rc;

use monadic::compose::{BindingStep, Environment, domonad, domonad_value};
use monadic::control::{
    EitherMonad, EitherValue, ListMonad, MaybeMonad, MaybeValue, either_left, either_right,
    list_from, list_return, list_zero, maybe_return, maybe_zero,
};
use monadic::effect::{
    ReaderMonad, StateMonad, WriterMonad, ask, asks, local, run_reader, run_state, run_writer,
    state_get, state_modify, state_put, writer_new, writer_return,
};
use monadic::error::MonadError;
use monadic::typeclass::{
    IdentityMonad, MonadDefinition, MonadicValue, Variant, identity_return, run_identity,
};
use rstest::rstest;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn safe_divide(numerator: i32, denominator: i32) -> MaybeValue<i32> {
    if denominator == 0 {
        maybe_zero()
    } else {
        maybe_return(numerator / denominator)
    }
}

fn parse_int(input: &str) -> EitherValue<String, i32> {
    input
        .parse()
        .map_or_else(|_| either_left(format!("Invalid number: {input}")), either_right)
}

fn counted_parse(
    name: &'static str,
    input: &'static str,
    calls: &Rc<Cell<usize>>,
) -> BindingStep<i32, EitherMonad<String>> {
    let calls = Rc::clone(calls);
    BindingStep::new(name, move |_: &Environment<i32>| {
        calls.set(calls.get() + 1);
        Ok(parse_int(input))
    })
}

// =============================================================================
// Maybe
// =============================================================================

#[rstest]
fn maybe_block_sums_safe_divisions() {
    init_tracing();
    let steps = vec![
        BindingStep::new("a", |_: &Environment<i32>| Ok(safe_divide(10, 2))),
        BindingStep::new("b", |_: &Environment<i32>| Ok(safe_divide(20, 4))),
    ];
    let result = domonad(MaybeMonad, steps, |environment| {
        Ok(maybe_return(environment.lookup("a")? + environment.lookup("b")?))
    });
    assert_eq!(result.and_then(|value| value.into_option()), Ok(Some(10)));
}

#[rstest]
fn maybe_block_stops_at_division_by_zero() {
    init_tracing();
    let evaluated = Rc::new(Cell::new(false));
    let flag = Rc::clone(&evaluated);
    let steps = vec![
        BindingStep::new("a", |_: &Environment<i32>| Ok(safe_divide(10, 0))),
        BindingStep::new("b", move |_: &Environment<i32>| {
            flag.set(true);
            Ok(safe_divide(20, 4))
        }),
    ];
    let result = domonad(MaybeMonad, steps, |environment| {
        Ok(maybe_return(environment.lookup("a")? + environment.lookup("b")?))
    });
    assert_eq!(result, Ok(maybe_zero()));
    assert!(!evaluated.get());
}

// =============================================================================
// Either
// =============================================================================

#[rstest]
fn either_block_sums_parsed_numbers() {
    init_tracing();
    let calls = Rc::new(Cell::new(0));
    let steps = vec![
        counted_parse("a", "42", &calls),
        counted_parse("b", "10", &calls),
    ];
    let result = domonad(EitherMonad::new(), steps, |environment| {
        Ok(either_right(environment.lookup("a")? + environment.lookup("b")?))
    });
    assert_eq!(result, Ok(either_right(52)));
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn either_block_returns_first_left_without_evaluating_rest() {
    init_tracing();
    let calls = Rc::new(Cell::new(0));
    let steps = vec![
        counted_parse("a", "x", &calls),
        counted_parse("b", "10", &calls),
    ];
    let result = domonad(EitherMonad::new(), steps, |environment| {
        Ok(either_right(environment.lookup("a")? + environment.lookup("b")?))
    });
    assert_eq!(result, Ok(either_left("Invalid number: x".to_string())));
    assert_eq!(calls.get(), 1);
}

// =============================================================================
// List
// =============================================================================

fn bounded_choices(name: &'static str, bound: &'static str) -> BindingStep<i32, ListMonad> {
    BindingStep::new(name, move |environment: &Environment<i32>| {
        let upper = *environment.lookup(bound)?;
        Ok(list_from(1..=upper))
    })
}

#[rstest]
fn list_block_generates_pythagorean_triples() {
    init_tracing();
    let steps = vec![
        BindingStep::constant("c", list_from(1..=15)),
        bounded_choices("b", "c"),
        bounded_choices("a", "b"),
    ];
    let result = domonad(ListMonad, steps, |environment| {
        let a = *environment.lookup("a")?;
        let b = *environment.lookup("b")?;
        let c = *environment.lookup("c")?;
        Ok(if a * a + b * b == c * c {
            list_return(vec![a, b, c])
        } else {
            list_zero()
        })
    });
    assert_eq!(
        result.and_then(|value| value.into_vec()),
        Ok(vec![
            vec![3, 4, 5],
            vec![6, 8, 10],
            vec![5, 12, 13],
            vec![9, 12, 15],
        ])
    );
}

#[rstest]
fn list_block_with_empty_step_has_no_outcomes() {
    let steps = vec![
        BindingStep::constant("x", list_from([1, 2, 3])),
        BindingStep::constant("y", list_zero()),
    ];
    let result = domonad(ListMonad, steps, |environment| {
        Ok(list_return(*environment.lookup("x")?))
    });
    assert_eq!(result, Ok(list_zero()));
}

// =============================================================================
// State, Writer and Reader
// =============================================================================

#[rstest]
fn state_counter_block_is_deterministic() {
    init_tracing();
    let state = StateMonad::<i32>::new();
    let steps = vec![
        BindingStep::constant("before", state_get()),
        BindingStep::constant(
            "ticked",
            state.bind(state_modify(|count: i32| count + 1), |()| Ok(state_get())).unwrap(),
        ),
        BindingStep::new("reset", move |environment: &Environment<i32>| {
            let before = *environment.lookup("before")?;
            state.bind(state_put(before * 10), |()| Ok(state_get()))
        }),
    ];
    let computation = domonad(state, steps, |environment| {
        Ok(monadic::effect::state_return((
            *environment.lookup("before")?,
            *environment.lookup("ticked")?,
            *environment.lookup("reset")?,
        )))
    })
    .unwrap();

    let first = run_state(&computation, 4);
    assert_eq!(first, Ok(((4, 5, 40), 40)));
    assert_eq!(run_state(&computation, 4), first);
    assert_eq!(run_state(&computation, 7), Ok(((7, 8, 70), 70)));
}

#[rstest]
fn writer_block_keeps_log_in_step_order() {
    let steps = vec![
        BindingStep::constant("x", writer_new(2, vec!["got x".to_string()])),
        BindingStep::new("y", |environment: &Environment<i32>| {
            let x = *environment.lookup("x")?;
            Ok(writer_new(x * 3, vec![format!("tripled {x}")]))
        }),
    ];
    let result = domonad(WriterMonad::new(), steps, |environment| {
        Ok(writer_new(
            *environment.lookup("y")?,
            vec!["done".to_string()],
        ))
    });
    assert_eq!(
        result.and_then(run_writer),
        Ok((
            6,
            vec![
                "got x".to_string(),
                "tripled 2".to_string(),
                "done".to_string(),
            ]
        ))
    );
}

#[rstest]
fn reader_block_shares_environment_between_steps() {
    let steps = vec![
        BindingStep::constant("depth", ask()),
        BindingStep::constant("nested", local(|depth: &i32| depth + 1, ask()).unwrap()),
        BindingStep::constant("scaled", asks(|depth: &i32| depth * 100)),
    ];
    let result = domonad_value(ReaderMonad::new(), steps, |environment| {
        Ok((
            *environment.lookup("depth")?,
            *environment.lookup("nested")?,
            *environment.lookup("scaled")?,
        ))
    })
    .unwrap();
    assert_eq!(run_reader(&result, &2), Ok((2, 3, 200)));
}

// =============================================================================
// Edge Cases
// =============================================================================

#[rstest]
fn empty_block_runs_continuation_with_empty_environment() {
    let steps: Vec<BindingStep<i32, IdentityMonad>> = Vec::new();
    let result = domonad(IdentityMonad, steps, |environment| {
        Ok(identity_return(environment.is_empty()))
    });
    assert_eq!(result.and_then(run_identity), Ok(true));
}

#[rstest]
fn later_binding_shadows_earlier_one() {
    let steps = vec![
        BindingStep::constant("x", identity_return(1)),
        BindingStep::new("x", |environment: &Environment<i32>| {
            Ok(identity_return(*environment.lookup("x")? + 10))
        }),
    ];
    let result = domonad_value(IdentityMonad, steps, |environment| {
        environment.lookup("x").copied()
    });
    assert_eq!(result.and_then(run_identity), Ok(11));
}

#[rstest]
fn long_maybe_block_threads_every_step() {
    let mut steps = vec![BindingStep::constant("acc", maybe_return(0))];
    steps.extend((0..200).map(|_| {
        BindingStep::new("acc", |environment: &Environment<i32>| {
            Ok(maybe_return(*environment.lookup("acc")? + 1))
        })
    }));
    let result = domonad(MaybeMonad, steps, |environment| {
        Ok(maybe_return((*environment.lookup("acc")?, environment.len())))
    });
    assert_eq!(result.and_then(|value| value.into_option()), Ok(Some((200, 201))));
}

#[rstest]
fn reading_unbound_name_fails_at_evaluation() {
    let steps = vec![
        BindingStep::constant("a", maybe_return(1)),
        BindingStep::new("b", |environment: &Environment<i32>| {
            Ok(maybe_return(*environment.lookup("missing")?))
        }),
    ];
    let result = domonad(MaybeMonad, steps, |_| Ok(maybe_return(0)));
    assert_eq!(
        result,
        Err(MonadError::UnboundName {
            name: "missing".to_string()
        })
    );
}

#[rstest]
fn step_of_another_variant_is_a_type_mismatch() {
    let steps = vec![BindingStep::new("a", |_: &Environment<i32>| {
        Ok(MonadicValue::List(vec![1]))
    })];
    let result = domonad(MaybeMonad, steps, |_| Ok(maybe_return(0)));
    assert_eq!(
        result,
        Err(MonadError::TypeMismatch {
            expected: Variant::Maybe,
            found: Variant::List,
        })
    );
}

#[rstest]
fn writer_continuation_of_another_variant_is_a_type_mismatch() {
    let steps = vec![BindingStep::constant("a", writer_return::<Vec<String>, i32>(1))];
    let result = domonad(WriterMonad::new(), steps, |_| Ok(MonadicValue::Maybe(Some(1))));
    assert_eq!(
        result.map(|value| value.variant()),
        Err(MonadError::TypeMismatch {
            expected: Variant::Writer,
            found: Variant::Maybe,
        })
    );
}
