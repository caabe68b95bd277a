//! Property-based tests for the monad laws of every built-in definition.
//!
//! ## Monad Laws
//! - Left Identity: bind(unit(a), f) == f(a)
//! - Right Identity: bind(m, unit) == m
//! - Associativity: bind(bind(m, f), g) == bind(m, |x| bind(f(x), g))
//!
//! Eager variants are compared by value. State and Reader are compared by
//! running both sides from the same initial state or environment.

use monadic::control::{
    EitherMonad, EitherValue, ListMonad, ListValue, MaybeMonad, MaybeValue, either_left,
    either_right, list_from, maybe_from, maybe_return, maybe_zero,
};
use monadic::effect::{
    ReaderMonad, ReaderValue, StateMonad, StateValue, WriterMonad, WriterValue, asks, run_reader,
    run_state, state_new, writer_new,
};
use monadic::error::MonadResult;
use monadic::typeclass::{IdentityMonad, IdentityValue, MonadDefinition, identity_return};
use proptest::prelude::*;

// =============================================================================
// Identity
// =============================================================================

fn identity_double(value: i32) -> MonadResult<IdentityValue<i32>> {
    Ok(identity_return(value.wrapping_mul(2)))
}

fn identity_increment(value: i32) -> MonadResult<IdentityValue<i32>> {
    Ok(identity_return(value.wrapping_add(1)))
}

proptest! {
    #[test]
    fn prop_identity_left_identity(value in any::<i32>()) {
        let left = IdentityMonad.bind(IdentityMonad.unit(value), identity_double);
        prop_assert_eq!(left, identity_double(value));
    }

    #[test]
    fn prop_identity_right_identity(value in any::<i32>()) {
        let computation = identity_return(value);
        let right = IdentityMonad.bind(computation.clone(), |x: i32| Ok(IdentityMonad.unit(x)));
        prop_assert_eq!(right, Ok(computation));
    }

    #[test]
    fn prop_identity_associativity(value in any::<i32>()) {
        let left = IdentityMonad
            .bind(identity_return(value), identity_double)
            .and_then(|inner| IdentityMonad.bind(inner, identity_increment));
        let right = IdentityMonad.bind(identity_return(value), |x: i32| {
            IdentityMonad.bind(identity_double(x)?, identity_increment)
        });
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Maybe
// =============================================================================

fn maybe_reject_multiple_of_three(value: i32) -> MonadResult<MaybeValue<i32>> {
    Ok(if value % 3 == 0 {
        maybe_zero()
    } else {
        maybe_return(value.wrapping_add(1))
    })
}

fn maybe_double(value: i32) -> MonadResult<MaybeValue<i32>> {
    Ok(maybe_return(value.wrapping_mul(2)))
}

proptest! {
    #[test]
    fn prop_maybe_left_identity(value in any::<i32>()) {
        let left = MaybeMonad.bind(MaybeMonad.unit(value), maybe_reject_multiple_of_three);
        prop_assert_eq!(left, maybe_reject_multiple_of_three(value));
    }

    #[test]
    fn prop_maybe_right_identity(option in prop::option::of(any::<i32>())) {
        let computation = maybe_from(option);
        let right = MaybeMonad.bind(computation.clone(), |x: i32| Ok(MaybeMonad.unit(x)));
        prop_assert_eq!(right, Ok(computation));
    }

    #[test]
    fn prop_maybe_associativity(option in prop::option::of(any::<i32>())) {
        let left = MaybeMonad
            .bind(maybe_from(option), maybe_reject_multiple_of_three)
            .and_then(|inner| MaybeMonad.bind(inner, maybe_double));
        let right = MaybeMonad.bind(maybe_from(option), |x: i32| {
            MaybeMonad.bind(maybe_reject_multiple_of_three(x)?, maybe_double)
        });
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// List
// =============================================================================

fn list_neighbours(value: i32) -> MonadResult<ListValue<i32>> {
    Ok(list_from([value, value.wrapping_add(1)]))
}

fn list_keep_even(value: i32) -> MonadResult<ListValue<i32>> {
    Ok(if value % 2 == 0 {
        list_from([value])
    } else {
        list_from([])
    })
}

proptest! {
    #[test]
    fn prop_list_left_identity(value in any::<i32>()) {
        let left = ListMonad.bind(ListMonad.unit(value), list_neighbours);
        prop_assert_eq!(left, list_neighbours(value));
    }

    #[test]
    fn prop_list_right_identity(values in prop::collection::vec(any::<i32>(), 0..8)) {
        let computation = list_from(values);
        let right = ListMonad.bind(computation.clone(), |x: i32| Ok(ListMonad.unit(x)));
        prop_assert_eq!(right, Ok(computation));
    }

    #[test]
    fn prop_list_associativity(values in prop::collection::vec(any::<i32>(), 0..8)) {
        let left = ListMonad
            .bind(list_from(values.clone()), list_neighbours)
            .and_then(|inner| ListMonad.bind(inner, list_keep_even));
        let right = ListMonad.bind(list_from(values), |x: i32| {
            ListMonad.bind(list_neighbours(x)?, list_keep_even)
        });
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Either
// =============================================================================

fn either_strategy() -> impl Strategy<Value = EitherValue<String, i32>> {
    prop_oneof![
        any::<i32>().prop_map(either_right::<String, i32>),
        "[a-z]{1,8}".prop_map(either_left::<String, i32>),
    ]
}

fn either_non_negative(value: i32) -> MonadResult<EitherValue<String, i32>> {
    Ok(if value < 0 {
        either_left(format!("negative: {value}"))
    } else {
        either_right(value / 2)
    })
}

fn either_shift(value: i32) -> MonadResult<EitherValue<String, i32>> {
    Ok(either_right(value.wrapping_sub(7)))
}

proptest! {
    #[test]
    fn prop_either_left_identity(value in any::<i32>()) {
        let either = EitherMonad::<String>::new();
        let left = either.bind(either.unit(value), either_non_negative);
        prop_assert_eq!(left, either_non_negative(value));
    }

    #[test]
    fn prop_either_right_identity(computation in either_strategy()) {
        let either = EitherMonad::<String>::new();
        let right = either.bind(computation.clone(), move |x: i32| Ok(either.unit(x)));
        prop_assert_eq!(right, Ok(computation));
    }

    #[test]
    fn prop_either_associativity(computation in either_strategy()) {
        let either = EitherMonad::<String>::new();
        let left = either
            .bind(computation.clone(), either_non_negative)
            .and_then(|inner| either.bind(inner, either_shift));
        let right = either.bind(computation, move |x: i32| {
            either.bind(either_non_negative(x)?, either_shift)
        });
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Writer
// =============================================================================

fn writer_record(value: i32) -> MonadResult<WriterValue<Vec<i32>, i32>> {
    Ok(writer_new(value.wrapping_add(1), vec![value]))
}

fn writer_triple(value: i32) -> MonadResult<WriterValue<Vec<i32>, i32>> {
    Ok(writer_new(value.wrapping_mul(3), vec![value, value]))
}

proptest! {
    #[test]
    fn prop_writer_left_identity(value in any::<i32>()) {
        let writer = WriterMonad::<Vec<i32>>::new();
        let left = writer.bind(writer.unit(value), writer_record);
        prop_assert_eq!(left, writer_record(value));
    }

    #[test]
    fn prop_writer_right_identity(
        value in any::<i32>(),
        log in prop::collection::vec(any::<i32>(), 0..6),
    ) {
        let writer = WriterMonad::<Vec<i32>>::new();
        let computation = writer_new(value, log);
        let right = writer.bind(computation.clone(), move |x: i32| Ok(writer.unit(x)));
        prop_assert_eq!(right, Ok(computation));
    }

    #[test]
    fn prop_writer_associativity(
        value in any::<i32>(),
        log in prop::collection::vec(any::<i32>(), 0..6),
    ) {
        let writer = WriterMonad::<Vec<i32>>::new();
        let left = writer
            .bind(writer_new(value, log.clone()), writer_record)
            .and_then(|inner| writer.bind(inner, writer_triple));
        let right = writer.bind(writer_new(value, log), move |x: i32| {
            writer.bind(writer_record(x)?, writer_triple)
        });
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// State
// =============================================================================

const STATE: StateMonad<i32> = StateMonad::new();

fn state_accumulate(value: i32) -> MonadResult<StateValue<i32, i32>> {
    Ok(state_new(move |state: i32| {
        (value.wrapping_add(state), state.wrapping_add(1))
    }))
}

fn state_swap(value: i32) -> MonadResult<StateValue<i32, i32>> {
    Ok(state_new(move |state: i32| (state, value)))
}

fn state_computation(offset: i32) -> StateValue<i32, i32> {
    state_new(move |state: i32| (state.wrapping_mul(2), state.wrapping_add(offset)))
}

proptest! {
    #[test]
    fn prop_state_left_identity(value in any::<i32>(), initial in any::<i32>()) {
        let left = STATE.bind(STATE.unit(value), state_accumulate).unwrap();
        let right = state_accumulate(value).unwrap();
        prop_assert_eq!(run_state(&left, initial), run_state(&right, initial));
    }

    #[test]
    fn prop_state_right_identity(offset in any::<i32>(), initial in any::<i32>()) {
        let right = STATE
            .bind(state_computation(offset), |x: i32| Ok(STATE.unit(x)))
            .unwrap();
        prop_assert_eq!(
            run_state(&right, initial),
            run_state(&state_computation(offset), initial)
        );
    }

    #[test]
    fn prop_state_associativity(offset in any::<i32>(), initial in any::<i32>()) {
        let left = STATE
            .bind(state_computation(offset), state_accumulate)
            .and_then(|inner| STATE.bind(inner, state_swap))
            .unwrap();
        let right = STATE
            .bind(state_computation(offset), |x: i32| {
                STATE.bind(state_accumulate(x)?, state_swap)
            })
            .unwrap();
        prop_assert_eq!(run_state(&left, initial), run_state(&right, initial));
    }
}

// =============================================================================
// Reader
// =============================================================================

const READER: ReaderMonad<i32> = ReaderMonad::new();

fn reader_scale(value: i32) -> MonadResult<ReaderValue<i32, i32>> {
    Ok(asks(move |environment: &i32| value.wrapping_mul(*environment)))
}

fn reader_offset(value: i32) -> MonadResult<ReaderValue<i32, i32>> {
    Ok(asks(move |environment: &i32| value.wrapping_sub(*environment)))
}

proptest! {
    #[test]
    fn prop_reader_left_identity(value in any::<i32>(), environment in any::<i32>()) {
        let left = READER.bind(READER.unit(value), reader_scale).unwrap();
        let right = reader_scale(value).unwrap();
        prop_assert_eq!(run_reader(&left, &environment), run_reader(&right, &environment));
    }

    #[test]
    fn prop_reader_right_identity(environment in any::<i32>()) {
        let computation = asks(|environment: &i32| environment.wrapping_add(5));
        let right = READER
            .bind(computation.clone(), |x: i32| Ok(READER.unit(x)))
            .unwrap();
        prop_assert_eq!(
            run_reader(&right, &environment),
            run_reader(&computation, &environment)
        );
    }

    #[test]
    fn prop_reader_associativity(value in any::<i32>(), environment in any::<i32>()) {
        let start: ReaderValue<i32, i32> = READER.unit(value);
        let left = READER
            .bind(start.clone(), reader_scale)
            .and_then(|inner| READER.bind(inner, reader_offset))
            .unwrap();
        let right = READER
            .bind(start, |x: i32| READER.bind(reader_scale(x)?, reader_offset))
            .unwrap();
        prop_assert_eq!(run_reader(&left, &environment), run_reader(&right, &environment));
    }
}
