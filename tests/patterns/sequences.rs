//! Sequence patterns.
//!
//! Tuples match by position with fixed arity; arrays and slices match
//! with slice patterns, which also allow a `..` rest. Heterogeneous
//! sequences go through [`Value`].

use casebook::Value;

// =============================================================================
// Tuple Patterns
// =============================================================================

#[test]
fn tuple_pattern_matches_by_position() {
    let values = (1, 'Q', 3);
    let arm = match values {
        (1, 'J', 3) => "jack row",
        (1, 'Q', 3) => "queen row",
        _ => "unknown",
    };
    assert_eq!(arm, "queen row");
}

#[test]
fn tuple_pattern_mixes_literals_and_captures() {
    let item = ("choc", 1, true);
    match item {
        ("vanilla", _, _) => unreachable!("wrong flavor"),
        ("choc", count, topping) => {
            assert_eq!(count, 1);
            assert!(topping);
        }
        _ => unreachable!("no arm matched"),
    }
}

// =============================================================================
// Slice Patterns
// =============================================================================

#[test]
fn array_pattern_with_fixed_arity() {
    let scores = [70, 85, 90];
    match scores {
        [first, second, third] => {
            assert_eq!(first, 70);
            assert_eq!(second, 85);
            assert_eq!(third, 90);
        }
    }
}

#[test]
fn slice_pattern_arity_must_agree() {
    let scores = vec![70, 85, 90];
    let arm = match scores.as_slice() {
        [] => "empty",
        [_only] => "one",
        [_, _] => "two",
        [_, _, _] => "three",
        _ => "many",
    };
    assert_eq!(arm, "three");
}

#[test]
fn rest_pattern_splits_ends_from_middle() {
    let scores = [70, 85, 90, 95];
    match scores {
        [first, .., last] => {
            assert_eq!(first, 70);
            assert_eq!(last, 95);
        }
    }
}

#[test]
fn rest_pattern_binds_a_subslice() {
    let scores = [70, 85, 90, 95];
    match scores.as_slice() {
        [head, tail @ ..] => {
            assert_eq!(*head, 70);
            assert_eq!(tail, &[85, 90, 95]);
        }
        [] => unreachable!("sequence is not empty"),
    }
}

// =============================================================================
// Heterogeneous Sequences
// =============================================================================

#[test]
fn value_sequence_matches_mixed_kinds() {
    let item = Value::from(vec![
        Value::from("choc"),
        Value::from(1),
        Value::from(true),
    ]);
    match item.as_slice().expect("sequence input") {
        [Value::String(flavor), _, _] if &**flavor == "vanilla" => {
            unreachable!("wrong flavor");
        }
        [Value::String(_), Value::Int(count), Value::Bool(topping)] => {
            assert_eq!(*count, 1);
            assert!(*topping);
        }
        _ => unreachable!("no arm matched"),
    }
}

#[test]
fn value_sequence_arity_mismatch_falls_through() {
    let item = Value::from(vec![Value::from("choc"), Value::from(1)]);
    let arm = match item.as_slice().expect("sequence input") {
        [_, _, _] => "three",
        [_, _] => "two",
        _ => "other",
    };
    assert_eq!(arm, "two");
}
