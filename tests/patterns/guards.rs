//! Match guards.
//!
//! `pattern if condition` only takes the arm when the condition holds
//! over the pattern's bindings; a failed guard falls through to later
//! arms as if the pattern had not matched.

use casebook::Point;

// =============================================================================
// Guards on Tuple Patterns
// =============================================================================

#[test]
fn guard_orders_the_arms() {
    let values = (10, 15);
    let arm = match values {
        (x, y) if x == y => "equal",
        (x, y) if x > y => "descending",
        (x, y) if x < y => "ascending",
        _ => "unordered",
    };
    assert_eq!(arm, "ascending");
}

#[test]
fn failed_guard_falls_through_to_same_pattern() {
    // Both arms have the identical pattern; only the guard separates
    // them.
    let n = 4;
    let arm = match n {
        x if x % 2 == 1 => "odd",
        x if x % 2 == 0 => "even",
        _ => "unreachable in practice",
    };
    assert_eq!(arm, "even");
}

#[test]
fn first_satisfied_guard_wins() {
    let n = 12;
    let arm = match n {
        x if x > 10 => "big",
        x if x > 100 => "huge",
        _ => "small",
    };
    // 12 satisfies both conditions; the earlier arm takes it.
    assert_eq!(arm, "big");
}

// =============================================================================
// Guards on Struct and Or-Patterns
// =============================================================================

#[test]
fn guard_on_a_struct_pattern() {
    let point = Point::new(3, 5);
    let arm = match point {
        Point { x, y } if x > y => "below the diagonal",
        Point { x, y } if x < y => "above the diagonal",
        _ => "on the diagonal",
    };
    assert_eq!(arm, "above the diagonal");
}

#[test]
fn guard_applies_to_every_or_alternative() {
    // The guard sits outside the alternation: whichever side matched,
    // the condition still has to hold.
    for (pair, expected) in [
        ((0, 7), "positive on an axis"),
        ((7, 0), "positive on an axis"),
        ((0, -7), "other"),
    ] {
        let arm = match pair {
            (0, n) | (n, 0) if n > 0 => "positive on an axis",
            _ => "other",
        };
        assert_eq!(arm, expected);
    }
}
