use crate::add;

use cvlr::prelude::*;

/// Verifies that `add` computes the sum of two integers that do not overflow.
#[rule]
pub fn rule_add_is_correct() {
    let a: i32 = nondet();
    let b: i32 = nondet();
    cvlr_assume!(a.checked_add(b).is_some());
    let result = add(a, b);
    cvlr_assert_eq!(result, a + b);
}

#[rule]
pub fn rule_add_is_commutative() {
    let a: i32 = nondet();
    let b: i32 = nondet();
    cvlr_assume!(a.checked_add(b).is_some());
    cvlr_assert_eq!(add(a, b), add(b, a));
}

/// Zero is a left and right identity.
#[rule]
pub fn rule_add_has_zero_identity() {
    let a: i32 = nondet();
    cvlr_assert_eq!(add(a, 0), a);
    cvlr_assert_eq!(add(0, a), a);
}
