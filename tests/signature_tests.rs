//! Integration tests for signatures and the arity they resolve to.

use curry_engine::engine::{Parameter, Signature, curry_signature};
use curry_engine::error::ArityError;
use rstest::rstest;

use curry_engine::engine::Parameter::{Optional, Required, Rest};

// =============================================================================
// Arity resolution
// =============================================================================

#[rstest]
#[case(vec![], 0, false)]
#[case(vec![Required, Required], 2, false)]
#[case(vec![Required, Optional], 1, false)]
#[case(vec![Optional, Optional], 0, false)]
#[case(vec![Rest], 0, true)]
#[case(vec![Required, Required, Optional, Rest], 2, true)]
fn test_arity_is_leading_required_count(
    #[case] parameters: Vec<Parameter>,
    #[case] arity: usize,
    #[case] variadic: bool,
) {
    let signature = Signature::new(parameters.clone()).unwrap();
    assert_eq!(signature.arity(), arity);
    assert_eq!(signature.is_variadic(), variadic);
    assert_eq!(signature.parameters(), parameters.as_slice());
}

#[rstest]
fn test_constructors_match_explicit_parameters() {
    assert_eq!(
        Signature::fixed(3),
        Signature::new([Required, Required, Required]).unwrap()
    );
    assert_eq!(
        Signature::variadic(1),
        Signature::new([Required, Rest]).unwrap()
    );
}

#[rstest]
#[case(vec![Rest, Required], ArityError::RestNotLast { position: 0 })]
#[case(vec![Required, Rest, Optional], ArityError::RestNotLast { position: 1 })]
#[case(vec![Rest, Rest], ArityError::MultipleRest { count: 2 })]
fn test_indeterminate_arity_is_rejected(
    #[case] parameters: Vec<Parameter>,
    #[case] expected: ArityError,
) {
    assert_eq!(Signature::new(parameters.clone()), Err(expected));
    assert_eq!(Signature::try_from(parameters), Err(expected));
}

#[rstest]
fn test_signature_converts_back_into_parameters() {
    let parameters: Vec<Parameter> = Signature::variadic(2).into();
    assert_eq!(parameters, vec![Required, Required, Rest]);
}

// =============================================================================
// Display
// =============================================================================

#[rstest]
#[case(Signature::fixed(0), "()")]
#[case(Signature::fixed(2), "(_, _)")]
#[case(Signature::variadic(0), "(..._)")]
#[case(Signature::new([Required, Optional, Rest]).unwrap(), "(_, _?, ..._)")]
fn test_display(#[case] signature: Signature, #[case] expected: &str) {
    assert_eq!(signature.to_string(), expected);
}

// =============================================================================
// Driving the engine
// =============================================================================

#[rstest]
fn test_optional_parameters_are_not_awaited() {
    let signature = Signature::new([Required, Optional]).unwrap();
    let curried = curry_signature(&signature, |values: Vec<i32>| values);

    assert_eq!(curried.arity(), 1);
    assert!(!curried.is_variadic());
    assert_eq!(curried.apply([5, 6]).complete(), Some(vec![5]));
}

#[rstest]
fn test_variadic_signature_forwards_every_argument() {
    let curried = curry_signature(&Signature::variadic(1), |values: Vec<i32>| values);
    assert!(curried.is_variadic());

    let step = curried.apply([]).partial().unwrap();
    assert_eq!(step.apply([1, 2, 3]).complete(), Some(vec![1, 2, 3]));
}
