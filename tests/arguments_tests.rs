//! Integration tests for the accumulated argument list.
//!
//! `Arguments` is persistent: appending never changes the list it was
//! appended to, and sibling lists share their common prefix.

use curry_engine::engine::Arguments;
use rstest::rstest;
use std::sync::Arc;
use std::thread;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_default_is_empty() {
    let arguments: Arguments<i32> = Arguments::default();
    assert!(arguments.is_empty());
    assert_eq!(arguments, Arguments::new());
    assert_eq!(arguments.iter().next(), None);
}

#[rstest]
fn test_from_iterator_keeps_order() {
    let arguments: Arguments<char> = "curry".chars().collect();
    assert_eq!(arguments.len(), 5);
    assert_eq!(arguments.to_vec(), vec!['c', 'u', 'r', 'r', 'y']);
}

#[rstest]
fn test_empty_batch_does_not_grow_the_list() {
    let arguments = Arguments::new().concat([1, 2]);
    let unchanged = arguments.concat(std::iter::empty());
    assert_eq!(unchanged, arguments);
    assert_eq!(unchanged.len(), 2);
}

// =============================================================================
// Equality and iteration
// =============================================================================

#[rstest]
#[case(vec![vec![1, 2, 3]])]
#[case(vec![vec![1], vec![2], vec![3]])]
#[case(vec![vec![1, 2], vec![], vec![3]])]
fn test_equality_ignores_batch_boundaries(#[case] batches: Vec<Vec<i32>>) {
    let batched = batches
        .into_iter()
        .fold(Arguments::new(), |arguments, batch| arguments.concat(batch));
    let collected: Arguments<i32> = [1, 2, 3].into_iter().collect();
    assert_eq!(batched, collected);
}

#[rstest]
fn test_lists_with_different_lengths_are_not_equal() {
    let short = Arguments::new().concat([1, 2]);
    let long = short.concat([3]);
    assert_ne!(short, long);
}

#[rstest]
fn test_for_loop_over_reference() {
    let arguments = Arguments::new().concat([1, 2]).concat([3]);
    let mut total = 0;
    for value in &arguments {
        total += value;
    }
    assert_eq!(total, 6);
}

#[rstest]
fn test_iterator_reports_exact_length() {
    let arguments = Arguments::new().concat([1, 2]).concat([3, 4, 5]);
    let mut iterator = arguments.iter();
    assert_eq!(iterator.len(), 5);
    iterator.next();
    iterator.next();
    assert_eq!(iterator.len(), 3);
    assert_eq!(iterator.by_ref().count(), 3);
    assert_eq!(iterator.next(), None);
}

#[rstest]
#[case(0, vec![])]
#[case(2, vec![1, 2])]
#[case(4, vec![1, 2, 3, 4])]
#[case(10, vec![1, 2, 3, 4])]
fn test_first_n_crosses_segments(#[case] count: usize, #[case] expected: Vec<i32>) {
    let arguments = Arguments::new().concat([1]).concat([2, 3]).concat([4]);
    assert_eq!(arguments.first_n(count), expected);
}

#[rstest]
fn test_debug_lists_values() {
    let arguments = Arguments::new().concat(["a"]).concat(["b"]);
    assert_eq!(format!("{arguments:?}"), r#"["a", "b"]"#);
}

// =============================================================================
// Sharing
// =============================================================================

#[rstest]
fn test_siblings_share_prefix_without_observing_each_other() {
    let prefix = Arguments::new().concat([String::from("shared")]);
    let left = prefix.concat([String::from("left")]);
    let right = prefix.concat([String::from("right")]);

    assert_eq!(prefix.to_vec(), vec!["shared"]);
    assert_eq!(left.to_vec(), vec!["shared", "left"]);
    assert_eq!(right.to_vec(), vec!["shared", "right"]);
}

#[rstest]
fn test_clone_shares_values() {
    let token = Arc::new(());
    let arguments = Arguments::new().concat([Arc::clone(&token)]);
    let copies: Vec<_> = (0..10).map(|_| arguments.clone()).collect();

    assert_eq!(Arc::strong_count(&token), 2);
    drop(copies);
    drop(arguments);
    assert_eq!(Arc::strong_count(&token), 1);
}

// =============================================================================
// Dropping long lists
// =============================================================================

#[rstest]
fn test_long_single_value_chain_drops() {
    let token = Arc::new(());
    let mut arguments = Arguments::new();
    for _ in 0..200_000 {
        arguments = arguments.concat([Arc::clone(&token)]);
    }
    assert_eq!(arguments.len(), 200_000);

    drop(arguments);
    assert_eq!(Arc::strong_count(&token), 1);
}

#[rstest]
fn test_long_chain_dropped_from_sibling_threads_is_released() {
    let token = Arc::new(());
    let mut base = Arguments::new();
    for _ in 0..200_000 {
        base = base.concat([Arc::clone(&token)]);
    }

    let branches: Vec<_> = (0..4).map(|_| base.concat([Arc::clone(&token)])).collect();
    drop(base);

    thread::scope(|scope| {
        for branch in branches {
            scope.spawn(move || drop(branch));
        }
    });

    assert_eq!(Arc::strong_count(&token), 1);
}
