//! Passing a non-integer literal for arity produces a compile error.

#[allow(dead_code)]
fn add(first: i32, second: i32) -> i32 {
    first + second
}

fn main() {
    let _ = curry_engine::curry!(add, "two");
}
