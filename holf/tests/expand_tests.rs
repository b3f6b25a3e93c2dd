use holf::{expand, expand_until, map};
use std::cell::Cell;

#[test]
fn test_should_calculate_annual_taxes_on_amount() {
    let taxes: Vec<f64> = expand(10000.0, |i| i * 0.9).take(3).collect();

    assert_eq!(taxes, vec![10000.0, 9000.0, 8100.0]);
}

#[test]
fn test_should_calculate_the_square_of_each_integer() {
    let numbers = map(
        expand((1, 1), |&(n, _)| (n + 1, (n + 1) * (n + 1))).take(5),
        |(_, square)| square,
    );

    assert_eq!(numbers, vec![1, 4, 9, 16, 25]);
}

#[test]
fn test_first_element_is_init() {
    assert_eq!(expand("seed".to_string(), |s| s.clone() + "!").next(), Some("seed".to_string()));
}

#[test]
fn test_expand_is_lazy() {
    let calls = Cell::new(0);
    let mut seq = expand(0u64, |n| {
        calls.set(calls.get() + 1);
        n + 1
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(seq.nth(99), Some(99));
    assert_eq!(calls.get(), 99);
}

#[test]
fn test_expand_until_excludes_stop_value() {
    let collatz: Vec<u32> = expand_until(6, |&n| match n {
        1 => None,
        n if n % 2 == 0 => Some(n / 2),
        n => Some(3 * n + 1),
    })
    .collect();

    assert_eq!(collatz, vec![6, 3, 10, 5, 16, 8, 4, 2, 1]);
}

#[test]
fn test_expand_until_can_still_be_bounded() {
    let values: Vec<i32> = expand_until(1, |n| Some(n * 3)).take(4).collect();

    assert_eq!(values, vec![1, 3, 9, 27]);
}
