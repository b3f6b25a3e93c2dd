use holf::{collect, try_collect, ListOps};

#[test]
fn test_should_merge_arrays() {
    let data = vec![vec![1, 2], vec![3], vec![4, 5]];

    let result = data.collect(|a| a);

    assert_eq!(result, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_should_flatten_with_identity() {
    let result = collect(vec![vec![1, 2, 3], vec![4, 5], vec![6]], |a| a);

    assert_eq!(result, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_sub_sequences_may_be_empty_or_lazy() {
    let result = collect(0..4, |n| std::iter::repeat(n).take(n));

    assert_eq!(result, vec![1, 2, 2, 3, 3, 3]);
}

#[test]
fn test_words_of_lines() {
    let lines = ["to be", "or not", "", "to be"];

    let words = collect(lines, |line| line.split_whitespace());

    assert_eq!(words, vec!["to", "be", "or", "not", "to", "be"]);
}

#[test]
fn test_try_collect_stops_at_first_error() {
    let result: Result<Vec<char>, String> = try_collect(vec!["ab", "", "cd"], |s| {
        if s.is_empty() {
            Err("empty string".to_string())
        } else {
            Ok(s.chars())
        }
    });

    assert_eq!(result, Err("empty string".to_string()));
}
