use holf::{map, try_map, ListOps};

#[test]
fn test_should_double_each_number_in_list() {
    let data = vec![1, 2, 3];

    let result = map(data, |i| i * 2);

    assert_eq!(result, vec![2, 4, 6]);
}

#[test]
fn test_should_return_floating_point_numbers() {
    let data = [1, 3, 5];

    let result = data[..].map(|i| i as f64 / 2.0);

    assert_eq!(result, vec![0.5, 1.5, 2.5]);
}

#[test]
fn test_should_return_strings() {
    let result = map([1, 3, 5], |i| i.to_string());

    assert_eq!(result, vec!["1", "3", "5"]);
}

#[test]
fn test_should_return_empty_list_for_empty_input() {
    let data: Vec<i32> = Vec::new();

    let result = map(data, |i| i);

    assert!(result.is_empty());
}

#[test]
fn test_map_over_borrowed_elements() {
    let words = vec!["fold".to_string(), "scan".to_string()];

    let lengths = map(&words, |w| w.len());

    assert_eq!(lengths, vec![4, 4]);
    assert_eq!(words.len(), 2);
}

#[test]
fn test_try_map_stops_at_first_error() {
    let mut seen = Vec::new();

    let result: Result<Vec<i32>, String> = try_map(vec![1, 2, -3, 4], |i| {
        seen.push(i);
        if i < 0 {
            Err(format!("negative: {}", i))
        } else {
            Ok(i * 10)
        }
    });

    assert_eq!(result, Err("negative: -3".to_string()));
    assert_eq!(seen, vec![1, 2, -3]);
}
