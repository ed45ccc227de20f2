use crate::utils::{
    UtilsError, generate_combinations, parse_date, parse_numbers, validate_date, validate_goal,
    validate_numbers,
};

#[test]
fn test_generate_combinations_pairs() {
    let combinations = generate_combinations(4, 2);
    let expected = vec![
        vec![0, 1],
        vec![0, 2],
        vec![0, 3],
        vec![1, 2],
        vec![1, 3],
        vec![2, 3],
    ];
    assert_eq!(combinations, expected);
}

#[test]
fn test_generate_combinations_counts() {
    let counts: Vec<usize> = (1..=5).map(|k| generate_combinations(5, k).len()).collect();
    assert_eq!(counts, vec![5, 10, 10, 5, 1]);
    assert_eq!(generate_combinations(5, 5), vec![vec![0, 1, 2, 3, 4]]);
}

#[test]
fn test_generate_combinations_impossible() {
    assert_eq!(generate_combinations(3, 4), Vec::<Vec<usize>>::new());
}

#[test]
fn test_parse_numbers() {
    assert_eq!(parse_numbers("-8 5 8 18 19"), Ok([-8, 5, 8, 18, 19]));
    assert_eq!(parse_numbers("1,2, 3 ,4,5"), Ok([1, 2, 3, 4, 5]));
}

#[test]
fn test_parse_numbers_invalid() {
    assert_eq!(
        parse_numbers("1 2 3 4"),
        Err(UtilsError::WrongNumberCount {
            expected: 5,
            found: 4
        })
    );
    assert_eq!(
        parse_numbers("1 2 x 4 5"),
        Err(UtilsError::InvalidNumber("x".to_string()))
    );
    assert!(parse_numbers("1 2 3 4 5.5").is_err());
}

#[test]
fn test_parse_date() {
    assert_eq!(parse_date("2024-01-01"), Ok((2024, 1, 1)));
    assert!(parse_date("2024/01/01").is_err());
    assert!(parse_date("2024-01").is_err());
}

#[test]
fn test_validate_numbers() {
    assert!(validate_numbers(&[1, -2, 0, 1_000_000_000, -1_000_000_000]).is_ok());
    assert_eq!(
        validate_numbers(&[1, 2, 3, 1_000_000_001, 5]),
        Err(UtilsError::NumberOutOfRange {
            position: 3,
            value: 1_000_000_001,
            limit: 1_000_000_000
        })
    );
    assert!(validate_numbers(&[i64::MIN, 0, 0, 0, 0]).is_err());
}

#[test]
fn test_validate_goal() {
    assert!(validate_goal(-999).is_ok());
    assert!(validate_goal(i64::MAX).is_err());
}

#[test]
fn test_validate_date() {
    assert!(validate_date(2024, 2, 29).is_ok());
    assert!(validate_date(2023, 2, 29).is_err());
    assert!(validate_date(2024, 13, 1).is_err());
    assert!(validate_date(2024, 0, 1).is_err());
    assert!(validate_date(0, 1, 1).is_err());
}
