use crate::seed::{
    MODULUS, SeedError, candidate, goal_for_date, initial_seed, lehmer_sequence, lehmer_step,
    numbers_for_date,
};

#[test]
fn test_initial_seed() {
    assert_eq!(initial_seed(2024, 1, 1), 1_202_401);
    assert_eq!(initial_seed(2023, 7, 18), 7_202_318);
}

#[test]
fn test_lehmer_step() {
    assert_eq!(lehmer_step(1), 16_807);
    assert_eq!(lehmer_step(16_807), 282_475_249);
    assert_eq!(lehmer_step(MODULUS), 0);
}

#[test]
fn test_lehmer_sequence_is_a_fold_of_steps() {
    let states: Vec<u64> = lehmer_sequence(1).take(3).collect();
    assert_eq!(states, vec![16_807, 282_475_249, 1_622_650_073]);
}

#[test]
fn test_candidate_range_and_sign() {
    assert_eq!(candidate(0), -1);
    assert_eq!(candidate(1), 2);
    assert_eq!(candidate(19), 20);
    assert_eq!(candidate(39), -20);
}

#[test]
fn test_numbers_for_new_year_2024() {
    assert_eq!(numbers_for_date(2024, 1, 1), Ok([-14, -3, 5, 12, 18]));
}

#[test]
fn test_numbers_for_date_are_deterministic() {
    let first = numbers_for_date(2023, 7, 18);
    assert_eq!(first, Ok([-15, -12, 8, 11, 17]));
    assert_eq!(first, numbers_for_date(2023, 7, 18));
}

#[test]
fn test_numbers_for_date_properties() {
    for month in 1..=12 {
        for day in [1, 9, 15, 28] {
            let result = numbers_for_date(2025, month, day);
            assert!(result.is_ok());
            if let Ok(numbers) = result {
                assert!(numbers.windows(2).all(|pair| pair[0] < pair[1]));
                assert!(numbers.iter().all(|n| *n != 0 && n.abs() <= 20));
            }
        }
    }
}

#[test]
fn test_degenerate_seed_is_reported() {
    // A multiple of the modulus keeps the generator at zero forever
    let result = numbers_for_date(0, 0, 0);
    assert!(matches!(result, Err(SeedError::Exhausted { seed: 0, .. })));
}

#[test]
fn test_goal_for_date_is_day() {
    assert_eq!(goal_for_date(2024, 1, 1), 1);
    assert_eq!(goal_for_date(2023, 7, 18), 18);
}
