use crate::canonical::{CanonicalKey, Canonicalizer};
use crate::expression::Expression;

fn parse(text: &str) -> Expression {
    match text.parse::<Expression>() {
        Ok(expr) => expr,
        Err(e) => panic!("failed to parse '{}': {}", text, e),
    }
}

fn same_key(a: &str, b: &str) -> bool {
    CanonicalKey::of(&parse(a)) == CanonicalKey::of(&parse(b))
}

#[test]
fn test_commutative_operands_share_key() {
    assert!(same_key("3 + 5", "5 + 3"));
    assert!(same_key("(1 - 2) * 4", "4 * (1 - 2)"));
}

#[test]
fn test_associative_regroupings_share_key() {
    assert!(same_key("(1 + 2) + 3", "1 + (2 + 3)"));
    assert!(same_key("(2 * 3) * 4", "2 * (3 * 4)"));
    assert!(same_key("(5 - 4) + 3", "5 - (4 - 3)"));
    assert!(same_key("(6 / 3) * 2", "6 / (3 / 2)"));
}

#[test]
fn test_non_commutative_operands_differ() {
    assert!(!same_key("5 - 4", "4 - 5"));
    assert!(!same_key("6 / 3", "3 / 6"));
}

#[test]
fn test_different_operators_differ() {
    assert!(!same_key("2 + 2", "2 * 2"));
    assert!(!same_key("(1 + 2) * 3", "1 + (2 * 3)"));
}

#[test]
fn test_leaf_positions_do_not_matter() {
    let a = Expression::leaf(7, 0);
    let b = Expression::leaf(7, 3);
    assert_eq!(CanonicalKey::of(&a), CanonicalKey::of(&b));
}

#[test]
fn test_key_display() {
    let key = CanonicalKey::of(&parse("(3 - 1) * (1 / 2)"));
    assert_eq!(format!("{}", key), "prod(*1,*sum(+3,-1),/2)");
}

#[test]
fn test_canonicalizer_admits_each_key_once() {
    let mut canonicalizer = Canonicalizer::new();
    assert!(canonicalizer.is_empty());
    assert!(canonicalizer.admit(&parse("(1 + 2) + 3")));
    assert!(!canonicalizer.admit(&parse("3 + (2 + 1)")));
    assert!(canonicalizer.admit(&parse("(1 + 2) * 3")));
    assert_eq!(canonicalizer.len(), 2);
}
