use crate::enumerate::errors::EnumerateError;
use crate::enumerate::generator::ExpressionGenerator;
use crate::expression::Expression;

/// Tree count recurrence: one tree per single element, and every split
/// contributes left-count * right-count * 4 operator choices.
fn expected_count(len: usize) -> usize {
    if len == 1 {
        return 1;
    }
    (1..len)
        .map(|left_len| expected_count(left_len) * expected_count(len - left_len) * 4)
        .sum()
}

fn render_all(numbers: &[i64]) -> Vec<String> {
    let mut generator = ExpressionGenerator::new();
    let trees = generator.generate(numbers, 0, numbers.len() - 1);
    assert!(trees.is_ok());
    trees
        .unwrap_or_default()
        .iter()
        .map(|tree| tree.to_string())
        .collect()
}

#[test]
fn test_single_element_yields_one_literal() {
    let mut generator = ExpressionGenerator::new();
    let trees = generator.generate(&[7], 0, 0);
    assert!(trees.is_ok());
    if let Ok(trees) = trees {
        assert_eq!(trees.len(), 1);
        assert!(matches!(*trees[0], Expression::Number(7)));
    }
}

#[test]
fn test_two_elements_yield_four_trees_in_operator_order() {
    let rendered = render_all(&[1, 2]);
    assert_eq!(rendered, vec!["(1+2)", "(1-2)", "(1*2)", "(1/2)"]);
}

#[test]
fn test_three_element_enumeration_order() {
    let rendered = render_all(&[1, 2, 3]);
    assert_eq!(rendered.len(), 32);

    // Split after the first element: left is the literal 1, right trees of
    // [2,3] are iterated with operators innermost.
    assert_eq!(
        &rendered[..8],
        &[
            "(1+(2+3))",
            "(1-(2+3))",
            "(1*(2+3))",
            "(1/(2+3))",
            "(1+(2-3))",
            "(1-(2-3))",
            "(1*(2-3))",
            "(1/(2-3))",
        ]
    );

    // Split after the second element starts at tree 16.
    assert_eq!(
        &rendered[16..20],
        &["((1+2)+3)", "((1+2)-3)", "((1+2)*3)", "((1+2)/3)"]
    );
}

#[test]
fn test_tree_counts_match_recurrence() {
    for len in 1..=5 {
        let numbers: Vec<i64> = (1..=len as i64).collect();
        let mut generator = ExpressionGenerator::new();
        let trees = generator.generate(&numbers, 0, len - 1);
        assert!(trees.is_ok());
        if let Ok(trees) = trees {
            assert_eq!(trees.len(), expected_count(len), "length {}", len);
        }
    }
}

#[test]
fn test_generation_is_deterministic() {
    let first = render_all(&[3, 1, 4, 1]);
    let second = render_all(&[3, 1, 4, 1]);
    assert_eq!(first, second);
}

#[test]
fn test_invalid_range_start_after_end() {
    let mut generator = ExpressionGenerator::new();
    let result = generator.generate(&[1, 2], 1, 0);
    assert_eq!(
        result,
        Err(EnumerateError::InvalidRange {
            start: 1,
            end: 0,
            length: 2,
        })
    );
}

#[test]
fn test_invalid_range_end_out_of_bounds() {
    let mut generator = ExpressionGenerator::new();
    let result = generator.generate(&[1, 2], 0, 2);
    assert_eq!(
        result,
        Err(EnumerateError::InvalidRange {
            start: 0,
            end: 2,
            length: 2,
        })
    );
}

#[test]
fn test_empty_sequence_is_an_invalid_range() {
    let mut generator = ExpressionGenerator::new();
    let result = generator.generate(&[], 0, 0);
    assert!(matches!(
        result,
        Err(EnumerateError::InvalidRange { length: 0, .. })
    ));
}

#[test]
fn test_node_accounting_counts_literals_and_binaries() {
    let mut generator = ExpressionGenerator::new();
    let trees = generator.generate(&[1, 2], 0, 1);
    assert!(trees.is_ok());
    // Two literals plus four binary combinations.
    assert_eq!(generator.nodes_created(), 6);
}

#[test]
fn test_node_budget_exceeded() {
    let mut generator = ExpressionGenerator::with_node_budget(5);
    let result = generator.generate(&[1, 2, 3], 0, 2);
    assert_eq!(result, Err(EnumerateError::BudgetExceeded { limit: 5 }));
}

#[test]
fn test_node_budget_large_enough_succeeds() {
    let mut generator = ExpressionGenerator::with_node_budget(10_000);
    let result = generator.generate(&[1, 2, 3], 0, 2);
    assert!(result.is_ok());
}
