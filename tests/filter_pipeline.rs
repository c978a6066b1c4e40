//! Filter Pipeline Tests
//!
//! End-to-end behavior of validate → apply → reconcile over fixed pages:
//! - Missing questions never pass a filter
//! - Empty filter sets are the identity
//! - Equals / not-equals are complements
//! - Ordering comparators reject null
//! - Counts are adjusted only by this page's removals

use filtered_responses::filter::{
    apply, validate, validate_str, Comparator, FilterClause, FilterError, FilterSet, FilterValue,
    RawFilterParam,
};
use filtered_responses::pipeline::filter_page;
use filtered_responses::submissions::{PageLimit, Submission, SubmissionComponent, SubmissionsPage};
use serde_json::{json, Value};

// =============================================================================
// Helper Functions
// =============================================================================

const CANONICAL: &str = r#"[{"id":"q1","condition":"equals","value":"yes"}]"#;

fn submission(answers: &[(&str, Value)]) -> Submission {
    Submission::new(
        answers
            .iter()
            .map(|(id, value)| SubmissionComponent::new(*id, value.clone()))
            .collect(),
    )
}

fn page(responses: Vec<Submission>, total: u64, page_count: u64) -> SubmissionsPage {
    SubmissionsPage {
        responses,
        total_responses: total,
        page_count,
    }
}

fn limit(n: u64) -> PageLimit {
    PageLimit::new(n).unwrap()
}

/// Ten submissions, three answering "yes" to q1.
fn ten_with_three_yes() -> SubmissionsPage {
    let responses = (0..10)
        .map(|i| {
            let answer = if i % 3 == 0 && i < 9 { "yes" } else { "no" };
            submission(&[("q1", json!(answer)), ("q2", json!(i))])
        })
        .collect();
    page(responses, 100, 10)
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_three_of_ten_match() {
    let filtered = filter_page(&RawFilterParam::from(CANONICAL), ten_with_three_yes(), limit(10))
        .unwrap();

    assert_eq!(filtered.responses.len(), 3);
    assert_eq!(filtered.total_responses, 93);
    assert_eq!(filtered.page_count, 10);
}

#[test]
fn test_absent_question_empties_page() {
    let raw = RawFilterParam::from(r#"[{"id":"nope","condition":"does_not_equal","value":"x"}]"#);
    let filtered = filter_page(&raw, ten_with_three_yes(), limit(10)).unwrap();

    assert!(filtered.responses.is_empty());
    assert_eq!(filtered.total_responses, 100 - 10);
    assert_eq!(filtered.page_count, 9);
}

#[test]
fn test_range_on_one_question() {
    let raw = RawFilterParam::from(
        r#"[{"id":"q2","condition":"greater_than","value":5},
            {"id":"q2","condition":"less_than","value":10}]"#,
    );
    let filtered = filter_page(&raw, ten_with_three_yes(), limit(10)).unwrap();

    let kept: Vec<_> = filtered
        .responses
        .iter()
        .map(|s| s.questions[1].value.clone())
        .collect();
    assert_eq!(kept, vec![json!(6), json!(7), json!(8), json!(9)]);
}

#[test]
fn test_submission_fields_carried_through() {
    let mut tagged = submission(&[("q1", json!("yes"))]);
    tagged
        .rest
        .insert("submissionId".to_string(), json!("sub-42"));
    tagged.rest.insert(
        "calculations".to_string(),
        json!([{"id": "score", "name": "Score", "value": 9}]),
    );

    let filtered = filter_page(
        &RawFilterParam::from(CANONICAL),
        page(vec![tagged.clone()], 1, 1),
        PageLimit::default(),
    )
    .unwrap();

    assert_eq!(filtered.responses, vec![tagged]);
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_no_match_misses_a_referenced_question() {
    let responses = vec![
        submission(&[("a", json!("x")), ("b", json!(1))]),
        submission(&[("a", json!("x"))]),
        submission(&[("b", json!(1))]),
        submission(&[]),
    ];
    let filters = FilterSet::new()
        .and(FilterClause::new("a", Comparator::NotEqual, "zzz"))
        .and(FilterClause::new("b", Comparator::NotEqual, 99));

    let filtered = apply(page(responses, 4, 1), &filters, PageLimit::default());

    assert_eq!(filtered.responses.len(), 1);
    for s in &filtered.responses {
        assert!(s.answers("a").next().is_some());
        assert!(s.answers("b").next().is_some());
    }
}

#[test]
fn test_empty_filter_set_is_identity() {
    let original = ten_with_three_yes();
    let filtered = apply(original.clone(), &FilterSet::new(), limit(10));

    assert_eq!(filtered.responses, original.responses);
    assert_eq!(filtered.total_responses, original.total_responses);
    assert_eq!(filtered.page_count, original.page_count);
}

#[test]
fn test_equals_and_not_equal_are_complements() {
    let values = [json!("yes"), json!("no"), json!(3), json!(3.5), json!("3")];
    let targets = [FilterValue::from("yes"), FilterValue::from(3), FilterValue::from("3")];

    for value in &values {
        for target in &targets {
            assert_ne!(
                Comparator::Equals.evaluate(value, target),
                Comparator::NotEqual.evaluate(value, target),
                "value {} target {:?}",
                value,
                target
            );
        }
    }
}

#[test]
fn test_ordering_false_on_null() {
    for target in [FilterValue::from(1), FilterValue::from("a")] {
        assert!(!Comparator::GreaterThan.evaluate(&Value::Null, &target));
        assert!(!Comparator::LessThan.evaluate(&Value::Null, &target));
    }

    let filters = FilterSet::new().and(FilterClause::less_than("q", 100));
    let filtered = apply(
        page(vec![submission(&[("q", Value::Null)])], 1, 1),
        &filters,
        PageLimit::default(),
    );
    assert!(filtered.responses.is_empty());
}

#[test]
fn test_no_cross_type_coercion() {
    let filters = FilterSet::new().and(FilterClause::greater_than("q", 5));
    let filtered = apply(
        page(vec![submission(&[("q", json!("10"))])], 1, 1),
        &filters,
        PageLimit::default(),
    );
    assert!(filtered.responses.is_empty());
}

#[test]
fn test_pipeline_is_deterministic() {
    let raw = RawFilterParam::from(CANONICAL);
    let first = filter_page(&raw, ten_with_three_yes(), limit(10)).unwrap();
    let second = filter_page(&raw, ten_with_three_yes(), limit(10)).unwrap();

    assert_eq!(first, second);
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_validation_rejections() {
    let rejected = [
        r#"[{"id":"q1","condition":"contains","value":"yes"}]"#,
        r#"[{"id":"","condition":"equals","value":"yes"}]"#,
        r#"[{"id":"q1","condition":"equals","value":0}]"#,
        r#"[{"id":"q1","condition":"equals","value":""}]"#,
        r#"[{"id":"q1","condition":"equals","value":null}]"#,
        r#"[{"id":"q1","condition":"equals"}]"#,
    ];

    for text in rejected {
        assert!(
            matches!(validate_str(text), Err(FilterError::InvalidClause { .. })),
            "accepted {}",
            text
        );
    }
}

#[test]
fn test_canonical_validation_is_idempotent() {
    let first = validate_str(CANONICAL).unwrap();
    let encoded = serde_json::to_string(&first).unwrap();
    let second = validate_str(&encoded).unwrap();

    assert_eq!(first, second);
    assert_eq!(encoded, CANONICAL);
}

#[test]
fn test_duplicate_parameter_first_wins() {
    let raw = RawFilterParam::Repeated(vec![
        CANONICAL.to_string(),
        r#"[{"id":"q1","condition":"bogus","value":"yes"}]"#.to_string(),
    ]);

    assert_eq!(validate(&raw).unwrap().len(), 1);
}
