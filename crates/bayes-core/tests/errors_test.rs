use bayes_core::errors::*;

#[test]
fn validation_error_names_node_and_sum_to_four_decimals() {
    let err = ValidationError::DistributionSum {
        node: "Alarm".into(),
        key: "true,false".into(),
        sum: 0.912345,
    };
    let msg = err.to_string();
    assert!(msg.contains("Alarm"), "message should name the node: {msg}");
    assert!(msg.contains("0.9123"), "message should carry the sum: {msg}");
    assert!(!msg.contains("0.91234"));
}

#[test]
fn load_error_unknown_parent_carries_both_names() {
    let err = LoadError::UnknownParent {
        node: "B".into(),
        parent: "Ghost".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("B"));
    assert!(msg.contains("Ghost"));
}

#[test]
fn query_error_is_distinct_from_load_failures() {
    let err: BayesError = QueryError::EvidenceOnQueryNode { node: "A".into() }.into();
    assert!(!err.is_load_failure());
    assert!(matches!(
        err,
        BayesError::Query(QueryError::EvidenceOnQueryNode { .. })
    ));
}

// --- From impls ---

#[test]
fn load_error_converts_to_bayes_error() {
    let err: BayesError = LoadError::Malformed {
        reason: "expected value".into(),
    }
    .into();
    assert!(err.is_load_failure());
    assert!(err.to_string().contains("expected value"));
}

#[test]
fn validation_error_converts_to_bayes_error() {
    let err: BayesError = ValidationError::DistributionSum {
        node: "X".into(),
        key: "root".into(),
        sum: 1.5,
    }
    .into();
    assert!(err.is_load_failure());
    assert!(err.to_string().contains("1.5000"));
}
