use bayes_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = BayesConfig::from_toml("").unwrap();

    // Validation defaults
    assert_eq!(config.validation.tolerance, 1e-4);
    assert_eq!(config.validation.ordering, OrderingPolicy::Declared);

    // Inference defaults
    assert!(config.inference.parallel_marginals);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[validation]
ordering = "sorted"

[observability]
log_level = "debug"
"#;
    let config = BayesConfig::from_toml(toml).unwrap();
    assert_eq!(config.validation.ordering, OrderingPolicy::Sorted);
    // Non-overridden fields keep defaults
    assert_eq!(config.validation.tolerance, 1e-4);
    assert_eq!(config.observability.log_level, "debug");
    assert!(config.observability.json);
}

#[test]
fn config_rejects_unknown_ordering_policy() {
    let err = BayesConfig::from_toml("[validation]\nordering = \"random\"\n").unwrap_err();
    assert!(matches!(err, bayes_core::BayesError::ConfigError(_)));
}

#[test]
fn config_serde_roundtrip() {
    let config = BayesConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = BayesConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.validation.tolerance, config.validation.tolerance);
    assert_eq!(roundtripped.validation.ordering, config.validation.ordering);
}

#[test]
fn config_from_missing_path_is_config_error() {
    let err = BayesConfig::from_path("/definitely/not/here/bayes.toml").unwrap_err();
    assert!(err.to_string().contains("bayes.toml"));
}
