use nwkcheck::newick::parse_str;
use nwkcheck::validation::{
    InvalidReason, SetupError, ValidationConfig, ValidationReport, ValidationStatus, run,
    valid_leaf_names, validate_submission, validate_tree,
};
use std::fs;
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new("tests").join("fixtures").join(name)
}

fn validate_fixture(name: &str) -> ValidationReport {
    validate_submission(
        Some(&fixture(name)),
        "FileEntity",
        &fixture("goldstandard.nwk"),
        &ValidationConfig::default(),
    )
    .unwrap()
}

// --- TESTS TREE VALIDATION RULES ---

#[test]
fn test_complete_tree_with_root_node() {
    let goldstandard = parse_str("((A,B),C);").unwrap();
    let prediction = parse_str("((A,B),C)root;").unwrap();
    assert!(validate_tree(&prediction, &goldstandard).is_empty());
}

#[test]
fn test_missing_leaf_mentions_cell_line_count() {
    let goldstandard = parse_str("((A,B),C);").unwrap();
    let prediction = parse_str("(A,B)root;").unwrap();
    let reasons = validate_tree(&prediction, &goldstandard);
    assert_eq!(reasons, vec![InvalidReason::LeafMismatch { num_cell_lines: 3 }]);
    assert!(reasons[0].to_string().contains("3 cell lines"));
}

#[test]
fn test_extra_leaves_allowed() {
    let goldstandard = parse_str("((A,B),C);").unwrap();
    let prediction = parse_str("((A,B),(C,D,E))root;").unwrap();
    assert!(valid_leaf_names(&prediction, &goldstandard));
    assert!(validate_tree(&prediction, &goldstandard).is_empty());
}

#[test]
fn test_missing_root() {
    let goldstandard = parse_str("((A,B),C);").unwrap();
    let prediction = parse_str("((A,B),C);").unwrap();
    assert_eq!(
        validate_tree(&prediction, &goldstandard),
        vec![InvalidReason::MissingRoot {
            root_label: "root".to_string()
        }]
    );
}

#[test]
fn test_missing_root_reported_even_with_wrong_leaves() {
    let goldstandard = parse_str("((A,B),C);").unwrap();
    let prediction = parse_str("(X,Y);").unwrap();
    let reasons = validate_tree(&prediction, &goldstandard);
    assert_eq!(reasons.len(), 1);
    assert!(matches!(reasons[0], InvalidReason::MissingRoot { .. }));
}

#[test]
fn test_root_node_and_root_taxon_rejected() {
    let goldstandard = parse_str("((A,B),C);").unwrap();
    // Leaves are all correct, dual root still wins
    let prediction = parse_str("(root,((A,B),C)root);").unwrap();
    assert_eq!(
        validate_tree(&prediction, &goldstandard),
        vec![InvalidReason::MultipleRoots {
            root_label: "root".to_string()
        }]
    );
}

#[test]
fn test_root_node_and_root_taxon_rejected_with_wrong_leaves() {
    let goldstandard = parse_str("((A,B),C);").unwrap();
    let prediction = parse_str("(root,(X,Y)root);").unwrap();
    assert_eq!(
        validate_tree(&prediction, &goldstandard),
        vec![InvalidReason::MultipleRoots {
            root_label: "root".to_string()
        }]
    );
}

#[test]
fn test_root_taxon_matched_ignoring_case() {
    let goldstandard = parse_str("((A,B),C);").unwrap();

    let prediction = parse_str("(Root,((A,B),C))root;").unwrap();
    assert_eq!(
        validate_tree(&prediction, &goldstandard),
        vec![InvalidReason::MultipleRoots {
            root_label: "root".to_string()
        }]
    );

    // Counts as root, but the expected 'root' leaf label is spelled differently
    let prediction = parse_str("(ROOT,((A,B),C));").unwrap();
    assert_eq!(
        validate_tree(&prediction, &goldstandard),
        vec![InvalidReason::LeafMismatch { num_cell_lines: 3 }]
    );
}

#[test]
fn test_underscores_match_spaces() {
    let goldstandard = parse_str("((A_B,C),D);").unwrap();
    let prediction = parse_str("(('A B',C),D)root;").unwrap();
    assert!(validate_tree(&prediction, &goldstandard).is_empty());

    let prediction = parse_str("(('A_B',C),D)root;").unwrap();
    assert_eq!(
        validate_tree(&prediction, &goldstandard),
        vec![InvalidReason::LeafMismatch { num_cell_lines: 3 }]
    );
}

#[test]
fn test_root_taxon_not_penalized() {
    let goldstandard = parse_str("((A,B),C);").unwrap();
    let prediction = parse_str("(root,((A,B),C));").unwrap();
    assert!(valid_leaf_names(&prediction, &goldstandard));
    assert!(validate_tree(&prediction, &goldstandard).is_empty());
}

#[test]
fn test_leaf_check_is_subset_check() {
    let goldstandard = parse_str("((A,B),(C,D));").unwrap();
    let cases = [
        ("((A,B),(C,D))root;", true),
        ("((A,B),(C,D,E))root;", true),
        ("((A,B),(D,C))root;", true),
        ("((A,B),C)root;", false),
        ("((a,B),(C,D))root;", false),
        ("((A,B),(C,'D '))root;", false),
    ];
    for (newick, expected) in cases {
        let prediction = parse_str(newick).unwrap();
        assert_eq!(
            valid_leaf_names(&prediction, &goldstandard),
            expected,
            "{newick}"
        );
    }
}

// --- TESTS SUBMISSION FILES ---

#[test]
fn test_valid_submission() {
    let report = validate_fixture("prediction_valid.nwk");
    assert_eq!(report.prediction_file_status, ValidationStatus::Validated);
    assert_eq!(report.prediction_file_errors, "");
    assert_eq!(report.round, 1);
}

#[test]
fn test_valid_submission_with_root_taxon() {
    let report = validate_fixture("prediction_root_taxon.nwk");
    assert!(report.is_valid());
}

#[test]
fn test_submission_missing_leaf() {
    let report = validate_fixture("prediction_missing_leaf.nwk");
    assert_eq!(report.prediction_file_status, ValidationStatus::Invalid);
    assert_eq!(
        report.prediction_file_errors,
        "Prediction tree must use the correct identifier names, and contain 6 cell lines."
    );
}

#[test]
fn test_submission_without_root() {
    let report = validate_fixture("prediction_no_root.nwk");
    assert_eq!(
        report.prediction_file_errors,
        "Prediction tree must contain 'root' node"
    );
}

#[test]
fn test_submission_with_two_roots() {
    let report = validate_fixture("prediction_two_roots.nwk");
    assert_eq!(
        report.prediction_file_errors,
        "Prediction tree must have a single 'root' node"
    );
}

#[test]
fn test_corrupt_submission() {
    let report = validate_fixture("prediction_corrupt.nwk");
    assert_eq!(report.prediction_file_status, ValidationStatus::Invalid);
    assert!(
        report
            .prediction_file_errors
            .starts_with("Prediction tree not a valid Newick tree format:")
    );
}

#[test]
fn test_unreadable_submission_is_verdict() {
    let report = validate_fixture("does_not_exist.nwk");
    assert_eq!(report.prediction_file_status, ValidationStatus::Invalid);
    assert!(
        report
            .prediction_file_errors
            .starts_with("Prediction tree not a valid Newick tree format: IO error")
    );
}

#[test]
fn test_no_submission_file() {
    let report = validate_submission(
        None,
        "folder",
        &fixture("goldstandard.nwk"),
        &ValidationConfig::default(),
    )
    .unwrap();
    assert_eq!(report.prediction_file_status, ValidationStatus::Invalid);
    assert_eq!(
        report.prediction_file_errors,
        "Expected FileEntity type but found folder"
    );
}

#[test]
fn test_no_submission_file_skips_goldstandard() {
    let report = validate_submission(
        None,
        "folder",
        &fixture("no_goldstandard.nwk"),
        &ValidationConfig::default(),
    )
    .unwrap();
    assert_eq!(
        report.prediction_file_errors,
        "Expected FileEntity type but found folder"
    );
}

#[test]
fn test_duplicate_taxa_in_submission() {
    let dir = tempfile::tempdir().unwrap();
    let submission = dir.path().join("duplicate.nwk");
    fs::write(&submission, "((HCC1954,hcc1954),MCF7)root;").unwrap();

    let report = validate_submission(
        Some(&submission),
        "FileEntity",
        &fixture("goldstandard.nwk"),
        &ValidationConfig::default(),
    )
    .unwrap();
    assert!(
        report
            .prediction_file_errors
            .contains("Multiple occurrences of taxon 'hcc1954'")
    );
}

#[test]
fn test_custom_root_label_and_preserved_underscores() {
    let dir = tempfile::tempdir().unwrap();
    let goldstandard = dir.path().join("goldstandard.nwk");
    let submission = dir.path().join("prediction.nwk");
    fs::write(&goldstandard, "((Cell_A,Cell_B),Cell_C);").unwrap();
    fs::write(&submission, "(('Cell A',Cell_B),Cell_C)origin;").unwrap();

    let config = ValidationConfig::default().with_root_label("origin");
    let report = validate_submission(Some(&submission), "FileEntity", &goldstandard, &config)
        .unwrap();
    assert!(report.is_valid(), "{}", report.prediction_file_errors);

    let report = validate_submission(
        Some(&submission),
        "FileEntity",
        &goldstandard,
        &ValidationConfig::default(),
    )
    .unwrap();
    assert_eq!(
        report.prediction_file_errors,
        "Prediction tree must contain 'root' node"
    );

    let config = config.with_preserve_underscores(true);
    let report = validate_submission(Some(&submission), "FileEntity", &goldstandard, &config)
        .unwrap();
    assert_eq!(
        report.prediction_file_errors,
        "Prediction tree must use the correct identifier names, and contain 3 cell lines."
    );
}

#[test]
fn test_missing_goldstandard_is_setup_error() {
    let result = validate_submission(
        Some(&fixture("prediction_valid.nwk")),
        "FileEntity",
        &fixture("no_goldstandard.nwk"),
        &ValidationConfig::default(),
    );
    assert!(matches!(result, Err(SetupError::Goldstandard { .. })));
}

#[test]
fn test_long_parse_error_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let submission = dir.path().join("long.nwk");
    // Garbage after the root label
    fs::write(&submission, format!("(A,B){};", "x ".repeat(400))).unwrap();

    let config = ValidationConfig::default().with_max_error_chars(60);
    let report = validate_submission(
        Some(&submission),
        "FileEntity",
        &fixture("goldstandard.nwk"),
        &config,
    )
    .unwrap();
    assert_eq!(report.prediction_file_errors.chars().count(), 60);
}

// --- TESTS RESULT FILE ---

#[test]
fn test_run_writes_json_record() {
    let dir = tempfile::tempdir().unwrap();
    let results = dir.path().join("results.json");

    let report = run(
        Some(&fixture("prediction_missing_leaf.nwk")),
        "FileEntity",
        &fixture("goldstandard.nwk"),
        &results,
        &ValidationConfig::default(),
    )
    .unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&results).unwrap()).unwrap();
    assert_eq!(written["prediction_file_status"], "INVALID");
    assert_eq!(written["round"], 1);
    assert_eq!(
        written["prediction_file_errors"],
        report.prediction_file_errors.as_str()
    );

    let parsed: ValidationReport = serde_json::from_value(written).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn test_run_with_custom_round() {
    let dir = tempfile::tempdir().unwrap();
    let results = dir.path().join("results.json");
    let config = ValidationConfig::default().with_round(2);

    run(
        Some(&fixture("prediction_valid.nwk")),
        "FileEntity",
        &fixture("goldstandard.nwk"),
        &results,
        &config,
    )
    .unwrap();

    assert_eq!(
        fs::read_to_string(&results).unwrap(),
        r#"{"prediction_file_errors":"","prediction_file_status":"VALIDATED","round":2}"#
    );
}

#[test]
fn test_run_unwritable_results() {
    let dir = tempfile::tempdir().unwrap();
    let results = dir.path().join("missing_dir").join("results.json");

    let result = run(
        None,
        "project",
        &fixture("goldstandard.nwk"),
        &results,
        &ValidationConfig::default(),
    );
    assert!(matches!(result, Err(SetupError::WriteResults { .. })));
}
