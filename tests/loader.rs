//! Loader behavior against committed model fixtures: well-formed files
//! produce validated forests, malformed ones fail with the right error.

use std::path::PathBuf;

use ternary_forest::io::{ConvertError, LoadError};
use ternary_forest::read_forest;

fn model_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/test-cases/models")
        .join(name)
}

#[test]
fn loads_well_formed_models() {
    let forest = read_forest(model_path("single_split.json")).unwrap();
    assert_eq!(forest.n_trees(), 1);
    assert_eq!(forest.num_predictors(), 1);
    assert_eq!(forest.tree(0).n_nodes(), 4);

    let forest = read_forest(model_path("two_leaves.json")).unwrap();
    assert_eq!(forest.n_trees(), 2);
    assert_eq!(forest.num_predictors(), 2);
}

#[test]
fn empty_forest_loads_cleanly() {
    // Zero trees is a loader success; rejecting it is the evaluator's job.
    let forest = read_forest(model_path("empty_forest.json")).unwrap();
    assert_eq!(forest.n_trees(), 0);
    assert_eq!(forest.num_predictors(), 3);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = read_forest(model_path("no_such_model.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn wrong_shape_is_a_json_error() {
    let err = read_forest(model_path("not_a_model.json")).unwrap_err();
    assert!(matches!(err, LoadError::Json(_)));
}

#[test]
fn rejects_array_length_mismatch() {
    let err = read_forest(model_path("len_mismatch.json")).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Convert(ConvertError::ArrayLenMismatch {
            tree: 0,
            array: "leaf_values",
            len: 1,
            n_nodes: 2
        })
    ));
}

#[test]
fn rejects_child_index_out_of_range() {
    let err = read_forest(model_path("bad_child.json")).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Convert(ConvertError::InvalidStructure { .. })
    ));
}

#[test]
fn rejects_predictor_index_out_of_range() {
    let err = read_forest(model_path("bad_predictor.json")).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Convert(ConvertError::InvalidStructure { .. })
    ));
}

#[test]
fn rejects_cyclic_node_graph() {
    let err = read_forest(model_path("cyclic.json")).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Convert(ConvertError::InvalidStructure { .. })
    ));
}
