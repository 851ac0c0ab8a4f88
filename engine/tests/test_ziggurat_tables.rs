//! Ziggurat table integrity
//!
//! The shipped tables must agree with the recurrence that defines them and
//! must never change bit patterns without the fingerprints below changing too.

use sfc_rand::distributions::table_gen::{
    fingerprint, generate_exponential_tables, generate_normal_tables, verify_exponential_tables,
    verify_normal_tables, TableParams,
};
use sfc_rand::distributions::ZIGGURAT_LAYERS;
use sfc_rand::{
    exponential_distribution_parameters, normal_distribution_parameters, RngError, TableError,
};

const NORMAL_FINGERPRINT: &str = "7e23928f6b44e24b45719f7601defb278dd56b9d2cb559948b6c8c4abe20e061";
const EXPONENTIAL_FINGERPRINT: &str =
    "9cf0240502119012a96d6e1314ea97067d631dbf143c8b707062e05556832c4b";

#[test]
fn test_normal_tables_match_recurrence() {
    assert_eq!(verify_normal_tables(), Ok(()));
}

#[test]
fn test_exponential_tables_match_recurrence() {
    assert_eq!(verify_exponential_tables(), Ok(()));
}

#[test]
fn test_shipped_table_fingerprints() {
    assert_eq!(normal_distribution_parameters().fingerprint(), NORMAL_FINGERPRINT);
    assert_eq!(
        exponential_distribution_parameters().fingerprint(),
        EXPONENTIAL_FINGERPRINT
    );
}

#[test]
fn test_parameter_shapes() {
    let normal = normal_distribution_parameters();
    assert_eq!(normal.tail, 3.654152885361009);
    assert_eq!(normal.k.len(), ZIGGURAT_LAYERS);
    assert_eq!(normal.w.len(), ZIGGURAT_LAYERS);
    assert_eq!(normal.f.len(), ZIGGURAT_LAYERS);

    let exp = exponential_distribution_parameters();
    assert_eq!(exp.tail, 7.69711747013105);
    // Top layer is as wide as the tail start
    assert_eq!(exp.w[ZIGGURAT_LAYERS - 1] * 9007199254740992.0, exp.tail);
    assert_eq!(normal.w[ZIGGURAT_LAYERS - 1] * 4503599627370496.0, normal.tail);
}

#[test]
fn test_regenerated_tables_are_close_not_identical() {
    let tables = generate_exponential_tables(&TableParams::EXPONENTIAL).unwrap();
    let shipped = exponential_distribution_parameters();
    // Shipped exponential tables predate this recurrence's rounding
    assert_ne!(tables.fingerprint(), EXPONENTIAL_FINGERPRINT);
    assert_eq!(tables.k.len(), shipped.k.len());
    assert_eq!(
        fingerprint(shipped.k, shipped.w, shipped.f),
        EXPONENTIAL_FINGERPRINT
    );
}

#[test]
fn test_invalid_parameters_are_rejected() {
    let params = TableParams {
        area: f64::NAN,
        ..TableParams::NORMAL
    };
    let err = generate_normal_tables(&params).unwrap_err();
    assert!(matches!(err, RngError::InvalidArgument(_)));

    let wrapped: TableError = err.into();
    assert!(wrapped.to_string().starts_with("Invalid table parameters"));
}

#[test]
fn test_parameters_serialize() {
    let json = serde_json::to_value(normal_distribution_parameters()).unwrap();
    assert_eq!(json["tail"], 3.654152885361009);
    assert_eq!(json["k"].as_array().unwrap().len(), ZIGGURAT_LAYERS);
    assert_eq!(json["k"][1], 0);
}
