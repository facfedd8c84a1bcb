use crate::value::{Value, canonical_cmp};
use std::cmp::Ordering;
use time::macros::{date, datetime};

#[test]
fn numeric_comparison_crosses_sign_families() {
    assert_eq!(
        Value::Int(-1).cmp_numeric(&Value::Uint(0)),
        Some(Ordering::Less)
    );
    assert_eq!(
        Value::Uint(5).cmp_numeric(&Value::Int(5)),
        Some(Ordering::Equal)
    );
    assert_eq!(
        Value::Uint(u64::MAX).cmp_numeric(&Value::Int(i64::MAX)),
        Some(Ordering::Greater)
    );
    assert_eq!(Value::Text("5".into()).cmp_numeric(&Value::Int(5)), None);
}

#[test]
fn canonical_cmp_orders_same_variant_naturally() {
    assert_eq!(
        canonical_cmp(&Value::Text("alpha".into()), &Value::Text("beta".into())),
        Ordering::Less
    );
    assert_eq!(
        canonical_cmp(
            &Value::Date(date!(2024 - 03 - 15)),
            &Value::Date(date!(2024 - 03 - 22))
        ),
        Ordering::Less
    );
    assert_eq!(
        canonical_cmp(
            &Value::DateTime(datetime!(2024-03-17 14:32:15)),
            &Value::DateTime(datetime!(2024-03-17 12:00:00))
        ),
        Ordering::Greater
    );
}

#[test]
fn canonical_cmp_is_total_across_variants() {
    // Rank decides mixed-variant pairs; numbers before text.
    assert_eq!(
        canonical_cmp(&Value::Int(9), &Value::Text("1".into())),
        Ordering::Less
    );
    assert_eq!(canonical_cmp(&Value::Null, &Value::Null), Ordering::Equal);
    assert_eq!(
        canonical_cmp(&Value::Null, &Value::Bool(false)),
        Ordering::Less
    );
}

#[test]
fn display_renders_cells() {
    assert_eq!(Value::Null.to_string(), "");
    assert_eq!(Value::Uint(15_000).to_string(), "15000");
    assert_eq!(Value::Date(date!(2024 - 03 - 17)).to_string(), "2024-03-17");
    assert_eq!(
        Value::DateTime(datetime!(2024-03-17 14:32:15)).to_string(),
        "2024-03-17 14:32:15"
    );
    assert_eq!(
        Value::from_slice(&["BID_PLACED", "BID_OUTBID"]).to_string(),
        "BID_PLACED, BID_OUTBID"
    );
    assert_eq!(
        Value::from_entries(vec![("open", "2024-03-15"), ("close", "2024-03-22")]).to_string(),
        "open: 2024-03-15, close: 2024-03-22"
    );
}

#[test]
fn display_contains_is_case_insensitive() {
    let value = Value::Text("Impressionist Oil Painting".into());
    assert!(value.display_contains_ci("oil"));
    assert!(!value.display_contains_ci("sculpture"));

    // Null renders empty and matches nothing.
    assert!(!Value::Null.display_contains_ci("null"));
}

#[test]
fn option_conversion_maps_none_to_null() {
    assert_eq!(Value::from(None::<u64>), Value::Null);
    assert_eq!(Value::from(Some(30_u64)), Value::Uint(30));
}

#[test]
fn serializes_with_external_tags() {
    assert_eq!(
        serde_json::to_value(Value::Uint(15_000)).unwrap(),
        serde_json::json!({ "Uint": 15_000 })
    );
    assert_eq!(
        serde_json::to_value(Value::Null).unwrap(),
        serde_json::json!("Null")
    );
    assert_eq!(
        serde_json::to_value(Value::Text("open".into())).unwrap(),
        serde_json::json!({ "Text": "open" })
    );
}
