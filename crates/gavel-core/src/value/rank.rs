use crate::value::Value;

/// Stable canonical rank for cross-variant ordering.
///
/// Ranks are contiguous and must not be reused. `Int` and `Uint` share a
/// rank: the numeric comparator handles that pair before rank is consulted.
pub(crate) const fn canonical_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Uint(_) => 2,
        Value::Date(_) => 3,
        Value::DateTime(_) => 4,
        Value::Text(_) => 5,
        Value::List(_) => 6,
        Value::Map(_) => 7,
    }
}
