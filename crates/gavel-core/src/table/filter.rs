use crate::{
    record::{FieldPresence, Record},
    value::Value,
};

/// Whole-record search: a record passes when any enumerable field's display
/// rendering contains the case-folded query. Field selection is not
/// configurable; every field in `R::FIELDS` is scanned.
pub(crate) fn apply<'a, R: Record>(records: &'a [R], search: &str) -> Vec<&'a R> {
    if search.is_empty() {
        return records.iter().collect();
    }

    let needle = Value::fold_ci(search);
    records
        .iter()
        .filter(|record| matches_record(*record, &needle))
        .collect()
}

fn matches_record<R: Record>(record: &R, needle: &str) -> bool {
    R::FIELDS.iter().any(|name| match record.field(name) {
        FieldPresence::Present(value) => value.display_contains_ci(needle),
        FieldPresence::Missing => false,
    })
}
