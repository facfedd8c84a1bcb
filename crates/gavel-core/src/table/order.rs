use crate::{
    record::{FieldPresence, Record},
    table::{OrderDirection, SortSpec},
    value::{Value, canonical_cmp},
};
use std::cmp::Ordering;

///
/// OrderSlot
///
/// One sort field resolved on one record. `Missing` folds together unknown
/// fields and present-but-null values: both sort after every defined value
/// in both directions, keeping missing data out of the way at the bottom.
///

#[derive(Clone, Debug, Eq, PartialEq)]
enum OrderSlot {
    Missing,
    Present(Value),
}

fn order_slot<R: Record>(record: &R, field: &str) -> OrderSlot {
    match record.field(field) {
        FieldPresence::Present(Value::Null) | FieldPresence::Missing => OrderSlot::Missing,
        FieldPresence::Present(value) => OrderSlot::Present(value),
    }
}

/// Stable sort under the configured spec. Equal sort keys preserve the
/// filtered order, which also makes an unknown sort field a no-op rather
/// than an error.
pub(crate) fn apply<R: Record>(rows: &mut [&R], sort: &SortSpec) {
    rows.sort_by(|left, right| compare_records(*left, *right, sort));
}

// Compare the configured sort field across two records. Direction applies
// only to the defined-vs-defined branch; the missing-last rule is
// direction-independent.
fn compare_records<R: Record>(left: &R, right: &R, sort: &SortSpec) -> Ordering {
    let left_slot = order_slot(left, &sort.field);
    let right_slot = order_slot(right, &sort.field);

    match (left_slot, right_slot) {
        (OrderSlot::Missing, OrderSlot::Missing) => Ordering::Equal,
        (OrderSlot::Missing, OrderSlot::Present(_)) => Ordering::Greater,
        (OrderSlot::Present(_), OrderSlot::Missing) => Ordering::Less,
        (OrderSlot::Present(left_value), OrderSlot::Present(right_value)) => {
            apply_order_direction(canonical_cmp(&left_value, &right_value), sort.direction)
        }
    }
}

// Apply configured order direction to one base slot ordering.
const fn apply_order_direction(ordering: Ordering, direction: OrderDirection) -> Ordering {
    match direction {
        OrderDirection::Asc => ordering,
        OrderDirection::Desc => ordering.reverse(),
    }
}
