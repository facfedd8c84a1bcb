mod property;

use crate::{
    record::Record,
    table::{PageRequest, TableQuery},
    value::Value,
};

///
/// TestRow
///
/// Minimal record shape for pipeline tests: an id, a name, and a nullable
/// amount.
///

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestRow {
    pub(crate) id: u64,
    pub(crate) name: &'static str,
    pub(crate) amount: Option<u64>,
}

crate::record_fields! {
    TestRow, key = "id", {
        "id" => |row: &TestRow| row.id,
        "name" => |row: &TestRow| row.name,
        "amount" => |row: &TestRow| row.amount,
    }
}

pub(crate) fn sample_rows() -> Vec<TestRow> {
    vec![
        TestRow {
            id: 1,
            name: "Zeta",
            amount: Some(50),
        },
        TestRow {
            id: 2,
            name: "Alpha",
            amount: None,
        },
        TestRow {
            id: 3,
            name: "Beta",
            amount: Some(30),
        },
    ]
}

fn ids<R: Record>(rows: &[&R]) -> Vec<Value> {
    rows.iter().map(|row| row.key()).collect()
}

fn uints(ids: &[u64]) -> Vec<Value> {
    ids.iter().copied().map(Value::Uint).collect()
}

#[test]
fn ascending_sort_puts_null_amounts_last() {
    let rows = sample_rows();
    let view = TableQuery::new().order_by("amount").execute(&rows);

    assert_eq!(ids(view.rows()), uints(&[3, 1, 2]));
}

#[test]
fn descending_sort_keeps_null_amounts_last() {
    let rows = sample_rows();
    let view = TableQuery::new().order_by_desc("amount").execute(&rows);

    assert_eq!(ids(view.rows()), uints(&[1, 3, 2]));
}

#[test]
fn search_scans_every_field_as_text() {
    let rows = sample_rows();
    let view = TableQuery::new().search("eta").execute(&rows);

    // "Zeta" and "Beta" match; "Alpha" does not.
    assert_eq!(ids(view.rows()), uints(&[1, 3]));
    assert_eq!(view.filtered(), 2);

    // Numeric fields are scanned through their rendering too.
    let view = TableQuery::new().search("30").execute(&rows);
    assert_eq!(ids(view.rows()), uints(&[3]));
}

#[test]
fn search_is_case_insensitive() {
    let rows = sample_rows();
    let view = TableQuery::new().search("ZETA").execute(&rows);

    assert_eq!(ids(view.rows()), uints(&[1]));
}

#[test]
fn empty_search_passes_everything_in_insertion_order() {
    let rows = sample_rows();
    let view = TableQuery::new().execute(&rows);

    assert_eq!(ids(view.rows()), uints(&[1, 2, 3]));
    assert_eq!(view.filtered(), 3);
    assert_eq!(view.total_pages(), 1);
}

#[test]
fn unknown_sort_field_preserves_filtered_order() {
    let rows = sample_rows();
    let view = TableQuery::new().order_by("no_such_field").execute(&rows);

    assert_eq!(ids(view.rows()), uints(&[1, 2, 3]));
}

#[test]
fn filter_applies_before_sort() {
    let rows = sample_rows();
    let view = TableQuery::new()
        .search("eta")
        .order_by_desc("amount")
        .execute(&rows);

    assert_eq!(ids(view.rows()), uints(&[1, 3]));
}

fn numbered_rows(count: u64) -> Vec<TestRow> {
    (1..=count)
        .map(|id| TestRow {
            id,
            name: "Lot",
            amount: Some(id * 10),
        })
        .collect()
}

#[test]
fn twenty_five_rows_at_size_ten_make_three_pages() {
    let rows = numbered_rows(25);

    let page = |number| {
        TableQuery::new()
            .page(PageRequest::new(number, 10))
            .execute(&rows)
    };

    assert_eq!(page(1).total_pages(), 3);
    assert_eq!(page(1).rows().len(), 10);
    assert_eq!(page(2).rows().len(), 10);
    assert_eq!(page(3).rows().len(), 5);
    assert_eq!(page(3).showing_range(), Some((21, 25)));
}

#[test]
fn out_of_range_page_is_empty_not_an_error() {
    let rows = numbered_rows(25);
    let view = TableQuery::new()
        .page(PageRequest::new(9, 10))
        .execute(&rows);

    assert!(view.is_empty());
    assert_eq!(view.total_pages(), 3);
    assert_eq!(view.filtered(), 25);
    assert_eq!(view.showing_range(), None);
}

#[test]
fn no_matches_mean_zero_pages() {
    let rows = sample_rows();
    let view = TableQuery::new().search("mustang").execute(&rows);

    assert!(view.is_empty());
    assert_eq!(view.filtered(), 0);
    assert_eq!(view.total_pages(), 0);
}

#[test]
fn zero_page_inputs_are_clamped() {
    let rows = numbered_rows(3);
    let view = TableQuery::new()
        .page(PageRequest::new(0, 0))
        .execute(&rows);

    // Page 0 reads as page 1; size 0 reads as one row per page.
    assert_eq!(view.rows().len(), 1);
    assert_eq!(view.total_pages(), 3);
}

#[test]
fn equal_sort_keys_preserve_filtered_order() {
    let mut rows = numbered_rows(4);
    for row in &mut rows {
        row.amount = Some(100);
    }

    let view = TableQuery::new().order_by("amount").execute(&rows);
    assert_eq!(ids(view.rows()), uints(&[1, 2, 3, 4]));

    let view = TableQuery::new().order_by_desc("amount").execute(&rows);
    assert_eq!(ids(view.rows()), uints(&[1, 2, 3, 4]));
}
