use crate::{
    record::Record,
    table::{OrderDirection, PageRequest, SortSpec, TableQuery, tests::TestRow},
    value::Value,
};
use proptest::prelude::*;

fn arb_row() -> impl Strategy<Value = TestRow> {
    (
        1u64..10_000,
        prop_oneof![
            Just("Zeta"),
            Just("Alpha"),
            Just("Beta"),
            Just("Mustang"),
            Just("Paddle"),
        ],
        prop::option::of(0u64..500),
    )
        .prop_map(|(id, name, amount)| TestRow { id, name, amount })
}

fn arb_rows() -> impl Strategy<Value = Vec<TestRow>> {
    prop::collection::vec(arb_row(), 0..60)
}

fn arb_search() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("eta".to_string()),
        Just("ZETA".to_string()),
        Just("9".to_string()),
        Just("no-match-ever".to_string()),
    ]
}

fn arb_sort() -> impl Strategy<Value = Option<SortSpec>> {
    let field = prop_oneof![Just("id"), Just("name"), Just("amount"), Just("bogus")];
    let direction = prop_oneof![Just(OrderDirection::Asc), Just(OrderDirection::Desc)];

    prop::option::of(
        (field, direction).prop_map(|(field, direction)| SortSpec::new(field, direction)),
    )
}

proptest! {
    #[test]
    fn pipeline_is_idempotent(
        rows in arb_rows(),
        search in arb_search(),
        sort in arb_sort(),
        number in 0u32..8,
        size in 0u32..12,
    ) {
        let query = TableQuery::new()
            .search(search)
            .sorted(sort)
            .page(PageRequest::new(number, size));

        let first = query.execute(&rows);
        let second = query.execute(&rows);

        prop_assert_eq!(
            first.rows().iter().map(|row| row.id).collect::<Vec<_>>(),
            second.rows().iter().map(|row| row.id).collect::<Vec<_>>()
        );
        prop_assert_eq!(first.filtered(), second.filtered());
        prop_assert_eq!(first.total_pages(), second.total_pages());
    }

    #[test]
    fn search_only_shrinks_the_result_set(rows in arb_rows(), search in arb_search()) {
        let unfiltered = TableQuery::new().execute(&rows).filtered();
        let filtered = TableQuery::new().search(search).execute(&rows).filtered();

        prop_assert!(filtered <= unfiltered);
    }

    #[test]
    fn concatenated_pages_reproduce_the_filtered_list(
        rows in arb_rows(),
        search in arb_search(),
        sort in arb_sort(),
        size in 1u32..12,
    ) {
        let base = TableQuery::new().search(search.clone()).sorted(sort.clone());

        // The whole list in one oversized page.
        let everything = base
            .clone()
            .page(PageRequest::new(1, u32::MAX))
            .execute(&rows);
        let expected: Vec<u64> = everything.rows().iter().map(|row| row.id).collect();

        let total_pages = base
            .clone()
            .page(PageRequest::first(size))
            .execute(&rows)
            .total_pages();

        let mut collected = Vec::new();
        for number in 1..=total_pages {
            let view = base.clone().page(PageRequest::new(number, size)).execute(&rows);
            collected.extend(view.rows().iter().map(|row| row.id));
        }

        prop_assert_eq!(collected, expected);
    }

    #[test]
    fn missing_sort_values_always_come_last(
        rows in arb_rows(),
        direction in prop_oneof![Just(OrderDirection::Asc), Just(OrderDirection::Desc)],
    ) {
        let query = TableQuery::new()
            .sorted(Some(SortSpec::new("amount", direction)))
            .page(PageRequest::new(1, u32::MAX));
        let view = query.execute(&rows);

        let mut seen_missing = false;
        for row in view.rows() {
            match row.field("amount") {
                crate::record::FieldPresence::Present(Value::Null) => seen_missing = true,
                _ => prop_assert!(!seen_missing, "defined value after a missing one"),
            }
        }
    }
}
