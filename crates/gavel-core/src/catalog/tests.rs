use crate::catalog::{CatalogQuery, Section, TypeCategory, TypeDef};

fn bidding_sections() -> Vec<Section> {
    vec![
        Section::new(
            "Bids",
            "bids",
            "Bidding operations and management",
            vec![
                TypeDef::new("Bid", TypeCategory::Object, "A bid record")
                    .with_fields(["id", "amount", "userId"]),
                TypeDef::new("BidStatus", TypeCategory::Enum, "Status enum"),
            ],
        ),
        Section::new(
            "Orders",
            "orders",
            "Orders, payments, and invoices",
            vec![TypeDef::new(
                "Order",
                TypeCategory::Object,
                "Order object",
            )],
        ),
    ]
}

#[test]
fn empty_query_is_identity() {
    let sections = bidding_sections();
    let view = CatalogQuery::new().execute(&sections);

    assert_eq!(view.sections(), sections.as_slice());
    assert_eq!(view.total(), 3);
}

#[test]
fn search_matches_name_or_description() {
    let sections = bidding_sections();

    // "bid" hits Bid and BidStatus by name; Orders is pruned.
    let view = CatalogQuery::new().search("bid").execute(&sections);
    assert_eq!(view.sections().len(), 1);
    assert_eq!(view.total(), 2);

    // Description-only hit.
    let view = CatalogQuery::new().search("invoices").execute(&sections);
    assert_eq!(view.total(), 1);
    assert_eq!(view.sections()[0].slug, "orders");
}

#[test]
fn search_and_category_filters_intersect() {
    let sections = bidding_sections();
    let view = CatalogQuery::new()
        .search("bid")
        .categories(vec![TypeCategory::Enum])
        .execute(&sections);

    // "Bid" matches the search but not the category; "Order" matches
    // neither. Only BidStatus survives.
    assert_eq!(view.total(), 1);
    assert_eq!(view.sections().len(), 1);
    assert_eq!(view.sections()[0].slug, "bids");
    assert_eq!(view.sections()[0].types[0].name, "BidStatus");
}

#[test]
fn empty_sections_are_pruned() {
    let sections = bidding_sections();
    let view = CatalogQuery::new()
        .categories(vec![TypeCategory::Enum])
        .execute(&sections);

    assert!(view.sections().iter().all(|section| !section.is_empty()));
    assert!(view.sections().iter().all(|section| section.slug != "orders"));
}

#[test]
fn unmatched_query_yields_empty_view() {
    let sections = bidding_sections();
    let view = CatalogQuery::new().search("webhook").execute(&sections);

    assert!(view.is_empty());
    assert_eq!(view.total(), 0);
}

#[test]
fn category_matching_is_exact_not_substring() {
    let sections = bidding_sections();

    // No category named "Obj" exists; selecting Connection matches nothing
    // here even though descriptions contain other words.
    let view = CatalogQuery::new()
        .categories(vec![TypeCategory::Connection])
        .execute(&sections);
    assert_eq!(view.total(), 0);
}

#[test]
fn section_new_stamps_owning_slug() {
    let sections = bidding_sections();
    for section in &sections {
        for type_def in &section.types {
            assert_eq!(type_def.section, section.slug);
        }
    }
}

#[test]
fn category_parses_case_insensitively() {
    assert_eq!("enum".parse::<TypeCategory>(), Ok(TypeCategory::Enum));
    assert_eq!("Object".parse::<TypeCategory>(), Ok(TypeCategory::Object));
    assert!("widget".parse::<TypeCategory>().is_err());
}
