//! The two API type catalogs the glossary browses. Contents are static
//! documentation data; the engine in `gavel-core::catalog` does the
//! filtering.

mod client;
mod management;

pub use client::client_catalog;
pub use management::management_catalog;

use gavel_core::catalog::{TypeCategory, TypeDef};

// Shorthand constructor used by both catalog modules.
fn t(name: &str, category: TypeCategory, description: &str) -> TypeDef {
    TypeDef::new(name, category, description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gavel_core::catalog::Catalog;
    use std::collections::BTreeSet;

    fn assert_catalog_invariants(catalog: &Catalog) {
        let mut slugs = BTreeSet::new();
        let mut names = BTreeSet::new();

        for section in &catalog.sections {
            assert!(!section.is_empty(), "section {} is empty", section.slug);
            assert!(slugs.insert(section.slug.clone()), "duplicate slug");

            for type_def in &section.types {
                assert_eq!(type_def.section, section.slug);
                assert!(
                    names.insert(type_def.name.clone()),
                    "duplicate type name {} in catalog",
                    type_def.name
                );
                assert!(!type_def.description.is_empty());
            }
        }

        assert_eq!(
            catalog.total(),
            catalog.sections.iter().map(|s| s.types.len()).sum::<usize>()
        );
    }

    #[test]
    fn management_catalog_is_well_formed() {
        let catalog = management_catalog();
        assert_catalog_invariants(&catalog);
        assert_eq!(catalog.sections.len(), 12);
    }

    #[test]
    fn client_catalog_is_well_formed() {
        let catalog = client_catalog();
        assert_catalog_invariants(&catalog);

        // The client API is where subscriptions live.
        assert!(catalog.count_by_category(TypeCategory::Subscription) > 0);
    }

    #[test]
    fn lookups_find_known_types() {
        let catalog = management_catalog();
        let bid = catalog.type_def("Bid").expect("Bid should be documented");
        assert_eq!(bid.section, "bids");
        assert!(catalog.section("orders").is_some());
        assert!(catalog.type_def("NoSuchType").is_none());
    }
}
