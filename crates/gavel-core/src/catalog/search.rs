use crate::{
    catalog::{Section, TypeCategory, TypeDef},
    value::Value,
};
use serde::Serialize;

///
/// CatalogQuery
///
/// Immutable view-state for one recomputation of the glossary: a free-text
/// query matched against names and descriptions, and a set of selected
/// category tags matched exactly. Both empty means identity.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CatalogQuery {
    search: String,
    categories: Vec<TypeCategory>,
}

impl CatalogQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search query.
    #[must_use]
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = query.into();
        self
    }

    /// Replace the selected category set.
    #[must_use]
    pub fn categories(mut self, categories: Vec<TypeCategory>) -> Self {
        self.categories = categories;
        self
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub fn selected_categories(&self) -> &[TypeCategory] {
        &self.categories
    }

    /// True when neither filter is active.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.search.is_empty() && self.categories.is_empty()
    }

    /// Filter the section tree.
    ///
    /// Each section is filtered independently; search matches name OR
    /// description, categories intersect with the search match, and
    /// sections left with no entries are dropped entirely.
    #[must_use]
    pub fn execute(&self, sections: &[Section]) -> CatalogView {
        if self.is_identity() {
            let total = sections.iter().map(Section::len).sum();
            return CatalogView {
                sections: sections.to_vec(),
                total,
            };
        }

        let needle = Value::fold_ci(&self.search);
        let mut filtered = Vec::new();
        let mut total = 0;

        for section in sections {
            let types: Vec<TypeDef> = section
                .types
                .iter()
                .filter(|type_def| self.matches(type_def, &needle))
                .cloned()
                .collect();

            if types.is_empty() {
                continue;
            }

            total += types.len();
            filtered.push(Section {
                name: section.name.clone(),
                slug: section.slug.clone(),
                description: section.description.clone(),
                types,
            });
        }

        CatalogView {
            sections: filtered,
            total,
        }
    }

    fn matches(&self, type_def: &TypeDef, needle: &str) -> bool {
        if !self.search.is_empty() {
            let name_hit = Value::fold_ci(&type_def.name).contains(needle);
            let description_hit = Value::fold_ci(&type_def.description).contains(needle);
            if !name_hit && !description_hit {
                return false;
            }
        }

        if !self.categories.is_empty() && !self.categories.contains(&type_def.category) {
            return false;
        }

        true
    }
}

///
/// CatalogView
///
/// Surviving sections (entries already filtered) plus the total entry
/// count across them. An empty view is a valid outcome, rendered as the
/// glossary's empty state.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CatalogView {
    sections: Vec<Section>,
    total: usize,
}

impl CatalogView {
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
