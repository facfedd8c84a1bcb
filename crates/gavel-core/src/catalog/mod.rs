//! Module: catalog
//! Responsibility: the API type-glossary data model and its search/filter
//! engine.
//! Does not own: catalog contents (fixtures) or glossary rendering.

mod search;

#[cfg(test)]
mod tests;

use derive_more::Display;
use serde::Serialize;
use std::str::FromStr;
use thiserror::Error as ThisError;

pub use search::{CatalogQuery, CatalogView};

///
/// TypeCategory
///
/// Closed set of GraphQL roles a documented type can play. Filtering is
/// exact tag membership, never substring.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
pub enum TypeCategory {
    Query,
    Mutation,
    Object,
    Input,
    Enum,
    Union,
    Connection,
    Edge,
    Interface,
    Scalar,
    Subscription,
}

impl TypeCategory {
    pub const ALL: [Self; 11] = [
        Self::Query,
        Self::Mutation,
        Self::Object,
        Self::Input,
        Self::Enum,
        Self::Union,
        Self::Connection,
        Self::Edge,
        Self::Interface,
        Self::Scalar,
        Self::Subscription,
    ];
}

///
/// ParseCategoryError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown type category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for TypeCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

///
/// ApiSource
///
/// Which of the platform's two GraphQL APIs a catalog documents.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
pub enum ApiSource {
    #[display("management")]
    Management,
    #[display("client")]
    Client,
}

///
/// TypeDef
///
/// One documented API type. `name` is assumed unique per catalog (keying
/// only, not enforced); `section` is the slug of the owning section and is
/// stamped by [`Section::new`].
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TypeDef {
    pub name: String,
    pub category: TypeCategory,
    pub description: String,
    pub fields: Vec<String>,
    pub section: String,
}

impl TypeDef {
    #[must_use]
    pub fn new(name: &str, category: TypeCategory, description: &str) -> Self {
        Self {
            name: name.to_string(),
            category,
            description: description.to_string(),
            fields: Vec::new(),
            section: String::new(),
        }
    }

    /// Attach the ordered field-name list shown in the detail view.
    #[must_use]
    pub fn with_fields<const N: usize>(mut self, fields: [&str; N]) -> Self {
        self.fields = fields.iter().map(ToString::to_string).collect();
        self
    }
}

///
/// Section
///
/// A named, sluggable grouping of type definitions. Statically defined;
/// the engine only reads and filters sections.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Section {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub types: Vec<TypeDef>,
}

impl Section {
    /// Create a section, stamping its slug onto every owned type.
    #[must_use]
    pub fn new(name: &str, slug: &str, description: &str, mut types: Vec<TypeDef>) -> Self {
        for type_def in &mut types {
            type_def.section = slug.to_string();
        }

        Self {
            name: name.to_string(),
            slug: slug.to_string(),
            description: description.to_string(),
            types,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

///
/// Catalog
///
/// The ordered section tree for one API source, with the count helpers the
/// console's summary widgets use.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Catalog {
    pub api: ApiSource,
    pub sections: Vec<Section>,
}

impl Catalog {
    #[must_use]
    pub const fn new(api: ApiSource, sections: Vec<Section>) -> Self {
        Self { api, sections }
    }

    /// Total number of documented types across all sections.
    #[must_use]
    pub fn total(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    /// Count of types in the given category.
    #[must_use]
    pub fn count_by_category(&self, category: TypeCategory) -> usize {
        self.sections
            .iter()
            .flat_map(|section| &section.types)
            .filter(|type_def| type_def.category == category)
            .count()
    }

    /// Look up one section by slug.
    #[must_use]
    pub fn section(&self, slug: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.slug == slug)
    }

    /// Look up one type by name, first match across sections.
    #[must_use]
    pub fn type_def(&self, name: &str) -> Option<&TypeDef> {
        self.sections
            .iter()
            .flat_map(|section| &section.types)
            .find(|type_def| type_def.name.eq_ignore_ascii_case(name))
    }
}
