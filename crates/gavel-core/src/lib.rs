//! Core contracts for the Gavel console: the scalar value model, the record
//! and column contracts, and the two view engines (table pipeline, catalog
//! filter) exported via the `prelude`.
#![warn(unreachable_pub)]

pub mod catalog;
pub mod column;
pub mod record;
pub mod table;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No renderers, sessions, or fixture helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        catalog::{ApiSource, Catalog, CatalogQuery, CatalogView, Section, TypeCategory, TypeDef},
        column::Column,
        record::{FieldPresence, Record},
        table::{OrderDirection, PageRequest, SortSpec, TableQuery, TableView},
        value::Value,
    };
}
