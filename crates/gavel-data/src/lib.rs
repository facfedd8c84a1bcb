//! Fixture data for the Gavel console: mock record sets for every list
//! view plus the Management and Client API type catalogs.
//!
//! Everything here is static demo content. Real deployments would swap
//! this crate for an API client; the console only sees `gavel-core`
//! contracts either way.
#![warn(unreachable_pub)]

pub mod catalog;
pub mod records;
