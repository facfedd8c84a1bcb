use gavel_core::{column::Column, record_fields};
use time::{Date, macros::date};

///
/// ApiKey
///

#[derive(Clone, Debug)]
pub struct ApiKey {
    pub id: &'static str,
    pub name: &'static str,
    pub prefix: &'static str,
    pub role: &'static str,
    pub created: Date,
    pub last_used: Date,
}

record_fields! {
    ApiKey, key = "id", {
        "id" => |row: &ApiKey| row.id,
        "name" => |row: &ApiKey| row.name,
        "prefix" => |row: &ApiKey| row.prefix,
        "role" => |row: &ApiKey| row.role,
        "created" => |row: &ApiKey| row.created,
        "last_used" => |row: &ApiKey| row.last_used,
    }
}

pub const API_KEY_COLUMNS: &[Column] = &[
    Column::new("name", "Key").sortable(),
    Column::new("prefix", "Prefix"),
    Column::new("role", "Role").sortable(),
    Column::new("created", "Created").sortable(),
    Column::new("last_used", "Last Used").sortable(),
];

#[must_use]
pub fn api_keys() -> Vec<ApiKey> {
    vec![
        ApiKey {
            id: "1",
            name: "Production API",
            prefix: "sk_live_****",
            role: "ADMIN",
            created: date!(2024 - 01 - 15),
            last_used: date!(2024 - 03 - 17),
        },
        ApiKey {
            id: "2",
            name: "Integration Key",
            prefix: "sk_live_****",
            role: "WRITE",
            created: date!(2024 - 02 - 20),
            last_used: date!(2024 - 03 - 16),
        },
        ApiKey {
            id: "3",
            name: "Read-Only Access",
            prefix: "sk_live_****",
            role: "READ",
            created: date!(2024 - 03 - 01),
            last_used: date!(2024 - 03 - 10),
        },
    ]
}
