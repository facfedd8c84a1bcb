use gavel_core::{column::Column, record_fields};
use time::{Date, macros::date};

///
/// Registration
///
/// One sale registration. `paddle` is unassigned until approval.
///

#[derive(Clone, Debug)]
pub struct Registration {
    pub id: &'static str,
    pub user: &'static str,
    pub sale: &'static str,
    pub status: &'static str,
    pub reg_type: &'static str,
    pub paddle: Option<&'static str>,
    pub date: Date,
}

record_fields! {
    Registration, key = "id", {
        "id" => |row: &Registration| row.id,
        "user" => |row: &Registration| row.user,
        "sale" => |row: &Registration| row.sale,
        "status" => |row: &Registration| row.status,
        "type" => |row: &Registration| row.reg_type,
        "paddle" => |row: &Registration| row.paddle,
        "date" => |row: &Registration| row.date,
    }
}

pub const REGISTRATION_COLUMNS: &[Column] = &[
    Column::new("user", "User").sortable(),
    Column::new("sale", "Sale").sortable(),
    Column::new("status", "Status").sortable(),
    Column::new("type", "Type").sortable(),
    Column::new("paddle", "Paddle").sortable(),
    Column::new("date", "Date").sortable(),
];

#[must_use]
pub fn registrations() -> Vec<Registration> {
    vec![
        Registration {
            id: "1",
            user: "John Smith",
            sale: "Fine Art Auction",
            status: "approved",
            reg_type: "STANDARD",
            paddle: Some("101"),
            date: date!(2024 - 03 - 15),
        },
        Registration {
            id: "2",
            user: "Sarah Johnson",
            sale: "Estate Jewelry Collection",
            status: "approved",
            reg_type: "VIP",
            paddle: Some("001"),
            date: date!(2024 - 03 - 14),
        },
        Registration {
            id: "3",
            user: "Mike Wilson",
            sale: "Fine Art Auction",
            status: "pending",
            reg_type: "STANDARD",
            paddle: None,
            date: date!(2024 - 03 - 16),
        },
        Registration {
            id: "4",
            user: "Emily Brown",
            sale: "Vintage Automobiles",
            status: "rejected",
            reg_type: "DEALER",
            paddle: None,
            date: date!(2024 - 03 - 13),
        },
        Registration {
            id: "5",
            user: "Ana Petrov",
            sale: "Vintage Automobiles",
            status: "approved",
            reg_type: "DEALER",
            paddle: Some("204"),
            date: date!(2024 - 03 - 12),
        },
        Registration {
            id: "6",
            user: "Grace Tanaka",
            sale: "Asian Art & Antiquities",
            status: "approved",
            reg_type: "VIP",
            paddle: Some("007"),
            date: date!(2024 - 03 - 15),
        },
        Registration {
            id: "7",
            user: "Omar Haddad",
            sale: "Watches & Horology",
            status: "pending",
            reg_type: "STANDARD",
            paddle: None,
            date: date!(2024 - 03 - 17),
        },
        Registration {
            id: "8",
            user: "Liam O'Connor",
            sale: "Fine Art Auction",
            status: "approved",
            reg_type: "STANDARD",
            paddle: Some("118"),
            date: date!(2024 - 03 - 16),
        },
        Registration {
            id: "9",
            user: "Nina Alvarez",
            sale: "Estate Jewelry Collection",
            status: "cancelled",
            reg_type: "STANDARD",
            paddle: None,
            date: date!(2024 - 03 - 11),
        },
    ]
}
