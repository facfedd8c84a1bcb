use gavel_core::{column::Column, record_fields};
use time::{Date, macros::date};

///
/// User
///
/// Statuses and roles stay plain strings here; the console renders them
/// as badges without caring about the closed set.
///

#[derive(Clone, Debug)]
pub struct User {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub status: &'static str,
    pub role: &'static str,
    pub bids: u32,
    pub registrations: u32,
    pub last_active: Date,
}

record_fields! {
    User, key = "id", {
        "id" => |row: &User| row.id,
        "name" => |row: &User| row.name,
        "email" => |row: &User| row.email,
        "status" => |row: &User| row.status,
        "role" => |row: &User| row.role,
        "bids" => |row: &User| row.bids,
        "registrations" => |row: &User| row.registrations,
        "last_active" => |row: &User| row.last_active,
    }
}

pub const USER_COLUMNS: &[Column] = &[
    Column::new("name", "User").sortable(),
    Column::new("email", "Email"),
    Column::new("status", "Status").sortable(),
    Column::new("role", "Role").sortable(),
    Column::new("bids", "Bids").sortable(),
    Column::new("registrations", "Registrations").sortable(),
    Column::new("last_active", "Last Active").sortable(),
];

#[must_use]
pub fn users() -> Vec<User> {
    vec![
        User {
            id: "1",
            name: "John Smith",
            email: "john@example.com",
            status: "active",
            role: "Bidder",
            bids: 45,
            registrations: 3,
            last_active: date!(2024 - 03 - 17),
        },
        User {
            id: "2",
            name: "Sarah Johnson",
            email: "sarah@example.com",
            status: "active",
            role: "VIP",
            bids: 120,
            registrations: 8,
            last_active: date!(2024 - 03 - 17),
        },
        User {
            id: "3",
            name: "Mike Wilson",
            email: "mike@example.com",
            status: "pending",
            role: "Bidder",
            bids: 0,
            registrations: 1,
            last_active: date!(2024 - 03 - 15),
        },
        User {
            id: "4",
            name: "Emily Brown",
            email: "emily@example.com",
            status: "active",
            role: "Admin",
            bids: 12,
            registrations: 2,
            last_active: date!(2024 - 03 - 16),
        },
        User {
            id: "5",
            name: "David Lee",
            email: "david@example.com",
            status: "inactive",
            role: "Bidder",
            bids: 67,
            registrations: 5,
            last_active: date!(2024 - 02 - 20),
        },
        User {
            id: "6",
            name: "Ana Petrov",
            email: "ana@example.com",
            status: "active",
            role: "Dealer",
            bids: 203,
            registrations: 11,
            last_active: date!(2024 - 03 - 17),
        },
        User {
            id: "7",
            name: "Liam O'Connor",
            email: "liam@example.com",
            status: "active",
            role: "Bidder",
            bids: 9,
            registrations: 2,
            last_active: date!(2024 - 03 - 12),
        },
        User {
            id: "8",
            name: "Grace Tanaka",
            email: "grace@example.com",
            status: "active",
            role: "VIP",
            bids: 88,
            registrations: 6,
            last_active: date!(2024 - 03 - 16),
        },
        User {
            id: "9",
            name: "Omar Haddad",
            email: "omar@example.com",
            status: "pending",
            role: "Bidder",
            bids: 0,
            registrations: 0,
            last_active: date!(2024 - 03 - 17),
        },
        User {
            id: "10",
            name: "Nina Alvarez",
            email: "nina@example.com",
            status: "inactive",
            role: "Dealer",
            bids: 34,
            registrations: 4,
            last_active: date!(2024 - 01 - 30),
        },
    ]
}
