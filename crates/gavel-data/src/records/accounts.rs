use derive_more::Display;
use gavel_core::{column::Column, record_fields, value::Value};
use time::{Date, macros::date};

///
/// AccountStatus
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum AccountStatus {
    #[display("active")]
    Active,
    #[display("pending")]
    Pending,
    #[display("suspended")]
    Suspended,
}

impl From<AccountStatus> for Value {
    fn from(status: AccountStatus) -> Self {
        Self::Text(status.to_string())
    }
}

///
/// Account
///
/// One organization account on the platform.
///

#[derive(Clone, Debug)]
pub struct Account {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub status: AccountStatus,
    pub plan: &'static str,
    pub created: Date,
}

record_fields! {
    Account, key = "id", {
        "id" => |row: &Account| row.id,
        "name" => |row: &Account| row.name,
        "email" => |row: &Account| row.email,
        "status" => |row: &Account| row.status,
        "plan" => |row: &Account| row.plan,
        "created" => |row: &Account| row.created,
    }
}

pub const ACCOUNT_COLUMNS: &[Column] = &[
    Column::new("name", "Account").sortable(),
    Column::new("email", "Email"),
    Column::new("status", "Status").sortable(),
    Column::new("plan", "Plan").sortable(),
    Column::new("created", "Created").sortable(),
];

#[must_use]
pub fn accounts() -> Vec<Account> {
    use AccountStatus::{Active, Pending, Suspended};

    vec![
        Account {
            id: "1",
            name: "Acme Auctions",
            email: "admin@acme.com",
            status: Active,
            plan: "Enterprise",
            created: date!(2024 - 01 - 15),
        },
        Account {
            id: "2",
            name: "Heritage House",
            email: "info@heritage.com",
            status: Active,
            plan: "Professional",
            created: date!(2024 - 02 - 20),
        },
        Account {
            id: "3",
            name: "Quick Bid Co",
            email: "support@quickbid.io",
            status: Pending,
            plan: "Starter",
            created: date!(2024 - 03 - 01),
        },
        Account {
            id: "4",
            name: "Northlight Galleries",
            email: "hello@northlight.art",
            status: Active,
            plan: "Professional",
            created: date!(2024 - 01 - 28),
        },
        Account {
            id: "5",
            name: "Crown & Hammer",
            email: "sales@crownhammer.co.uk",
            status: Active,
            plan: "Enterprise",
            created: date!(2023 - 11 - 09),
        },
        Account {
            id: "6",
            name: "Beacon Estate Sales",
            email: "office@beaconestates.com",
            status: Suspended,
            plan: "Starter",
            created: date!(2023 - 12 - 14),
        },
        Account {
            id: "7",
            name: "Silver Birch Auctions",
            email: "contact@silverbirch.se",
            status: Active,
            plan: "Professional",
            created: date!(2024 - 02 - 05),
        },
        Account {
            id: "8",
            name: "Harbor Lot Exchange",
            email: "team@harborlot.com",
            status: Pending,
            plan: "Starter",
            created: date!(2024 - 03 - 11),
        },
        Account {
            id: "9",
            name: "Meridian Fine Art",
            email: "desk@meridianfineart.com",
            status: Active,
            plan: "Enterprise",
            created: date!(2023 - 10 - 02),
        },
        Account {
            id: "10",
            name: "Old Town Auction Rooms",
            email: "rooms@oldtownauctions.ie",
            status: Active,
            plan: "Professional",
            created: date!(2024 - 01 - 03),
        },
        Account {
            id: "11",
            name: "Westfield & Sons",
            email: "admin@westfieldsons.com",
            status: Active,
            plan: "Starter",
            created: date!(2024 - 02 - 27),
        },
        Account {
            id: "12",
            name: "Bluestone Bid House",
            email: "info@bluestonebids.com",
            status: Pending,
            plan: "Starter",
            created: date!(2024 - 03 - 14),
        },
    ]
}
