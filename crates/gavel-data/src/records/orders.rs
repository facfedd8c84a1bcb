use gavel_core::{column::Column, record_fields};
use time::{Date, macros::date};

///
/// Order
///

#[derive(Clone, Debug)]
pub struct Order {
    pub id: &'static str,
    pub user: &'static str,
    pub items: u32,
    pub total: u64,
    pub status: &'static str,
    pub payment: &'static str,
    pub date: Date,
}

record_fields! {
    Order, key = "id", {
        "id" => |row: &Order| row.id,
        "user" => |row: &Order| row.user,
        "items" => |row: &Order| row.items,
        "total" => |row: &Order| row.total,
        "status" => |row: &Order| row.status,
        "payment" => |row: &Order| row.payment,
        "date" => |row: &Order| row.date,
    }
}

pub const ORDER_COLUMNS: &[Column] = &[
    Column::new("id", "Order").sortable(),
    Column::new("user", "User").sortable(),
    Column::new("items", "Items").sortable(),
    Column::new("total", "Total").sortable(),
    Column::new("status", "Status").sortable(),
    Column::new("payment", "Payment").sortable(),
    Column::new("date", "Date").sortable(),
];

#[must_use]
pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD-001",
            user: "John Smith",
            items: 3,
            total: 18_500,
            status: "paid",
            payment: "card",
            date: date!(2024 - 03 - 17),
        },
        Order {
            id: "ORD-002",
            user: "Sarah Johnson",
            items: 1,
            total: 8_500,
            status: "pending",
            payment: "bank",
            date: date!(2024 - 03 - 17),
        },
        Order {
            id: "ORD-003",
            user: "Mike Wilson",
            items: 5,
            total: 32_000,
            status: "shipped",
            payment: "card",
            date: date!(2024 - 03 - 15),
        },
        Order {
            id: "ORD-004",
            user: "Emily Brown",
            items: 2,
            total: 4_200,
            status: "completed",
            payment: "wire",
            date: date!(2024 - 03 - 14),
        },
        Order {
            id: "ORD-005",
            user: "Ana Petrov",
            items: 4,
            total: 61_300,
            status: "paid",
            payment: "wire",
            date: date!(2024 - 03 - 13),
        },
        Order {
            id: "ORD-006",
            user: "Grace Tanaka",
            items: 1,
            total: 2_750,
            status: "pending",
            payment: "card",
            date: date!(2024 - 03 - 16),
        },
        Order {
            id: "ORD-007",
            user: "David Lee",
            items: 6,
            total: 12_980,
            status: "completed",
            payment: "card",
            date: date!(2024 - 02 - 22),
        },
        Order {
            id: "ORD-008",
            user: "Liam O'Connor",
            items: 2,
            total: 5_400,
            status: "refunded",
            payment: "card",
            date: date!(2024 - 03 - 10),
        },
        Order {
            id: "ORD-009",
            user: "Nina Alvarez",
            items: 3,
            total: 9_150,
            status: "shipped",
            payment: "bank",
            date: date!(2024 - 03 - 12),
        },
    ]
}
