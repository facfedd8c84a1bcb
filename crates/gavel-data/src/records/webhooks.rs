use gavel_core::{column::Column, record_fields, value::Value};
use time::{PrimitiveDateTime, macros::datetime};

///
/// Webhook
///
/// One action-hook subscription. `events` is list-valued; the search stage
/// scans the joined rendering, so "BID_PLACED" finds this row.
///

#[derive(Clone, Debug)]
pub struct Webhook {
    pub id: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub events: &'static [&'static str],
    pub status: &'static str,
    pub last_triggered: PrimitiveDateTime,
    pub success_rate: &'static str,
}

record_fields! {
    Webhook, key = "id", {
        "id" => |row: &Webhook| row.id,
        "name" => |row: &Webhook| row.name,
        "url" => |row: &Webhook| row.url,
        "events" => |row: &Webhook| Value::from_slice(row.events),
        "status" => |row: &Webhook| row.status,
        "last_triggered" => |row: &Webhook| row.last_triggered,
        "success_rate" => |row: &Webhook| row.success_rate,
    }
}

pub const WEBHOOK_COLUMNS: &[Column] = &[
    Column::new("name", "Webhook").sortable(),
    Column::new("url", "URL"),
    Column::new("events", "Events"),
    Column::new("status", "Status").sortable(),
    Column::new("last_triggered", "Last Triggered").sortable(),
    Column::new("success_rate", "Success Rate"),
];

#[must_use]
pub fn webhooks() -> Vec<Webhook> {
    vec![
        Webhook {
            id: "1",
            name: "Inventory Sync",
            url: "https://api.example.com/webhooks/inventory",
            events: &["ITEM_CREATED", "ITEM_UPDATED"],
            status: "active",
            last_triggered: datetime!(2024-03-17 14:32:00),
            success_rate: "99.8%",
        },
        Webhook {
            id: "2",
            name: "Bid Notifications",
            url: "https://notify.example.com/bids",
            events: &["BID_PLACED", "BID_OUTBID"],
            status: "active",
            last_triggered: datetime!(2024-03-17 14:28:00),
            success_rate: "100%",
        },
        Webhook {
            id: "3",
            name: "Sale Events",
            url: "https://crm.example.com/sales",
            events: &["SALE_OPENED", "SALE_CLOSED"],
            status: "paused",
            last_triggered: datetime!(2024-03-15 10:00:00),
            success_rate: "95.2%",
        },
        Webhook {
            id: "4",
            name: "Payment Processor",
            url: "https://payments.example.com/hook",
            events: &["ORDER_PAID"],
            status: "failed",
            last_triggered: datetime!(2024-03-17 12:15:00),
            success_rate: "78.5%",
        },
        Webhook {
            id: "5",
            name: "Shipping Updates",
            url: "https://logistics.example.com/events",
            events: &["ORDER_SHIPPED", "ORDER_COMPLETED"],
            status: "active",
            last_triggered: datetime!(2024-03-16 09:40:00),
            success_rate: "99.1%",
        },
    ]
}
