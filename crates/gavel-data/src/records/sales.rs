use derive_more::Display;
use gavel_core::{column::Column, record_fields, value::Value};
use time::{Date, macros::date};

///
/// SaleStatus
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum SaleStatus {
    #[display("draft")]
    Draft,
    #[display("published")]
    Published,
    #[display("open")]
    Open,
    #[display("closing")]
    Closing,
    #[display("closed")]
    Closed,
}

impl From<SaleStatus> for Value {
    fn from(status: SaleStatus) -> Self {
        Self::Text(status.to_string())
    }
}

///
/// Sale
///
/// One auction event. `dates` is a nested object so the sale table
/// exercises dot-path display lookup (`dates.open`, `dates.close`).
///

#[derive(Clone, Debug)]
pub struct Sale {
    pub id: &'static str,
    pub title: &'static str,
    pub status: SaleStatus,
    pub sale_type: &'static str,
    pub items: u32,
    pub bids: u32,
    pub open_date: Date,
    pub close_date: Date,
}

impl Sale {
    fn dates(&self) -> Value {
        Value::from_entries(vec![("open", self.open_date), ("close", self.close_date)])
    }
}

record_fields! {
    Sale, key = "id", {
        "id" => |row: &Sale| row.id,
        "title" => |row: &Sale| row.title,
        "status" => |row: &Sale| row.status,
        "type" => |row: &Sale| row.sale_type,
        "items" => |row: &Sale| row.items,
        "bids" => |row: &Sale| row.bids,
        "dates" => Sale::dates,
    }
}

pub const SALE_COLUMNS: &[Column] = &[
    Column::new("title", "Sale").sortable(),
    Column::new("status", "Status").sortable(),
    Column::new("type", "Type").sortable(),
    Column::new("items", "Items").sortable(),
    Column::new("bids", "Bids").sortable(),
    Column::new("dates.open", "Opens"),
    Column::new("dates.close", "Closes"),
];

#[must_use]
pub fn sales() -> Vec<Sale> {
    use SaleStatus::{Closed, Closing, Draft, Open, Published};

    vec![
        Sale {
            id: "1",
            title: "Fine Art Auction - Spring Collection",
            status: Open,
            sale_type: "TIMED",
            items: 45,
            bids: 234,
            open_date: date!(2024 - 03 - 15),
            close_date: date!(2024 - 03 - 22),
        },
        Sale {
            id: "2",
            title: "Estate Jewelry Collection",
            status: Closing,
            sale_type: "LIVE",
            items: 78,
            bids: 512,
            open_date: date!(2024 - 03 - 10),
            close_date: date!(2024 - 03 - 18),
        },
        Sale {
            id: "3",
            title: "Vintage Automobiles",
            status: Published,
            sale_type: "HYBRID",
            items: 12,
            bids: 0,
            open_date: date!(2024 - 03 - 25),
            close_date: date!(2024 - 04 - 01),
        },
        Sale {
            id: "4",
            title: "Modern Design Classics",
            status: Draft,
            sale_type: "TIMED",
            items: 31,
            bids: 0,
            open_date: date!(2024 - 04 - 08),
            close_date: date!(2024 - 04 - 15),
        },
        Sale {
            id: "5",
            title: "Rare Books & Manuscripts",
            status: Closed,
            sale_type: "TIMED",
            items: 64,
            bids: 891,
            open_date: date!(2024 - 02 - 12),
            close_date: date!(2024 - 02 - 19),
        },
        Sale {
            id: "6",
            title: "Asian Art & Antiquities",
            status: Open,
            sale_type: "TIMED",
            items: 53,
            bids: 147,
            open_date: date!(2024 - 03 - 16),
            close_date: date!(2024 - 03 - 23),
        },
        Sale {
            id: "7",
            title: "Watches & Horology",
            status: Published,
            sale_type: "LIVE",
            items: 27,
            bids: 0,
            open_date: date!(2024 - 03 - 28),
            close_date: date!(2024 - 03 - 28),
        },
        Sale {
            id: "8",
            title: "Contemporary Prints & Multiples",
            status: Closed,
            sale_type: "TIMED",
            items: 40,
            bids: 302,
            open_date: date!(2024 - 01 - 20),
            close_date: date!(2024 - 01 - 27),
        },
    ]
}
