use derive_more::Display;
use gavel_core::{column::Column, record_fields, value::Value};

///
/// ItemStatus
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ItemStatus {
    #[display("draft")]
    Draft,
    #[display("active")]
    Active,
    #[display("sold")]
    Sold,
    #[display("unsold")]
    Unsold,
    #[display("withdrawn")]
    Withdrawn,
}

impl From<ItemStatus> for Value {
    fn from(status: ItemStatus) -> Self {
        Self::Text(status.to_string())
    }
}

///
/// Item
///
/// One lot. `current_bid` and `reserve` are nullable; lots with no bids
/// or no reserve sort after priced ones on those columns.
///

#[derive(Clone, Debug)]
pub struct Item {
    pub id: &'static str,
    pub title: &'static str,
    pub lot_number: &'static str,
    pub status: ItemStatus,
    pub current_bid: Option<u64>,
    pub reserve: Option<u64>,
    pub images: u32,
    pub sale: &'static str,
}

record_fields! {
    Item, key = "id", {
        "id" => |row: &Item| row.id,
        "title" => |row: &Item| row.title,
        "lot" => |row: &Item| row.lot_number,
        "status" => |row: &Item| row.status,
        "current_bid" => |row: &Item| row.current_bid,
        "reserve" => |row: &Item| row.reserve,
        "images" => |row: &Item| row.images,
        "sale" => |row: &Item| row.sale,
    }
}

pub const ITEM_COLUMNS: &[Column] = &[
    Column::new("lot", "Lot").sortable(),
    Column::new("title", "Item").sortable(),
    Column::new("status", "Status").sortable(),
    Column::new("current_bid", "Current Bid").sortable(),
    Column::new("reserve", "Reserve").sortable(),
    Column::new("images", "Images"),
    Column::new("sale", "Sale"),
];

#[must_use]
pub fn items() -> Vec<Item> {
    use ItemStatus::{Active, Draft, Sold, Unsold, Withdrawn};

    vec![
        Item {
            id: "1",
            title: "Impressionist Oil Painting - Monet Style",
            lot_number: "101",
            status: Active,
            current_bid: Some(15_000),
            reserve: Some(12_000),
            images: 5,
            sale: "Fine Art Auction",
        },
        Item {
            id: "2",
            title: "Antique Diamond Necklace",
            lot_number: "102",
            status: Active,
            current_bid: Some(8_500),
            reserve: Some(9_000),
            images: 8,
            sale: "Estate Jewelry Collection",
        },
        Item {
            id: "3",
            title: "1967 Ford Mustang Fastback",
            lot_number: "201",
            status: Active,
            current_bid: Some(42_000),
            reserve: Some(38_000),
            images: 24,
            sale: "Vintage Automobiles",
        },
        Item {
            id: "4",
            title: "Mid-Century Modern Desk",
            lot_number: "103",
            status: Sold,
            current_bid: Some(4_200),
            reserve: None,
            images: 6,
            sale: "Modern Design Classics",
        },
        Item {
            id: "5",
            title: "Abstract Sculpture",
            lot_number: "106",
            status: Active,
            current_bid: None,
            reserve: Some(2_500),
            images: 4,
            sale: "Fine Art Auction",
        },
        Item {
            id: "6",
            title: "Watercolor Landscape",
            lot_number: "107",
            status: Active,
            current_bid: None,
            reserve: None,
            images: 3,
            sale: "Fine Art Auction",
        },
        Item {
            id: "7",
            title: "First Edition Folio",
            lot_number: "301",
            status: Sold,
            current_bid: Some(21_000),
            reserve: Some(15_000),
            images: 11,
            sale: "Rare Books & Manuscripts",
        },
        Item {
            id: "8",
            title: "Ming Dynasty Vase",
            lot_number: "401",
            status: Withdrawn,
            current_bid: None,
            reserve: Some(60_000),
            images: 9,
            sale: "Asian Art & Antiquities",
        },
        Item {
            id: "9",
            title: "Art Deco Chronograph",
            lot_number: "501",
            status: Draft,
            current_bid: None,
            reserve: Some(7_800),
            images: 7,
            sale: "Watches & Horology",
        },
        Item {
            id: "10",
            title: "Signed Lithograph Series",
            lot_number: "108",
            status: Unsold,
            current_bid: Some(900),
            reserve: Some(1_400),
            images: 5,
            sale: "Contemporary Prints & Multiples",
        },
    ]
}
