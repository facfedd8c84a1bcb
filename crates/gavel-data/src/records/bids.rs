use derive_more::Display;
use gavel_core::{column::Column, record_fields, value::Value};
use time::{PrimitiveDateTime, macros::datetime};

///
/// BidStatus
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum BidStatus {
    #[display("winning")]
    Winning,
    #[display("outbid")]
    Outbid,
    #[display("cancelled")]
    Cancelled,
}

impl From<BidStatus> for Value {
    fn from(status: BidStatus) -> Self {
        Self::Text(status.to_string())
    }
}

///
/// Bid
///

#[derive(Clone, Debug)]
pub struct Bid {
    pub id: &'static str,
    pub item: &'static str,
    pub amount: u64,
    pub bidder: &'static str,
    pub bid_type: &'static str,
    pub status: BidStatus,
    pub placed: PrimitiveDateTime,
    pub origin: &'static str,
}

record_fields! {
    Bid, key = "id", {
        "id" => |row: &Bid| row.id,
        "item" => |row: &Bid| row.item,
        "amount" => |row: &Bid| row.amount,
        "bidder" => |row: &Bid| row.bidder,
        "type" => |row: &Bid| row.bid_type,
        "status" => |row: &Bid| row.status,
        "placed" => |row: &Bid| row.placed,
        "origin" => |row: &Bid| row.origin,
    }
}

pub const BID_COLUMNS: &[Column] = &[
    Column::new("item", "Item").sortable(),
    Column::new("amount", "Amount").sortable(),
    Column::new("bidder", "Bidder"),
    Column::new("type", "Type").sortable(),
    Column::new("status", "Status").sortable(),
    Column::new("placed", "Placed").sortable(),
    Column::new("origin", "Origin"),
];

#[must_use]
pub fn bids() -> Vec<Bid> {
    use BidStatus::{Cancelled, Outbid, Winning};

    vec![
        Bid {
            id: "1",
            item: "Impressionist Oil Painting",
            amount: 15_000,
            bidder: "user_123",
            bid_type: "MAX",
            status: Winning,
            placed: datetime!(2024-03-17 14:32:15),
            origin: "ONLINE",
        },
        Bid {
            id: "2",
            item: "Antique Diamond Necklace",
            amount: 8_500,
            bidder: "user_456",
            bid_type: "REGULAR",
            status: Winning,
            placed: datetime!(2024-03-17 14:28:00),
            origin: "PADDLE",
        },
        Bid {
            id: "3",
            item: "Impressionist Oil Painting",
            amount: 14_500,
            bidder: "user_789",
            bid_type: "REGULAR",
            status: Outbid,
            placed: datetime!(2024-03-17 14:25:30),
            origin: "ONLINE",
        },
        Bid {
            id: "4",
            item: "Mid-Century Modern Desk",
            amount: 4_200,
            bidder: "user_012",
            bid_type: "ABSENTEE",
            status: Winning,
            placed: datetime!(2024-03-17 12:00:00),
            origin: "PHONE",
        },
        Bid {
            id: "5",
            item: "Antique Diamond Necklace",
            amount: 8_000,
            bidder: "user_345",
            bid_type: "REGULAR",
            status: Cancelled,
            placed: datetime!(2024-03-17 13:45:00),
            origin: "ONLINE",
        },
        Bid {
            id: "6",
            item: "1967 Ford Mustang Fastback",
            amount: 42_000,
            bidder: "user_208",
            bid_type: "MAX",
            status: Winning,
            placed: datetime!(2024-03-17 11:18:42),
            origin: "ONLINE",
        },
        Bid {
            id: "7",
            item: "First Edition Folio",
            amount: 19_500,
            bidder: "user_871",
            bid_type: "REGULAR",
            status: Outbid,
            placed: datetime!(2024-03-16 17:03:11),
            origin: "ONLINE",
        },
        Bid {
            id: "8",
            item: "First Edition Folio",
            amount: 21_000,
            bidder: "user_533",
            bid_type: "PHONE",
            status: Winning,
            placed: datetime!(2024-03-16 17:05:57),
            origin: "PHONE",
        },
        Bid {
            id: "9",
            item: "Signed Lithograph Series",
            amount: 900,
            bidder: "user_644",
            bid_type: "REGULAR",
            status: Outbid,
            placed: datetime!(2024-03-15 09:47:20),
            origin: "ONLINE",
        },
        Bid {
            id: "10",
            item: "Watercolor Landscape",
            amount: 650,
            bidder: "user_102",
            bid_type: "ABSENTEE",
            status: Cancelled,
            placed: datetime!(2024-03-15 08:12:05),
            origin: "ABSENTEE",
        },
    ]
}
