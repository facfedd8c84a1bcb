use gavel_core::{column::Column, record_fields};

///
/// LiveStream
///
/// Scheduled streams have no duration or current lot yet.
///

#[derive(Clone, Debug)]
pub struct LiveStream {
    pub id: &'static str,
    pub sale: &'static str,
    pub status: &'static str,
    pub stream_type: &'static str,
    pub viewers: u32,
    pub duration: Option<&'static str>,
    pub current_lot: Option<&'static str>,
}

record_fields! {
    LiveStream, key = "id", {
        "id" => |row: &LiveStream| row.id,
        "sale" => |row: &LiveStream| row.sale,
        "status" => |row: &LiveStream| row.status,
        "type" => |row: &LiveStream| row.stream_type,
        "viewers" => |row: &LiveStream| row.viewers,
        "duration" => |row: &LiveStream| row.duration,
        "current_lot" => |row: &LiveStream| row.current_lot,
    }
}

pub const STREAM_COLUMNS: &[Column] = &[
    Column::new("sale", "Sale").sortable(),
    Column::new("status", "Status").sortable(),
    Column::new("type", "Type"),
    Column::new("viewers", "Viewers").sortable(),
    Column::new("duration", "Duration"),
    Column::new("current_lot", "Current Lot"),
];

#[must_use]
pub fn streams() -> Vec<LiveStream> {
    vec![
        LiveStream {
            id: "1",
            sale: "Fine Art Auction",
            status: "live",
            stream_type: "PLATFORM",
            viewers: 234,
            duration: Some("1:45:32"),
            current_lot: Some("105"),
        },
        LiveStream {
            id: "2",
            sale: "Estate Jewelry Collection",
            status: "scheduled",
            stream_type: "YOUTUBE",
            viewers: 0,
            duration: None,
            current_lot: None,
        },
        LiveStream {
            id: "3",
            sale: "Watches & Horology",
            status: "ended",
            stream_type: "PLATFORM",
            viewers: 0,
            duration: Some("2:10:04"),
            current_lot: None,
        },
    ]
}
