use gavel_core::{column::Column, record_fields};
use time::{Date, macros::date};

///
/// MediaAsset
///
/// One uploaded image. Size is kept numeric (kilobytes) so the size
/// column sorts numerically rather than lexically.
///

#[derive(Clone, Debug)]
pub struct MediaAsset {
    pub id: &'static str,
    pub name: &'static str,
    pub size_kb: u64,
    pub format: &'static str,
    pub dimensions: &'static str,
    pub item: &'static str,
    pub uploaded: Date,
}

record_fields! {
    MediaAsset, key = "id", {
        "id" => |row: &MediaAsset| row.id,
        "name" => |row: &MediaAsset| row.name,
        "size_kb" => |row: &MediaAsset| row.size_kb,
        "format" => |row: &MediaAsset| row.format,
        "dimensions" => |row: &MediaAsset| row.dimensions,
        "item" => |row: &MediaAsset| row.item,
        "uploaded" => |row: &MediaAsset| row.uploaded,
    }
}

pub const MEDIA_COLUMNS: &[Column] = &[
    Column::new("name", "File").sortable(),
    Column::new("size_kb", "Size (KB)").sortable(),
    Column::new("format", "Format").sortable(),
    Column::new("dimensions", "Dimensions"),
    Column::new("item", "Item"),
    Column::new("uploaded", "Uploaded").sortable(),
];

#[must_use]
pub fn media() -> Vec<MediaAsset> {
    vec![
        MediaAsset {
            id: "1",
            name: "painting-001.jpg",
            size_kb: 2_458,
            format: "JPEG",
            dimensions: "3000x2000",
            item: "Impressionist Oil Painting",
            uploaded: date!(2024 - 03 - 17),
        },
        MediaAsset {
            id: "2",
            name: "necklace-main.png",
            size_kb: 1_843,
            format: "PNG",
            dimensions: "2400x2400",
            item: "Antique Diamond Necklace",
            uploaded: date!(2024 - 03 - 16),
        },
        MediaAsset {
            id: "3",
            name: "mustang-front.jpg",
            size_kb: 4_301,
            format: "JPEG",
            dimensions: "4000x3000",
            item: "1967 Ford Mustang",
            uploaded: date!(2024 - 03 - 15),
        },
        MediaAsset {
            id: "4",
            name: "desk-angle.webp",
            size_kb: 890,
            format: "WEBP",
            dimensions: "1920x1080",
            item: "Mid-Century Modern Desk",
            uploaded: date!(2024 - 03 - 14),
        },
        MediaAsset {
            id: "5",
            name: "folio-cover.jpg",
            size_kb: 3_122,
            format: "JPEG",
            dimensions: "2800x3600",
            item: "First Edition Folio",
            uploaded: date!(2024 - 03 - 13),
        },
        MediaAsset {
            id: "6",
            name: "vase-detail.avif",
            size_kb: 512,
            format: "AVIF",
            dimensions: "2000x2000",
            item: "Ming Dynasty Vase",
            uploaded: date!(2024 - 03 - 12),
        },
        MediaAsset {
            id: "7",
            name: "chronograph-face.png",
            size_kb: 1_207,
            format: "PNG",
            dimensions: "1600x1600",
            item: "Art Deco Chronograph",
            uploaded: date!(2024 - 03 - 11),
        },
        MediaAsset {
            id: "8",
            name: "lithograph-set.jpg",
            size_kb: 2_960,
            format: "JPEG",
            dimensions: "3200x2100",
            item: "Signed Lithograph Series",
            uploaded: date!(2024 - 03 - 10),
        },
    ]
}
