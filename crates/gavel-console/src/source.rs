use gavel_core::{
    column::Column,
    record::{Record, lookup_path},
    table::TableQuery,
};
use serde_json::{Map, Value as Json};

///
/// Grid
///
/// One resolved page of cells, ready for the text renderer. Cell strings
/// come from dot-path display lookup; unresolved paths render empty.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    pub filtered: usize,
    pub total_pages: u32,
    pub page: u32,
    pub showing: Option<(usize, usize)>,
}

///
/// TableSource
///
/// Object-safe face of one dataset. The session keeps these boxed so the
/// REPL can switch between record types without caring about their shape.
///

pub trait TableSource {
    /// Command-line name of the dataset (`open <name>`).
    fn name(&self) -> &'static str;

    /// Human title used in view headers.
    fn title(&self) -> &'static str;

    fn columns(&self) -> &'static [Column];

    /// Unfiltered row count.
    fn len(&self) -> usize;

    /// Run the table pipeline and resolve cells for display.
    fn view(&self, query: &TableQuery) -> Grid;

    /// Current view as JSON (field name to value, one object per row).
    fn export(&self, query: &TableQuery) -> Result<Json, serde_json::Error>;
}

///
/// DatasetSource
///
/// The one generic implementation: a name, a column set, and a record
/// snapshot.
///

pub struct DatasetSource<R: Record> {
    name: &'static str,
    title: &'static str,
    columns: &'static [Column],
    rows: Vec<R>,
}

impl<R: Record> DatasetSource<R> {
    pub fn new(
        name: &'static str,
        title: &'static str,
        columns: &'static [Column],
        rows: Vec<R>,
    ) -> Self {
        Self {
            name,
            title,
            columns,
            rows,
        }
    }
}

impl<R: Record> TableSource for DatasetSource<R> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn title(&self) -> &'static str {
        self.title
    }

    fn columns(&self) -> &'static [Column] {
        self.columns
    }

    fn len(&self) -> usize {
        self.rows.len()
    }

    fn view(&self, query: &TableQuery) -> Grid {
        let view = query.execute(&self.rows);

        let rows = view
            .rows()
            .iter()
            .map(|record| {
                self.columns
                    .iter()
                    .map(|column| {
                        lookup_path(*record, column.key)
                            .map(|value| value.to_string())
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        Grid {
            headers: self.columns.iter().map(|column| column.header).collect(),
            rows,
            filtered: view.filtered(),
            total_pages: view.total_pages(),
            page: query.page_request().number.max(1),
            showing: view.showing_range(),
        }
    }

    fn export(&self, query: &TableQuery) -> Result<Json, serde_json::Error> {
        let view = query.execute(&self.rows);

        let mut rows = Vec::with_capacity(view.rows().len());
        for record in view.rows() {
            let mut object = Map::new();
            for field in R::FIELDS {
                let value = record.field(field).into_value();
                object.insert((*field).to_string(), serde_json::to_value(value)?);
            }
            rows.push(Json::Object(object));
        }

        Ok(serde_json::json!({
            "dataset": self.name,
            "filtered": view.filtered(),
            "total_pages": view.total_pages(),
            "rows": rows,
        }))
    }
}

/// Every dataset the console ships with, in sidebar order.
#[must_use]
pub fn default_sources() -> Vec<Box<dyn TableSource>> {
    use gavel_data::records as data;

    vec![
        Box::new(DatasetSource::new(
            "accounts",
            "Accounts",
            data::ACCOUNT_COLUMNS,
            data::accounts(),
        )),
        Box::new(DatasetSource::new(
            "sales",
            "Sales",
            data::SALE_COLUMNS,
            data::sales(),
        )),
        Box::new(DatasetSource::new(
            "items",
            "Items",
            data::ITEM_COLUMNS,
            data::items(),
        )),
        Box::new(DatasetSource::new(
            "bids",
            "Bids",
            data::BID_COLUMNS,
            data::bids(),
        )),
        Box::new(DatasetSource::new(
            "users",
            "Users",
            data::USER_COLUMNS,
            data::users(),
        )),
        Box::new(DatasetSource::new(
            "registrations",
            "Registrations",
            data::REGISTRATION_COLUMNS,
            data::registrations(),
        )),
        Box::new(DatasetSource::new(
            "orders",
            "Orders",
            data::ORDER_COLUMNS,
            data::orders(),
        )),
        Box::new(DatasetSource::new(
            "media",
            "Media",
            data::MEDIA_COLUMNS,
            data::media(),
        )),
        Box::new(DatasetSource::new(
            "webhooks",
            "Webhooks",
            data::WEBHOOK_COLUMNS,
            data::webhooks(),
        )),
        Box::new(DatasetSource::new(
            "keys",
            "API Keys",
            data::API_KEY_COLUMNS,
            data::api_keys(),
        )),
        Box::new(DatasetSource::new(
            "streams",
            "Live Streams",
            data::STREAM_COLUMNS,
            data::streams(),
        )),
    ]
}
