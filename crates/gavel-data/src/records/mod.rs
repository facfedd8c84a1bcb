//! Mock record sets for the console's list views, one module per view.

mod accounts;
mod api_keys;
mod bids;
mod items;
mod media;
mod orders;
mod registrations;
mod sales;
mod streams;
mod users;
mod webhooks;

pub use accounts::{ACCOUNT_COLUMNS, Account, AccountStatus, accounts};
pub use api_keys::{API_KEY_COLUMNS, ApiKey, api_keys};
pub use bids::{BID_COLUMNS, Bid, BidStatus, bids};
pub use items::{ITEM_COLUMNS, Item, ItemStatus, items};
pub use media::{MEDIA_COLUMNS, MediaAsset, media};
pub use orders::{ORDER_COLUMNS, Order, orders};
pub use registrations::{REGISTRATION_COLUMNS, Registration, registrations};
pub use sales::{SALE_COLUMNS, Sale, SaleStatus, sales};
pub use streams::{STREAM_COLUMNS, LiveStream, streams};
pub use users::{USER_COLUMNS, User, users};
pub use webhooks::{WEBHOOK_COLUMNS, Webhook, webhooks};

#[cfg(test)]
mod tests {
    use super::*;
    use gavel_core::{
        column::Column,
        record::{Record, lookup_path},
        value::Value,
    };
    use std::collections::BTreeSet;

    fn assert_unique_keys<R: Record>(rows: &[R]) {
        let keys: BTreeSet<String> = rows.iter().map(|row| row.key().to_string()).collect();
        assert_eq!(keys.len(), rows.len(), "duplicate key in dataset");
        assert!(
            keys.iter().all(|key| !key.is_empty()),
            "empty key in dataset"
        );
    }

    fn assert_columns_resolve<R: Record>(rows: &[R], columns: &[Column]) {
        for row in rows {
            for column in columns {
                // Every column key must resolve on every record; nullable
                // cells resolve to Null, never to a dangling path.
                let head = column.key.split('.').next().unwrap();
                assert!(
                    R::FIELDS.contains(&head),
                    "column {} does not start at a record field",
                    column.key
                );
                if column.key.contains('.') {
                    assert!(
                        lookup_path(row, column.key).is_some(),
                        "dot-path column {} failed to resolve",
                        column.key
                    );
                }
            }
        }
    }

    #[test]
    fn datasets_have_unique_keys() {
        assert_unique_keys(&accounts());
        assert_unique_keys(&sales());
        assert_unique_keys(&items());
        assert_unique_keys(&bids());
        assert_unique_keys(&users());
        assert_unique_keys(&registrations());
        assert_unique_keys(&orders());
        assert_unique_keys(&media());
        assert_unique_keys(&webhooks());
        assert_unique_keys(&api_keys());
        assert_unique_keys(&streams());
    }

    #[test]
    fn dataset_columns_resolve_on_every_record() {
        assert_columns_resolve(&accounts(), ACCOUNT_COLUMNS);
        assert_columns_resolve(&sales(), SALE_COLUMNS);
        assert_columns_resolve(&items(), ITEM_COLUMNS);
        assert_columns_resolve(&bids(), BID_COLUMNS);
        assert_columns_resolve(&users(), USER_COLUMNS);
        assert_columns_resolve(&registrations(), REGISTRATION_COLUMNS);
        assert_columns_resolve(&orders(), ORDER_COLUMNS);
        assert_columns_resolve(&media(), MEDIA_COLUMNS);
        assert_columns_resolve(&webhooks(), WEBHOOK_COLUMNS);
        assert_columns_resolve(&api_keys(), API_KEY_COLUMNS);
        assert_columns_resolve(&streams(), STREAM_COLUMNS);
    }

    #[test]
    fn sale_dates_expose_dot_paths() {
        let sales = sales();
        let opens = lookup_path(&sales[0], "dates.open");
        assert_eq!(opens.map(|value| value.to_string()).as_deref(), Some("2024-03-15"));
    }

    #[test]
    fn nullable_fields_resolve_to_null_not_missing() {
        let items = items();
        let unbid = items
            .iter()
            .find(|item| item.current_bid.is_none())
            .expect("fixture should include an item without bids");

        assert_eq!(
            unbid.field("current_bid"),
            gavel_core::record::FieldPresence::Present(Value::Null)
        );
    }
}
