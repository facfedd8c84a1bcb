use crate::value::Value;

///
/// FieldPresence
///
/// Result of resolving one named field on a record. `Missing` covers
/// unknown field names; a present-but-empty field is `Present(Value::Null)`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldPresence {
    Missing,
    Present(Value),
}

impl FieldPresence {
    /// Convert to an optional value, folding `Missing` to `None`.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Present(value) => Some(value),
            Self::Missing => None,
        }
    }
}

///
/// Record
///
/// One row of a tabular view. Implementations expose a stable identity
/// field plus a flat, enumerable set of named fields; the search stage
/// scans exactly `FIELDS`, and the sort stage resolves one field at a
/// time through `field`.
///
/// Field resolution is total: unknown names yield `Missing`, never a panic.
///

pub trait Record {
    /// Designated unique-identity field for rendering and reconciliation.
    const KEY_FIELD: &'static str;

    /// Own enumerable fields, in display order.
    const FIELDS: &'static [&'static str];

    /// Resolve one named field.
    fn field(&self, name: &str) -> FieldPresence;

    /// Value at `KEY_FIELD`.
    fn key(&self) -> Value {
        match self.field(Self::KEY_FIELD) {
            FieldPresence::Present(value) => value,
            FieldPresence::Missing => Value::Null,
        }
    }
}

/// Resolve a dot-path against a record for display.
///
/// The leading segment is a direct field access; nested segments walk
/// `Value::Map` entries. Sort never uses this; ordering is single-level
/// by contract.
#[must_use]
pub fn lookup_path<R: Record>(record: &R, path: &str) -> Option<Value> {
    let mut segments = path.split('.');
    let head = segments.next()?;

    let mut value = record.field(head).into_value()?;
    for segment in segments {
        let Value::Map(entries) = value else {
            return None;
        };
        value = entries
            .into_iter()
            .find_map(|(key, nested)| (key == segment).then_some(nested))?;
    }

    Some(value)
}

/// Implement [`Record`] from a field → getter table.
///
/// Getters return anything `Into<Value>`. The key field must also appear
/// in the field table.
#[macro_export]
macro_rules! record_fields {
    ( $type:ty, key = $key:literal, { $( $name:literal => $get:expr ),* $(,)? } ) => {
        impl $crate::record::Record for $type {
            const KEY_FIELD: &'static str = $key;
            const FIELDS: &'static [&'static str] = &[ $( $name ),* ];

            fn field(&self, name: &str) -> $crate::record::FieldPresence {
                match name {
                    $(
                        $name => $crate::record::FieldPresence::Present(
                            $crate::value::Value::from(($get)(self)),
                        ),
                    )*
                    _ => $crate::record::FieldPresence::Missing,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Lot {
        id: u64,
        title: &'static str,
        reserve: Option<u64>,
        dates: Value,
    }

    record_fields! {
        Lot, key = "id", {
            "id" => |lot: &Lot| lot.id,
            "title" => |lot: &Lot| lot.title,
            "reserve" => |lot: &Lot| lot.reserve,
            "dates" => |lot: &Lot| lot.dates.clone(),
        }
    }

    fn lot() -> Lot {
        Lot {
            id: 7,
            title: "Abstract Sculpture",
            reserve: None,
            dates: Value::from_entries(vec![("open", "2024-03-15"), ("close", "2024-03-22")]),
        }
    }

    #[test]
    fn field_resolution_is_total() {
        let lot = lot();
        assert_eq!(
            lot.field("title"),
            FieldPresence::Present(Value::Text("Abstract Sculpture".into()))
        );
        assert_eq!(lot.field("reserve"), FieldPresence::Present(Value::Null));
        assert_eq!(lot.field("no_such_field"), FieldPresence::Missing);
        assert_eq!(lot.key(), Value::Uint(7));
    }

    #[test]
    fn lookup_path_walks_nested_maps() {
        let lot = lot();
        assert_eq!(
            lookup_path(&lot, "dates.close"),
            Some(Value::Text("2024-03-22".into()))
        );
        assert_eq!(lookup_path(&lot, "dates.missing"), None);
        assert_eq!(lookup_path(&lot, "title.nested"), None);
        assert_eq!(
            lookup_path(&lot, "title"),
            Some(Value::Text("Abstract Sculpture".into()))
        );
    }
}
