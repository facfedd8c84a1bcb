mod compare;
mod rank;

#[cfg(test)]
mod tests;

use serde::Serialize;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use time::{Date, PrimitiveDateTime, macros::format_description};

pub use compare::canonical_cmp;

///
/// Value
///
/// One cell of console data. Every dataset field resolves to a `Value`;
/// the table pipeline compares them, the search stage scans their display
/// rendering, and the export command serializes them.
///
/// Null → the field is present but empty (SQL-NULL-like).
/// Map  → ordered nested object, reachable through dot-path display lookup.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Text(String),
    Date(Date),
    DateTime(PrimitiveDateTime),
    /// Ordered list of values. List order is preserved for display.
    List(Vec<Self>),
    /// Ordered nested object. Entry order is preserved; keys are assumed
    /// unique per map (fixture-authored, not enforced).
    Map(Vec<(String, Self)>),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build a `Value::List` from owned items.
    pub fn from_list<T>(items: Vec<T>) -> Self
    where
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a `Value::List` from a slice literal.
    ///
    /// Intended for fixtures and tests. Requires `Clone` because items are
    /// borrowed.
    pub fn from_slice<T>(items: &[T]) -> Self
    where
        T: Into<Self> + Clone,
    {
        Self::List(items.iter().cloned().map(Into::into).collect())
    }

    /// Build a `Value::Map` from owned key/value entries, preserving order.
    pub fn from_entries<T>(entries: Vec<(&str, T)>) -> Self
    where
        T: Into<Self>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.into()))
                .collect(),
        )
    }

    ///
    /// TYPES
    ///

    /// Returns true if the value is one of the numeric variants supported
    /// by cross-family numeric comparison.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Uint(_))
    }

    /// Returns true if the value is Null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    /// Stable canonical rank used by cross-variant ordering.
    #[must_use]
    pub(crate) const fn canonical_rank(&self) -> u8 {
        rank::canonical_rank(self)
    }

    /// Cross-family numeric comparison; returns None if either side is
    /// non-numeric.
    #[must_use]
    pub fn cmp_numeric(&self, other: &Self) -> Option<Ordering> {
        let ordering = match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Uint(a), Self::Uint(b)) => a.cmp(b),
            (Self::Int(a), Self::Uint(b)) => cmp_int_uint(*a, *b),
            (Self::Uint(a), Self::Int(b)) => cmp_int_uint(*b, *a).reverse(),
            _ => return None,
        };

        Some(ordering)
    }

    ///
    /// TEXT COMPARISON
    ///

    /// Case-fold text for matching. ASCII fast path; Unicode lowercase
    /// fallback for everything else.
    #[must_use]
    pub fn fold_ci(s: &str) -> Cow<'_, str> {
        if s.is_ascii() {
            return Cow::Owned(s.to_ascii_lowercase());
        }
        Cow::Owned(s.to_lowercase())
    }

    /// Check whether this value's display rendering contains `needle`,
    /// case-insensitively. `needle` must already be case-folded.
    ///
    /// Null renders empty and therefore never matches a non-empty needle.
    #[must_use]
    pub fn display_contains_ci(&self, needle: &str) -> bool {
        Self::fold_ci(&self.to_string()).contains(needle)
    }
}

impl fmt::Display for Value {
    /// The string the console renders for a cell. Search scans exactly this.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Uint(u) => write!(f, "{u}"),
            Self::Text(s) => f.write_str(s),
            Self::Date(d) => {
                let formatted = d
                    .format(format_description!("[year]-[month]-[day]"))
                    .map_err(|_| fmt::Error)?;
                f.write_str(&formatted)
            }
            Self::DateTime(dt) => {
                let formatted = dt
                    .format(format_description!(
                        "[year]-[month]-[day] [hour]:[minute]:[second]"
                    ))
                    .map_err(|_| fmt::Error)?;
                f.write_str(&formatted)
            }
            Self::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::Map(entries) => {
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                Ok(())
            }
        }
    }
}

// Numeric comparison across the signed/unsigned boundary.
#[expect(clippy::cast_sign_loss)]
const fn cmp_int_uint(a: i64, b: u64) -> Ordering {
    if a < 0 {
        return Ordering::Less;
    }

    let a = a as u64;
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[macro_export]
macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    bool              => Bool,
    i8                => Int,
    i16               => Int,
    i32               => Int,
    i64               => Int,
    u8                => Uint,
    u16               => Uint,
    u32               => Uint,
    u64               => Uint,
    &str              => Text,
    String            => Text,
    Date              => Date,
    PrimitiveDateTime => DateTime,
}

impl<T> From<Option<T>> for Value
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<Vec<Self>> for Value {
    fn from(vec: Vec<Self>) -> Self {
        Self::List(vec)
    }
}
