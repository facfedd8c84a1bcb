///
/// Column
///
/// One ordered column descriptor for a tabular view: a dot-path key
/// resolved at display time, a header label, and whether the console
/// offers it as a sort target. Custom cell renderers are presentation
/// and live with the renderer, not here.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Column {
    pub key: &'static str,
    pub header: &'static str,
    pub sortable: bool,
}

impl Column {
    /// Create a non-sortable column.
    #[must_use]
    pub const fn new(key: &'static str, header: &'static str) -> Self {
        Self {
            key,
            header,
            sortable: false,
        }
    }

    /// Mark this column as a sort target.
    #[must_use]
    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}
