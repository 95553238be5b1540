//!
//! The measurement grammar table, as stored on disk.
//!

///
/// The measurement grammar table, as stored on disk.
///
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Table {
    /// The per-test entries, in declaration order.
    pub tests: Vec<Entry>,
    /// The marker preceding the explicitly reported total.
    pub total: String,
}

///
/// A single per-test entry of the grammar table.
///
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Entry {
    /// The test identifier.
    pub id: String,
    /// The display name.
    pub label: String,
    /// The regular expression preceding the measured value.
    pub marker: String,
}

impl Entry {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(id: &str, label: &str, marker: &str) -> Self {
        Self {
            id: id.to_owned(),
            label: label.to_owned(),
            marker: marker.to_owned(),
        }
    }
}

impl TryFrom<&str> for Table {
    type Error = serde_json::Error;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        serde_json::from_str(text)
    }
}
