//!
//! A ranked language.
//!

///
/// A ranked language.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// The 1-based position.
    pub position: usize,
    /// The language name.
    pub language: String,
    /// The total in milliseconds, always positive.
    pub total_ms: f64,
    /// The slow-down relative to the fastest language. `None` for the fastest itself.
    pub ratio_to_fastest: Option<f64>,
}

impl Entry {
    ///
    /// Whether this is the fastest language.
    ///
    pub fn is_fastest(&self) -> bool {
        self.position == 1
    }
}
