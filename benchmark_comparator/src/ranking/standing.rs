//!
//! The standing of the subject language.
//!

///
/// The standing of the subject language among the ranked ones.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    /// The 1-based rank.
    pub rank: usize,
    /// The number of ranked languages.
    pub out_of: usize,
    /// The total in milliseconds.
    pub total_ms: f64,
    /// The fastest language name, possibly the subject itself.
    pub fastest: String,
    /// The ratio to the fastest total, `1.0` for the fastest itself.
    pub ratio_to_fastest: f64,
}

impl Standing {
    ///
    /// Whether the subject is the fastest language.
    ///
    pub fn is_fastest(&self) -> bool {
        self.rank == 1
    }
}
