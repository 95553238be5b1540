//!
//! The pairwise comparison of the subject and baseline languages.
//!

///
/// The pairwise comparison of the subject and baseline languages.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// The subject language name.
    pub subject: String,
    /// The baseline language name.
    pub baseline: String,
    /// The subject total divided by the baseline total.
    pub ratio: f64,
}

impl Comparison {
    ///
    /// A shortcut constructor. Both totals must be positive.
    ///
    pub fn new(subject: String, subject_total: f64, baseline: String, baseline_total: f64) -> Self {
        Self {
            subject,
            baseline,
            ratio: subject_total / baseline_total,
        }
    }

    ///
    /// Whether the subject is faster than the baseline.
    ///
    pub fn is_faster(&self) -> bool {
        self.ratio < 1.0
    }

    ///
    /// The factor by which the subject is faster or slower, never below `1.0`.
    ///
    pub fn factor(&self) -> f64 {
        if self.is_faster() {
            1.0 / self.ratio
        } else {
            self.ratio
        }
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verdict = if self.is_faster() { "faster" } else { "slower" };
        write!(f, "{:.2}x {verdict} than {}", self.factor(), self.baseline)
    }
}
