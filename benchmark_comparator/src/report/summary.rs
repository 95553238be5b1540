//!
//! The narrative summary of the subject language.
//!

use crate::ranking::Ranking;
use crate::report::time;

///
/// The narrative summary of the subject language.
///
pub struct Summary<'a> {
    /// The ranking.
    pub ranking: &'a Ranking,
    /// The subject language name.
    pub subject: &'a str,
    /// The baseline language name.
    pub baseline: &'a str,
}

impl std::fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.ranking.is_empty() {
            return writeln!(f, "  No language reported a valid total.");
        }

        let Some(standing) = self.ranking.standing(self.subject) else {
            return writeln!(f, "  {} has no rank: no valid total was reported.", self.subject);
        };

        writeln!(
            f,
            "  {} rank: {}/{}",
            self.subject, standing.rank, standing.out_of
        )?;
        writeln!(
            f,
            "  {} total: {}",
            self.subject,
            time::format(Some(standing.total_ms))
        )?;
        if standing.is_fastest() {
            writeln!(f, "  {} is the fastest language.", self.subject)?;
        } else {
            writeln!(
                f,
                "  Against the fastest ({}): {:.2}x slower",
                standing.fastest, standing.ratio_to_fastest
            )?;
        }

        match self.ranking.compare(self.subject, self.baseline) {
            Some(comparison) => writeln!(f, "  {} is {comparison}", self.subject),
            None => writeln!(
                f,
                "  {} has no valid total to compare against.",
                self.baseline
            ),
        }
    }
}
