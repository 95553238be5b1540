//!
//! The ranked totals table.
//!

use crate::ranking::entry::Entry;
use crate::ranking::Ranking;
use crate::report::time;

///
/// The ranked totals table.
///
pub struct Table<'a> {
    /// The ranking.
    pub ranking: &'a Ranking,
}

impl Table<'_> {
    /// The marker of the fastest language.
    pub const FASTEST: &'static str = "🏆 FASTEST";

    ///
    /// The medal shown next to the first three positions.
    ///
    pub fn medal(position: usize) -> &'static str {
        match position {
            1 => "🥇",
            2 => "🥈",
            3 => "🥉",
            _ => "  ",
        }
    }

    ///
    /// The comparison column of `entry`.
    ///
    pub fn comparison(entry: &Entry) -> String {
        match entry.ratio_to_fastest {
            Some(ratio) if !entry.is_fastest() => format!("📉 {ratio:.2}x slower"),
            _ => Self::FASTEST.to_owned(),
        }
    }
}

impl std::fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.ranking.is_empty() {
            return writeln!(f, "  No language reported a valid total.");
        }

        writeln!(
            f,
            "  {:<6} {:<15} {:<18} {}",
            "Rank", "Language", "Total", "Comparison"
        )?;
        writeln!(f, "  {}", "-".repeat(70))?;
        for entry in self.ranking.entries().iter() {
            writeln!(
                f,
                "  {} {:<3} {:<15} {:<18} {}",
                Self::medal(entry.position),
                entry.position,
                entry.language,
                time::format(Some(entry.total_ms)),
                Self::comparison(entry),
            )?;
        }

        Ok(())
    }
}
