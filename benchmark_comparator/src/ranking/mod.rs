//!
//! The language ranking.
//!

#[cfg(test)]
mod tests;

pub mod comparison;
pub mod entry;
pub mod standing;

use crate::model::result::LanguageResult;

use self::comparison::Comparison;
use self::entry::Entry;
use self::standing::Standing;

///
/// The languages with a positive total, fastest first.
///
/// Equal totals keep the language enumeration order.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    /// The ranked languages.
    entries: Vec<Entry>,
}

impl Ranking {
    ///
    /// Ranks `results` by total, ascending.
    ///
    pub fn new(results: &[LanguageResult]) -> Self {
        let mut totals: Vec<(&str, f64)> = results
            .iter()
            .filter(|result| result.is_ranked())
            .filter_map(|result| result.total_ms().map(|total| (result.language(), total)))
            .collect();
        totals.sort_by(|a, b| a.1.total_cmp(&b.1));

        let fastest = totals.first().map(|(_, total)| *total);
        let entries = totals
            .into_iter()
            .enumerate()
            .map(|(index, (language, total_ms))| Entry {
                position: index + 1,
                language: language.to_owned(),
                total_ms,
                ratio_to_fastest: match fastest {
                    Some(fastest) if index > 0 => Some(total_ms / fastest),
                    _ => None,
                },
            })
            .collect();

        Self { entries }
    }

    ///
    /// The ranked languages, fastest first.
    ///
    pub fn entries(&self) -> &[Entry] {
        self.entries.as_slice()
    }

    ///
    /// Whether no language has a positive total.
    ///
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    ///
    /// The fastest language.
    ///
    pub fn fastest(&self) -> Option<&Entry> {
        self.entries.first()
    }

    ///
    /// The entry of `language`, if ranked.
    ///
    pub fn get(&self, language: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.language == language)
    }

    ///
    /// The standing of `subject`, or `None` if it has no rank.
    ///
    pub fn standing(&self, subject: &str) -> Option<Standing> {
        let fastest = self.fastest()?;
        let entry = self.get(subject)?;

        Some(Standing {
            rank: entry.position,
            out_of: self.entries.len(),
            total_ms: entry.total_ms,
            fastest: fastest.language.clone(),
            ratio_to_fastest: entry.ratio_to_fastest.unwrap_or(1.0),
        })
    }

    ///
    /// Compares `subject` against `baseline`, if both are ranked.
    ///
    pub fn compare(&self, subject: &str, baseline: &str) -> Option<Comparison> {
        let subject = self.get(subject)?;
        let baseline = self.get(baseline)?;

        Some(Comparison::new(
            subject.language.clone(),
            subject.total_ms,
            baseline.language.clone(),
            baseline.total_ms,
        ))
    }
}
