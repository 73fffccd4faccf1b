use super::color::resolve_color;
use super::types::{Judgment, JudgmentSegment, Rgba, TimeDependenceJudgmentSegment};
use crate::error::{HitScoreError, HsResult};

/// Anything that sits in a threshold table ordered highest-first.
pub trait Thresholded {
    type Score: PartialOrd + Copy;

    fn threshold(&self) -> Self::Score;
}

impl Thresholded for Judgment {
    type Score = i32;

    fn threshold(&self) -> i32 {
        self.threshold
    }
}

impl Thresholded for JudgmentSegment {
    type Score = i32;

    fn threshold(&self) -> i32 {
        self.threshold
    }
}

impl Thresholded for TimeDependenceJudgmentSegment {
    type Score = f32;

    fn threshold(&self) -> f32 {
        self.threshold
    }
}

/// Returns the first entry whose threshold is `<= score`, with its index.
///
/// The index matters to callers that fade toward `table[index - 1]`.
pub fn find_match<T: Thresholded>(table: &[T], score: T::Score) -> Option<(usize, &T)> {
    table
        .iter()
        .enumerate()
        .find(|(_, entry)| entry.threshold() <= score)
}

/// Segment text for `score`; empty when the table is absent or nothing matches.
pub fn segment_text(table: Option<&[JudgmentSegment]>, score: i32) -> &str {
    table
        .and_then(|t| find_match(t, score))
        .map(|(_, segment)| segment.text.as_str())
        .unwrap_or("")
}

/// A result of [`JudgmentTable::judge`].
#[derive(Debug, Clone, PartialEq)]
pub struct Matched<'a> {
    /// `None` when the score fell below every threshold.
    pub index: Option<usize>,
    pub judgment: &'a Judgment,
    pub color: Rgba,
}

/// A validated primary judgment table.
///
/// Construction guarantees a non-empty table sorted by descending threshold
/// with no fade on its first entry. The lowest entry, with fading switched
/// off, is kept as the fallback for scores below every threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct JudgmentTable {
    entries: Vec<Judgment>,
    fallback: Judgment,
}

impl JudgmentTable {
    pub fn new(entries: Vec<Judgment>) -> HsResult<Self> {
        let (first, last) = match (entries.first(), entries.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                return Err(HitScoreError::InvalidConfiguration(
                    "judgment table must contain at least one judgment".to_string(),
                ))
            }
        };

        if first.fade {
            return Err(HitScoreError::InvalidConfiguration(format!(
                "judgment '{}' (threshold {}) is first in its table and cannot fade",
                first.text, first.threshold
            )));
        }

        if let Some(pair) = entries.windows(2).find(|w| w[1].threshold > w[0].threshold) {
            return Err(HitScoreError::InvalidConfiguration(format!(
                "judgments must be ordered by descending threshold, but {} follows {}",
                pair[1].threshold, pair[0].threshold
            )));
        }

        let fallback = Judgment {
            fade: false,
            ..last.clone()
        };

        Ok(Self { entries, fallback })
    }

    pub fn entries(&self) -> &[Judgment] {
        &self.entries
    }

    pub fn fallback(&self) -> &Judgment {
        &self.fallback
    }

    pub fn find(&self, score: i32) -> Option<(usize, &Judgment)> {
        find_match(&self.entries, score)
    }

    /// Matching judgment and its (possibly faded) color.
    pub fn judge(&self, score: i32) -> HsResult<Matched<'_>> {
        match self.find(score) {
            Some((index, judgment)) => Ok(Matched {
                index: Some(index),
                judgment,
                color: resolve_color(&self.entries, index, judgment, score)?,
            }),
            None => Ok(Matched {
                index: None,
                judgment: &self.fallback,
                color: self.fallback.color,
            }),
        }
    }
}

impl TryFrom<Vec<Judgment>> for JudgmentTable {
    type Error = HitScoreError;

    fn try_from(entries: Vec<Judgment>) -> HsResult<Self> {
        Self::new(entries)
    }
}
