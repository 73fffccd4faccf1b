use crate::error::{HitScoreError, HsResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// 4 floats, 0-1: red, green, blue, glow (not transparency).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "[f32; 4]")]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub glow: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, glow: f32) -> Self {
        Self { r, g, b, glow }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.glow]
    }
}

impl From<[f32; 4]> for Rgba {
    fn from(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Rgba> for [f32; 4] {
    fn from(c: Rgba) -> Self {
        c.to_array()
    }
}

impl TryFrom<Vec<f32>> for Rgba {
    type Error = String;

    fn try_from(channels: Vec<f32>) -> Result<Self, Self::Error> {
        let arr: [f32; 4] = channels.try_into().map_err(|v: Vec<f32>| {
            format!(
                "color requires 4 values (r, g, b, glow), found {}",
                v.len()
            )
        })?;
        Ok(arr.into())
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.r, self.g, self.b, self.glow)
    }
}

/// One row of a primary threshold table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Judgment {
    /// Applies to cuts scoring >= this number.
    pub threshold: i32,
    pub text: String,
    pub color: Rgba,
    /// Lerp toward the previous (higher) judgment's color.
    pub fade: bool,
}

impl Judgment {
    pub fn new(threshold: i32, text: impl Into<String>, color: impl Into<Rgba>, fade: bool) -> Self {
        Self {
            threshold,
            text: text.into(),
            color: color.into(),
            fade,
        }
    }
}

/// Substituted into `%B`, `%C` and `%A`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgmentSegment {
    #[serde(default)]
    pub threshold: i32,
    #[serde(default)]
    pub text: String,
}

impl JudgmentSegment {
    pub fn new(threshold: i32, text: impl Into<String>) -> Self {
        Self {
            threshold,
            text: text.into(),
        }
    }
}

/// Substituted into `%T`. The text may itself use `%t`, `%%` and `%n`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeDependenceJudgmentSegment {
    #[serde(default)]
    pub threshold: f32,
    #[serde(default)]
    pub text: String,
}

impl TimeDependenceJudgmentSegment {
    pub fn new(threshold: f32, text: impl Into<String>) -> Self {
        Self {
            threshold,
            text: text.into(),
        }
    }
}

/// Fixed text/color for burst slider elements; no threshold lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainLinkDisplay {
    pub text: String,
    pub color: Rgba,
}

impl Default for ChainLinkDisplay {
    fn default() -> Self {
        Self {
            text: "20".to_string(),
            color: Rgba::WHITE,
        }
    }
}

/// Final output handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JudgmentDisplay {
    pub text: String,
    pub color: Rgba,
}

// --- Scoring events ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum ScoringType {
    Normal,
    SliderHead,
    SliderTail,
    BurstSliderHead,
    BurstSliderElement,
    Ignore,
    NoScore,
}

/// Normal notes and slider heads/tails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutScores {
    pub before: i32,
    pub after: i32,
    pub accuracy: i32,
    pub cut_normal_z: f32,
    pub max_cut_score: i32,
    /// Replaces `after` while the swing is still in progress.
    pub assumed_after: Option<i32>,
}

impl CutScores {
    pub fn after_score(&self) -> i32 {
        self.assumed_after.unwrap_or(self.after)
    }

    pub fn total(&self) -> HsResult<i32> {
        sum_scores(&[self.before, self.after_score(), self.accuracy])
    }
}

/// Burst slider heads have no after-cut swing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainHeadScores {
    pub before: i32,
    pub accuracy: i32,
    pub cut_normal_z: f32,
    pub max_cut_score: i32,
}

impl ChainHeadScores {
    pub fn total(&self) -> HsResult<i32> {
        sum_scores(&[self.before, self.accuracy])
    }
}

/// Burst slider elements always score a fixed amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainLinkScores {
    pub fixed_cut_score: i32,
    pub cut_normal_z: f32,
    pub max_cut_score: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoringEvent {
    Normal(CutScores),
    SliderHead(CutScores),
    SliderTail(CutScores),
    BurstSliderHead(ChainHeadScores),
    BurstSliderElement(ChainLinkScores),
    Ignore,
    NoScore,
}

impl ScoringEvent {
    pub fn scoring_type(&self) -> ScoringType {
        match self {
            Self::Normal(_) => ScoringType::Normal,
            Self::SliderHead(_) => ScoringType::SliderHead,
            Self::SliderTail(_) => ScoringType::SliderTail,
            Self::BurstSliderHead(_) => ScoringType::BurstSliderHead,
            Self::BurstSliderElement(_) => ScoringType::BurstSliderElement,
            Self::Ignore => ScoringType::Ignore,
            Self::NoScore => ScoringType::NoScore,
        }
    }

    /// Whether this is an in-progress judgment built on an assumed after-cut score.
    pub fn is_intermediate(&self) -> bool {
        match self {
            Self::Normal(c) | Self::SliderHead(c) | Self::SliderTail(c) => c.assumed_after.is_some(),
            _ => false,
        }
    }

    /// How perpendicular the swing was to the note's forward axis.
    pub fn time_dependence(&self) -> Option<f32> {
        match self {
            Self::Normal(c) | Self::SliderHead(c) | Self::SliderTail(c) => {
                Some(time_dependence(c.cut_normal_z))
            }
            Self::BurstSliderHead(h) => Some(time_dependence(h.cut_normal_z)),
            Self::BurstSliderElement(l) => Some(time_dependence(l.cut_normal_z)),
            Self::Ignore | Self::NoScore => None,
        }
    }
}

fn sum_scores(parts: &[i32]) -> HsResult<i32> {
    parts
        .iter()
        .try_fold(0i32, |acc, &part| acc.checked_add(part))
        .ok_or_else(|| HitScoreError::ScoreOutOfRange(format!("{:?}", parts)))
}

pub fn time_dependence(cut_normal_z: f32) -> f32 {
    cut_normal_z.abs()
}

/// A cut as reported by the host, with its scoring type still in text form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCut {
    pub scoring_type: String,
    pub before: i32,
    pub after: i32,
    pub accuracy: i32,
    pub cut_normal_z: f32,
    pub max_cut_score: i32,
    pub fixed_cut_score: i32,
    pub assumed_after: Option<i32>,
}

impl Default for RawCut {
    fn default() -> Self {
        Self {
            scoring_type: ScoringType::Normal.to_string(),
            before: 0,
            after: 0,
            accuracy: 0,
            cut_normal_z: 0.0,
            max_cut_score: 115,
            fixed_cut_score: 20,
            assumed_after: None,
        }
    }
}

impl TryFrom<&RawCut> for ScoringEvent {
    type Error = HitScoreError;

    fn try_from(raw: &RawCut) -> HsResult<Self> {
        let scoring_type = ScoringType::from_str(raw.scoring_type.trim())
            .map_err(|_| HitScoreError::UnsupportedScoringType(raw.scoring_type.clone()))?;

        let cut = CutScores {
            before: raw.before,
            after: raw.after,
            accuracy: raw.accuracy,
            cut_normal_z: raw.cut_normal_z,
            max_cut_score: raw.max_cut_score,
            assumed_after: raw.assumed_after,
        };

        Ok(match scoring_type {
            ScoringType::Normal => Self::Normal(cut),
            ScoringType::SliderHead => Self::SliderHead(cut),
            ScoringType::SliderTail => Self::SliderTail(cut),
            ScoringType::BurstSliderHead => Self::BurstSliderHead(ChainHeadScores {
                before: raw.before,
                accuracy: raw.accuracy,
                cut_normal_z: raw.cut_normal_z,
                max_cut_score: raw.max_cut_score,
            }),
            ScoringType::BurstSliderElement => Self::BurstSliderElement(ChainLinkScores {
                fixed_cut_score: raw.fixed_cut_score,
                cut_normal_z: raw.cut_normal_z,
                max_cut_score: raw.max_cut_score,
            }),
            ScoringType::Ignore => Self::Ignore,
            ScoringType::NoScore => Self::NoScore,
        })
    }
}

impl TryFrom<RawCut> for ScoringEvent {
    type Error = HitScoreError;

    fn try_from(raw: RawCut) -> HsResult<Self> {
        Self::try_from(&raw)
    }
}
