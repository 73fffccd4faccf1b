use crate::error::{HitScoreError, HsResult};
use crate::judgment::template::MAX_DECIMAL_PRECISION;
use crate::judgment::{
    ChainLinkDisplay, Judgment, JudgmentSegment, JudgmentTable, Rgba, TimeDependenceJudgmentSegment,
};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumString};
use tracing::{info, warn};

/// How the final text is assembled from the judgment text and the score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, EnumString, Display, AsRefStr,
)]
#[serde(from = "Option<String>")]
#[strum(serialize_all = "camelCase")]
pub enum DisplayMode {
    /// Judgment text with percent directives expanded.
    Format,
    /// Judgment text only.
    TextOnly,
    /// Score only.
    Numeric,
    /// Score above judgment text.
    ScoreOnTop,
    /// Judgment text above score. Used for any unrecognized mode.
    #[default]
    Default,
}

impl From<String> for DisplayMode {
    fn from(s: String) -> Self {
        DisplayMode::from_str(&s).unwrap_or_default()
    }
}

impl From<Option<String>> for DisplayMode {
    fn from(s: Option<String>) -> Self {
        s.map(DisplayMode::from).unwrap_or_default()
    }
}

/// A validated judgment configuration.
///
/// Immutable once built: reloading produces a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub display_mode: DisplayMode,

    pub use_fixed_pos: bool,
    pub fixed_pos_x: f32,
    pub fixed_pos_y: f32,
    pub fixed_pos_z: f32,

    pub do_intermediate_updates: bool,

    pub judgments: JudgmentTable,
    pub chain_head_judgments: Option<JudgmentTable>,
    pub chain_link_display: Option<ChainLinkDisplay>,

    pub before_cut_angle_judgments: Option<Vec<JudgmentSegment>>,
    pub accuracy_judgments: Option<Vec<JudgmentSegment>>,
    pub after_cut_angle_judgments: Option<Vec<JudgmentSegment>>,

    pub time_dependence_judgments: Option<Vec<TimeDependenceJudgmentSegment>>,
    pub time_dependence_decimal_offset: i32,
    pub time_dependence_decimal_precision: usize,
}

impl Configuration {
    /// A configuration with only a primary table; everything else at defaults.
    pub fn new(judgments: JudgmentTable) -> Self {
        Self {
            display_mode: DisplayMode::default(),
            use_fixed_pos: false,
            fixed_pos_x: 0.0,
            fixed_pos_y: 0.0,
            fixed_pos_z: 0.0,
            do_intermediate_updates: false,
            judgments,
            chain_head_judgments: None,
            chain_link_display: None,
            before_cut_angle_judgments: None,
            accuracy_judgments: None,
            after_cut_angle_judgments: None,
            time_dependence_judgments: None,
            time_dependence_decimal_offset: 0,
            time_dependence_decimal_precision: 0,
        }
    }

    pub fn from_json_str(content: &str) -> HsResult<Self> {
        let document: ConfigDocument = serde_json::from_str(content)?;
        Self::try_from(document)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> HsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        info!(
            "Loaded configuration from {:?} ({} judgments, display mode '{}')",
            path,
            config.judgments.entries().len(),
            config.display_mode
        );
        Ok(config)
    }

    /// Table for burst slider heads; the primary table unless overridden.
    pub fn chain_head_table(&self) -> &JudgmentTable {
        self.chain_head_judgments.as_ref().unwrap_or(&self.judgments)
    }

    pub fn fixed_position(&self) -> Option<[f32; 3]> {
        self.use_fixed_pos
            .then_some([self.fixed_pos_x, self.fixed_pos_y, self.fixed_pos_z])
    }
}

// --- On-disk document ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigDocument {
    #[serde(default)]
    display_mode: DisplayMode,

    #[serde(default)]
    use_fixed_pos: bool,
    #[serde(default)]
    fixed_pos_x: f32,
    #[serde(default)]
    fixed_pos_y: f32,
    #[serde(default)]
    fixed_pos_z: f32,

    #[serde(default)]
    do_intermediate_updates: bool,

    judgments: Vec<JudgmentDocument>,
    #[serde(default, alias = "chainHeadJudgements")]
    chain_head_judgments: Option<Vec<JudgmentDocument>>,
    #[serde(default)]
    chain_link_display: Option<ChainLinkDocument>,

    #[serde(default)]
    before_cut_angle_judgments: Option<Vec<JudgmentSegment>>,
    #[serde(default)]
    accuracy_judgments: Option<Vec<JudgmentSegment>>,
    #[serde(default)]
    after_cut_angle_judgments: Option<Vec<JudgmentSegment>>,

    #[serde(default, alias = "timeDependencyJudgments")]
    time_dependence_judgments: Option<Vec<TimeDependenceJudgmentSegment>>,
    #[serde(default, alias = "timeDependencyDecimalOffset")]
    time_dependence_decimal_offset: i32,
    #[serde(default, alias = "timeDependencyDecimalPrecision")]
    time_dependence_decimal_precision: usize,
}

#[derive(Debug, Deserialize)]
struct JudgmentDocument {
    #[serde(default)]
    threshold: i32,
    #[serde(default)]
    text: String,
    // Deliberately no default.
    color: Option<Vec<f32>>,
    #[serde(default)]
    fade: bool,
}

#[derive(Debug, Deserialize)]
struct ChainLinkDocument {
    #[serde(default)]
    text: String,
    color: Option<Vec<f32>>,
}

fn parse_color(color: Option<Vec<f32>>, owner: &str) -> HsResult<Rgba> {
    let channels = color.ok_or_else(|| {
        HitScoreError::InvalidConfiguration(format!("{} has no color", owner))
    })?;
    Rgba::try_from(channels)
        .map_err(|e| HitScoreError::InvalidConfiguration(format!("{}: {}", owner, e)))
}

fn build_table(docs: Vec<JudgmentDocument>, table_name: &str) -> HsResult<JudgmentTable> {
    let judgments = docs
        .into_iter()
        .map(|doc| {
            let owner = format!(
                "{} judgment '{}' (threshold {})",
                table_name, doc.text, doc.threshold
            );
            Ok(Judgment {
                color: parse_color(doc.color, &owner)?,
                threshold: doc.threshold,
                text: doc.text,
                fade: doc.fade,
            })
        })
        .collect::<HsResult<Vec<_>>>()?;

    JudgmentTable::new(judgments).map_err(|e| match e {
        HitScoreError::InvalidConfiguration(msg) => {
            HitScoreError::InvalidConfiguration(format!("{}: {}", table_name, msg))
        }
        other => other,
    })
}

impl TryFrom<ConfigDocument> for Configuration {
    type Error = HitScoreError;

    fn try_from(doc: ConfigDocument) -> HsResult<Self> {
        let judgments = build_table(doc.judgments, "judgments")?;
        let chain_head_judgments = doc
            .chain_head_judgments
            .map(|docs| build_table(docs, "chainHeadJudgments"))
            .transpose()?;
        let chain_link_display = doc
            .chain_link_display
            .map(|link| {
                Ok::<_, HitScoreError>(ChainLinkDisplay {
                    color: parse_color(link.color, "chainLinkDisplay")?,
                    text: link.text,
                })
            })
            .transpose()?;

        let mut precision = doc.time_dependence_decimal_precision;
        if precision > MAX_DECIMAL_PRECISION {
            warn!(
                "timeDependenceDecimalPrecision {} clamped to {}",
                precision, MAX_DECIMAL_PRECISION
            );
            precision = MAX_DECIMAL_PRECISION;
        }

        Ok(Self {
            display_mode: doc.display_mode,
            use_fixed_pos: doc.use_fixed_pos,
            fixed_pos_x: doc.fixed_pos_x,
            fixed_pos_y: doc.fixed_pos_y,
            fixed_pos_z: doc.fixed_pos_z,
            do_intermediate_updates: doc.do_intermediate_updates,
            judgments,
            chain_head_judgments,
            chain_link_display,
            before_cut_angle_judgments: doc.before_cut_angle_judgments,
            accuracy_judgments: doc.accuracy_judgments,
            after_cut_angle_judgments: doc.after_cut_angle_judgments,
            time_dependence_judgments: doc.time_dependence_judgments,
            time_dependence_decimal_offset: doc.time_dependence_decimal_offset,
            time_dependence_decimal_precision: precision,
        })
    }
}
