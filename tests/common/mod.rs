#![allow(dead_code)]

use hitscore::config::{Configuration, DisplayMode};
use hitscore::judgment::{
    ChainHeadScores, ChainLinkScores, CutScores, Judgment, JudgmentTable, ScoringEvent,
};

pub const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

pub fn table(entries: Vec<Judgment>) -> JudgmentTable {
    JudgmentTable::new(entries).expect("test table should be valid")
}

/// PERFECT at 115, OK below.
pub fn perfect_ok_table() -> JudgmentTable {
    table(vec![
        Judgment::new(115, "PERFECT", GREEN, false),
        Judgment::new(0, "OK", RED, false),
    ])
}

pub fn config_with(table: JudgmentTable, mode: DisplayMode) -> Configuration {
    let mut config = Configuration::new(table);
    config.display_mode = mode;
    config
}

pub fn normal(before: i32, after: i32, accuracy: i32) -> ScoringEvent {
    ScoringEvent::Normal(cut(before, after, accuracy))
}

pub fn cut(before: i32, after: i32, accuracy: i32) -> CutScores {
    CutScores {
        before,
        after,
        accuracy,
        cut_normal_z: 0.0,
        max_cut_score: 115,
        assumed_after: None,
    }
}

pub fn chain_head(before: i32, accuracy: i32) -> ScoringEvent {
    ScoringEvent::BurstSliderHead(ChainHeadScores {
        before,
        accuracy,
        cut_normal_z: 0.0,
        max_cut_score: 85,
    })
}

pub fn chain_link(fixed_cut_score: i32) -> ScoringEvent {
    ScoringEvent::BurstSliderElement(ChainLinkScores {
        fixed_cut_score,
        cut_normal_z: 0.0,
        max_cut_score: 20,
    })
}

pub const SAMPLE_CONFIG: &str = r#"{
    "majorVersion": 3,
    "minorVersion": 2,
    "patchVersion": 0,
    "isDefaultConfig": false,
    "displayMode": "format",
    "useFixedPos": true,
    "fixedPosX": 0.0,
    "fixedPosY": 1.5,
    "fixedPosZ": 4.0,
    "doIntermediateUpdates": true,
    "timeDependenceDecimalPrecision": 1,
    "timeDependenceDecimalOffset": 2,
    "judgments": [
        { "threshold": 115, "text": "%BFantastic%A%n%s", "color": [1.0, 1.0, 1.0, 1.0] },
        { "threshold": 101, "text": "%BExcellent%A%n%s", "color": [0.0, 1.0, 0.0, 1.0], "fade": true },
        { "threshold": 0, "text": "%BMeh%A%n%s", "color": [1.0, 0.0, 0.0, 1.0] }
    ],
    "chainHeadJudgments": [
        { "threshold": 85, "text": "Head!", "color": [0.0, 0.0, 1.0, 1.0] },
        { "threshold": 0, "text": "head", "color": [0.5, 0.5, 0.5, 1.0] }
    ],
    "chainLinkDisplay": { "text": "%s", "color": [1.0, 1.0, 1.0, 1.0] },
    "beforeCutAngleJudgments": [
        { "threshold": 70, "text": "+" },
        { "threshold": 0, "text": " " }
    ],
    "accuracyJudgments": [
        { "threshold": 15, "text": "+" },
        { "threshold": 0, "text": " " }
    ],
    "afterCutAngleJudgments": [
        { "threshold": 30, "text": "+" },
        { "threshold": 0, "text": " " }
    ],
    "timeDependenceJudgments": [
        { "threshold": 0.1, "text": "%t late" },
        { "threshold": 0.0, "text": "on time" }
    ]
}"#;
