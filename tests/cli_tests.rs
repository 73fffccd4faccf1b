mod common;

use regex::Regex;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    _dir: TempDir,
    config_path: PathBuf,
    cuts_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_path = dir.path().join("HitScoreVisualizerConfig.json");
        let cuts_path = dir.path().join("cuts.csv");

        let mut config_file = File::create(&config_path).unwrap();
        config_file.write_all(common::SAMPLE_CONFIG.as_bytes()).unwrap();

        let mut cuts_file = File::create(&cuts_path).unwrap();
        writeln!(
            cuts_file,
            "scoringType,before,after,accuracy,cutNormalZ,maxCutScore,fixedCutScore,assumedAfter"
        )
        .unwrap();
        writeln!(cuts_file, "normal,70,30,15,0.0,115,20,").unwrap();
        writeln!(cuts_file, "burstSliderHead,70,0,15,0.0,85,20,").unwrap();
        writeln!(cuts_file, "burstSliderElement,0,0,0,0.0,20,20,").unwrap();
        writeln!(cuts_file, "arcHead,0,0,0,0.0,115,20,").unwrap();

        Self {
            _dir: dir,
            config_path,
            cuts_path,
        }
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_hitscore"))
            .arg("--config")
            .arg(&self.config_path)
            .args(args)
            .output()
            .expect("Failed to execute hitscore")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_validate_prints_tables() {
    let ctx = TestContext::new();
    let output = ctx.run(&["validate", "--segments"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let out = stdout(&output);
    assert!(out.contains("Configuration is valid"));
    assert!(out.contains("Chain Head Judgments"));
    assert!(out.contains("Before Cut Angle Judgments"));
    assert!(out.contains("Time Dependence Judgments"));
    assert!(Regex::new(r"\|\s*115\s*\|").unwrap().is_match(&out));
}

#[test]
fn test_judge_json() {
    let ctx = TestContext::new();
    let output = ctx.run(&["judge", "-b", "70", "-a", "30", "-A", "15", "--json"]);
    assert!(output.status.success());

    let display: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(display["text"], "+Fantastic+\n115");
    assert_eq!(display["color"], serde_json::json!([1.0, 1.0, 1.0, 1.0]));
}

#[test]
fn test_judge_chain_link_text() {
    let ctx = TestContext::new();
    let output = ctx.run(&["judge", "--type", "burstSliderElement"]);
    assert!(output.status.success());

    let out = stdout(&output);
    let re = Regex::new(r#"text:\s+"20""#).unwrap();
    assert!(re.is_match(&out), "stdout: {}", out);
}

#[test]
fn test_judge_ignored_note() {
    let ctx = TestContext::new();
    let output = ctx.run(&["judge", "--type", "ignore", "--json"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "null");
}

#[test]
fn test_judge_unknown_type_fails() {
    let ctx = TestContext::new();
    let output = ctx.run(&["judge", "--type", "arcHead"]);
    assert!(!output.status.success());
}

#[test]
fn test_replay_json_lines() {
    let ctx = TestContext::new();
    let cuts = ctx.cuts_path.to_string_lossy().to_string();
    let output = ctx.run(&["replay", "--cuts", &cuts, "--json"]);
    assert!(output.status.success());

    let rows: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(rows.len(), 4);

    assert_eq!(rows[0]["cut"], 1);
    assert_eq!(rows[0]["display"]["text"], "+Fantastic+\n115");
    assert_eq!(rows[1]["display"]["text"], "Head!");
    assert_eq!(rows[2]["display"]["text"], "20");
    assert_eq!(rows[3]["scoringType"], "arcHead");
    assert!(rows[3]["display"].is_null());
    assert!(rows[3]["error"].as_str().unwrap().contains("arcHead"));
}

#[test]
fn test_replay_table() {
    let ctx = TestContext::new();
    let cuts = ctx.cuts_path.to_string_lossy().to_string();
    let output = ctx.run(&["replay", "--cuts", &cuts]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Head!"));
    assert!(out.contains(r"+Fantastic+\n115"));
}

#[test]
fn test_invalid_config_fails() {
    let ctx = TestContext::new();
    let mut file = File::create(&ctx.config_path).unwrap();
    file.write_all(br#"{ "judgments": [] }"#).unwrap();

    let output = ctx.run(&["validate"]);
    assert!(!output.status.success());
}

#[test]
fn test_replay_skips_assumed_after_rows_without_intermediate_updates() {
    let ctx = TestContext::new();
    let config = common::SAMPLE_CONFIG.replace(
        r#""doIntermediateUpdates": true"#,
        r#""doIntermediateUpdates": false"#,
    );
    std::fs::write(&ctx.config_path, config).unwrap();

    let cuts_path = ctx.cuts_path.with_file_name("intermediate.csv");
    std::fs::write(
        &cuts_path,
        "scoringType,before,after,accuracy,assumedAfter\nnormal,70,0,15,30\nnormal,70,30,15,\n",
    )
    .unwrap();

    let cuts = cuts_path.to_string_lossy().to_string();
    let output = ctx.run(&["replay", "--cuts", &cuts, "--json"]);
    assert!(output.status.success());

    let rows: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0]["display"].is_null());
    assert!(rows[0]["error"].is_null());
    assert_eq!(rows[1]["display"]["text"], "+Fantastic+\n115");
}

#[test]
fn test_replay_reports_overflowing_cut() {
    let ctx = TestContext::new();
    let cuts_path = ctx.cuts_path.with_file_name("overflow.csv");
    std::fs::write(
        &cuts_path,
        format!("scoringType,before,after,accuracy\nnormal,{},1,0\n", i32::MAX),
    )
    .unwrap();

    let cuts = cuts_path.to_string_lossy().to_string();
    let output = ctx.run(&["replay", "--cuts", &cuts, "--json"]);
    assert!(output.status.success());

    let row: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert!(row["error"].as_str().unwrap().contains("Out Of Range"));
}
