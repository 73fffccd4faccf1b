use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use hitscore::config::Configuration;
use hitscore::judgment::{
    ChainLinkDisplay, JudgmentDisplay, JudgmentSegment, JudgmentTable, Rgba, ScoringType,
    TimeDependenceJudgmentSegment,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayRow {
    pub cut: usize,
    pub scoring_type: String,
    pub display: Option<JudgmentDisplay>,
    pub error: Option<String>,
}

impl ReplayRow {
    pub fn pending(cut: usize, scoring_type: String) -> Self {
        Self {
            cut,
            scoring_type,
            display: None,
            error: None,
        }
    }

    pub fn failed(cut: usize, scoring_type: String, error: String) -> Self {
        Self {
            cut,
            scoring_type,
            display: None,
            error: Some(error),
        }
    }
}

fn to_channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn swatch(color: Rgba) -> Cell {
    Cell::new("■■").fg(Color::Rgb {
        r: to_channel(color.r),
        g: to_channel(color.g),
        b: to_channel(color.b),
    })
}

// Newlines would break the table layout.
fn escape(text: &str) -> String {
    text.replace('\n', "\\n")
}

pub fn print_judgment(scoring_type: ScoringType, display: Option<&JudgmentDisplay>) {
    match display {
        Some(d) => {
            println!("text:  {:?}", d.text);
            println!("color: {}", d.color);
        }
        None => println!("no judgment ({} leaves the display untouched)", scoring_type),
    }
}

pub fn print_settings(config: &Configuration) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let fixed = match config.fixed_position() {
        Some([x, y, z]) => format!("({}, {}, {})", x, y, z),
        None => "off".to_string(),
    };

    table.add_row(vec![
        Cell::new("Display Mode").add_attribute(Attribute::Bold),
        Cell::new(config.display_mode.as_ref()),
    ]);
    table.add_row(vec![
        Cell::new("Fixed Position").add_attribute(Attribute::Bold),
        Cell::new(fixed),
    ]);
    table.add_row(vec![
        Cell::new("Intermediate Updates").add_attribute(Attribute::Bold),
        Cell::new(config.do_intermediate_updates),
    ]);
    table.add_row(vec![
        Cell::new("Time Dependence").add_attribute(Attribute::Bold),
        Cell::new(format!(
            "x10^{}, {} decimals",
            config.time_dependence_decimal_offset, config.time_dependence_decimal_precision
        )),
    ]);
    println!("{}", table);
}

pub fn print_judgment_table(title: &str, judgments: &JudgmentTable) {
    println!("\n{}", title);
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Threshold").add_attribute(Attribute::Bold),
        Cell::new("Text").add_attribute(Attribute::Bold),
        Cell::new("Color").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new("Fade").add_attribute(Attribute::Bold),
    ]);

    for j in judgments.entries() {
        table.add_row(vec![
            Cell::new(j.threshold).set_alignment(CellAlignment::Right),
            Cell::new(escape(&j.text)),
            Cell::new(j.color),
            swatch(j.color),
            Cell::new(if j.fade { "yes" } else { "" }).fg(Color::Yellow),
        ]);
    }
    println!("{}", table);
}

pub fn print_chain_link(link: &ChainLinkDisplay) {
    println!("\nChain Link Display");
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new(escape(&link.text)),
        Cell::new(link.color),
        swatch(link.color),
    ]);
    println!("{}", table);
}

pub fn print_segment_table(title: &str, segments: Option<&[JudgmentSegment]>) {
    println!("\n{}", title);
    let Some(segments) = segments else {
        println!("(none)");
        return;
    };

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("Threshold").add_attribute(Attribute::Bold),
        Cell::new("Text").add_attribute(Attribute::Bold),
    ]);
    for s in segments {
        table.add_row(vec![
            Cell::new(s.threshold).set_alignment(CellAlignment::Right),
            Cell::new(escape(&s.text)),
        ]);
    }
    println!("{}", table);
}

pub fn print_time_segment_table(segments: Option<&[TimeDependenceJudgmentSegment]>) {
    println!("\nTime Dependence Judgments");
    let Some(segments) = segments else {
        println!("(none)");
        return;
    };

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("Threshold").add_attribute(Attribute::Bold),
        Cell::new("Text").add_attribute(Attribute::Bold),
    ]);
    for s in segments {
        table.add_row(vec![
            Cell::new(s.threshold).set_alignment(CellAlignment::Right),
            Cell::new(escape(&s.text)),
        ]);
    }
    println!("{}", table);
}

pub fn print_replay_report(rows: &[ReplayRow]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Type").add_attribute(Attribute::Bold),
        Cell::new("Text").fg(Color::Cyan),
        Cell::new("Color"),
        Cell::new(""),
    ]);

    if let Some(col) = table.column_mut(0) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for row in rows {
        let mut cells = vec![Cell::new(row.cut), Cell::new(&row.scoring_type)];
        match (&row.display, &row.error) {
            (_, Some(err)) => {
                cells.push(Cell::new(err).fg(Color::Red));
                cells.push(Cell::new(""));
                cells.push(Cell::new(""));
            }
            (Some(d), None) => {
                cells.push(Cell::new(escape(&d.text)).fg(Color::Cyan));
                cells.push(Cell::new(d.color));
                cells.push(swatch(d.color));
            }
            (None, None) => {
                cells.push(Cell::new("-"));
                cells.push(Cell::new(""));
                cells.push(Cell::new(""));
            }
        }
        table.add_row(cells);
    }
    println!("{}", table);
}
