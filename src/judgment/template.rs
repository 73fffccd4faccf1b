//! Percent-directive expansion for `"format"` display mode.
//!
//! | Directive | Expands to |
//! |---|---|
//! | `%b` `%c` `%a` | before-cut, accuracy and after-cut scores |
//! | `%B` `%C` `%A` | matching segment text for those scores |
//! | `%t` | time dependence, scaled and rounded |
//! | `%T` | matching time-dependence segment, itself expanded with `%t` |
//! | `%s` | total score |
//! | `%p` | percentage of the maximum cut score |
//! | `%%` | a literal `%` |
//! | `%n` | a newline |
//!
//! Anything else after a `%` is left in place, so `%q` stays `%q`.

use super::table::{find_match, segment_text};
use super::types::JudgmentSegment;
use crate::config::Configuration;

/// Directive letters a scoring event can resolve.
///
/// `%%` and `%n` are handled by [`expand`] itself.
pub trait Directives {
    /// Appends the expansion of `specifier` to `out`.
    /// Returns `false` when this context does not define `specifier`.
    fn write_directive(&self, specifier: char, out: &mut String) -> bool;
}

pub fn expand<D: Directives + ?Sized>(format: &str, directives: &D) -> String {
    let mut out = String::with_capacity(format.len());
    let mut rest = format;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);

        let mut tail = rest[pos + 1..].chars();
        // A trailing '%' reads as "% ", which passes through.
        let specifier = tail.next().unwrap_or(' ');

        match specifier {
            '%' => out.push('%'),
            'n' => out.push('\n'),
            other => {
                if !directives.write_directive(other, &mut out) {
                    out.push('%');
                    out.push(other);
                }
            }
        }

        rest = tail.as_str();
    }

    out.push_str(rest);
    out
}

/// Upper bound on `%t` decimals; larger settings are clamped.
pub const MAX_DECIMAL_PRECISION: usize = 16;

pub fn format_time_dependence(time_dependence: f32, decimal_offset: i32, decimal_precision: usize) -> String {
    let scaled = time_dependence as f64 * 10f64.powi(decimal_offset);
    format!("{:.*}", decimal_precision.min(MAX_DECIMAL_PRECISION), scaled)
}

/// `score / max_cut_score` as a whole percentage, rounded half away from zero.
pub fn format_percentage(score: i32, max_cut_score: i32) -> String {
    if max_cut_score <= 0 {
        return "0".to_string();
    }
    let percent = (score as f64 / max_cut_score as f64 * 100.0).round();
    (percent as i64).to_string()
}

/// The only directive a time-dependence segment's own text may use is `%t`.
pub struct TimeSegmentDirectives {
    pub time_dependence: f32,
    pub decimal_offset: i32,
    pub decimal_precision: usize,
}

impl Directives for TimeSegmentDirectives {
    fn write_directive(&self, specifier: char, out: &mut String) -> bool {
        if specifier != 't' {
            return false;
        }
        out.push_str(&format_time_dependence(
            self.time_dependence,
            self.decimal_offset,
            self.decimal_precision,
        ));
        true
    }
}

/// Expanded text of the matching time-dependence segment, or empty.
pub fn time_dependence_segment_text(config: &Configuration, time_dependence: f32) -> String {
    let Some(table) = config.time_dependence_judgments.as_deref() else {
        return String::new();
    };

    match find_match(table, time_dependence) {
        Some((_, segment)) => expand(
            &segment.text,
            &TimeSegmentDirectives {
                time_dependence,
                decimal_offset: config.time_dependence_decimal_offset,
                decimal_precision: config.time_dependence_decimal_precision,
            },
        ),
        None => String::new(),
    }
}

/// Values available to a judgment's format string.
///
/// A score component left as `None` is not part of the event, so its lower and
/// upper case directives pass through untouched.
pub struct CutDirectives<'a> {
    pub config: &'a Configuration,
    pub score: i32,
    pub max_cut_score: i32,
    pub time_dependence: f32,
    pub before: Option<i32>,
    pub accuracy: Option<i32>,
    pub after: Option<i32>,
}

impl CutDirectives<'_> {
    fn write_score(out: &mut String, value: Option<i32>) -> bool {
        match value {
            Some(v) => {
                out.push_str(&v.to_string());
                true
            }
            None => false,
        }
    }

    fn write_segment(out: &mut String, value: Option<i32>, table: Option<&[JudgmentSegment]>) -> bool {
        match value {
            Some(v) => {
                out.push_str(segment_text(table, v));
                true
            }
            None => false,
        }
    }
}

impl Directives for CutDirectives<'_> {
    fn write_directive(&self, specifier: char, out: &mut String) -> bool {
        let config = self.config;
        match specifier {
            'b' => Self::write_score(out, self.before),
            'c' => Self::write_score(out, self.accuracy),
            'a' => Self::write_score(out, self.after),
            'B' => Self::write_segment(out, self.before, config.before_cut_angle_judgments.as_deref()),
            'C' => Self::write_segment(out, self.accuracy, config.accuracy_judgments.as_deref()),
            'A' => Self::write_segment(out, self.after, config.after_cut_angle_judgments.as_deref()),
            't' => {
                out.push_str(&format_time_dependence(
                    self.time_dependence,
                    config.time_dependence_decimal_offset,
                    config.time_dependence_decimal_precision,
                ));
                true
            }
            'T' => {
                out.push_str(&time_dependence_segment_text(config, self.time_dependence));
                true
            }
            's' => {
                out.push_str(&self.score.to_string());
                true
            }
            'p' => {
                out.push_str(&format_percentage(self.score, self.max_cut_score));
                true
            }
            _ => false,
        }
    }
}
