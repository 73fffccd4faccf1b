use super::types::{Judgment, Rgba};
use crate::error::{HitScoreError, HsResult};

/// Position of `value` between `a` and `b`, clamped to [0, 1].
#[inline(always)]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        return 0.0;
    }
    ((value - a) / (b - a)).clamp(0.0, 1.0)
}

// Weighted form so that t = 0 and t = 1 reproduce the endpoints exactly.
#[inline(always)]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

impl Rgba {
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        Rgba {
            r: lerp(self.r, other.r, t),
            g: lerp(self.g, other.g, t),
            b: lerp(self.b, other.b, t),
            glow: lerp(self.glow, other.glow, t),
        }
    }
}

/// Color for `entry`, matched at `index` of `table`.
///
/// A fading entry blends toward `table[index - 1]` as `score` approaches that
/// entry's threshold. Fading at index 0 has nothing to blend toward and is
/// reported as an invalid configuration.
pub fn resolve_color(table: &[Judgment], index: usize, entry: &Judgment, score: i32) -> HsResult<Rgba> {
    if !entry.fade {
        return Ok(entry.color);
    }

    let prev = index
        .checked_sub(1)
        .and_then(|i| table.get(i))
        .ok_or_else(|| {
            HitScoreError::InvalidConfiguration(format!(
                "judgment '{}' (threshold {}) fades but has no higher judgment to fade toward",
                entry.text, entry.threshold
            ))
        })?;

    let t = inverse_lerp(entry.threshold as f32, prev.threshold as f32, score as f32);
    Ok(entry.color.lerp(prev.color, t))
}
