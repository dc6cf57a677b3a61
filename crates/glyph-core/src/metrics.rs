//! Glyph width providers.
//!
//! The layout only needs a bounding-box width per character. Real widths come
//! from glyph geometry owned by the renderer; until that geometry exists a
//! provider answers `None` and the layout falls back to a constant.

use crate::constants::GLYPH_SIZE;
use fnv::FnvHashMap;

pub trait GlyphMetrics {
    /// Bounding-box width of `ch`, or `None` if its geometry is not available yet.
    fn measure(&self, ch: char) -> Option<f32>;
}

impl<F> GlyphMetrics for F
where
    F: Fn(char) -> Option<f32>,
{
    fn measure(&self, ch: char) -> Option<f32> {
        self(ch)
    }
}

/// Widths looked up from a table filled by whoever owns the glyph meshes.
#[derive(Clone, Debug, Default)]
pub struct MetricsTable {
    widths: FnvHashMap<char, f32>,
}

impl MetricsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ch: char, width: f32) {
        if width.is_finite() && width >= 0.0 {
            self.widths.insert(ch, width);
        } else {
            log::warn!("[metrics] ignoring invalid width {width} for {ch:?}");
        }
    }

    pub fn with(mut self, ch: char, width: f32) -> Self {
        self.insert(ch, width);
        self
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

impl FromIterator<(char, f32)> for MetricsTable {
    fn from_iter<I: IntoIterator<Item = (char, f32)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (ch, width) in iter {
            table.insert(ch, width);
        }
        table
    }
}

impl GlyphMetrics for MetricsTable {
    fn measure(&self, ch: char) -> Option<f32> {
        self.widths.get(&ch).copied()
    }
}

/// Rough proportional widths by character class, scaled to a glyph size.
///
/// Stands in for font geometry when no mesh data is around (native driver).
#[derive(Clone, Copy, Debug)]
pub struct ProportionalMetrics {
    pub size: f32,
}

impl Default for ProportionalMetrics {
    fn default() -> Self {
        Self { size: GLYPH_SIZE }
    }
}

impl GlyphMetrics for ProportionalMetrics {
    fn measure(&self, ch: char) -> Option<f32> {
        let em = match ch {
            'i' | 'j' | 'l' | '!' | '.' | ',' | '\'' | ':' | ';' | '|' => 0.22,
            'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' => 0.36,
            'm' | 'w' => 0.82,
            'M' | 'W' => 0.9,
            c if c.is_ascii_digit() => 0.56,
            c if c.is_uppercase() => 0.68,
            _ => 0.54,
        };
        Some(em * self.size)
    }
}
