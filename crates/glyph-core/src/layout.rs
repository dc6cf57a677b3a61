//! Single-line, left-to-right glyph layout centered on x = 0.

use crate::constants::{BLANK_WIDTH, FALLBACK_WIDTH, GAP};
use crate::metrics::GlyphMetrics;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutOptions {
    pub gap: f32,
    pub fallback_width: f32,
    pub blank_width: f32,
    /// Drop blanks entirely instead of giving them a placeholder slot.
    pub skip_blanks: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            gap: GAP,
            fallback_width: FALLBACK_WIDTH,
            blank_width: BLANK_WIDTH,
            skip_blanks: false,
        }
    }
}

/// One positioned glyph. `x` is the left edge after centering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSlot {
    /// Position of the character in the source string.
    pub index: usize,
    pub ch: char,
    pub width: f32,
    pub x: f32,
    pub measured: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutResult {
    pub slots: Vec<LayoutSlot>,
    /// Sum of `width + gap` over all slots (trailing gap included).
    pub total_width: f32,
}

impl LayoutResult {
    pub fn offsets(&self) -> Vec<f32> {
        self.slots.iter().map(|s| s.x).collect()
    }

    /// True once every width came from real glyph geometry.
    pub fn is_measured(&self) -> bool {
        self.slots.iter().all(|s| s.measured)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Left edges for `widths` laid out with `gap`, shifted so the row is centered.
///
/// Returns the offsets and the total width (including the trailing gap).
pub fn centered_offsets(widths: &[f32], gap: f32) -> (Vec<f32>, f32) {
    let mut offsets = Vec::with_capacity(widths.len());
    let mut offset = 0.0_f32;
    for w in widths {
        offsets.push(offset);
        offset += w + gap;
    }
    let half = offset / 2.0;
    for x in &mut offsets {
        *x -= half;
    }
    (offsets, offset)
}

/// Measure and position `chars`. Never fails; unmeasurable glyphs get the fallback width.
pub fn layout<M: GlyphMetrics + ?Sized>(
    chars: &[char],
    metrics: &M,
    opts: &LayoutOptions,
) -> LayoutResult {
    let mut slots = Vec::with_capacity(chars.len());
    for (index, &ch) in chars.iter().enumerate() {
        if ch.is_whitespace() {
            if opts.skip_blanks {
                continue;
            }
            slots.push(LayoutSlot {
                index,
                ch,
                width: opts.blank_width,
                x: 0.0,
                measured: true,
            });
            continue;
        }
        let (width, measured) = match metrics.measure(ch) {
            Some(w) if w.is_finite() && w >= 0.0 => (w, true),
            _ => (opts.fallback_width, false),
        };
        slots.push(LayoutSlot {
            index,
            ch,
            width,
            x: 0.0,
            measured,
        });
    }

    let widths: Vec<f32> = slots.iter().map(|s| s.width).collect();
    let (offsets, total_width) = centered_offsets(&widths, opts.gap);
    for (slot, x) in slots.iter_mut().zip(offsets) {
        slot.x = x;
    }

    let result = LayoutResult { slots, total_width };
    log::debug!(
        "[layout] glyphs={} total_width={:.3} measured={}",
        result.len(),
        result.total_width,
        result.is_measured()
    );
    result
}
