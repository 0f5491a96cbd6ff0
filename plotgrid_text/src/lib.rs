// Copyright 2025 the plotgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement for grid labels.
//!
//! The grid renderer decides whether a tick label fits by asking for its width.
//! Shaping and glyph rasterization stay with the caller: this crate only defines
//! the measurement seam ([`TextMeasurer`]) and a [`Font`] handle bundling a style
//! with the measurer that knows how to size it.
//!
//! Everything here is `no_std` (with `alloc`), so native shaping engines and web
//! canvas measurement can implement the same trait.

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// Measures single lines of text.
///
/// Implementations can be heuristic ([`HeuristicTextMeasurer`]) or backed by a
/// real shaping engine.
pub trait TextMeasurer {
    /// Measure `text` as a single line set in `style`.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Styling inputs relevant to measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in the chart's coordinate system (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// CSS-style weight (`400` normal, `700` bold).
    pub font_weight: u16,
}

impl TextStyle {
    /// Creates a sans-serif, normal-weight style at `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: 400,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, weight: u16) -> Self {
        self.font_weight = weight;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// CSS `serif`.
    Serif,
    /// CSS `sans-serif`.
    SansSerif,
    /// CSS `monospace`.
    Monospace,
    /// A named family such as `"Inter"`.
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the family as it would appear in a CSS `font-family` declaration.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// Metrics for one measured line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// Horizontal advance of the whole line.
    pub advance_width: f64,
    /// Baseline to top of typical glyphs.
    pub ascent: f64,
    /// Baseline to bottom of typical glyphs.
    pub descent: f64,
    /// Extra spacing beyond `ascent + descent`.
    pub leading: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// Assumes ~0.6em per glyph and a baseline at 0.8em.
///
/// Good enough for demos and tests; plug in a shaping-backed measurer for
/// pixel-accurate label fitting.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let size = style.font_size;
        TextMetrics {
            advance_width: 0.6 * size * text.chars().count() as f64,
            ascent: 0.8 * size,
            descent: 0.2 * size,
            leading: 0.0,
        }
    }
}

/// A font handle: a [`TextStyle`] plus the measurer used to size text set in it.
///
/// Cloning is cheap; the measurer is shared.
#[derive(Clone)]
pub struct Font {
    style: TextStyle,
    measurer: Arc<dyn TextMeasurer>,
}

impl Font {
    /// Creates a font from a style and a measurer.
    pub fn new(style: TextStyle, measurer: impl TextMeasurer + 'static) -> Self {
        Self {
            style,
            measurer: Arc::new(measurer),
        }
    }

    /// Creates a font sharing an existing measurer.
    pub fn with_shared_measurer(style: TextStyle, measurer: Arc<dyn TextMeasurer>) -> Self {
        Self { style, measurer }
    }

    /// Shorthand for a default-styled font at `font_size` measured heuristically.
    pub fn heuristic(font_size: f64) -> Self {
        Self::new(TextStyle::new(font_size), HeuristicTextMeasurer)
    }

    /// Returns the font size.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.style.font_size
    }

    /// Returns the style.
    #[must_use]
    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Returns the advance width of `text`.
    pub fn text_width(&self, text: &str) -> f64 {
        self.metrics(text).advance_width
    }

    /// Returns the full metrics of `text`.
    pub fn metrics(&self, text: &str) -> TextMetrics {
        self.measurer.measure(text, &self.style)
    }
}

impl core::fmt::Debug for Font {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Font")
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

/// Two fonts are equal when they share a style and the same measurer instance.
impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.style == other.style && Arc::ptr_eq(&self.measurer, &other.measurer)
    }
}
