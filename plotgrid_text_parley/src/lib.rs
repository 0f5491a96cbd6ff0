// Copyright 2025 the plotgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shaping-aware label measurement.
//!
//! [`ParleyTextMeasurer`] implements [`plotgrid_text::TextMeasurer`] on top of
//! Parley, so a [`plotgrid_text::Font`] built with it reports the widths real
//! glyphs will occupy. Only the first line of the input is measured.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use core::cell::RefCell;

use parley::style::{FontFamily as ParleyFamily, FontStack, GenericFamily, StyleProperty};
use parley::{Alignment, AlignmentOptions, FontContext, FontWeight, LayoutContext};
use plotgrid_text::{FontFamily, TextMeasurer, TextMetrics, TextStyle};

/// A [`TextMeasurer`] that shapes text with Parley using the system font collection.
pub struct ParleyTextMeasurer {
    font_cx: RefCell<FontContext>,
    layout_cx: RefCell<LayoutContext<()>>,
    display_scale: f32,
}

impl core::fmt::Debug for ParleyTextMeasurer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyTextMeasurer")
            .field("display_scale", &self.display_scale)
            .finish_non_exhaustive()
    }
}

impl ParleyTextMeasurer {
    /// Creates a measurer with a display scale of `1.0`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            font_cx: RefCell::new(FontContext::new()),
            layout_cx: RefCell::new(LayoutContext::new()),
            display_scale: 1.0,
        }
    }

    /// Sets the device pixel ratio used for shaping.
    ///
    /// Returned metrics are always in logical units.
    #[must_use]
    pub fn with_display_scale(mut self, display_scale: f32) -> Self {
        self.display_scale = display_scale.max(0.0);
        self
    }

    fn font_stack(family: &FontFamily) -> FontStack<'_> {
        FontStack::from(match family {
            FontFamily::Serif => ParleyFamily::Generic(GenericFamily::Serif),
            FontFamily::SansSerif => ParleyFamily::Generic(GenericFamily::SansSerif),
            FontFamily::Monospace => ParleyFamily::Generic(GenericFamily::Monospace),
            FontFamily::Named(name) => ParleyFamily::Named(Cow::Borrowed(name.as_ref())),
        })
    }

    fn font_size_f32(font_size: f64) -> f32 {
        if !font_size.is_finite() || font_size <= 0.0 {
            return 0.0;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "clamped to the f32 range first"
        )]
        {
            font_size.min(f64::from(f32::MAX)) as f32
        }
    }
}

impl Default for ParleyTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for ParleyTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let text = text.split('\n').next().unwrap_or("");
        if text.is_empty() {
            return TextMetrics::default();
        }

        let scale = self.display_scale.max(1.0e-6);
        let mut font_cx = self.font_cx.borrow_mut();
        let mut layout_cx = self.layout_cx.borrow_mut();

        let mut builder = layout_cx.ranged_builder(&mut font_cx, text, scale, true);
        builder.push_default(StyleProperty::FontSize(Self::font_size_f32(style.font_size)));
        builder.push_default(StyleProperty::FontStack(Self::font_stack(
            &style.font_family,
        )));
        builder.push_default(StyleProperty::FontWeight(FontWeight::new(f32::from(
            style.font_weight,
        ))));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, Alignment::Start, AlignmentOptions::default());

        let Some(line) = layout.lines().next() else {
            return TextMetrics::default();
        };
        let m = line.metrics();
        let scale = f64::from(scale);
        TextMetrics {
            advance_width: f64::from(m.advance) / scale,
            ascent: f64::from(m.ascent) / scale,
            descent: f64::from(m.descent) / scale,
            leading: f64::from(m.leading) / scale,
        }
    }
}
