// Copyright 2025 the plotgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid lines and tick labels for a two-axis plot.
//!
//! [`GridSpec::render`] reads two [`AxisScale`]s and produces, in paint order:
//! - one vertical line per x tick, each followed by its label when it fits,
//! - one horizontal line per y tick, each followed by its label when it fits,
//! - a 2px boundary line along the top edge of the plot.
//!
//! Labels are only produced when a [`Font`] is supplied. A label that would not
//! fit is dropped whole; it is never clipped or nudged back into view.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use log::{debug, trace};
use peniko::Color;
use plotgrid_text::Font;

use crate::color::{default_axis_color, default_line_color, parse_css_color};
use crate::draw::{DrawInstruction, GridLine, TickLabel};
use crate::format::format_value;
use crate::scale::AxisScale;
use crate::GridError;

/// Stroke width of the top boundary line.
pub const BOUNDARY_STROKE_WIDTH: f64 = 2.0;

/// A label formatter: tick value in, display text out.
pub type LabelFormatter = Arc<dyn Fn(f64) -> String>;

/// Grid configuration.
///
/// Everything except the scales and the font: those change with layout and are
/// passed to [`GridSpec::render`] on each pass.
#[derive(Clone)]
pub struct GridSpec {
    /// Extra padding between the plot edge and the tick labels.
    pub label_offset: f64,
    /// Approximate number of x ticks.
    pub x_ticks: usize,
    /// Approximate number of y ticks.
    pub y_ticks: usize,
    /// Color of the tick grid lines.
    pub line_color: Color,
    /// Color of the top boundary line.
    pub axis_color: Color,
    /// Formats x tick values.
    pub format_x_label: LabelFormatter,
    /// Formats y tick values.
    pub format_y_label: LabelFormatter,
}

impl core::fmt::Debug for GridSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridSpec")
            .field("label_offset", &self.label_offset)
            .field("x_ticks", &self.x_ticks)
            .field("y_ticks", &self.y_ticks)
            .field("line_color", &self.line_color)
            .field("axis_color", &self.axis_color)
            .finish_non_exhaustive()
    }
}

impl Default for GridSpec {
    /// Ten ticks per axis, no label offset, translucent black grid lines, a black
    /// boundary and labels formatted with [`format_value`].
    fn default() -> Self {
        Self {
            label_offset: 0.0,
            x_ticks: 10,
            y_ticks: 10,
            line_color: default_line_color(),
            axis_color: default_axis_color(),
            format_x_label: Arc::new(format_value),
            format_y_label: Arc::new(format_value),
        }
    }
}

impl GridSpec {
    /// Same as [`GridSpec::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label offset.
    #[must_use]
    pub fn with_label_offset(mut self, label_offset: f64) -> Self {
        self.label_offset = label_offset;
        self
    }

    /// Sets the approximate number of x ticks.
    #[must_use]
    pub fn with_x_ticks(mut self, x_ticks: usize) -> Self {
        self.x_ticks = x_ticks;
        self
    }

    /// Sets the approximate number of y ticks.
    #[must_use]
    pub fn with_y_ticks(mut self, y_ticks: usize) -> Self {
        self.y_ticks = y_ticks;
        self
    }

    /// Sets the grid line color.
    #[must_use]
    pub fn with_line_color(mut self, color: impl Into<Color>) -> Self {
        self.line_color = color.into();
        self
    }

    /// Sets the boundary line color.
    #[must_use]
    pub fn with_axis_color(mut self, color: impl Into<Color>) -> Self {
        self.axis_color = color.into();
        self
    }

    /// Sets the grid line color from a CSS color string.
    pub fn with_line_color_css(self, color: &str) -> Result<Self, GridError> {
        Ok(self.with_line_color(parse_css_color(color)?))
    }

    /// Sets the boundary line color from a CSS color string.
    pub fn with_axis_color_css(self, color: &str) -> Result<Self, GridError> {
        Ok(self.with_axis_color(parse_css_color(color)?))
    }

    /// Sets the x label formatter.
    #[must_use]
    pub fn with_x_formatter(mut self, f: impl Fn(f64) -> String + 'static) -> Self {
        self.format_x_label = Arc::new(f);
        self
    }

    /// Sets the y label formatter.
    #[must_use]
    pub fn with_y_formatter(mut self, f: impl Fn(f64) -> String + 'static) -> Self {
        self.format_y_label = Arc::new(f);
        self
    }

    /// Generates the grid's draw instructions.
    ///
    /// Returns an empty list when either domain lacks two finite bounds or the x
    /// range lacks a finite second bound. Without a `font` only lines are drawn.
    pub fn render<X, Y>(&self, x: &X, y: &Y, font: Option<&Font>) -> Vec<DrawInstruction>
    where
        X: AxisScale + ?Sized,
        Y: AxisScale + ?Sized,
    {
        let Some(bounds) = PlotBounds::read(x, y) else {
            debug!(
                "grid skipped: undefined bounds (x domain {:?}, y domain {:?}, x range {:?})",
                x.domain(),
                y.domain(),
                x.range()
            );
            return Vec::new();
        };

        let font_size = font.map_or(0.0, Font::size);
        let top = y.map(bounds.y2);
        let bottom = y.map(bounds.y1);
        let left = x.map(bounds.x1);
        let right = x.map(bounds.x2);

        let mut out = Vec::new();

        for tick in x.ticks(self.x_ticks) {
            let tx = x.map(tick);
            out.push(GridLine::vertical(tx, top, bottom, self.line_color).into());

            let Some(font) = font else {
                continue;
            };
            let text = (self.format_x_label)(tick);
            let width = font.text_width(&text);
            let label_x = tx - width / 2.0;
            if fits_horizontally(label_x, width, bounds.x_range_end) {
                let label_y = top + self.label_offset + font_size;
                out.push(TickLabel::new(text, (label_x, label_y), font.clone()).into());
            } else {
                trace!(
                    "x label {text:?} dropped: [{label_x}, {}] does not end before {}",
                    label_x + width,
                    bounds.x_range_end
                );
            }
        }

        for tick in y.ticks(self.y_ticks) {
            let ty = y.map(tick);
            out.push(GridLine::horizontal(ty, left, right, self.line_color).into());

            let Some(font) = font else {
                continue;
            };
            let label_y = ty + font_size / 3.0;
            let text = (self.format_y_label)(tick);
            if clears_top_boundary(label_y, font_size) {
                let width = font.text_width(&text);
                let label_x = left - (width + self.label_offset);
                out.push(TickLabel::new(text, (label_x, label_y), font.clone()).into());
            } else {
                trace!("y label {text:?} dropped: baseline {label_y} within {font_size} of top");
            }
        }

        out.push(
            GridLine::horizontal(top, left, right, self.axis_color)
                .with_stroke_width(BOUNDARY_STROKE_WIDTH)
                .into(),
        );
        out
    }
}

/// Whether an x label spanning `[label_x, label_x + width]` ends strictly before
/// `right_edge`.
///
/// Zero-width (and `NaN`-width) labels never fit.
pub fn fits_horizontally(label_x: f64, width: f64, right_edge: f64) -> bool {
    width > 0.0 && label_x + width < right_edge
}

/// Whether a y label with baseline `label_y` stays below the top of the surface.
pub fn clears_top_boundary(label_y: f64, font_size: f64) -> bool {
    label_y > font_size
}

/// The scale bounds a render pass depends on.
#[derive(Clone, Copy, Debug)]
struct PlotBounds {
    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,
    x_range_end: f64,
}

impl PlotBounds {
    fn read<X, Y>(x: &X, y: &Y) -> Option<Self>
    where
        X: AxisScale + ?Sized,
        Y: AxisScale + ?Sized,
    {
        let bound = |values: &[f64], i: usize| values.get(i).copied().filter(|v| v.is_finite());
        Some(Self {
            x1: bound(x.domain(), 0)?,
            x2: bound(x.domain(), 1)?,
            y1: bound(y.domain(), 0)?,
            y2: bound(y.domain(), 1)?,
            x_range_end: bound(x.range(), 1)?,
        })
    }
}
