// Copyright 2025 the plotgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw instructions produced by the grid.
//!
//! These are plain values: a rendering surface walks the list in order and paints
//! each one, so later instructions land on top of earlier ones.

extern crate alloc;

use alloc::string::String;

use kurbo::{Line, Point};
use peniko::Color;
use plotgrid_text::Font;

/// A stroked straight segment (grid line or axis boundary).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    /// Segment endpoints in scene coordinates.
    pub line: Line,
    /// Stroke color.
    pub color: Color,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl GridLine {
    /// Creates a 1px line between two points.
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>, color: Color) -> Self {
        Self {
            line: Line::new(p0, p1),
            color,
            stroke_width: 1.0,
        }
    }

    /// Creates a horizontal line at `y` from `x0` to `x1`.
    pub fn horizontal(y: f64, x0: f64, x1: f64, color: Color) -> Self {
        Self::new((x0, y), (x1, y), color)
    }

    /// Creates a vertical line at `x` from `y0` to `y1`.
    pub fn vertical(x: f64, y0: f64, y1: f64, color: Color) -> Self {
        Self::new((x, y0), (x, y1), color)
    }

    /// Sets the stroke width.
    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }
}

/// A single-line text label.
#[derive(Clone, Debug, PartialEq)]
pub struct TickLabel {
    /// Text content (unshaped).
    pub text: String,
    /// Left edge of the text on its baseline, in scene coordinates.
    pub pos: Point,
    /// Font to draw with; the same font the label was measured with.
    pub font: Font,
}

impl TickLabel {
    /// Creates a label anchored at `pos`.
    pub fn new(text: impl Into<String>, pos: impl Into<Point>, font: Font) -> Self {
        Self {
            text: text.into(),
            pos: pos.into(),
            font,
        }
    }
}

/// One step of a paint pass.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawInstruction {
    /// Stroke a segment.
    Line(GridLine),
    /// Fill a text label.
    Label(TickLabel),
}

impl DrawInstruction {
    /// Returns the line, if this is a line instruction.
    pub fn as_line(&self) -> Option<&GridLine> {
        match self {
            Self::Line(line) => Some(line),
            Self::Label(_) => None,
        }
    }

    /// Returns the label, if this is a label instruction.
    pub fn as_label(&self) -> Option<&TickLabel> {
        match self {
            Self::Label(label) => Some(label),
            Self::Line(_) => None,
        }
    }
}

impl From<GridLine> for DrawInstruction {
    fn from(value: GridLine) -> Self {
        Self::Line(value)
    }
}

impl From<TickLabel> for DrawInstruction {
    fn from(value: TickLabel) -> Self {
        Self::Label(value)
    }
}
