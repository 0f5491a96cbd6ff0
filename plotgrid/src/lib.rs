// Copyright 2025 the plotgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart grid lines and tick labels as plain draw instructions.
//!
//! Given an x and a y [`AxisScale`], a [`GridSpec`] produces:
//! - a vertical grid line per x tick and a horizontal one per y tick,
//! - tick labels, but only those that fit inside the visible plot, and
//! - a heavier boundary line along the top of the plot.
//!
//! The output is a `Vec<DrawInstruction>` in paint order; painting it is up to the
//! caller's rendering surface. Text is measured through
//! [`plotgrid_text::TextMeasurer`] so shaping stays downstream.
//!
//! ```
//! use plotgrid::{Font, GridSpec, ScaleLinear};
//!
//! let x = ScaleLinear::new((0.0, 10.0), (40.0, 340.0));
//! let y = ScaleLinear::new((0.0, 100.0), (220.0, 20.0));
//! let font = Font::heuristic(12.0);
//!
//! let grid = GridSpec::new().with_x_ticks(5).with_y_ticks(5);
//! let instructions = grid.render(&x, &y, Some(&font));
//! assert!(!instructions.is_empty());
//! ```

#![no_std]

extern crate alloc;

mod color;
mod draw;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod grid;
#[cfg(test)]
mod grid_tests;
mod scale;

pub use color::{default_axis_color, default_line_color, parse_css_color};
pub use draw::{DrawInstruction, GridLine, TickLabel};
pub use error::GridError;
pub use format::format_value;
pub use grid::{
    BOUNDARY_STROKE_WIDTH, GridSpec, LabelFormatter, clears_top_boundary, fits_horizontally,
};
pub use plotgrid_text::{
    Font, FontFamily, HeuristicTextMeasurer, TextMeasurer, TextMetrics, TextStyle,
};
pub use scale::{AxisScale, ScaleLinear};
