// Copyright 2025 the plotgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS color strings for grid configuration.

extern crate alloc;

use alloc::string::ToString;

use peniko::Color;
use peniko::color::palette::css;
use peniko::color::{Srgb, parse_color};

use crate::GridError;

/// Parses any CSS color syntax (`black`, `#0004`, `hsla(0, 0%, 0%, 0.25)`, ...).
pub fn parse_css_color(input: &str) -> Result<Color, GridError> {
    parse_color(input)
        .map(|c| c.to_alpha_color::<Srgb>())
        .map_err(|reason| GridError::InvalidColor {
            input: input.to_string(),
            reason,
        })
}

/// Grid line color: `hsla(0, 0%, 0%, 0.25)`.
pub fn default_line_color() -> Color {
    css::BLACK.with_alpha(0.25)
}

/// Boundary axis line color: `black`.
pub fn default_axis_color() -> Color {
    css::BLACK
}
