// Copyright 2025 the plotgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default tick label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};

/// Formats a tick value the way JavaScript's `String(number)` does.
///
/// Integral values have no fractional part, `-0` prints as `0`, and magnitudes of
/// at least `1e21` or below `1e-6` switch to exponent notation with an explicit
/// sign (`1e+21`, `2.5e-7`).
pub fn format_value(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let magnitude = v.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{v}");
    }

    let exp = format!("{v:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}
