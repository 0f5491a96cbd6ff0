// Copyright 2025 the plotgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Continuous scales.
//!
//! The grid renderer only needs the [`AxisScale`] trait. [`ScaleLinear`] is the
//! stock implementation and follows d3's linear scale: ticks are "nice" multiples
//! of 1, 2 or 5 times a power of ten and always lie inside the domain.

extern crate alloc;

use alloc::vec::Vec;

use log::debug;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A mapping from data values to pixel coordinates.
///
/// `domain` and `range` are d3-style bound lists: the first two entries are the
/// bounds the grid reads. A list shorter than two entries leaves the missing bound
/// undefined, which makes the grid render nothing.
pub trait AxisScale {
    /// Maps a domain value to a pixel coordinate.
    fn map(&self, value: f64) -> f64;

    /// Returns the domain bounds.
    fn domain(&self) -> &[f64];

    /// Returns the range bounds.
    fn range(&self) -> &[f64];

    /// Returns approximately `count` representative domain values.
    fn ticks(&self, count: usize) -> Vec<f64>;
}

impl<S: AxisScale + ?Sized> AxisScale for &S {
    fn map(&self, value: f64) -> f64 {
        (**self).map(value)
    }

    fn domain(&self) -> &[f64] {
        (**self).domain()
    }

    fn range(&self) -> &[f64] {
        (**self).range()
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        (**self).ticks(count)
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: [f64; 2],
    range: [f64; 2],
}

impl ScaleLinear {
    /// Creates a scale mapping `domain` onto `range`.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain: [domain.0, domain.1],
            range: [range.0, range.1],
        }
    }

    /// Replaces the domain.
    #[must_use]
    pub fn with_domain(mut self, d0: f64, d1: f64) -> Self {
        self.domain = [d0, d1];
        self
    }

    /// Replaces the range.
    #[must_use]
    pub fn with_range(mut self, r0: f64, r1: f64) -> Self {
        self.range = [r0, r1];
        self
    }

    /// Maps a domain value into the range.
    ///
    /// A zero-width domain maps every value to the middle of the range.
    pub fn map(&self, x: f64) -> f64 {
        let [r0, r1] = self.range;
        interpolate(r0, r1, normalize(self.domain[0], self.domain[1], x))
    }

    /// Maps a range value back into the domain.
    ///
    /// A zero-width range maps every value to the middle of the domain.
    pub fn invert(&self, y: f64) -> f64 {
        let [d0, d1] = self.domain;
        interpolate(d0, d1, normalize(self.range[0], self.range[1], y))
    }

    /// Returns tick values inside the domain, in domain order.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain[0], self.domain[1], count)
    }

    /// Extends the domain outward so both ends land on tick steps.
    ///
    /// The domain's direction is preserved.
    #[must_use]
    pub fn nice(mut self, count: usize) -> Self {
        if count == 0 {
            return self;
        }
        let (mut i0, mut i1) = (0, 1);
        let (mut start, mut stop) = (self.domain[0], self.domain[1]);
        if stop < start {
            core::mem::swap(&mut start, &mut stop);
            core::mem::swap(&mut i0, &mut i1);
        }

        let mut prestep = None;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if prestep == Some(step) {
                self.domain[i0] = start;
                self.domain[i1] = stop;
                return self;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }
        self
    }
}

impl AxisScale for ScaleLinear {
    fn map(&self, value: f64) -> f64 {
        Self::map(self, value)
    }

    fn domain(&self) -> &[f64] {
        &self.domain
    }

    fn range(&self) -> &[f64] {
        &self.range
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        Self::ticks(self, count)
    }
}

fn normalize(a: f64, b: f64, x: f64) -> f64 {
    let span = b - a;
    if span == 0.0 {
        return 0.5;
    }
    (x - a) / span
}

fn interpolate(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = core::f64::consts::SQRT_2;

/// Integer tick bounds plus the increment.
///
/// A negative `inc` means the step is `1 / -inc`; dividing by an integer keeps
/// decimal ticks exact (`3 / 10` rather than `3 * 0.1`).
#[derive(Clone, Copy, Debug)]
struct TickSpec {
    i1: f64,
    i2: f64,
    inc: f64,
}

fn tick_spec(start: f64, stop: f64, count: f64) -> TickSpec {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / pow10(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let spec = if power < 0.0 {
        let inc = pow10(-power) / factor;
        let mut i1 = round_half_up(start * inc);
        let mut i2 = round_half_up(stop * inc);
        if i1 / inc < start {
            i1 += 1.0;
        }
        if i2 / inc > stop {
            i2 -= 1.0;
        }
        TickSpec { i1, i2, inc: -inc }
    } else {
        let inc = pow10(power) * factor;
        let mut i1 = round_half_up(start / inc);
        let mut i2 = round_half_up(stop / inc);
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
        TickSpec { i1, i2, inc }
    };

    if spec.i2 < spec.i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    spec
}

/// Upper bound on requested tick counts.
///
/// Larger requests get a coarser step over the whole domain instead.
const MAX_TICKS: usize = 10_000;

fn capped_count(count: usize) -> f64 {
    if count > MAX_TICKS {
        debug!("tick count {count} capped at {MAX_TICKS}");
    }
    count.min(MAX_TICKS) as f64
}

fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, capped_count(count)).inc
}

/// d3-compatible tick generation.
///
/// Returns an empty list for `count == 0` or non-finite bounds, and `[start]` for
/// a zero-width domain. Reversed domains yield descending ticks.
pub(crate) fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return alloc::vec![start];
    }
    let reverse = stop < start;
    let count = capped_count(count);
    let TickSpec { i1, i2, inc } = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };
    let usable = i2 >= i1 && inc.is_finite() && inc != 0.0;
    if !usable {
        return Vec::new();
    }

    let n = {
        let n = i2 - i1 + 1.0;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "i2 >= i1 and the step keeps n near the capped count"
        )]
        {
            n as u64
        }
    };
    let value = |k: f64| if inc < 0.0 { k / -inc } else { k * inc };
    (0..n)
        .map(|i| {
            let i = i as f64;
            if reverse { value(i2 - i) } else { value(i1 + i) }
        })
        .collect()
}

fn pow10(power: f64) -> f64 {
    let power = power.clamp(-400.0, 400.0);
    #[allow(clippy::cast_possible_truncation, reason = "clamped to a small range")]
    {
        10_f64.powi(power as i32)
    }
}

/// Rounds halves toward positive infinity (`-2.5` becomes `-2`).
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}
