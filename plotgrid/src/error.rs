// Copyright 2025 the plotgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate alloc;

use alloc::string::String;

use peniko::color::ParseError;
use thiserror::Error;

/// Errors raised while configuring a grid.
///
/// Rendering itself never fails; a grid with undefined scale bounds renders nothing.
#[derive(Debug, Error)]
pub enum GridError {
    /// A CSS color string could not be parsed.
    #[error("invalid color {input:?}: {reason}")]
    InvalidColor {
        /// The rejected input.
        input: String,
        /// Why the parser rejected it.
        reason: ParseError,
    },
}
