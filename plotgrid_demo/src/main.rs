// Copyright 2025 the plotgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a sample grid and writes it to `plotgrid_demo.svg`.
//!
//! Set `RUST_LOG=plotgrid=trace` to see which labels were dropped and why.

mod svg;

use std::error::Error;

use kurbo::Rect;
use log::info;
use plotgrid::{Font, GridSpec, ScaleLinear, TextStyle};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let view = Rect::new(0.0, 0.0, 420.0, 260.0);
    let plot = Rect::new(48.0, 16.0, 400.0, 220.0);

    let x = ScaleLinear::new((0.0, 97.0), (plot.x0, plot.x1)).nice(8);
    let y = ScaleLinear::new((-3.2, 41.5), (plot.y1, plot.y0)).nice(6);

    let grid = GridSpec::new()
        .with_x_ticks(8)
        .with_y_ticks(6)
        .with_label_offset(6.0)
        .with_line_color_css("hsla(210, 40%, 30%, 0.2)")?
        .with_axis_color_css("#333")?
        .with_y_formatter(|v| format!("{v}°"));

    let font = demo_font(TextStyle::new(11.0));
    let instructions = grid.render(&x, &y, Some(&font));
    info!("rendered {} instructions", instructions.len());

    let out = svg::to_svg_string(view, &instructions);
    std::fs::write("plotgrid_demo.svg", out)?;
    println!("wrote plotgrid_demo.svg");
    Ok(())
}

fn demo_font(style: TextStyle) -> Font {
    #[cfg(feature = "parley")]
    {
        Font::new(style, plotgrid_text_parley::ParleyTextMeasurer::new())
    }

    #[cfg(not(feature = "parley"))]
    {
        Font::new(style, plotgrid::HeuristicTextMeasurer)
    }
}
