// Copyright 2025 the plotgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of grid draw instructions.

use kurbo::Rect;
use peniko::Color;
use plotgrid::{DrawInstruction, GridLine, TickLabel};

/// Serializes instructions in paint order inside a fixed view box.
pub(crate) fn to_svg_string(view_box: Rect, instructions: &[DrawInstruction]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
        view_box.x0,
        view_box.y0,
        view_box.width(),
        view_box.height(),
        view_box.width(),
        view_box.height()
    ));
    out.push('\n');
    for instruction in instructions {
        match instruction {
            DrawInstruction::Line(line) => write_line(&mut out, line),
            DrawInstruction::Label(label) => write_label(&mut out, label),
        }
    }
    out.push_str("</svg>\n");
    out
}

fn write_line(out: &mut String, line: &GridLine) {
    let (p0, p1) = (line.line.p0, line.line.p1);
    out.push_str(&format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
        p0.x, p0.y, p1.x, p1.y
    ));
    write_paint_attr(out, "stroke", line.color);
    out.push_str(&format!(r#" stroke-width="{}"/>"#, line.stroke_width));
    out.push('\n');
}

fn write_label(out: &mut String, label: &TickLabel) {
    let style = label.font.style();
    out.push_str(&format!(
        r#"<text x="{}" y="{}" font-size="{}" font-family="{}""#,
        label.pos.x,
        label.pos.y,
        style.font_size,
        style.font_family.as_css_family()
    ));
    if style.font_weight != 400 {
        out.push_str(&format!(r#" font-weight="{}""#, style.font_weight));
    }
    out.push_str(&format!(">{}</text>\n", escape_xml(&label.text)));
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let rgba = color.to_rgba8();
    out.push_str(&format!(
        r##" {name}="#{:02x}{:02x}{:02x}""##,
        rgba.r, rgba.g, rgba.b
    ));
    if rgba.a != 255 {
        let opacity = f64::from(rgba.a) / 255.0;
        out.push_str(&format!(r#" {name}-opacity="{opacity}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
