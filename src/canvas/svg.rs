//! SVG text writer

use std::io::Write;

use glam::IVec2;

use super::{Canvas, Fill, GradientStop, GradientVector};
use crate::error::Result;

/// Streams SVG 1.1 markup into a writer
///
/// # Example
///
/// ```rust
/// use tessella::canvas::{Canvas, Fill, SvgCanvas};
/// use tessella::Color;
///
/// let mut canvas = SvgCanvas::new(Vec::new());
/// canvas.start(10, 10, &[]).unwrap();
/// canvas.rect(0, 0, 10, 10, &Fill::Solid(Color::WHITE)).unwrap();
/// canvas.end().unwrap();
///
/// let svg = String::from_utf8(canvas.into_inner()).unwrap();
/// assert!(svg.contains(r#"style="fill:rgb(255,255,255)""#));
/// ```
#[derive(Debug)]
pub struct SvgCanvas<W: Write> {
    out: W,
}

impl<W: Write> SvgCanvas<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Canvas for SvgCanvas<W> {
    fn start(&mut self, width: u32, height: u32, attributes: &[(&str, &str)]) -> Result<()> {
        writeln!(self.out, r#"<?xml version="1.0"?>"#)?;
        write!(
            self.out,
            r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink""#,
            width, height
        )?;
        for (name, value) in attributes {
            write!(self.out, r#" {}="{}""#, name, escape(value))?;
        }
        writeln!(self.out, ">")?;
        Ok(())
    }

    fn polygon(&mut self, points: &[IVec2], fill: &Fill) -> Result<()> {
        write!(self.out, r#"<polygon points=""#)?;
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                write!(self.out, " ")?;
            }
            write!(self.out, "{},{}", p.x, p.y)?;
        }
        writeln!(self.out, r#"" style="{}" />"#, escape(&fill.to_string()))?;
        Ok(())
    }

    fn rect(&mut self, x: i32, y: i32, width: i32, height: i32, fill: &Fill) -> Result<()> {
        writeln!(
            self.out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" style="{}" />"#,
            x,
            y,
            width,
            height,
            escape(&fill.to_string())
        )?;
        Ok(())
    }

    fn begin_defs(&mut self) -> Result<()> {
        writeln!(self.out, "<defs>")?;
        Ok(())
    }

    fn linear_gradient(
        &mut self,
        id: &str,
        vector: GradientVector,
        stops: &[GradientStop],
    ) -> Result<()> {
        writeln!(
            self.out,
            r#"<linearGradient id="{}" x1="{}%" y1="{}%" x2="{}%" y2="{}%">"#,
            escape(id),
            vector.x1,
            vector.y1,
            vector.x2,
            vector.y2
        )?;
        for stop in stops {
            writeln!(
                self.out,
                r#"<stop offset="{}%" stop-color="{}" stop-opacity="{:.2}"/>"#,
                stop.offset,
                stop.color.to_hex(),
                stop.opacity
            )?;
        }
        writeln!(self.out, "</linearGradient>")?;
        Ok(())
    }

    fn end_defs(&mut self) -> Result<()> {
        writeln!(self.out, "</defs>")?;
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        writeln!(self.out, "</svg>")?;
        self.out.flush()?;
        Ok(())
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
