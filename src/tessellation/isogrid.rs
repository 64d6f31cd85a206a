//! Isogrid drivers: triangles whose unions outline hexagons
//!
//! All drivers walk columns left to right and, inside each column, rows top
//! to bottom from `-1` to `rows`. Each half-triangle gets its own fill.

use rand::Rng;

use crate::canvas::{Canvas, Fill, DEFAULT_ATTRIBUTES};
use crate::color::Palette;
use crate::error::Result;
use crate::geometry::{cell_triangles, GridLayout};
use crate::selection::{check_weighted, pick_gradient, pick_weighted};

/// Fill every triangle with a weighted pick: the primary color with
/// probability `prob`, another palette color otherwise
///
/// Returns the resolved layout; `lines` is only a density hint.
pub fn random<C, R>(
    canvas: &mut C,
    rng: &mut R,
    palette: &Palette,
    width: u32,
    height: u32,
    lines: u32,
    prob: f64,
) -> Result<GridLayout>
where
    C: Canvas + ?Sized,
    R: Rng + ?Sized,
{
    let layout = GridLayout::new(width, height, lines)?;
    check_weighted(palette, prob)?;
    canvas.start(width, height, DEFAULT_ATTRIBUTES)?;

    for col in 0..layout.lines {
        for row in layout.row_range() {
            for triangle in cell_triangles(col, row, &layout) {
                let fill = Fill::Solid(pick_weighted(rng, palette, prob)?);
                canvas.polygon(&triangle.points, &fill)?;
            }
        }
    }

    canvas.end()?;
    Ok(layout)
}

/// Fill triangles along a left-to-right gradient of the palette order
///
/// Column `c` of `n` picks with percentage `100 - 100 * c / n`, so the head
/// of the palette dominates on the left and its tail on the right.
pub fn gradient<C, R>(
    canvas: &mut C,
    rng: &mut R,
    palette: &Palette,
    width: u32,
    height: u32,
    lines: u32,
) -> Result<GridLayout>
where
    C: Canvas + ?Sized,
    R: Rng + ?Sized,
{
    let layout = GridLayout::new(width, height, lines)?;
    canvas.start(width, height, DEFAULT_ATTRIBUTES)?;

    for col in 0..layout.lines {
        let percentage = column_percentage(col, layout.lines);
        for row in layout.row_range() {
            for triangle in cell_triangles(col, row, &layout) {
                let fill = Fill::Solid(pick_gradient(rng, palette, percentage));
                canvas.polygon(&triangle.points, &fill)?;
            }
        }
    }

    canvas.end()?;
    Ok(layout)
}

/// Weighted fill, symmetric about the vertical center of the canvas
///
/// Only columns `0..=lines/2` are computed; every triangle is emitted a second
/// time reflected about `x = width / 2` with the same fill.
pub fn mirror<C, R>(
    canvas: &mut C,
    rng: &mut R,
    palette: &Palette,
    width: u32,
    height: u32,
    lines: u32,
    prob: f64,
) -> Result<GridLayout>
where
    C: Canvas + ?Sized,
    R: Rng + ?Sized,
{
    let layout = GridLayout::new(width, height, lines)?;
    check_weighted(palette, prob)?;
    let axis_offset = layout.mirror_offset();
    canvas.start(width, height, DEFAULT_ATTRIBUTES)?;

    for col in 0..=layout.lines / 2 {
        for row in layout.row_range() {
            for triangle in cell_triangles(col, row, &layout) {
                let fill = Fill::Solid(pick_weighted(rng, palette, prob)?);
                let reflected = triangle.mirrored(layout.lines, layout.fringe, axis_offset);
                canvas.polygon(&triangle.points, &fill)?;
                canvas.polygon(&reflected.points, &fill)?;
            }
        }
    }

    canvas.end()?;
    Ok(layout)
}

fn column_percentage(col: i32, columns: i32) -> u32 {
    (100 - 100 * col / columns).clamp(0, 100) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Drawing, SvgCanvas};
    use crate::color::Color;
    use crate::error::TessellaError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn two_colors() -> Palette {
        Palette::pair(Color::rgb(255, 255, 255), Color::rgb(40, 40, 40))
    }

    #[test]
    fn test_random_polygon_count() {
        let mut drawing = Drawing::new();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let layout = random(&mut drawing, &mut rng, &two_colors(), 100, 100, 10, 0.5).unwrap();

        let lines = layout.lines as usize;
        assert_eq!(lines, 11);
        assert_eq!(drawing.polygon_count(), 2 * lines * (lines + 2));
        assert!(drawing.finished);
        assert_eq!(
            drawing.attributes,
            vec![("shape-rendering".to_string(), "optimizeSpeed".to_string())]
        );
    }

    #[test]
    fn test_random_vertices_within_bounds() {
        let mut drawing = Drawing::new();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let layout = random(&mut drawing, &mut rng, &two_colors(), 100, 100, 10, 0.5).unwrap();
        let d = layout.distance;

        for (points, fill) in drawing.polygons() {
            assert_eq!(points.len(), 3);
            assert!(fill.color().is_some());
            for p in points {
                assert!((-d..=100 + d).contains(&p.x), "x out of range: {:?}", p);
                assert!((-layout.fringe..=100 + 2 * layout.fringe).contains(&p.y));
            }
        }
    }

    #[test]
    fn test_random_uses_palette_colors_only() {
        let palette = Palette::from_hex(&["#FFFFFF", "#FF0000", "#00FF00"]).unwrap();
        let mut drawing = Drawing::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        random(&mut drawing, &mut rng, &palette, 60, 60, 6, 0.2).unwrap();

        for (_, fill) in drawing.polygons() {
            let color = fill.color().unwrap();
            assert!(palette.iter().any(|c| *c == color));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let render = |seed| {
            let mut drawing = Drawing::new();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            random(&mut drawing, &mut rng, &two_colors(), 100, 100, 10, 0.5).unwrap();
            drawing.shapes
        };
        assert_eq!(render(7), render(7));
        assert_ne!(render(7), render(8));
    }

    #[test]
    fn test_gradient_moves_from_head_to_tail() {
        let palette = two_colors();
        let mut drawing = Drawing::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let layout = gradient(&mut drawing, &mut rng, &palette, 100, 100, 10).unwrap();

        let per_column = 2 * (layout.rows as usize + 2);
        let fills: Vec<Color> = drawing.polygons().map(|(_, f)| f.color().unwrap()).collect();
        assert_eq!(fills.len(), per_column * layout.lines as usize);

        let head_count = |cols: &[Color]| cols.iter().filter(|c| **c == palette[0]).count();
        let left = head_count(&fills[..3 * per_column]);
        let right = head_count(&fills[fills.len() - 3 * per_column..]);
        assert!(left > right, "left {} right {}", left, right);
    }

    #[test]
    fn test_column_percentage() {
        assert_eq!(column_percentage(0, 11), 100);
        assert_eq!(column_percentage(5, 11), 55);
        assert_eq!(column_percentage(10, 11), 10);
    }

    #[test]
    fn test_mirror_is_symmetric_about_center() {
        let mut drawing = Drawing::new();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let layout = mirror(&mut drawing, &mut rng, &two_colors(), 100, 100, 10, 0.5).unwrap();

        let polygons: Vec<_> = drawing.polygons().collect();
        let columns = layout.lines as usize / 2 + 1;
        assert_eq!(polygons.len(), 2 * 2 * columns * (layout.rows as usize + 2));

        for pair in polygons.chunks(2) {
            let (original, fill) = pair[0];
            let (reflected, reflected_fill) = pair[1];
            assert_eq!(fill, reflected_fill);
            for (p, q) in original.iter().zip(reflected) {
                assert_eq!(q.x, 100 - p.x);
                assert_eq!(q.y, p.y);
            }
        }
    }

    #[test]
    fn test_degenerate_lines_rejected_before_drawing() {
        let mut drawing = Drawing::new();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let result = random(&mut drawing, &mut rng, &two_colors(), 100, 100, 0, 0.5);
        assert!(matches!(result, Err(TessellaError::InvalidConfig(_))));
        assert!(drawing.is_empty());
        assert_eq!(drawing.width, 0);
    }

    #[test]
    fn test_single_color_palette_fails_fast() {
        let mut drawing = Drawing::new();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let single = Palette::new(vec![Color::WHITE]).unwrap();
        let result = mirror(&mut drawing, &mut rng, &single, 100, 100, 10, 0.5);
        assert!(matches!(result, Err(TessellaError::InvalidPalette(_))));
        assert_eq!(drawing.width, 0);
        assert!(drawing.is_empty());

        let mut canvas = SvgCanvas::new(Vec::new());
        let result = random(&mut canvas, &mut rng, &single, 100, 100, 10, 0.5);
        assert!(matches!(result, Err(TessellaError::InvalidPalette(_))));
        assert!(canvas.into_inner().is_empty());
    }

    #[test]
    fn test_nan_probability_rejected_before_drawing() {
        let mut drawing = Drawing::new();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let result = random(&mut drawing, &mut rng, &two_colors(), 100, 100, 10, f64::NAN);
        assert!(matches!(result, Err(TessellaError::InvalidConfig(_))));
        assert!(drawing.is_empty());
    }
}
