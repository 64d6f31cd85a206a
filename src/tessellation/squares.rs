//! Quadrant drivers: the canvas cut into squares

use rand::Rng;

use crate::canvas::{Canvas, Fill, GradientStop, GradientVector, DEFAULT_ATTRIBUTES};
use crate::color::{Color, Palette};
use crate::error::{Result, TessellaError};
use crate::selection::{check_weighted, pick_by_key, pick_weighted_index};

/// Id of the background gradient definition
pub const GRADIENT_ID: &str = "gradientColors";

/// Columns and rows of the keyed identicon grid
pub const KEYED_SQUARES: usize = 6;

/// Key digits read by the keyed grid (half the columns times the rows)
pub const KEYED_KEY_LEN: usize = KEYED_SQUARES.div_ceil(2) * KEYED_SQUARES;

/// Gradient background with opaque squares punched over it
///
/// The canvas is first filled with a linear gradient through
/// `gradient_colors`. Then, row by row, every column draws a weighted index;
/// only index 0 paints a `palette[0]` square, so `prob` controls how much of
/// the gradient stays visible. Column picks live for one row only.
#[allow(clippy::too_many_arguments)]
pub fn gradient<C, R>(
    canvas: &mut C,
    rng: &mut R,
    palette: &Palette,
    gradient_colors: &Palette,
    vector: GradientVector,
    width: u32,
    height: u32,
    squares: u32,
    prob: f64,
) -> Result<()>
where
    C: Canvas + ?Sized,
    R: Rng + ?Sized,
{
    let (width, height, quadrant) = quadrant_size(width, height, squares)?;
    let columns = div_ceil(width, quadrant);
    let rows = div_ceil(height, quadrant);
    check_weighted(palette, prob)?;

    canvas.start(width as u32, height as u32, DEFAULT_ATTRIBUTES)?;
    canvas.begin_defs()?;
    canvas.linear_gradient(GRADIENT_ID, vector, &gradient_stops(gradient_colors))?;
    canvas.end_defs()?;
    canvas.rect(0, 0, width, height, &Fill::Url(GRADIENT_ID.to_string()))?;

    let square_fill = Fill::Solid(palette.primary());
    for row in 0..rows {
        let picks = (0..columns)
            .map(|_| pick_weighted_index(rng, palette, prob))
            .collect::<Result<Vec<usize>>>()?;

        for (col, &index) in picks.iter().enumerate() {
            if index == 0 {
                let col = col as i32;
                canvas.rect(col * quadrant, row * quadrant, quadrant, quadrant, &square_fill)?;
            }
        }
    }

    canvas.end()
}

/// Identicon-style 6x6 squares colored from the digits of `key`
///
/// The left three columns of row `r` use digit `c + 3 * r`; the right three
/// mirror them, so the image is symmetric and fully determined by the key.
///
/// # Errors
///
/// Returns `InvalidKey` if the key is shorter than the 18 digits the grid
/// reads.
pub fn keyed<C>(canvas: &mut C, key: &str, palette: &Palette, width: u32, height: u32) -> Result<()>
where
    C: Canvas + ?Sized,
{
    let (width, height, _) = quadrant_size(width, height, KEYED_SQUARES as u32)?;
    let (square_w, square_h) = (width / KEYED_SQUARES as i32, height / KEYED_SQUARES as i32);
    if square_h == 0 {
        return Err(TessellaError::InvalidConfig(format!(
            "{}px is too short for {} rows",
            height, KEYED_SQUARES
        )));
    }

    if key.len() < KEYED_KEY_LEN {
        return Err(TessellaError::InvalidKey(format!(
            "keyed grid reads {} digits, key has {}",
            KEYED_KEY_LEN,
            key.len()
        )));
    }

    let half = KEYED_SQUARES.div_ceil(2);
    canvas.start(width as u32, height as u32, DEFAULT_ATTRIBUTES)?;

    for row in 0..KEYED_SQUARES {
        let mut row_colors: Vec<Color> = Vec::with_capacity(KEYED_SQUARES);
        for col in 0..KEYED_SQUARES {
            let color = if col < half {
                pick_by_key(key, palette, col + half * row)?
            } else {
                row_colors[KEYED_SQUARES - col - 1]
            };
            row_colors.push(color);
        }

        for (col, color) in row_colors.into_iter().enumerate() {
            canvas.rect(
                col as i32 * square_w,
                row as i32 * square_h,
                square_w,
                square_h,
                &Fill::Solid(color),
            )?;
        }
    }

    canvas.end()
}

/// Evenly spaced stops, `100 / len` percent apart, starting at 0
fn gradient_stops(colors: &Palette) -> Vec<GradientStop> {
    let step = 100 / colors.len();
    colors
        .iter()
        .enumerate()
        .map(|(i, &color)| GradientStop {
            offset: (i * step) as u8,
            color,
            opacity: 1.0,
        })
        .collect()
}

fn quadrant_size(width: u32, height: u32, squares: u32) -> Result<(i32, i32, i32)> {
    let (Ok(width), Ok(height), Ok(squares)) =
        (i32::try_from(width), i32::try_from(height), i32::try_from(squares))
    else {
        return Err(TessellaError::InvalidConfig(
            "canvas dimensions out of range".to_string(),
        ));
    };
    if squares <= 0 || height <= 0 || width / squares.max(1) == 0 {
        return Err(TessellaError::InvalidConfig(format!(
            "{} squares do not fit a {}x{} canvas",
            squares, width, height
        )));
    }
    Ok((width, height, width / squares))
}

fn div_ceil(value: i32, divisor: i32) -> i32 {
    (value + divisor - 1) / divisor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Drawing, Shape};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn palette() -> Palette {
        Palette::from_hex(&["#1C1C1C", "#E8608C", "#71CBC4"]).unwrap()
    }

    fn render_gradient(prob: f64, seed: u64) -> Drawing {
        let mut drawing = Drawing::new();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let colors = palette();
        gradient(
            &mut drawing,
            &mut rng,
            &colors,
            &colors,
            GradientVector::default(),
            100,
            100,
            6,
            prob,
        )
        .unwrap();
        drawing
    }

    #[test]
    fn test_background_comes_first() {
        let drawing = render_gradient(0.5, 1);
        match &drawing.shapes[0] {
            Shape::LinearGradient { id, stops, .. } => {
                assert_eq!(id, GRADIENT_ID);
                let offsets: Vec<u8> = stops.iter().map(|s| s.offset).collect();
                assert_eq!(offsets, vec![0, 33, 66]);
            }
            other => panic!("expected gradient definition, got {:?}", other),
        }
        let (x, y, w, h, fill) = drawing.rects().next().unwrap();
        assert_eq!((x, y, w, h), (0, 0, 100, 100));
        assert_eq!(fill, &Fill::Url(GRADIENT_ID.to_string()));
    }

    #[test]
    fn test_full_probability_covers_every_square() {
        let drawing = render_gradient(1.0, 2);
        let squares: Vec<_> = drawing.rects().skip(1).collect();
        // 100 / 6 = 16px squares, 7 needed per side to reach the edge
        assert_eq!(squares.len(), 7 * 7);
        for (_, _, w, h, fill) in squares {
            assert_eq!((w, h), (16, 16));
            assert_eq!(fill, &Fill::Solid(palette()[0]));
        }
    }

    #[test]
    fn test_zero_probability_leaves_gradient_visible() {
        let drawing = render_gradient(0.0, 3);
        assert_eq!(drawing.rect_count(), 1);
    }

    #[test]
    fn test_squares_only_use_primary_color() {
        let drawing = render_gradient(0.4, 4);
        let squares: Vec<_> = drawing.rects().skip(1).collect();
        assert!(!squares.is_empty());
        assert!(squares.len() < 49);
        for (x, y, _, _, fill) in squares {
            assert_eq!(x % 16, 0);
            assert_eq!(y % 16, 0);
            assert_eq!(fill.color(), Some(palette()[0]));
        }
    }

    #[test]
    fn test_invalid_square_count() {
        let mut drawing = Drawing::new();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let colors = palette();
        let result = gradient(
            &mut drawing,
            &mut rng,
            &colors,
            &colors,
            GradientVector::default(),
            10,
            10,
            0,
            0.5,
        );
        assert!(matches!(result, Err(TessellaError::InvalidConfig(_))));
    }

    #[test]
    fn test_keyed_is_symmetric_and_deterministic() {
        let key = "0123456789abcdef0123456789abcdef";
        let render = || {
            let mut drawing = Drawing::new();
            keyed(&mut drawing, key, &palette(), 120, 120).unwrap();
            drawing
        };
        let drawing = render();
        assert_eq!(drawing.shapes, render().shapes);

        let fills: Vec<Color> = drawing.rects().map(|r| r.4.color().unwrap()).collect();
        assert_eq!(fills.len(), 36);
        for row in fills.chunks(KEYED_SQUARES) {
            for col in 0..KEYED_SQUARES {
                assert_eq!(row[col], row[KEYED_SQUARES - 1 - col]);
            }
        }
        // row 1, column 0 reads digit 3
        assert_eq!(fills[KEYED_SQUARES], palette()[3 % 3]);
        assert_eq!(fills[1], palette()[1]);
    }

    #[test]
    fn test_keyed_rejects_short_key() {
        let mut drawing = Drawing::new();
        let result = keyed(&mut drawing, "abc", &palette(), 60, 60);
        assert!(matches!(result, Err(TessellaError::InvalidKey(_))));
        assert!(drawing.is_empty());
    }

    #[test]
    fn test_single_color_palette_fails_before_drawing() {
        let mut drawing = Drawing::new();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let single = Palette::new(vec![Color::WHITE]).unwrap();
        let result = gradient(
            &mut drawing,
            &mut rng,
            &single,
            &palette(),
            GradientVector::default(),
            60,
            60,
            6,
            0.5,
        );
        assert!(matches!(result, Err(TessellaError::InvalidPalette(_))));
        assert_eq!(drawing.width, 0);
        assert!(drawing.is_empty());
    }
}
