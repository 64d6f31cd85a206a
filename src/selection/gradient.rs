//! Percentage-driven pick along the palette order
//!
//! The palette is cut into `len` equal bands over `0..100`. A random draw
//! below `percentage` picks from the bands before the draw's frontier, any
//! other draw picks from the bands after it. Sweeping `percentage` from 100
//! down to 0 across the columns moves the image from the head of the palette
//! to its tail.

use rand::Rng;

use crate::color::{Color, Palette};

/// Pick a color biased toward the head of the palette by `percentage` (0-100)
pub fn pick_gradient<R: Rng + ?Sized>(rng: &mut R, palette: &Palette, percentage: u32) -> Color {
    let colors = palette.colors();
    let len = colors.len();
    let band = (100 / len).max(1);

    let draw: usize = rng.gen_range(0..100);
    let frontier = draw.div_ceil(band);

    let pool = if (draw as u32) < percentage {
        &colors[..frontier.clamp(1, len)]
    } else {
        &colors[frontier.min(len - 1)..]
    };
    pool[rng.gen_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn count_first(palette: &Palette, percentage: u32, trials: usize) -> usize {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        (0..trials)
            .filter(|_| pick_gradient(&mut rng, palette, percentage) == palette[0])
            .count()
    }

    #[test]
    fn test_full_percentage_favors_head() {
        let palette = Palette::pair(Color::BLACK, Color::WHITE);
        // expected share of the head color is ~75%
        let head = count_first(&palette, 100, 1000);
        assert!(head > 650, "head picked {} times", head);
    }

    #[test]
    fn test_zero_percentage_favors_tail() {
        let palette = Palette::pair(Color::BLACK, Color::WHITE);
        // only a draw of exactly 0 opens the whole palette
        let head = count_first(&palette, 0, 1000);
        assert!(head < 50, "head picked {} times", head);
    }

    #[test]
    fn test_zero_percentage_never_empty_suffix() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let palette = Palette::from_hex(&["#111111", "#222222", "#333333"]).unwrap();
        let mut last = 0;
        for _ in 0..1000 {
            let c = pick_gradient(&mut rng, &palette, 0);
            assert!(palette.iter().any(|p| *p == c));
            if c == palette[2] {
                last += 1;
            }
        }
        assert!(last > 0);
    }

    #[test]
    fn test_full_percentage_never_tail_only() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let palette = Palette::from_hex(&["#111111", "#222222", "#333333"]).unwrap();
        let head = (0..1000)
            .filter(|_| pick_gradient(&mut rng, &palette, 100) == palette[0])
            .count();
        assert!(head > 0);
    }

    #[test]
    fn test_uneven_band_count_stays_in_bounds() {
        // 100 / 7 = 14, so a draw of 99 lands on frontier 8 > len
        let colors: Vec<Color> = (0..7).map(|i| Color::rgb(i, i, i)).collect();
        let palette = Palette::new(colors).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for percentage in [0, 50, 100] {
            for _ in 0..500 {
                pick_gradient(&mut rng, &palette, percentage);
            }
        }
    }

    #[test]
    fn test_more_colors_than_percent_points() {
        let colors: Vec<Color> = (0..150).map(|i| Color::rgb(i as u8, 0, 0)).collect();
        let palette = Palette::new(colors).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..500 {
            pick_gradient(&mut rng, &palette, 50);
        }
    }

    #[test]
    fn test_single_color() {
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        let palette = Palette::new(vec![Color::WHITE]).unwrap();
        assert_eq!(pick_gradient(&mut rng, &palette, 0), Color::WHITE);
        assert_eq!(pick_gradient(&mut rng, &palette, 100), Color::WHITE);
    }
}
