//! Top-level rendering entry points

use std::io::{self, Write};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::canvas::{Canvas, SvgCanvas};
use crate::color::Palette;
use crate::config::{Pattern, TessellaConfig};
use crate::error::{Result, TessellaError};
use crate::tessellation::{isogrid, squares};

/// Content type of the rendered images
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Render one image into any canvas
///
/// Random modes use a ChaCha8 generator seeded from `config.seed`, so the
/// output is reproducible across runs and platforms.
///
/// # Example
///
/// ```rust
/// use tessella::*;
///
/// let config = TessellaConfigBuilder::new().seed(1).size(100).unwrap().build().unwrap();
/// let palette = Palette::pair(Color::WHITE, Color::BLACK);
///
/// let mut drawing = Drawing::new();
/// render(&config, &palette, &mut drawing).unwrap();
/// assert!(drawing.polygon_count() > 0);
/// ```
pub fn render<C: Canvas + ?Sized>(
    config: &TessellaConfig,
    palette: &Palette,
    canvas: &mut C,
) -> Result<()> {
    debug!(
        seed = config.seed,
        pattern = %config.pattern,
        width = config.width,
        height = config.height,
        colors = palette.len(),
        "rendering image"
    );

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed as u64);
    let (width, height) = (config.width, config.height);

    match &config.pattern {
        Pattern::IsogridRandom => isogrid::random(
            canvas,
            &mut rng,
            palette,
            width,
            height,
            config.lines,
            config.probability,
        )
        .map(drop),
        Pattern::IsogridGradient => {
            isogrid::gradient(canvas, &mut rng, palette, width, height, config.lines).map(drop)
        }
        Pattern::IsogridMirror => isogrid::mirror(
            canvas,
            &mut rng,
            palette,
            width,
            height,
            config.lines,
            config.probability,
        )
        .map(drop),
        Pattern::SquaresGradient => squares::gradient(
            canvas,
            &mut rng,
            palette,
            config.gradient_palette.as_ref().unwrap_or(palette),
            config.gradient_vector,
            width,
            height,
            config.squares,
            config.probability,
        ),
        Pattern::SquaresKeyed { key } => squares::keyed(canvas, key, palette, width, height),
    }
}

/// Render one image as SVG into a writer
pub fn render_svg<W: Write>(config: &TessellaConfig, palette: &Palette, out: W) -> Result<()> {
    let mut canvas = SvgCanvas::new(out);
    render(config, palette, &mut canvas)
}

/// Render one image as an SVG string
pub fn render_svg_string(config: &TessellaConfig, palette: &Palette) -> Result<String> {
    let mut bytes = Vec::new();
    render_svg(config, palette, &mut bytes)?;
    String::from_utf8(bytes)
        .map_err(|err| TessellaError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
}
