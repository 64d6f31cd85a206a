//! Example: Generate an avatar and print it as SVG
//!
//! Arguments are `key=value` pairs, the same ones an HTTP endpoint would
//! accept:
//!
//! ```text
//! cargo run --example generate_avatar -- mode=mirror theme=seascape seed=42 > avatar.svg
//! ```
//!
//! Set `RUST_LOG=tessella=debug` to see parameter fallbacks and the resolved
//! layout on stderr.

use std::io;

use tessella::{ImageParams, SVG_CONTENT_TYPE};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let pairs: Vec<(String, String)> = std::env::args()
        .skip(1)
        .filter_map(|arg| {
            arg.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
        })
        .collect();

    let params = ImageParams::from_pairs(pairs).expect("Failed to resolve parameters");

    eprintln!("Content-Type: {}", SVG_CONTENT_TYPE);
    eprintln!("  Pattern: {}", params.config.pattern);
    eprintln!("  Seed: {}", params.config.seed);
    eprintln!("  Size: {}x{}", params.config.width, params.config.height);
    eprintln!("  Colors: {}", params.palette.len());

    let stdout = io::stdout();
    params
        .render_svg(stdout.lock())
        .expect("Failed to render image");
}
