//! Named color themes
//!
//! Every theme starts with its background and foreground colors, so the two
//! first entries serve the two-color modes and the whole list serves the
//! multi-color ones.

use crate::color::{Color, Palette};

/// Theme used when none (or an unknown one) is requested
pub const BASE_THEME: &str = "base";

const fn c(hex: u32) -> Color {
    Color::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

const THEMES: &[(&str, &[Color])] = &[
    ("base", &[c(0xFFFFFF), c(0x1C1C1C)]),
    ("sugarsweets", &[c(0xE8608C), c(0x71CBC4), c(0xFFF9F4), c(0xCDD56E), c(0xFFCA4C)]),
    ("heatwave", &[c(0xFFFFFF), c(0xFF4300), c(0xFF9C00), c(0xFFC700), c(0x6F1E0F)]),
    ("daisygarden", &[c(0xFFFFFF), c(0xFFE558), c(0x96C33D), c(0x4E8B2E), c(0x2B2B2B)]),
    ("seascape", &[c(0xFFFFFF), c(0x0A5A75), c(0x2EA1B9), c(0x9FD9E5), c(0xF2ECD8)]),
    ("summerwarmth", &[c(0xF6F2E8), c(0xE85A2C), c(0xF2AE3A), c(0x8C3B20), c(0x3A1F16)]),
    ("bythepool", &[c(0xF0F0F0), c(0x2D9FBF), c(0x77CEE0), c(0xF2C14E), c(0xED6A5A)]),
    ("duskfalling", &[c(0x1E1B2E), c(0x4B3F72), c(0xB0557E), c(0xF19C79), c(0xFCE3C0)]),
    ("frogideas", &[c(0xF2F2F2), c(0x5E8C31), c(0xA6C14F), c(0x2E4A1E), c(0xD9E8B5)]),
    ("berrypie", &[c(0x2E0F24), c(0x8E1D4F), c(0xD3446B), c(0xF08A8A), c(0xF9D5C8)]),
];

/// Names of all registered themes, in registry order
pub fn names() -> impl Iterator<Item = &'static str> {
    THEMES.iter().map(|(name, _)| *name)
}

/// Full palette of a theme (case-insensitive lookup)
pub fn palette(name: &str) -> Option<Palette> {
    THEMES
        .iter()
        .find(|(theme, _)| theme.eq_ignore_ascii_case(name))
        .and_then(|(_, colors)| Palette::new(colors.to_vec()).ok())
}

/// Palette of the base theme
pub fn base() -> Palette {
    Palette::pair(THEMES[0].1[0], THEMES[0].1[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_theme_has_background_and_foreground() {
        for name in names() {
            let palette = palette(name).unwrap();
            assert!(palette.len() >= 2, "theme {} is too small", name);
            assert_ne!(palette[0], palette[1], "theme {} has bg == fg", name);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(palette("SugarSweets"), palette("sugarsweets"));
        assert!(palette("nope").is_none());
    }

    #[test]
    fn test_base_theme() {
        assert_eq!(names().next(), Some(BASE_THEME));
        assert_eq!(base(), palette(BASE_THEME).unwrap());
        let base = base();
        assert_eq!((base[0], base[1]), (Color::WHITE, Color::rgb(0x1C, 0x1C, 0x1C)));
    }

    #[test]
    fn test_const_color_decoding() {
        assert_eq!(c(0x0A5A75), Color::rgb(10, 90, 117));
    }
}
