//! Reflection about the vertical center of the grid

use glam::IVec2;

/// Reflect x-coordinates about the vertical axis of a `lines * fringe` wide
/// grid, shifted by `axis_offset`. Y-coordinates are untouched.
///
/// `x' = lines * fringe + axis_offset - x`, so applying it twice with the same
/// arguments returns the input.
pub fn mirror(points: &[IVec2], lines: i32, fringe: i32, axis_offset: i32) -> Vec<IVec2> {
    let span = lines * fringe + axis_offset;
    points
        .iter()
        .map(|p| IVec2::new(span - p.x, p.y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mirror_about_grid_center() {
        let points = [IVec2::new(0, 3), IVec2::new(9, 7), IVec2::new(45, 1)];
        let mirrored = mirror(&points, 11, 9, 1);
        assert_eq!(
            mirrored,
            vec![IVec2::new(100, 3), IVec2::new(91, 7), IVec2::new(55, 1)]
        );
    }

    #[test]
    fn test_mirror_empty() {
        assert!(mirror(&[], 10, 10, 0).is_empty());
    }

    proptest! {
        #[test]
        fn mirror_is_an_involution(
            xs in proptest::collection::vec(-500i32..500, 0..12),
            lines in 1i32..60,
            fringe in 1i32..60,
            offset in -20i32..20,
        ) {
            let points: Vec<IVec2> = xs.iter().map(|&x| IVec2::new(x, x / 2)).collect();
            let twice = mirror(&mirror(&points, lines, fringe, offset), lines, fringe, offset);
            prop_assert_eq!(twice, points);
        }
    }
}
