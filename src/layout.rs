//! Poster/Rail Layout Sync
//!
//! Pure height mapping for the detail rail. The component adapter owns
//! the load/resize/observer lifecycle.

/// Whole-pixel rail height for a measured poster height.
/// None until the poster has a positive rendered size.
pub fn rail_height_px(measured: f64) -> Option<i32> {
    if measured > 0.0 {
        Some(measured.round() as i32)
    } else {
        None
    }
}

/// Style publishing the height as a layout variable for the rail
pub fn rail_style(px: i32) -> String {
    format!("--poster-h: {px}px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_heights_round_to_whole_pixels() {
        assert_eq!(rail_height_px(420.0), Some(420));
        assert_eq!(rail_height_px(420.4), Some(420));
        assert_eq!(rail_height_px(420.5), Some(421));
    }

    #[test]
    fn test_unrendered_poster_produces_no_update() {
        assert_eq!(rail_height_px(0.0), None);
        assert_eq!(rail_height_px(-1.0), None);
    }

    #[test]
    fn test_style_value() {
        assert_eq!(rail_style(421), "--poster-h: 421px");
    }
}
