//! Font size stepping.

use laguerre_model::DisplayConfig;

/// One step larger. There is no upper bound.
pub fn zoom_in(font_size: u32, config: &DisplayConfig) -> u32 {
    font_size.saturating_add(config.zoom_step)
}

/// One step smaller, or unchanged when that would go below the floor.
pub fn zoom_out(font_size: u32, config: &DisplayConfig) -> u32 {
    match font_size.checked_sub(config.zoom_step) {
        Some(smaller) if smaller >= config.min_font_size => smaller,
        _ => font_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_steps() {
        let config = DisplayConfig::default();
        assert_eq!(zoom_in(14, &config), 16);
        assert_eq!(zoom_out(14, &config), 12);
        assert_eq!(zoom_out(8, &config), 6);
        assert_eq!(zoom_out(6, &config), 6);
        assert_eq!(zoom_out(7, &config), 7);
    }

    proptest! {
        #[test]
        fn zoom_out_never_goes_below_floor(start in 6u32..200, steps in 0usize..200) {
            let config = DisplayConfig::default();
            let mut size = start;
            for _ in 0..steps {
                size = zoom_out(size, &config);
                prop_assert!(size >= config.min_font_size);
            }
        }

        #[test]
        fn zoom_in_then_out_restores(start in 6u32..200) {
            let config = DisplayConfig::default();
            prop_assert_eq!(zoom_out(zoom_in(start, &config), &config), start);
        }
    }
}
