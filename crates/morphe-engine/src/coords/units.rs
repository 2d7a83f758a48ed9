/// Root font size that `rem` values are measured against.
pub const DEFAULT_BASE_FONT_SIZE: f32 = 16.0;

/// Formats a pixel length as a CSS-style `rem` string (e.g. `"1.5rem"`).
pub fn px_to_rem(px: f32, base_font_size: f32) -> String {
    format!("{}rem", px / base_font_size)
}

/// Converts a `rem` length back to pixels.
pub fn rem_to_px(rem: f32, base_font_size: f32) -> f32 {
    rem * base_font_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_to_rem_default_base() {
        assert_eq!(px_to_rem(24.0, DEFAULT_BASE_FONT_SIZE), "1.5rem");
        assert_eq!(px_to_rem(16.0, DEFAULT_BASE_FONT_SIZE), "1rem");
    }

    #[test]
    fn px_to_rem_custom_base() {
        assert_eq!(px_to_rem(5.0, 10.0), "0.5rem");
    }

    #[test]
    fn rem_to_px_scales_by_base() {
        assert_eq!(rem_to_px(2.0, DEFAULT_BASE_FONT_SIZE), 32.0);
        assert_eq!(rem_to_px(0.25, 8.0), 2.0);
    }
}
