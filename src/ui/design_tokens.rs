// SPDX-License-Identifier: MPL-2.0
//! Design tokens: colors, spacing, sizing, and type scale shared by the form.
//!
//! ```
//! use seiswave_scanner::ui::design_tokens::{palette, spacing};
//!
//! let padding = spacing::MD; // 16px
//! assert!(palette::WARNING_500.r > palette::WARNING_500.b);
//! # let _ = padding;
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Clock highlight
    pub const CLOCK_YELLOW: Color = Color::from_rgb(1.0, 1.0, 0.0);
    pub const CLOCK_YELLOW_DIM: Color = Color::from_rgb(0.9, 0.85, 0.2);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Width of the field label column.
    pub const LABEL_WIDTH: f32 = 170.0;
    /// Width of the pick lists paired with free-text inputs.
    pub const PICKER_WIDTH: f32 = 180.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const WINDOW_WIDTH: f32 = 640.0;
    pub const WINDOW_HEIGHT: f32 = 460.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Hints, protocol descriptions
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border & Radius
// ============================================================================

pub mod border {
    /// Medium border - toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::WINDOW_WIDTH > sizing::LABEL_WIDTH + sizing::PICKER_WIDTH);
};
