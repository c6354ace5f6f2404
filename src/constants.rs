//! Sizing, color, and animation constants for the picker screen.

/// Fixed raster resolution for the wheel image (scaled to widget size).
pub const WHEEL_RASTER_SIZE: u32 = 512;

/// Cursor circle radius on the color wheel
pub const CURSOR_RADIUS: f64 = 6.0;

/// Slider widget height (tall enough for the thumb)
pub const SLIDER_HEIGHT: f32 = 30.0;

/// Slider track height
pub const TRACK_HEIGHT: f64 = 6.0;

/// Thumb radius on the lightness slider
pub const THUMB_RADIUS: f64 = 15.0;

/// Swatch diameter in the strip
pub const SWATCH_SIZE: f32 = 45.0;

/// Horizontal margin on each side of a swatch
pub const SWATCH_MARGIN: f32 = 10.0;

/// Height of the wave divider above the swatch strip
pub const MASK_HEIGHT: f32 = 50.0;

/// Backdrop alpha for the current-color tint behind divider and swatches
pub const BACKDROP_ALPHA: f64 = 0.2;

/// Inner halo circle radius as a fraction of the wheel radius
pub const HALO_INNER_RATIO: f64 = 5.0 / 7.0;

/// Outer halo circle radius as a fraction of the wheel radius
pub const HALO_OUTER_RATIO: f64 = 5.0 / 6.0;

/// Inner halo alpha
pub const HALO_INNER_ALPHA: f64 = 0.4;

/// Outer halo alpha
pub const HALO_OUTER_ALPHA: f64 = 0.2;

/// Halo scale at the start of a pulse
pub const PULSE_START_SCALE: f64 = 1.5;

/// Pulse settle duration in seconds
pub const PULSE_SECONDS: f64 = 5.0;

/// Pulse animation tick interval in milliseconds
pub const PULSE_TICK_MS: u64 = 16;

/// Gap between screen sections
pub const GAP: f32 = 8.0;

/// Padding around the whole screen
pub const PADDING: f32 = 8.0;

/// Header title font size
pub const TITLE_FONT: f32 = 20.0;

/// Icon glyph font size
pub const ICON_FONT: f32 = 24.0;
