//! # floem-swatch
//!
//! A palette-swatch color picker screen for [Floem](https://github.com/lapce/floem).
//!
//! Provides a mobile-style picker combining a hue/saturation wheel, a
//! lightness slider, and a strip of five "nearby" swatches drawn from a fixed
//! seven-color palette. The gesture hue is bucketed into a canonical palette
//! color, and that color's position selects a contiguous, circularly wrapped
//! window of five swatches; the window's first swatch becomes the active
//! color.
//!
//! The selection logic is pure and exported on its own ([`classify_hue`],
//! [`select_window`], [`PickerState`]) so it can be used and tested without a
//! window.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_swatch::{swatch_picker, PickerColor};
//!
//! let color = RwSignal::new(PickerColor::from_hex("#ff0000").unwrap());
//! // Use `swatch_picker(color)` in your Floem view tree.
//! ```

mod color;
mod color_wheel;
mod constants;
mod controls;
mod lightness_slider;
mod math;
mod palette;
mod pulse;
mod screen;
mod swatch_strip;

pub use color::PickerColor;
pub use palette::{
    HueError, PALETTE, PALETTE_LEN, PaletteEntry, PickerState, WINDOW_LEN, classify_hue,
    select_window,
};

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the top-level picker screen view.
///
/// The screen reads its initial color from `color` and writes every new
/// active color back to it. Note that hue changes snap the active color to
/// the first swatch of the selected palette window.
pub fn swatch_picker(color: RwSignal<PickerColor>) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    screen::picker_screen(color)
}
