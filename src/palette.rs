//! Fixed seven-color palette, hue classification, and the five-swatch
//! "nearby colors" window.
//!
//! This is the selection logic behind the screen: a gesture hue is bucketed
//! into one of seven canonical colors, and that color's position in the
//! palette picks a contiguous, circularly wrapped window of five swatches.
//! Everything here is pure and widget-independent so it can be tested without
//! a renderer.

use thiserror::Error;

use crate::color::PickerColor;

/// Number of entries in the fixed palette.
pub const PALETTE_LEN: usize = 7;

/// Number of swatches in the displayed window.
pub const WINDOW_LEN: usize = 5;

/// One palette entry. `key` doubles as the stable identity of the swatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteEntry {
    pub key: &'static str,
    pub color: PickerColor,
}

const fn entry(key: &'static str, r: u8, g: u8, b: u8) -> PaletteEntry {
    PaletteEntry {
        key,
        color: PickerColor::from_rgb8(r, g, b),
    }
}

/// The palette, in insertion order. Order is significant: it defines the
/// circular adjacency used by [`select_window`].
pub static PALETTE: [PaletteEntry; PALETTE_LEN] = [
    entry("1", 255, 0, 0),   // #ff0000
    entry("2", 255, 165, 0), // #ffa500
    entry("3", 255, 255, 0), // #ffff00
    entry("4", 0, 255, 0),   // #00ff00
    entry("5", 0, 173, 230), // #00ade6
    entry("6", 91, 0, 224),  // #5b00e0
    entry("7", 234, 0, 237), // #ea00ed
];

/// Half-open angular interval `[lo, hi)` in whole degrees, mapped to a
/// palette index.
struct HueBin {
    lo: u16,
    hi: u16,
    palette_index: usize,
}

/// The bins partition `[0, 360)` with no gaps or overlaps. Red owns both
/// ends of the circle.
const HUE_BINS: [HueBin; 8] = [
    HueBin { lo: 0, hi: 25, palette_index: 0 },
    HueBin { lo: 25, hi: 50, palette_index: 1 },
    HueBin { lo: 50, hi: 75, palette_index: 2 },
    HueBin { lo: 75, hi: 150, palette_index: 3 },
    HueBin { lo: 150, hi: 200, palette_index: 4 },
    HueBin { lo: 200, hi: 260, palette_index: 5 },
    HueBin { lo: 260, hi: 340, palette_index: 6 },
    HueBin { lo: 340, hi: 360, palette_index: 0 },
];

/// Classification failure: the hue was not a finite value in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum HueError {
    #[error("hue {0} is outside [0, 360)")]
    OutOfRange(f64),
}

fn classify_index(hue: f64) -> Result<usize, HueError> {
    if !hue.is_finite() || !(0.0..360.0).contains(&hue) {
        return Err(HueError::OutOfRange(hue));
    }
    let deg = hue.floor() as u16;
    HUE_BINS
        .iter()
        .find(|bin| deg >= bin.lo && deg < bin.hi)
        .map(|bin| bin.palette_index)
        .ok_or(HueError::OutOfRange(hue))
}

/// Map a hue angle in degrees to its canonical palette entry.
///
/// Bins are applied to `floor(hue)`, so every fractional hue inside
/// `[0, 360)` classifies. Hues outside that range fail with
/// [`HueError::OutOfRange`] rather than silently keeping the old selection.
pub fn classify_hue(hue: f64) -> Result<&'static PaletteEntry, HueError> {
    Ok(&PALETTE[classify_index(hue)?])
}

/// The contiguous five-entry window starting at `index`, wrapping past the
/// end of the palette.
///
/// The window's first element is the active color; the full window is the
/// displayed swatch strip.
///
/// # Panics
///
/// Panics if `index >= PALETTE_LEN`. Indices come from classification and
/// are always in range; an out-of-range index is a caller bug.
pub fn select_window(index: usize) -> [&'static PaletteEntry; WINDOW_LEN] {
    assert!(
        index < PALETTE_LEN,
        "palette index {index} out of range (palette has {PALETTE_LEN} entries)"
    );
    std::array::from_fn(|offset| &PALETTE[(index + offset) % PALETTE_LEN])
}

/// Immutable snapshot of the screen's selection: the active color plus the
/// swatch window it was drawn from.
///
/// A new snapshot replaces the previous one wholesale on every hue change;
/// nothing is mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerState {
    pub current: PickerColor,
    pub swatches: [&'static PaletteEntry; WINDOW_LEN],
}

impl PickerState {
    /// The reducer for wheel gestures: classify `hue`, select the window,
    /// and promote its first entry to the active color.
    pub fn for_hue(hue: f64) -> Result<Self, HueError> {
        let index = classify_index(hue)?;
        let swatches = select_window(index);
        Ok(Self {
            current: swatches[0].color,
            swatches,
        })
    }

    /// The reducer for slider commits: replace the active color, keep the
    /// swatch window.
    pub fn with_current(self, color: PickerColor) -> Self {
        Self {
            current: color,
            ..self
        }
    }
}

impl Default for PickerState {
    /// The screen mounts on red, exactly as if hue 0 had been classified.
    fn default() -> Self {
        let swatches = select_window(0);
        Self {
            current: swatches[0].color,
            swatches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hexes<const N: usize>(entries: [&PaletteEntry; N]) -> Vec<String> {
        entries.iter().map(|e| e.color.to_hex()).collect()
    }

    #[test]
    fn bins_partition_the_circle() {
        // Every whole degree classifies, and each bin owns exactly the width
        // the table says it does.
        let mut per_key = std::collections::HashMap::new();
        for deg in 0..360 {
            let entry = classify_hue(deg as f64).unwrap();
            *per_key.entry(entry.key).or_insert(0u32) += 1;
        }
        assert_eq!(per_key["1"], 45); // [0,25) ∪ [340,360)
        assert_eq!(per_key["2"], 25);
        assert_eq!(per_key["3"], 25);
        assert_eq!(per_key["4"], 75);
        assert_eq!(per_key["5"], 50);
        assert_eq!(per_key["6"], 60);
        assert_eq!(per_key["7"], 80);
    }

    #[test]
    fn bin_boundaries() {
        let cases = [
            (0.0, "#ff0000"),
            (24.0, "#ff0000"),
            (25.0, "#ffa500"),
            (49.0, "#ffa500"),
            (50.0, "#ffff00"),
            (74.0, "#ffff00"),
            (75.0, "#00ff00"),
            (149.0, "#00ff00"),
            (150.0, "#00ade6"),
            (199.0, "#00ade6"),
            (200.0, "#5b00e0"),
            (259.0, "#5b00e0"),
            (260.0, "#ea00ed"),
            (339.0, "#ea00ed"),
            (340.0, "#ff0000"),
            (359.0, "#ff0000"),
        ];
        for (hue, expected) in cases {
            assert_eq!(
                classify_hue(hue).unwrap().color.to_hex(),
                expected,
                "hue {hue}"
            );
        }
    }

    #[test]
    fn fractional_hues_floor_before_binning() {
        assert_eq!(classify_hue(24.999).unwrap().color.to_hex(), "#ff0000");
        assert_eq!(classify_hue(25.001).unwrap().color.to_hex(), "#ffa500");
        assert_eq!(classify_hue(339.999).unwrap().color.to_hex(), "#ea00ed");
        assert_eq!(classify_hue(359.999).unwrap().color.to_hex(), "#ff0000");
    }

    #[test]
    fn out_of_range_hues_fail_loudly() {
        assert!(matches!(
            classify_hue(360.0),
            Err(HueError::OutOfRange(_))
        ));
        assert!(matches!(
            classify_hue(-0.001),
            Err(HueError::OutOfRange(_))
        ));
        assert!(matches!(
            classify_hue(f64::NAN),
            Err(HueError::OutOfRange(_))
        ));
        assert!(matches!(
            classify_hue(f64::INFINITY),
            Err(HueError::OutOfRange(_))
        ));
    }

    #[test]
    fn windows_have_five_distinct_palette_members() {
        for index in 0..PALETTE_LEN {
            let window = select_window(index);
            assert_eq!(window.len(), WINDOW_LEN);
            let mut keys: Vec<_> = window.iter().map(|e| e.key).collect();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), WINDOW_LEN, "duplicates at index {index}");
            for entry in window {
                assert!(PALETTE.iter().any(|p| p.key == entry.key));
            }
        }
    }

    #[test]
    fn last_straight_slice_at_index_two() {
        // 2 + 5 lands exactly on the palette end; no wrap involved.
        assert_eq!(
            hexes(select_window(2)),
            ["#ffff00", "#00ff00", "#00ade6", "#5b00e0", "#ea00ed"]
        );
    }

    #[test]
    fn deepest_wrap_at_index_six() {
        assert_eq!(
            hexes(select_window(6)),
            ["#ea00ed", "#ff0000", "#ffa500", "#ffff00", "#00ff00"]
        );
    }

    #[test]
    #[should_panic(expected = "palette index 7 out of range")]
    fn window_rejects_out_of_range_index() {
        let _ = select_window(PALETTE_LEN);
    }

    #[test]
    fn scenario_hue_ten_selects_the_red_window() {
        let state = PickerState::for_hue(10.0).unwrap();
        assert_eq!(state.current.to_hex(), "#ff0000");
        assert_eq!(
            hexes(state.swatches),
            ["#ff0000", "#ffa500", "#ffff00", "#00ff00", "#00ade6"]
        );
    }

    #[test]
    fn scenario_hue_three_hundred_wraps_from_magenta() {
        let state = PickerState::for_hue(300.0).unwrap();
        assert_eq!(state.current.to_hex(), "#ea00ed");
        assert_eq!(
            hexes(state.swatches),
            ["#ea00ed", "#ff0000", "#ffa500", "#ffff00", "#00ff00"]
        );
    }

    #[test]
    fn reclassifying_palette_colors() {
        // Six of the seven entries sit inside their own bin, so classifying
        // the first swatch of their window is a fixed point. Violet is the
        // exception: its own hue (~264.4°) lands in the magenta bin, which
        // was carved for gesture hues rather than for the palette's exact
        // colors.
        for entry in &PALETTE {
            let reclassified = classify_hue(entry.color.hue_degrees()).unwrap();
            if entry.key == "6" {
                assert_eq!(reclassified.key, "7");
            } else {
                assert_eq!(reclassified.key, entry.key, "entry {}", entry.key);
            }
        }
    }

    #[test]
    fn with_current_keeps_the_window() {
        let state = PickerState::for_hue(100.0).unwrap();
        let dimmed = PickerColor::from_hsl(state.current.to_hsl().0, 1.0, 0.25);
        let next = state.with_current(dimmed);
        assert_eq!(next.current, dimmed);
        assert_eq!(hexes(next.swatches), hexes(state.swatches));
    }

    #[test]
    fn default_is_the_red_window() {
        let state = PickerState::default();
        assert_eq!(state.current.to_hex(), "#ff0000");
        assert_eq!(state.swatches[0].key, "1");
        assert_eq!(state, PickerState::for_hue(0.0).unwrap());
    }
}
