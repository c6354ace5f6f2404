//! End-to-end checks of the public selection API: the same path the screen
//! takes for a wheel gesture, classify → window → snapshot, without a
//! renderer.

use floem_swatch::{
    HueError, PALETTE, PALETTE_LEN, PickerColor, PickerState, WINDOW_LEN, classify_hue,
    select_window,
};

fn palette_position(key: &str) -> usize {
    PALETTE
        .iter()
        .position(|e| e.key == key)
        .expect("swatch key must come from the palette")
}

#[test]
fn every_gesture_hue_produces_a_canonical_window() {
    // Sweep the wheel in tenth-of-a-degree steps. Every hue must classify,
    // and every snapshot must be a contiguous circular window with its first
    // swatch promoted to the active color.
    for tenth in 0..3600 {
        let hue = tenth as f64 / 10.0;
        let state = PickerState::for_hue(hue).unwrap();

        assert_eq!(state.swatches.len(), WINDOW_LEN);
        assert_eq!(state.current, state.swatches[0].color, "hue {hue}");

        let start = palette_position(state.swatches[0].key);
        for (offset, entry) in state.swatches.iter().enumerate() {
            assert_eq!(
                palette_position(entry.key),
                (start + offset) % PALETTE_LEN,
                "window not contiguous at hue {hue}"
            );
        }
    }
}

#[test]
fn classification_matches_the_window_start() {
    for deg in 0..360 {
        let hue = deg as f64;
        let canonical = classify_hue(hue).unwrap();
        let state = PickerState::for_hue(hue).unwrap();
        assert_eq!(state.swatches[0].key, canonical.key);
    }
}

#[test]
fn red_window_at_low_hue() {
    let state = PickerState::for_hue(10.0).unwrap();
    let hexes: Vec<_> = state.swatches.iter().map(|e| e.color.to_hex()).collect();
    assert_eq!(
        hexes,
        ["#ff0000", "#ffa500", "#ffff00", "#00ff00", "#00ade6"]
    );
}

#[test]
fn magenta_window_wraps_back_to_red() {
    let state = PickerState::for_hue(300.0).unwrap();
    let hexes: Vec<_> = state.swatches.iter().map(|e| e.color.to_hex()).collect();
    assert_eq!(
        hexes,
        ["#ea00ed", "#ff0000", "#ffa500", "#ffff00", "#00ff00"]
    );
}

#[test]
fn window_selection_is_circular() {
    let wrapped = select_window(PALETTE_LEN - 1);
    let keys: Vec<_> = wrapped.iter().map(|e| e.key).collect();
    assert_eq!(keys, ["7", "1", "2", "3", "4"]);
}

#[test]
fn settled_selection_is_stable_within_a_bin() {
    // Once the wheel hue and the active color agree on a bin, re-running the
    // reducer changes nothing.
    for deg in [10.0, 40.0, 60.0, 100.0, 170.0, 230.0, 300.0] {
        let first = PickerState::for_hue(deg).unwrap();
        let again = PickerState::for_hue(deg).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn slider_commits_keep_the_window() {
    let state = PickerState::for_hue(170.0).unwrap();
    let (h, _, _) = state.current.to_hsl();
    let dimmed = state.with_current(PickerColor::from_hsl(h, 1.0, 0.3));
    let keys_before: Vec<_> = state.swatches.iter().map(|e| e.key).collect();
    let keys_after: Vec<_> = dimmed.swatches.iter().map(|e| e.key).collect();
    assert_eq!(keys_before, keys_after);
    assert_ne!(dimmed.current, state.current);
}

#[test]
fn out_of_range_hue_is_rejected_loudly() {
    assert!(matches!(
        PickerState::for_hue(360.0),
        Err(HueError::OutOfRange(_))
    ));
    assert!(matches!(
        PickerState::for_hue(-1.0),
        Err(HueError::OutOfRange(_))
    ));
}
