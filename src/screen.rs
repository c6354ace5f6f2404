//! The picker screen: header, color wheel with pulse halo, lightness slider,
//! and the nearby-swatch panel.
//!
//! All selection state lives in immutable [`PickerState`] snapshots; each
//! gesture produces a new snapshot through the palette reducers rather than
//! mutating anything in place.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};

use crate::color::PickerColor;
use crate::color_wheel::color_wheel;
use crate::constants;
use crate::controls::{copy_button, icon_label};
use crate::lightness_slider::lightness_slider;
use crate::palette::PickerState;
use crate::pulse::{Pulse, start_pulse};
use crate::swatch_strip::swatch_panel;

fn about_equal(a: PickerColor, b: PickerColor, eps: f64) -> bool {
    (a.r() - b.r()).abs() < eps && (a.g() - b.g()).abs() < eps && (a.b() - b.b()).abs() < eps
}

/// Creates the full picker screen, bound to `color`.
pub(crate) fn picker_screen(color: RwSignal<PickerColor>) -> impl IntoView {
    let hue = RwSignal::new(0.0_f64);
    let saturation = RwSignal::new(1.0_f64);
    let lightness = RwSignal::new(0.5_f64);
    let slider_hue = RwSignal::new(0.0_f64);
    let state = RwSignal::new(PickerState::default());
    let pulse = RwSignal::new(Pulse::default());

    // Initialize from the caller's color. As with every hue change, the
    // active color snaps to the first swatch of its window.
    {
        let c = color.get_untracked();
        let (h, s, l) = c.to_hsl();
        if s > 0.001 && l > 0.001 && l < 0.999 {
            hue.set(h);
            slider_hue.set(h);
        }
        saturation.set(s);
        lightness.set(l);
        match PickerState::for_hue(c.hue_degrees()) {
            Ok(initial) => state.set(initial),
            Err(err) => log::warn!("initial color could not be classified: {err}"),
        }
    }

    // Wheel gesture → new snapshot, replaced wholesale.
    create_effect(move |_| {
        let deg = hue.get() * 360.0;
        match PickerState::for_hue(deg) {
            Ok(next) => {
                if next != state.get_untracked() {
                    log::debug!(
                        "hue {deg:.1}° selects the window at swatch {}",
                        next.swatches[0].key
                    );
                    state.set(next);
                }
            }
            // Unreachable for wheel-produced hues; keep the previous window.
            Err(err) => log::warn!("unclassifiable hue from wheel: {err}"),
        }
    });

    // The slider gradient follows the active color's hue; grays keep the
    // last chromatic hue.
    create_effect(move |_| {
        let (h, s, _) = state.get().current.to_hsv();
        if s > 0.001 && (slider_hue.get_untracked() - h).abs() > 0.001 {
            slider_hue.set(h);
        }
    });

    // Active color → caller's signal.
    create_effect(move |_| {
        let current = state.get().current;
        if !about_equal(current, color.get_untracked(), 0.001) {
            color.set(current);
        }
    });

    // External writes fold back in as if the wheel had been moved there.
    create_effect(move |prev: Option<PickerColor>| {
        let c = color.get();
        if let Some(prev) = prev {
            if about_equal(c, prev, 0.001) {
                return c;
            }
        }
        if about_equal(c, state.get_untracked().current, 0.005) {
            return c;
        }
        let (h, s, l) = c.to_hsl();
        if s > 0.001 && l > 0.001 && l < 0.999 {
            hue.set(h);
        }
        saturation.set(s);
        lightness.set(l);
        c
    });

    // Slider drag-end: adjust the active color's lightness, keep the window.
    let on_commit = move |l: f64| {
        let adjusted = PickerColor::from_hsl(slider_hue.get_untracked(), 1.0, l);
        log::debug!("lightness {l:.2} commits {}", adjusted.to_hex());
        state.update(|st| *st = st.with_current(adjusted));
    };

    let halo_color = move || {
        let c = state.get().current;
        (c.r(), c.g(), c.b())
    };
    let on_release = move || start_pulse(pulse);

    let chrome_tint = move || {
        let c = state.get().current;
        Color::rgba(c.r(), c.g(), c.b(), 1.0)
    };

    v_stack((
        // Header: back arrow + title, tinted by the active color
        h_stack((
            icon_label(lucide_icons::Icon::ArrowLeft, 28.0, chrome_tint),
            label(|| "New color").style(move |s| {
                let c = state.get().current;
                s.font_size(constants::TITLE_FONT)
                    .margin_left(20.0)
                    .color(Color::rgba(c.r(), c.g(), c.b(), 1.0))
            }),
            empty().style(|s| s.flex_grow(1.0)),
            copy_button(move || state.get().current.to_hex()),
        ))
        .style(|s| {
            s.items_center()
                .margin_left(20.0)
                .margin_right(12.0)
                .margin_top(constants::PADDING)
        }),
        // Color wheel with the pulse halo behind it
        color_wheel(hue, saturation, lightness, pulse, halo_color, on_release)
            .style(|s| s.margin_top(12.0).margin_horiz(40.0)),
        // Lightness slider flanked by the lightbulb icons
        h_stack((
            icon_label(
                lucide_icons::Icon::LightbulbOff,
                constants::ICON_FONT,
                chrome_tint,
            ),
            lightness_slider(slider_hue, lightness, on_commit)
                .style(|s| s.flex_grow(1.0).margin_horiz(15.0)),
            icon_label(
                lucide_icons::Icon::Lightbulb,
                constants::ICON_FONT,
                chrome_tint,
            ),
        ))
        .style(|s| {
            s.items_center()
                .margin_horiz(constants::PADDING * 2.0)
                .margin_top(12.0)
        }),
        // Nearby swatches
        swatch_panel(state),
    ))
    .style(|st| {
        st.size_full()
            .gap(constants::GAP)
            .padding_top(2.0)
            .background(Color::WHITE)
    })
}
