//! Nearby-swatch panel: a wave divider over a tinted backdrop, then the
//! five-swatch strip showing the active palette window.

use std::f64::consts::TAU;

use floem::kurbo::{BezPath, Rect};
use floem::peniko::Color;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, create_effect};
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, PaintCx, UpdateCx},
};
use floem_renderer::Renderer;

use crate::constants;
use crate::palette::PickerState;

/// Sampled wave edge: line segments instead of arcs, same technique as the
/// wheel's circle path.
fn wave_path(w: f64, h: f64) -> BezPath {
    const SAMPLES: usize = 64;
    let mid = h * 0.5;
    let amplitude = h * 0.35;

    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.line_to((w, 0.0));
    path.line_to((w, mid));
    for i in 1..=SAMPLES {
        let t = i as f64 / SAMPLES as f64;
        let x = w * (1.0 - t);
        let y = mid + amplitude * (TAU * t).sin();
        path.line_to((x, y));
    }
    path.line_to((0.0, 0.0));
    path.close_path();
    path
}

enum DividerUpdate {
    Tint(f64, f64, f64),
}

/// White sheet with a wavy lower edge over the current-color tint,
/// separating the slider area from the swatch strip.
struct WaveDivider {
    id: ViewId,
    tint: (f64, f64, f64),
    size: floem::taffy::prelude::Size<f32>,
}

fn wave_divider(state: RwSignal<PickerState>) -> WaveDivider {
    let id = ViewId::new();

    create_effect(move |_| {
        let c = state.get().current;
        id.update_state(DividerUpdate::Tint(c.r(), c.g(), c.b()));
    });

    let c = state.get_untracked().current;
    WaveDivider {
        id,
        tint: (c.r(), c.g(), c.b()),
        size: Default::default(),
    }
    .style(|s| s.width_full().height(constants::MASK_HEIGHT))
}

impl View for WaveDivider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<DividerUpdate>() {
            let DividerUpdate::Tint(r, g, b) = *update;
            self.tint = (r, g, b);
            self.id.request_layout();
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }

        let (r, g, b) = self.tint;
        let backdrop = Rect::new(0.0, 0.0, w, h);
        cx.fill(
            &backdrop,
            Color::rgba(r, g, b, constants::BACKDROP_ALPHA),
            0.0,
        );
        cx.fill(&wave_path(w, h), Color::WHITE, 0.0);
    }
}

fn swatch_dot(state: RwSignal<PickerState>, index: usize) -> impl IntoView {
    empty().style(move |s| {
        let c = state.get().swatches[index].color;
        s.width(constants::SWATCH_SIZE)
            .height(constants::SWATCH_SIZE)
            .border_radius(constants::SWATCH_SIZE / 2.0)
            .border(1.0)
            .border_color(Color::rgb8(128, 128, 128))
            .margin_horiz(constants::SWATCH_MARGIN)
            .background(Color::rgba(c.r(), c.g(), c.b(), 1.0))
    })
}

/// The swatch panel: wave divider on top, then the five swatches of the
/// active window in order, over the current-color tint.
pub(crate) fn swatch_panel(state: RwSignal<PickerState>) -> impl IntoView {
    v_stack((
        wave_divider(state),
        h_stack((
            swatch_dot(state, 0),
            swatch_dot(state, 1),
            swatch_dot(state, 2),
            swatch_dot(state, 3),
            swatch_dot(state, 4),
        ))
        .style(move |s| {
            let c = state.get().current;
            s.width_full()
                .items_center()
                .justify_center()
                .padding_top(10.0)
                .padding_bottom(20.0)
                .background(Color::rgba(
                    c.r(),
                    c.g(),
                    c.b(),
                    constants::BACKDROP_ALPHA,
                ))
        }),
    ))
    .style(|s| s.width_full())
}
