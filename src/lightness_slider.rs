//! Lightness slider (0.0–1.0).
//!
//! Renders a horizontal gradient from black (left) through the current hue
//! at full chroma (middle) to white (right) as a rasterized image, avoiding
//! vger's broken linear gradient coordinate handling. The thumb follows the
//! pointer continuously, but the commit callback fires only on drag-end.

use std::sync::Arc;

use floem::kurbo::Rect;
use floem::peniko::{self, Blob, Color};

use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::constants;
use crate::math;

/// Rasterize the track: black on the left, `(r, g, b)` in the middle,
/// white on the right.
fn rasterize_lightness_gradient(width: u32, height: u32, r: f64, g: f64, b: f64) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for px in 0..width {
        let t = px as f64 / (width - 1).max(1) as f64; // 0 at left, 1 at right
        let (cr, cg, cb) = if t <= 0.5 {
            let k = t * 2.0;
            (r * k, g * k, b * k)
        } else {
            let k = (t - 0.5) * 2.0;
            (r + (1.0 - r) * k, g + (1.0 - g) * k, b + (1.0 - b) * k)
        };
        for py in 0..height {
            let offset = ((py * width + px) * 4) as usize;
            buf[offset] = (cr * 255.0 + 0.5) as u8;
            buf[offset + 1] = (cg * 255.0 + 0.5) as u8;
            buf[offset + 2] = (cb * 255.0 + 0.5) as u8;
            buf[offset + 3] = 255;
        }
    }
    buf
}

enum LightnessUpdate {
    Value(f64),
    BaseColor(f64, f64, f64),
}

pub struct LightnessSlider {
    id: ViewId,
    held: bool,
    lightness: f64,
    base_r: f64,
    base_g: f64,
    base_b: f64,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(f64)>>,
    on_commit: Option<Box<dyn Fn(f64)>>,
    /// Cached gradient image.
    grad_img: Option<peniko::Image>,
    grad_hash: Vec<u8>,
    cached_color: (u8, u8, u8),
    cached_dims: (u32, u32),
}

/// Creates a horizontal lightness slider.
///
/// - `hue`: read-only, used to compute the track's middle color.
/// - `lightness`: 0.0 (black, left) to 1.0 (white, right); updated on every
///   drag sample.
/// - `on_commit`: called with the final lightness on drag-end only.
pub fn lightness_slider(
    hue: RwSignal<f64>,
    lightness: RwSignal<f64>,
    on_commit: impl Fn(f64) + 'static,
) -> LightnessSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let l = lightness.get();
        id.update_state(LightnessUpdate::Value(l));
    });

    create_effect(move |_| {
        let h = hue.get();
        let (r, g, b) = math::hsv_to_rgb(h, 1.0, 1.0);
        id.update_state(LightnessUpdate::BaseColor(r, g, b));
    });

    let (r, g, b) = math::hsv_to_rgb(hue.get_untracked(), 1.0, 1.0);

    LightnessSlider {
        id,
        held: false,
        lightness: lightness.get_untracked(),
        base_r: r,
        base_g: g,
        base_b: b,
        size: Default::default(),
        on_change: Some(Box::new(move |val| {
            lightness.set(val);
        })),
        on_commit: Some(Box::new(on_commit)),
        grad_img: None,
        grad_hash: Vec::new(),
        cached_color: (0, 0, 0),
        cached_dims: (0, 0),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl LightnessSlider {
    fn update_from_pointer(&mut self, x: f64) {
        let w = self.size.width as f64;
        let r = constants::THUMB_RADIUS;
        let usable = w - 2.0 * r;
        if usable > 0.0 {
            // Left = black, right = white
            self.lightness = ((x - r) / usable).clamp(0.0, 1.0);
        }
    }

    fn track_rect(&self) -> Rect {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        let r = constants::THUMB_RADIUS;
        let half = constants::TRACK_HEIGHT / 2.0;
        Rect::new(r, h / 2.0 - half, w - r, h / 2.0 + half)
    }

    fn ensure_gradient_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let track = self.track_rect();
        let pw = (track.width() * s).round() as u32;
        let ph = (track.height() * s).round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }

        let color_key = (
            (self.base_r * 255.0 + 0.5) as u8,
            (self.base_g * 255.0 + 0.5) as u8,
            (self.base_b * 255.0 + 0.5) as u8,
        );
        let dims = (pw, ph);
        if self.cached_dims == dims && self.cached_color == color_key {
            return;
        }

        let pixels = rasterize_lightness_gradient(pw, ph, self.base_r, self.base_g, self.base_b);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        let id = blob.id();
        self.grad_hash = id.to_le_bytes().to_vec();
        self.grad_img = Some(img);
        self.cached_color = color_key;
        self.cached_dims = dims;
    }
}

impl View for LightnessSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<LightnessUpdate>() {
            match *update {
                LightnessUpdate::Value(val) => self.lightness = val,
                LightnessUpdate::BaseColor(r, g, b) => {
                    self.base_r = r;
                    self.base_g = g;
                    self.base_b = b;
                }
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                if let Some(cb) = &self.on_change {
                    cb(self.lightness);
                }
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos.x);
                    if let Some(cb) = &self.on_change {
                        cb(self.lightness);
                    }
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(e) => {
                if self.held {
                    self.held = false;
                    self.update_from_pointer(e.pos.x);
                    if let Some(cb) = &self.on_commit {
                        cb(self.lightness);
                    }
                    self.id.request_layout();
                }
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
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
        let track = self.track_rect();
        let rtrack = track.to_rounded_rect(constants::TRACK_HEIGHT / 2.0);

        // Clip to rounded rect for rounded ends
        cx.save();
        cx.clip(&rtrack);

        // Black (left) → hue (middle) → white (right) as an image
        let scale = cx.scale();
        self.ensure_gradient_image(scale);
        if let Some(ref img) = self.grad_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.grad_hash,
                },
                track,
            );
        }

        cx.restore();

        // Track outline
        cx.stroke(
            &rtrack,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Thumb (white disc with a ring; left = 0.0, right = 1.0)
        let radius = constants::THUMB_RADIUS;
        let thumb_x = radius + self.lightness * (w - 2.0 * radius);
        let thumb_cy = h / 2.0;
        let disc = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 1.0);
        cx.fill(&disc, Color::WHITE, 0.0);
        let ring = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius);
        cx.stroke(
            &ring,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let inner = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 2.5);
        cx.stroke(
            &inner,
            Color::rgba8(0, 0, 0, 25),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}
