//! Pulse halo animation behind the color wheel.
//!
//! Releasing the wheel kicks the halo out to full scale and lets it settle
//! back down behind the disc. The animation only writes the halo scale
//! signal; color selection never depends on it.

use std::time::{Duration, Instant};

use floem::action::exec_after;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::constants;

/// Halo animation state. `scale` multiplies the halo circle radii; the halo
/// disappears behind the wheel disc once it settles at 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Pulse {
    pub scale: f64,
    generation: u64,
}

impl Default for Pulse {
    /// The halo starts extended, as on first mount of the screen.
    fn default() -> Self {
        Self {
            scale: constants::PULSE_START_SCALE,
            generation: 0,
        }
    }
}

/// Linear settle from full scale down to 1.0; `t` is elapsed/duration.
fn scale_at(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        constants::PULSE_START_SCALE - (constants::PULSE_START_SCALE - 1.0) * t.max(0.0)
    }
}

/// Kick off a pulse. A newer pulse supersedes any run still in flight.
pub(crate) fn start_pulse(pulse: RwSignal<Pulse>) {
    let generation = pulse.get_untracked().generation + 1;
    pulse.set(Pulse {
        scale: constants::PULSE_START_SCALE,
        generation,
    });
    tick(pulse, generation, Instant::now());
}

fn tick(pulse: RwSignal<Pulse>, generation: u64, started: Instant) {
    exec_after(
        Duration::from_millis(constants::PULSE_TICK_MS),
        move |_token| {
            if pulse.get_untracked().generation != generation {
                return;
            }
            let t = started.elapsed().as_secs_f64() / constants::PULSE_SECONDS;
            pulse.update(|p| p.scale = scale_at(t));
            if t < 1.0 {
                tick(pulse, generation, started);
            }
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_is_linear_and_clamped() {
        assert_eq!(scale_at(0.0), constants::PULSE_START_SCALE);
        let mid = scale_at(0.5);
        assert!((mid - (constants::PULSE_START_SCALE + 1.0) / 2.0).abs() < 1e-9);
        assert_eq!(scale_at(1.0), 1.0);
        assert_eq!(scale_at(2.5), 1.0);
        assert_eq!(scale_at(-0.1), constants::PULSE_START_SCALE);
    }
}
