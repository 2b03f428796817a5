//! Numeric ramp animation used by the result counters.
//!
//! A [`Ramp`] is a pure description of how a displayed percentage climbs from
//! zero to its target: how long to wait between ticks and which value each
//! tick shows. [`use_ramp`] drives one inside a component; the ticking task
//! belongs to that component and is dropped with it, so a counter whose view
//! was closed or replaced stops on its own.

use dioxus::prelude::*;

use crate::core::{format, timing};

/// Total duration of the fractional counter.
pub const LINEAR_DURATION_MS: u64 = 1200;
/// Sampling interval of the fractional counter.
pub const LINEAR_SAMPLE_MS: u64 = 20;
/// Total duration budget of the whole-number counter.
pub const STEPPED_DURATION_MS: u64 = 1500;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RampKind {
    /// Fixed sample rate, increment `target / steps`, precision by target.
    Linear { duration_ms: u64, sample_ms: u64 },
    /// `+1` per tick, tick delay `duration / target`, rounded display.
    Stepped { duration_ms: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    target: f64,
    kind: RampKind,
}

impl Ramp {
    pub fn linear(target: f64) -> Self {
        Self {
            target,
            kind: RampKind::Linear {
                duration_ms: LINEAR_DURATION_MS,
                sample_ms: LINEAR_SAMPLE_MS,
            },
        }
    }

    pub fn stepped(target: f64) -> Self {
        Self {
            target,
            kind: RampKind::Stepped {
                duration_ms: STEPPED_DURATION_MS,
            },
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Zero, negative or NaN targets never start a timer.
    pub fn is_idle(&self) -> bool {
        self.target.is_nan() || self.target <= 0.0
    }

    pub fn tick_ms(&self) -> u64 {
        match self.kind {
            RampKind::Linear { sample_ms, .. } => sample_ms.max(1),
            RampKind::Stepped { duration_ms } => {
                if self.is_idle() {
                    duration_ms
                } else {
                    ((duration_ms as f64 / self.target).floor() as u64).max(1)
                }
            }
        }
    }

    /// Values shown on each tick, in order. Empty for idle ramps.
    pub fn frames(&self) -> RampFrames {
        RampFrames {
            ramp: *self,
            step: 0,
            done: self.is_idle(),
        }
    }

    pub fn label(&self, value: f64) -> String {
        match self.kind {
            RampKind::Linear { .. } => format::format_ramp_percent(value, self.target),
            RampKind::Stepped { .. } => format::format_whole_percent(value),
        }
    }

    /// Text shown before the first tick (and forever for idle ramps).
    pub fn initial_label(&self) -> String {
        "0%".to_string()
    }

    /// Text shown after the last tick.
    pub fn final_label(&self) -> String {
        if self.is_idle() {
            self.initial_label()
        } else {
            self.label(self.target)
        }
    }
}

pub struct RampFrames {
    ramp: Ramp,
    step: u64,
    done: bool,
}

impl Iterator for RampFrames {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.done {
            return None;
        }
        self.step += 1;
        let target = self.ramp.target;
        let value = match self.ramp.kind {
            RampKind::Linear {
                duration_ms,
                sample_ms,
            } => {
                let steps = (duration_ms / sample_ms.max(1)).max(1);
                if self.step >= steps {
                    target
                } else {
                    target * self.step as f64 / steps as f64
                }
            }
            RampKind::Stepped { .. } => self.step as f64,
        };
        if value >= target {
            self.done = true;
            Some(target)
        } else {
            Some(value)
        }
    }
}

/// Runs `ramp` for the lifetime of the calling component and returns the
/// label signal to display.
pub fn use_ramp(ramp: Ramp) -> Signal<String> {
    let mut label = use_signal(|| ramp.initial_label());

    use_future(move || async move {
        let tick = ramp.tick_ms();
        for value in ramp.frames() {
            timing::sleep_ms(tick).await;
            label.set(ramp.label(value));
        }
    });

    label
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(ramp: Ramp) -> Vec<String> {
        ramp.frames().map(|v| ramp.label(v)).collect()
    }

    fn assert_monotone(values: &[f64]) {
        for pair in values.windows(2) {
            assert!(pair[0] <= pair[1], "ramp went backwards: {pair:?}");
        }
    }

    #[test]
    fn linear_ramp_takes_sixty_samples_and_lands_on_target() {
        for target in [0.4, 7.5, 42.0, 99.99, 100.0] {
            let ramp = Ramp::linear(target);
            let values: Vec<f64> = ramp.frames().collect();
            assert_eq!(values.len(), 60, "target {target}");
            assert_monotone(&values);
            assert_eq!(*values.last().unwrap(), target);
            assert_eq!(ramp.tick_ms(), 20);
        }
    }

    #[test]
    fn linear_final_label_uses_target_precision() {
        assert_eq!(labels(Ramp::linear(0.4)).last().unwrap(), "0.40%");
        assert_eq!(labels(Ramp::linear(7.5)).last().unwrap(), "7.5%");
        assert_eq!(labels(Ramp::linear(42.0)).last().unwrap(), "42%");
        assert_eq!(Ramp::linear(7.5).final_label(), "7.5%");
    }

    #[test]
    fn zero_target_never_ticks() {
        for ramp in [Ramp::linear(0.0), Ramp::stepped(0.0), Ramp::linear(f64::NAN)] {
            assert!(ramp.is_idle());
            assert_eq!(ramp.frames().count(), 0);
            assert_eq!(ramp.final_label(), "0%");
        }
    }

    #[test]
    fn stepped_ramp_counts_whole_numbers_then_clamps() {
        let ramp = Ramp::stepped(42.7);
        let values: Vec<f64> = ramp.frames().collect();
        assert_eq!(values.len(), 43);
        assert_eq!(values[0], 1.0);
        assert_eq!(values[41], 42.0);
        assert_eq!(values[42], 42.7);
        assert_monotone(&values);
        assert_eq!(ramp.final_label(), "43%");
        assert_eq!(ramp.tick_ms(), 35);
    }

    #[test]
    fn stepped_ramp_below_one_is_a_single_tick() {
        let ramp = Ramp::stepped(0.4);
        assert_eq!(ramp.frames().collect::<Vec<_>>(), vec![0.4]);
        assert_eq!(ramp.tick_ms(), 3750);
        assert_eq!(ramp.final_label(), "0%");
    }

    #[test]
    fn stepped_tick_never_reaches_zero() {
        assert_eq!(Ramp::stepped(100.0).tick_ms(), 15);
        assert_eq!(Ramp::stepped(5000.0).tick_ms(), 1);
    }
}
