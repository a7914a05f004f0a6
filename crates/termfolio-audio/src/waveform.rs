//! Procedural waveform generators.
//!
//! All generators are deterministic in their inputs: the session draws a
//! seed once and every click rendered from it is sample-identical.

use std::f32::consts::PI;

/// Length of the click sample in seconds.
pub const CLICK_DURATION_SECS: f32 = 0.06;

/// Lowest base frequency of the click body, in Hz.
pub const CLICK_BASE_FREQ_MIN: f32 = 120.0;
/// Width of the base frequency range, in Hz.
pub const CLICK_BASE_FREQ_SPAN: f32 = 80.0;

/// Lowest fallback tone frequency, in Hz.
pub const FALLBACK_FREQ_MIN: f32 = 150.0;
/// Width of the fallback tone frequency range, in Hz.
pub const FALLBACK_FREQ_SPAN: f32 = 100.0;

const HASH_MULT: u32 = 0x9E37_79B1;

/// Knuth multiplicative hash with two xor-shift mixing rounds.
fn hash_step(seed: u32) -> u32 {
    let mut h = seed.wrapping_mul(HASH_MULT);
    h ^= h >> 16;
    h = h.wrapping_mul(0x45d9_f3b);
    h ^= h >> 16;
    h
}

/// Pseudo-random value in `[0.0, 1.0)` for `(seed, index)`.
pub fn unit_noise(seed: u32, index: u32) -> f32 {
    let h = hash_step(seed ^ index.wrapping_mul(HASH_MULT));
    (h >> 8) as f32 / 16_777_216.0
}

/// Base frequency of the click body for a session seed.
pub fn click_base_frequency(seed: u32) -> f32 {
    CLICK_BASE_FREQ_MIN + unit_noise(seed, u32::MAX) * CLICK_BASE_FREQ_SPAN
}

/// Frequency of the fallback tone for a session seed.
pub fn fallback_frequency(seed: u32) -> f32 {
    FALLBACK_FREQ_MIN + unit_noise(seed, u32::MAX - 1) * FALLBACK_FREQ_SPAN
}

/// Render the keystroke click: a low decaying sine "body" mixed with a
/// short burst of noise.
///
/// `t` runs from 0 to 1 across the buffer. The body decays with
/// `exp(-8t)`, the noise transient with `exp(-40t)` and is further rolled
/// off by `1 - 0.6t`. Returns `None` when the sample rate is too low to
/// hold a single sample.
pub fn generate_click(sample_rate: u32, base_freq: f32, seed: u32) -> Option<Vec<f32>> {
    let len = (sample_rate as f32 * CLICK_DURATION_SECS).round() as usize;
    if len == 0 {
        return None;
    }
    let sr = sample_rate as f32;
    let mut data = Vec::with_capacity(len);
    for i in 0..len {
        let t = i as f32 / len as f32;
        let body_env = (-8.0 * t).exp();
        let sine = (2.0 * PI * base_freq * (i as f32 / sr)).sin() * 0.7;
        let noise_env = (-40.0 * t).exp();
        let noise = (unit_noise(seed, i as u32) * 2.0 - 1.0) * noise_env * 0.35;
        data.push(sine * body_env * 0.9 + noise * (1.0 - t * 0.6));
    }
    Some(data)
}

/// Shape of the synthesized fallback tone.
///
/// Gain ramps exponentially from `floor` to 1.0 over `attack_secs`, back
/// down to `floor` by `decay_secs`, and the oscillator stops at
/// `stop_secs`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneEnvelope {
    pub frequency: f32,
    pub attack_secs: f32,
    pub decay_secs: f32,
    pub stop_secs: f32,
    pub floor: f32,
}

impl ToneEnvelope {
    /// The short sine blip played when no click buffer exists.
    pub fn fallback(frequency: f32) -> Self {
        Self {
            frequency,
            attack_secs: 0.001,
            decay_secs: 0.06,
            stop_secs: 0.07,
            floor: 0.0001,
        }
    }

    /// Envelope gain at time `t` seconds.
    pub fn gain_at(&self, t: f32) -> f32 {
        if t < 0.0 || t >= self.stop_secs {
            return 0.0;
        }
        if t < self.attack_secs {
            let frac = t / self.attack_secs;
            return self.floor * (1.0 / self.floor).powf(frac);
        }
        if t < self.decay_secs {
            let frac = (t - self.attack_secs) / (self.decay_secs - self.attack_secs);
            return self.floor.powf(frac);
        }
        self.floor
    }

    /// Render the tone to mono samples.
    pub fn render(&self, sample_rate: u32) -> Vec<f32> {
        let sr = sample_rate as f32;
        let len = (sr * self.stop_secs).round() as usize;
        (0..len)
            .map(|i| {
                let t = i as f32 / sr;
                (2.0 * PI * self.frequency * t).sin() * self.gain_at(t)
            })
            .collect()
    }
}
