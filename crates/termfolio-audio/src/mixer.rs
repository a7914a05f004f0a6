//! Voice mixing for streaming outputs.
//!
//! A device callback pulls samples from a [`Mixer`] while the session pushes
//! clicks into it. Fast typing overlaps clicks, so several voices may sound
//! at once; past the voice cap the oldest is dropped.

use std::sync::Arc;

/// Simultaneous voices kept before the oldest is cut off.
pub const MAX_VOICES: usize = 8;

struct Voice {
    samples: Arc<[f32]>,
    pos: usize,
}

/// Sums queued mono buffers into one output stream.
pub struct Mixer {
    voices: Vec<Voice>,
    gain: f32,
    max_voices: usize,
}

impl Default for Mixer {
    fn default() -> Self {
        Self::new(MAX_VOICES)
    }
}

impl Mixer {
    pub fn new(max_voices: usize) -> Self {
        Self {
            voices: Vec::new(),
            gain: 1.0,
            max_voices: max_voices.max(1),
        }
    }

    /// Gain applied to the mixed signal.
    pub fn set_gain(&mut self, gain: f32) {
        self.gain = gain.max(0.0);
    }

    /// Start a new voice playing `samples` from the beginning.
    pub fn push(&mut self, samples: Arc<[f32]>) {
        if samples.is_empty() {
            return;
        }
        if self.voices.len() >= self.max_voices {
            self.voices.remove(0);
        }
        self.voices.push(Voice { samples, pos: 0 });
    }

    /// Voices still sounding.
    pub fn active(&self) -> usize {
        self.voices.len()
    }

    /// Next mono sample, clamped to `-1.0..=1.0`. Silence when idle.
    pub fn next_sample(&mut self) -> f32 {
        let mut sum = 0.0;
        for voice in &mut self.voices {
            sum += voice.samples[voice.pos];
            voice.pos += 1;
        }
        self.voices.retain(|v| v.pos < v.samples.len());
        (sum * self.gain).clamp(-1.0, 1.0)
    }

    /// Fill an interleaved buffer, copying each sample to every channel.
    pub fn fill(&mut self, out: &mut [f32], channels: usize) {
        for frame in out.chunks_mut(channels.max(1)) {
            let v = self.next_sample();
            for slot in frame.iter_mut() {
                *slot = v;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(samples: &[f32]) -> Arc<[f32]> {
        Arc::from(samples)
    }

    #[test]
    fn idle_mixer_is_silent() {
        let mut mixer = Mixer::default();
        let mut out = [1.0; 6];
        mixer.fill(&mut out, 2);
        assert_eq!(out, [0.0; 6]);
    }

    #[test]
    fn voice_plays_once_then_ends() {
        let mut mixer = Mixer::default();
        mixer.push(buf(&[0.5, -0.25]));
        assert_eq!(mixer.next_sample(), 0.5);
        assert_eq!(mixer.next_sample(), -0.25);
        assert_eq!(mixer.active(), 0);
        assert_eq!(mixer.next_sample(), 0.0);
    }

    #[test]
    fn overlapping_voices_sum_and_clamp() {
        let mut mixer = Mixer::default();
        mixer.push(buf(&[0.25, 0.75]));
        mixer.push(buf(&[0.5, 0.75]));
        assert_eq!(mixer.next_sample(), 0.75);
        assert_eq!(mixer.next_sample(), 1.0);
    }

    #[test]
    fn gain_scales_output() {
        let mut mixer = Mixer::default();
        mixer.set_gain(0.5);
        mixer.push(buf(&[0.5]));
        assert_eq!(mixer.next_sample(), 0.25);
    }

    #[test]
    fn interleaved_fill_duplicates_channels() {
        let mut mixer = Mixer::default();
        mixer.push(buf(&[0.1, 0.2]));
        let mut out = [0.0; 6];
        mixer.fill(&mut out, 3);
        assert_eq!(out, [0.1, 0.1, 0.1, 0.2, 0.2, 0.2]);
    }

    #[test]
    fn voice_cap_drops_oldest() {
        let mut mixer = Mixer::new(2);
        mixer.push(buf(&[0.5; 4]));
        mixer.push(buf(&[0.25; 4]));
        mixer.push(buf(&[0.125; 4]));
        assert_eq!(mixer.active(), 2);
        assert_eq!(mixer.next_sample(), 0.375);
    }

    #[test]
    fn empty_buffers_are_ignored() {
        let mut mixer = Mixer::default();
        mixer.push(buf(&[]));
        assert_eq!(mixer.active(), 0);
    }
}
