//! Audio output abstraction.

use std::cell::RefCell;
use std::rc::Rc;

use termfolio_types::error::Result;

use crate::waveform::ToneEnvelope;

/// A host audio output.
///
/// Playback calls are fire-and-forget: they queue sound and return
/// immediately. Implementations own mixing and device timing.
pub trait AudioSink {
    /// Output sample rate in Hz.
    fn sample_rate(&self) -> u32;

    /// Set the gain applied to everything this sink plays.
    fn set_master_gain(&mut self, gain: f32);

    /// Queue a mono sample buffer.
    fn play_samples(&mut self, samples: &[f32]) -> Result<()>;

    /// Queue a synthesized tone.
    ///
    /// The default renders the envelope and queues the result.
    fn play_tone(&mut self, tone: &ToneEnvelope) -> Result<()> {
        let samples = tone.render(self.sample_rate());
        self.play_samples(&samples)
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy)]
pub struct NullSink {
    pub sample_rate: u32,
}

impl Default for NullSink {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
        }
    }
}

impl AudioSink for NullSink {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn set_master_gain(&mut self, _gain: f32) {}

    fn play_samples(&mut self, _samples: &[f32]) -> Result<()> {
        Ok(())
    }
}

/// One recorded playback.
#[derive(Debug, Clone, PartialEq)]
pub enum Playback {
    Samples { len: usize, gain: f32 },
    Tone { envelope: ToneEnvelope, gain: f32 },
}

/// Sink that records what it was asked to play.
///
/// Clones share the same log, so a test can keep one handle while the
/// synth owns the boxed sink.
#[derive(Debug, Clone)]
pub struct MemorySink {
    sample_rate: u32,
    gain: Rc<RefCell<f32>>,
    log: Rc<RefCell<Vec<Playback>>>,
}

impl MemorySink {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            gain: Rc::new(RefCell::new(1.0)),
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Everything played so far, oldest first.
    pub fn playbacks(&self) -> Vec<Playback> {
        self.log.borrow().clone()
    }

    /// Current master gain.
    pub fn master_gain(&self) -> f32 {
        *self.gain.borrow()
    }
}

impl AudioSink for MemorySink {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn set_master_gain(&mut self, gain: f32) {
        *self.gain.borrow_mut() = gain;
    }

    fn play_samples(&mut self, samples: &[f32]) -> Result<()> {
        let gain = self.master_gain();
        self.log.borrow_mut().push(Playback::Samples {
            len: samples.len(),
            gain,
        });
        Ok(())
    }

    fn play_tone(&mut self, tone: &ToneEnvelope) -> Result<()> {
        let gain = self.master_gain();
        self.log.borrow_mut().push(Playback::Tone {
            envelope: *tone,
            gain,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_sink_accepts_everything() {
        let mut sink = NullSink::default();
        sink.set_master_gain(0.5);
        assert!(sink.play_samples(&[0.0; 16]).is_ok());
        assert!(sink.play_tone(&ToneEnvelope::fallback(200.0)).is_ok());
        assert_eq!(sink.sample_rate(), 44_100);
    }

    #[test]
    fn memory_sink_records_in_order() {
        let mut sink = MemorySink::new(8_000);
        sink.set_master_gain(0.25);
        sink.play_samples(&[0.1; 4]).unwrap();
        sink.play_tone(&ToneEnvelope::fallback(180.0)).unwrap();
        let log = sink.playbacks();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], Playback::Samples { len: 4, gain: 0.25 });
        assert!(matches!(log[1], Playback::Tone { gain, .. } if gain == 0.25));
    }

    #[test]
    fn memory_sink_clones_share_log() {
        let sink = MemorySink::new(8_000);
        let mut boxed: Box<dyn AudioSink> = Box::new(sink.clone());
        boxed.play_samples(&[0.0; 2]).unwrap();
        assert_eq!(sink.playbacks().len(), 1);
    }

    #[test]
    fn default_play_tone_renders_samples() {
        struct Counting(usize);
        impl AudioSink for Counting {
            fn sample_rate(&self) -> u32 {
                1_000
            }
            fn set_master_gain(&mut self, _gain: f32) {}
            fn play_samples(&mut self, samples: &[f32]) -> Result<()> {
                self.0 += samples.len();
                Ok(())
            }
        }
        let mut sink = Counting(0);
        sink.play_tone(&ToneEnvelope::fallback(200.0)).unwrap();
        assert_eq!(sink.0, 70);
    }
}
