//! Lazily initialized keystroke click player.

use termfolio_types::error::Result;

use crate::sink::AudioSink;
use crate::waveform::{self, ToneEnvelope};

enum State {
    /// No keystroke seen yet; nothing opened.
    Dormant,
    Ready {
        sink: Box<dyn AudioSink>,
        /// `None` when the click buffer could not be rendered.
        click: Option<Vec<f32>>,
    },
    /// Opening the sink failed. Every click is a no-op from here on.
    Unavailable,
}

/// Plays one pre-rendered click per keystroke.
///
/// The audio sink is opened on the first call to [`ClickSynth::initialize`]
/// rather than at construction, since hosts may refuse audio before user
/// interaction. Base frequency and noise are fixed by the seed, so every
/// click in a session is identical.
pub struct ClickSynth {
    master_gain: f32,
    seed: u32,
    state: State,
}

impl ClickSynth {
    pub fn new(master_gain: f32, seed: u32) -> Self {
        Self {
            master_gain,
            seed,
            state: State::Dormant,
        }
    }

    /// Seed from the wall clock.
    pub fn from_entropy(master_gain: f32) -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
            .unwrap_or(0x5eed);
        Self::new(master_gain, nanos)
    }

    /// Whether initialization has been attempted.
    pub fn is_initialized(&self) -> bool {
        !matches!(self.state, State::Dormant)
    }

    /// Whether clicks can reach an output.
    pub fn is_available(&self) -> bool {
        matches!(self.state, State::Ready { .. })
    }

    /// Frequency of the click body, in Hz.
    pub fn base_frequency(&self) -> f32 {
        waveform::click_base_frequency(self.seed)
    }

    /// The rendered click, once initialized.
    pub fn click_buffer(&self) -> Option<&[f32]> {
        match &self.state {
            State::Ready { click, .. } => click.as_deref(),
            _ => None,
        }
    }

    /// Open the sink and render the click. Only the first call has any
    /// effect; later calls return immediately.
    ///
    /// A failing `open` leaves the synth permanently silent.
    pub fn initialize<F>(&mut self, open: F)
    where
        F: FnOnce() -> Result<Box<dyn AudioSink>>,
    {
        if self.is_initialized() {
            return;
        }
        self.state = match open() {
            Ok(mut sink) => {
                sink.set_master_gain(self.master_gain);
                let click =
                    waveform::generate_click(sink.sample_rate(), self.base_frequency(), self.seed);
                if click.is_none() {
                    log::warn!(
                        "Click buffer unavailable at {} Hz; using tone fallback",
                        sink.sample_rate()
                    );
                }
                log::debug!(
                    "Keystroke audio ready ({} Hz, body {:.0} Hz)",
                    sink.sample_rate(),
                    self.base_frequency()
                );
                State::Ready { sink, click }
            },
            Err(e) => {
                log::info!("Keystroke audio unavailable: {e}");
                State::Unavailable
            },
        };
    }

    /// Play one click if `enabled` and an output exists.
    ///
    /// Never fails: playback errors are logged and dropped.
    pub fn play_click(&mut self, enabled: bool) {
        if !enabled {
            return;
        }
        let State::Ready { sink, click } = &mut self.state else {
            return;
        };
        let result = match click {
            Some(samples) => sink.play_samples(samples),
            None => sink.play_tone(&ToneEnvelope::fallback(waveform::fallback_frequency(
                self.seed,
            ))),
        };
        if let Err(e) = result {
            log::debug!("click playback failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{MemorySink, Playback};
    use termfolio_types::error::TermfolioError;

    fn ready_synth(sample_rate: u32) -> (ClickSynth, MemorySink) {
        let sink = MemorySink::new(sample_rate);
        let mut synth = ClickSynth::new(0.07, 1234);
        let handle = sink.clone();
        synth.initialize(move || Ok(Box::new(sink)));
        (synth, handle)
    }

    #[test]
    fn dormant_until_initialized() {
        let mut synth = ClickSynth::new(0.07, 1);
        assert!(!synth.is_initialized());
        synth.play_click(true);
        assert!(synth.click_buffer().is_none());
    }

    #[test]
    fn initialize_applies_master_gain_and_renders_click() {
        let (synth, sink) = ready_synth(44_100);
        assert!(synth.is_available());
        assert!((sink.master_gain() - 0.07).abs() < f32::EPSILON);
        assert_eq!(synth.click_buffer().map(<[f32]>::len), Some(2646));
    }

    #[test]
    fn play_click_replays_same_buffer() {
        let (mut synth, sink) = ready_synth(44_100);
        synth.play_click(true);
        synth.play_click(true);
        let log = sink.playbacks();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], log[1]);
        assert!(matches!(log[0], Playback::Samples { len: 2646, .. }));
    }

    #[test]
    fn disabled_flag_short_circuits() {
        let (mut synth, sink) = ready_synth(44_100);
        synth.play_click(false);
        assert!(sink.playbacks().is_empty());
    }

    #[test]
    fn failed_open_is_silent() {
        let mut synth = ClickSynth::new(0.07, 9);
        synth.initialize(|| Err(TermfolioError::Audio("blocked".into())));
        assert!(synth.is_initialized());
        assert!(!synth.is_available());
        synth.play_click(true);
    }

    #[test]
    fn initialize_runs_once() {
        let (mut synth, first) = ready_synth(44_100);
        let second = MemorySink::new(44_100);
        let handle = second.clone();
        synth.initialize(move || Ok(Box::new(second)));
        synth.play_click(true);
        assert_eq!(first.playbacks().len(), 1);
        assert!(handle.playbacks().is_empty());
    }

    #[test]
    fn missing_buffer_falls_back_to_tone() {
        let (mut synth, sink) = ready_synth(5);
        assert!(synth.click_buffer().is_none());
        synth.play_click(true);
        match &sink.playbacks()[0] {
            Playback::Tone { envelope, .. } => {
                assert!((150.0..250.0).contains(&envelope.frequency));
                assert!((envelope.stop_secs - 0.07).abs() < f32::EPSILON);
            },
            other => panic!("expected tone, got {other:?}"),
        }
    }

    #[test]
    fn same_seed_same_frequency() {
        let a = ClickSynth::new(0.07, 77);
        let b = ClickSynth::new(0.5, 77);
        assert_eq!(a.base_frequency(), b.base_frequency());
    }
}
