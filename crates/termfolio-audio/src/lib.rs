//! Keystroke click synthesis.
//!
//! A [`ClickSynth`] lazily opens an [`AudioSink`] on the first keystroke,
//! renders one short click waveform, and replays it on every printable key.
//! Hosts without audio get a silent synth rather than an error.
//!
//! With the `audio-cpal` feature, [`CpalSink`] plays through the host's
//! default output device.

#[cfg(feature = "audio-cpal")]
mod cpal_sink;
pub mod mixer;
mod sink;
mod synth;
pub mod waveform;

#[cfg(feature = "audio-cpal")]
pub use cpal_sink::CpalSink;
pub use mixer::Mixer;
pub use sink::{AudioSink, MemorySink, NullSink, Playback};
pub use synth::ClickSynth;
pub use waveform::ToneEnvelope;
