//! PCM output through the host's default audio device.

use std::sync::{Arc, Mutex};

use cpal::traits::{DeviceTrait as _, HostTrait as _, StreamTrait as _};
use termfolio_types::error::{Result, TermfolioError};

use crate::mixer::Mixer;
use crate::sink::AudioSink;

/// Sink that streams queued buffers to the default output device.
///
/// Played buffers go into a shared [`Mixer`] that the device callback
/// drains. The stream stops when the sink is dropped.
pub struct CpalSink {
    mixer: Arc<Mutex<Mixer>>,
    sample_rate: u32,
    _stream: cpal::Stream,
}

impl CpalSink {
    /// Open and start the default output device.
    ///
    /// Fails with [`TermfolioError::Audio`] when the host has no usable
    /// output.
    pub fn open() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| TermfolioError::Audio("no default output device".into()))?;
        let supported = device
            .default_output_config()
            .map_err(|e| TermfolioError::Audio(format!("output config: {e}")))?;
        let config = supported.config();
        let channels = usize::from(config.channels);
        let sample_rate = config.sample_rate.0;

        let mixer = Arc::new(Mutex::new(Mixer::default()));
        let stream = match supported.sample_format() {
            cpal::SampleFormat::F32 => {
                build_stream::<f32>(&device, &config, channels, Arc::clone(&mixer))
            },
            cpal::SampleFormat::I16 => {
                build_stream::<i16>(&device, &config, channels, Arc::clone(&mixer))
            },
            cpal::SampleFormat::U16 => {
                build_stream::<u16>(&device, &config, channels, Arc::clone(&mixer))
            },
            other => Err(TermfolioError::Audio(format!(
                "unsupported sample format {other:?}"
            ))),
        }?;
        stream
            .play()
            .map_err(|e| TermfolioError::Audio(format!("start stream: {e}")))?;

        log::debug!(
            "Audio output: {} ({sample_rate} Hz, {channels} ch)",
            device.name().unwrap_or_else(|_| "unknown device".into())
        );
        Ok(Self {
            mixer,
            sample_rate,
            _stream: stream,
        })
    }
}

impl AudioSink for CpalSink {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn set_master_gain(&mut self, gain: f32) {
        if let Ok(mut mixer) = self.mixer.lock() {
            mixer.set_gain(gain);
        }
    }

    fn play_samples(&mut self, samples: &[f32]) -> Result<()> {
        let mut mixer = self
            .mixer
            .lock()
            .map_err(|_| TermfolioError::Audio("mixer lock poisoned".into()))?;
        mixer.push(Arc::from(samples));
        Ok(())
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    channels: usize,
    mixer: Arc<Mutex<Mixer>>,
) -> Result<cpal::Stream>
where
    T: cpal::SizedSample + cpal::FromSample<f32>,
{
    let err_fn = |e: cpal::StreamError| log::warn!("Audio stream error: {e}");
    device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                write_frames(data, channels, &mixer)
            },
            err_fn,
            None,
        )
        .map_err(|e| TermfolioError::Audio(format!("build output stream: {e}")))
}

/// Device callback body. Plays silence rather than block when the session
/// holds the mixer.
fn write_frames<T>(data: &mut [T], channels: usize, mixer: &Mutex<Mixer>)
where
    T: cpal::Sample + cpal::FromSample<f32>,
{
    let mut mixer = mixer.try_lock().ok();
    for frame in data.chunks_mut(channels.max(1)) {
        let v = mixer.as_mut().map_or(0.0, |m| m.next_sample());
        let sample = <T as cpal::FromSample<f32>>::from_sample_(v);
        for slot in frame.iter_mut() {
            *slot = sample;
        }
    }
}
