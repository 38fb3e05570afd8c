use anyhow::{anyhow, Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use crossbeam_channel::{Receiver, Sender};
use eegsim_core::{CueSink, SoundCategory};
use log::{info, warn};
use std::path::Path;
use std::sync::Arc;

/// Length of the built-in beep in milliseconds
const BEEP_MS: u32 = 150;
const BEEP_FADE_MS: u32 = 10;
const BEEP_AMPLITUDE: f32 = 0.3;

enum PlaybackCommand {
    Play(Arc<[f32]>),
    Stop,
}

/// Plays one short clip per sound category on an output device.
///
/// Commands reach the device callback over a channel; playback is
/// fire-and-forget and a new clip replaces whatever is still playing.
pub struct CuePlayer {
    _output_stream: cpal::Stream,
    commands: Sender<PlaybackCommand>,
    clips: [Arc<[f32]>; 3],
}

impl CuePlayer {
    /// Opens the output device and preloads the three clips.
    ///
    /// With `sound_dir` set, every clip must load from that directory.
    pub fn start(output_device_name: &str, sound_dir: Option<&Path>) -> Result<Self> {
        let host = cpal::default_host();
        info!("Audio host: {}", host.id().name());

        let device = if output_device_name == "default" {
            host.default_output_device()
                .context("No default output found")?
        } else {
            host.output_devices()?
                .find(|d| d.name().ok().as_deref() == Some(output_device_name))
                .context("Output device not found")?
        };
        info!("Using output device: {}", device.name().unwrap_or_default());

        let supported = device
            .default_output_config()
            .context("Output device has no usable config")?;
        let sample_rate = supported.sample_rate().0;
        let channels = supported.channels() as usize;
        let config: cpal::StreamConfig = supported.into();

        let clips = load_clips(sound_dir, sample_rate)?;

        let (tx, rx) = crossbeam_channel::bounded::<PlaybackCommand>(8);
        let mut playback = Playback::new(rx);

        let output_stream = device.build_output_stream(
            &config,
            move |data: &mut [f32], _| playback.fill(data, channels),
            |err| warn!("Output error: {}", err),
            None,
        )?;
        output_stream.play()?;

        Ok(Self {
            _output_stream: output_stream,
            commands: tx,
            clips,
        })
    }

    fn send(&self, command: PlaybackCommand) {
        if self.commands.try_send(command).is_err() {
            warn!("Audio command queue full, dropping cue");
        }
    }
}

impl CueSink for CuePlayer {
    fn stop_all(&mut self) {
        self.send(PlaybackCommand::Stop);
    }

    fn play(&mut self, category: SoundCategory) {
        let clip = self.clips[category_index(category)].clone();
        self.send(PlaybackCommand::Play(clip));
    }
}

/// Stand-in sink used when audio is muted.
pub struct LogSink;

impl CueSink for LogSink {
    fn stop_all(&mut self) {}

    fn play(&mut self, category: SoundCategory) {
        info!("Cue: {} ({})", category.label(), category.clip_name());
    }
}

/// Callback-side playback state.
struct Playback {
    commands: Receiver<PlaybackCommand>,
    clip: Option<Arc<[f32]>>,
    position: usize,
}

impl Playback {
    fn new(commands: Receiver<PlaybackCommand>) -> Self {
        Self {
            commands,
            clip: None,
            position: 0,
        }
    }

    fn fill(&mut self, data: &mut [f32], channels: usize) {
        while let Ok(command) = self.commands.try_recv() {
            match command {
                PlaybackCommand::Play(clip) => {
                    self.clip = Some(clip);
                    self.position = 0;
                }
                PlaybackCommand::Stop => self.clip = None,
            }
        }

        for frame in data.chunks_mut(channels.max(1)) {
            let value = match &self.clip {
                Some(clip) if self.position < clip.len() => {
                    let v = clip[self.position];
                    self.position += 1;
                    v
                }
                _ => 0.0,
            };
            for sample in frame.iter_mut() {
                *sample = value;
            }
        }

        if matches!(&self.clip, Some(clip) if self.position >= clip.len()) {
            self.clip = None;
        }
    }
}

fn category_index(category: SoundCategory) -> usize {
    match category {
        SoundCategory::Low => 0,
        SoundCategory::Mid => 1,
        SoundCategory::High => 2,
    }
}

fn load_clips(sound_dir: Option<&Path>, sample_rate: u32) -> Result<[Arc<[f32]>; 3]> {
    let load = |category: SoundCategory| -> Result<Arc<[f32]>> {
        let samples = match sound_dir {
            Some(dir) => load_clip(&dir.join(category.clip_name()), sample_rate)?,
            None => synth_beep(category.tone_hz(), sample_rate),
        };
        Ok(samples.into())
    };
    Ok([
        load(SoundCategory::Low)?,
        load(SoundCategory::Mid)?,
        load(SoundCategory::High)?,
    ])
}

/// Decodes a WAV file to mono f32 at `target_rate`.
pub fn load_clip(path: &Path, target_rate: u32) -> Result<Vec<f32>> {
    let mut reader = hound::WavReader::open(path)
        .with_context(|| format!("Failed to open sound asset {}", path.display()))?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<_, _>>()
            .with_context(|| format!("Failed to decode {}", path.display()))?,
        hound::SampleFormat::Int => {
            if spec.bits_per_sample == 0 || spec.bits_per_sample > 32 {
                return Err(anyhow!(
                    "Unsupported bit depth {} in {}",
                    spec.bits_per_sample,
                    path.display()
                ));
            }
            let scale = 1.0 / (1u64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 * scale))
                .collect::<Result<_, _>>()
                .with_context(|| format!("Failed to decode {}", path.display()))?
        }
    };

    let mono: Vec<f32> = interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
        .collect();

    Ok(resample_linear(&mono, spec.sample_rate, target_rate))
}

/// Short sine beep with a linear fade at both ends.
pub fn synth_beep(tone_hz: f32, sample_rate: u32) -> Vec<f32> {
    let len = (sample_rate * BEEP_MS / 1000) as usize;
    let fade = ((sample_rate * BEEP_FADE_MS / 1000) as usize).max(1);
    (0..len)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            let envelope = (i.min(len - 1 - i) as f32 / fade as f32).min(1.0);
            BEEP_AMPLITUDE * envelope * (2.0 * std::f32::consts::PI * tone_hz * t).sin()
        })
        .collect()
}

pub fn resample_linear(input: &[f32], from_rate: u32, to_rate: u32) -> Vec<f32> {
    if from_rate == to_rate || input.is_empty() || from_rate == 0 {
        return input.to_vec();
    }
    let ratio = from_rate as f64 / to_rate as f64;
    let out_len = ((input.len() as f64) / ratio).round().max(1.0) as usize;
    (0..out_len)
        .map(|i| {
            let pos = i as f64 * ratio;
            let idx = pos.floor() as usize;
            let frac = (pos - idx as f64) as f32;
            let a = input[idx.min(input.len() - 1)];
            let b = input[(idx + 1).min(input.len() - 1)];
            a + (b - a) * frac
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synth_beep_shape() {
        let beep = synth_beep(440.0, 48000);
        assert_eq!(beep.len(), 7200);
        assert_eq!(beep[0], 0.0);
        assert!(beep.iter().all(|s| s.abs() <= BEEP_AMPLITUDE + 1e-6));
    }

    #[test]
    fn test_resample_changes_length() {
        let input = vec![0.0f32; 441];
        assert_eq!(resample_linear(&input, 44100, 48000).len(), 480);
        assert_eq!(resample_linear(&input, 48000, 48000).len(), 441);
    }

    #[test]
    fn test_resample_interpolates() {
        let out = resample_linear(&[0.0, 1.0], 1, 2);
        assert_eq!(out, vec![0.0, 0.5, 1.0, 1.0]);
    }

    #[test]
    fn test_load_clip_mixes_to_mono() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mid_beep.wav");
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 48000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for _ in 0..100 {
            writer.write_sample(16384i16).unwrap();
            writer.write_sample(0i16).unwrap();
        }
        writer.finalize().unwrap();

        let clip = load_clip(&path, 48000).unwrap();
        assert_eq!(clip.len(), 100);
        assert!((clip[0] - 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_missing_asset_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_clips(Some(dir.path()), 48000).unwrap_err();
        assert!(err.to_string().contains("low_beep.wav"));
    }

    #[test]
    fn test_builtin_clips_without_sound_dir() {
        let clips = load_clips(None, 48000).unwrap();
        assert!(clips.iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn test_playback_replaces_and_stops() {
        let (tx, rx) = crossbeam_channel::bounded(8);
        let mut playback = Playback::new(rx);
        let mut out = [9.0f32; 4];

        tx.send(PlaybackCommand::Play(vec![0.1, 0.2, 0.3].into())).unwrap();
        playback.fill(&mut out, 2);
        assert_eq!(out, [0.1, 0.1, 0.2, 0.2]);

        tx.send(PlaybackCommand::Stop).unwrap();
        playback.fill(&mut out, 2);
        assert_eq!(out, [0.0; 4]);
    }

    #[test]
    fn test_playback_goes_silent_after_clip_ends() {
        let (tx, rx) = crossbeam_channel::bounded(8);
        let mut playback = Playback::new(rx);
        let mut out = [1.0f32; 4];

        tx.send(PlaybackCommand::Play(vec![0.5].into())).unwrap();
        playback.fill(&mut out, 1);
        assert_eq!(out, [0.5, 0.0, 0.0, 0.0]);
        assert!(playback.clip.is_none());
    }
}
