use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use cpal::traits::{DeviceTrait, HostTrait};
use eegsim_core::constants::TICK_INTERVAL_MS;
use eegsim_core::{ControlState, CueSink, Simulation, SignalGenerator};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

mod audio;
mod config;
#[cfg(feature = "gui")]
mod gui;
mod snapshot;

use config::{AppConfig, AudioSettings, SessionOverrides};

#[derive(Parser)]
#[command(name = "eegsim")]
#[command(about = "Simulated EEG signal with threshold-triggered audio cues", long_about = None)]
struct Cli {
    /// Seed for the noise source (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Directory containing low_beep.wav, mid_beep.wav and high_beep.wav
    #[arg(long, global = true)]
    sounds: Option<PathBuf>,
    /// Output device name
    #[arg(short, long, global = true)]
    output: Option<String>,
    /// Log cues instead of playing them
    #[arg(long, global = true)]
    mute: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available output devices
    List,
    /// Run the simulation in the terminal (press Ctrl+C to stop)
    Run {
        /// Stop after this many ticks
        #[arg(short, long)]
        ticks: Option<u64>,
        #[arg(short, long)]
        frequency: Option<f32>,
        #[arg(short, long)]
        noise: Option<f32>,
    },
    #[cfg(feature = "gui")]
    /// Launch the graphical interface
    Gui,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = AppConfig::load();
    let audio_settings = config.audio_settings(&SessionOverrides {
        sound_dir: cli.sounds.clone(),
        output_device: cli.output.clone(),
        muted: cli.mute,
    });

    let generator = match cli.seed {
        Some(seed) => SignalGenerator::with_seed(seed),
        None => SignalGenerator::from_entropy(),
    };

    match cli.command {
        Some(Commands::List) => {
            list_devices()?;
        }
        Some(Commands::Run {
            ticks,
            frequency,
            noise,
        }) => {
            let controls = ControlState::new(
                frequency.unwrap_or(config.frequency),
                noise.unwrap_or(config.noise_level),
            );
            let mut sink = open_sink(&audio_settings)?;
            run_headless(generator, controls, ticks, sink.as_mut())?;
        }
        #[cfg(feature = "gui")]
        Some(Commands::Gui) | None => {
            let sink = open_sink(&audio_settings)?;
            gui::run_gui(config, generator, sink).map_err(|e| anyhow!("GUI Error: {}", e))?;
        }
        #[cfg(not(feature = "gui"))]
        None => {
            println!("GUI not available. Use 'eegsim run' for headless mode.");
            println!("Compile with --features gui for GUI support.");
        }
    }

    Ok(())
}

fn open_sink(settings: &AudioSettings) -> Result<Box<dyn CueSink>> {
    if settings.muted {
        return Ok(Box::new(audio::LogSink));
    }
    let player =
        audio::CuePlayer::start(&settings.output_device, settings.sound_dir.as_deref())?;
    Ok(Box::new(player))
}

fn run_headless(
    generator: SignalGenerator,
    controls: ControlState,
    ticks: Option<u64>,
    sink: &mut dyn CueSink,
) -> Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        println!("\nShutting down gracefully...");
        r.store(false, Ordering::Relaxed);
    })?;

    println!(
        "Simulating {:.1} Hz with noise {:.2}. Press Ctrl+C to stop.",
        controls.frequency(),
        controls.noise_level()
    );

    let mut simulation = Simulation::new(generator);
    let interval = Duration::from_millis(TICK_INTERVAL_MS);
    let started = Instant::now();
    let mut count = 0u64;

    while running.load(Ordering::Relaxed) && ticks.map_or(true, |limit| count < limit) {
        let elapsed = started.elapsed().as_secs_f64();
        let tick = simulation.tick(elapsed, &controls, &mut *sink);
        log::debug!("t={:.3} sample={:.3}", elapsed, tick.sample);
        if tick.cue.triggered {
            println!(
                "[{:>7.2}s] Command Detected: Action Triggered! ({:.3})",
                elapsed, tick.sample
            );
        }
        count += 1;
        std::thread::sleep(interval);
    }

    println!("Simulation stopped after {} ticks.", count);
    Ok(())
}

fn list_devices() -> Result<()> {
    let host = cpal::default_host();
    println!("Audio Host: {}", host.id().name());
    println!("\nOutput Devices:");
    for device in host.output_devices()? {
        println!("  - {}", device.name().unwrap_or("Unknown".to_string()));
    }
    Ok(())
}
