//! Espada entry point
//!
//! Loads settings, applies command line overrides and runs the game loop
//! against the headless host with the autopilot at the controls.
//!
//! Usage:
//!   RUST_LOG=info cargo run --release -- --pref ~/.config/espada --games 3

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use espada::consts::{FPS, MAX_VOLUME};
use espada::platform::{Autopilot, FrameLimiter, Headless, Platform};
use espada::{Game, Settings};

#[derive(Parser)]
#[command(name = "espada")]
#[command(about = "Vertical space shooter (headless autopilot shell)")]
struct Args {
    /// Preference directory holding the settings file
    #[arg(long, default_value = ".")]
    pref: PathBuf,

    /// Player ignores all damage
    #[arg(long)]
    invincible: Option<bool>,

    #[arg(long)]
    fullscreen: Option<bool>,

    /// Enable sound effects
    #[arg(long)]
    sound: Option<bool>,

    /// Enable background music
    #[arg(long)]
    music: Option<bool>,

    /// Sound effect volume (0-12)
    #[arg(long)]
    soundvol: Option<u8>,

    /// Music volume (0-12)
    #[arg(long)]
    musicvol: Option<u8>,

    /// RNG seed for the first session
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,

    /// Stop after this many frames
    #[arg(long, default_value_t = 60 * 60 * 5)]
    frames: u64,

    /// Sessions the autopilot plays before choosing Quit
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Pace frames at 60 Hz instead of running flat out
    #[arg(long)]
    realtime: bool,
}

impl Args {
    /// Overwrite loaded settings with whatever was given on the command line
    fn apply(&self, settings: &mut Settings) {
        if let Some(on) = self.invincible {
            settings.invincible = on;
        }
        if let Some(on) = self.fullscreen {
            settings.fullscreen = on;
        }
        if let Some(on) = self.sound {
            settings.sound = on;
        }
        if let Some(on) = self.music {
            settings.music = on;
        }
        if let Some(level) = self.soundvol {
            settings.volume.sound = level.min(MAX_VOLUME);
        }
        if let Some(level) = self.musicvol {
            settings.volume.music = level.min(MAX_VOLUME);
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Espada starting...");

    let path = Settings::path_in(&args.pref);
    let mut settings = Settings::load(&path);
    args.apply(&mut settings);

    let mut host = Headless::default();
    host.set_fullscreen(settings.fullscreen);

    let mut game = Game::new(settings, args.seed);
    let mut pilot = Autopilot::new(args.games);
    let mut limiter = args.realtime.then(|| FrameLimiter::new(FPS));

    let mut frames = 0;
    while game.is_running() && frames < args.frames {
        let input = pilot.next_input(&game);
        game.update(&input, &mut host);

        host.clear_frame();
        game.render(&mut host);

        if let Some(limiter) = limiter.as_mut() {
            limiter.delay();
        }
        frames += 1;
    }

    let score = game.session().map_or(0, |s| s.player.score);
    log::info!(
        "Stopped after {frames} frames, {} games, {} sounds",
        pilot.games_finished(),
        host.total_sounds()
    );
    println!("frames: {frames}  games: {}  score: {score}", pilot.games_finished());

    game.into_settings()
        .save(&path)
        .with_context(|| format!("failed to save settings to {}", path.display()))?;
    Ok(())
}
