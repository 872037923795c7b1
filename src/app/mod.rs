// app/mod.rs
// Startup wiring and the single-threaded frame loop: poll input, update
// playback and camera, compose, present.

pub mod present;

use macroquad::prelude::{get_frame_time, next_frame};
use simplelog::{
    ColorChoice, CombinedLogger, Config as LogConfig, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};

use crate::camera::Camera;
use crate::config::ViewerConfig;
use crate::io;
use crate::playback::Playback;
use crate::render::SceneRenderer;
use crate::scene::IterationIndex;

pub const ERROR_LOG_PATH: &str = "error.log";

fn init_logging() {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LevelFilter::Info,
        LogConfig::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    match std::fs::File::create(ERROR_LOG_PATH) {
        Ok(file) => loggers.push(WriteLogger::new(
            LevelFilter::Warn,
            LogConfig::default(),
            file,
        )),
        Err(e) => eprintln!("could not open {}: {}", ERROR_LOG_PATH, e),
    }
    // Init fails only when a logger is already installed; keep going.
    let _ = CombinedLogger::init(loggers);
}

pub async fn run() {
    init_logging();

    let config = ViewerConfig::load_or_default();

    // Ingestion errors are fatal: abort with a diagnostic rather than show
    // an empty or half-loaded replay.
    let scene = match io::load_scene(&config) {
        Ok(scene) => scene,
        Err(e) => {
            log::error!("failed to load replay data: {}", e);
            std::process::exit(1);
        }
    };

    let index = IterationIndex::build(&scene.iterations);
    let mut camera = Camera::new();
    let mut playback = Playback::new(scene.last_cursor(), config.step_interval_ms);
    let mut renderer = SceneRenderer::new();

    loop {
        let input = present::poll_input();
        if input.quit {
            break;
        }

        camera.handle_input(&input);

        playback.set_paused(input.pause_held);
        if input.step_back {
            playback.step_back();
        }
        if input.step_forward {
            playback.step_forward();
        }
        if input.reset {
            playback.reset();
        }
        playback.advance(get_frame_time() as f64 * 1000.0);

        let frame = renderer.compose(&scene, &index, &camera, playback.cursor());
        present::present(&frame);

        next_frame().await;
    }
}
