mod app;
mod camera;
mod config;
mod input;
mod io;
mod playback;
mod render;
mod scene;

use macroquad::prelude::Conf;

fn window_conf() -> Conf {
    Conf {
        window_title: "Agents Moving Vis".to_string(),
        window_width: config::WINDOW_WIDTH,
        window_height: config::WINDOW_HEIGHT,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    app::run().await;
}
