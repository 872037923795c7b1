pub mod camera;
pub mod config;
pub mod input;
pub mod io;
pub mod playback;
pub mod render;
pub mod scene;

pub mod app;
