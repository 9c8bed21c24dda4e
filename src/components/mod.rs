//! The components module contains all shared components for our app.

mod app;
mod app_view;
mod audio;
mod header;
mod icons;
mod player;
pub mod views;

pub use app::*;
pub use app_view::*;
pub use audio::*;
pub use header::*;
pub use icons::*;
pub use player::*;
