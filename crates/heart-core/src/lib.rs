pub mod audio;
pub mod camera;
pub mod celebration;
pub mod config;
pub mod constants;
pub mod drift;
pub mod error;
pub mod evasive;
pub mod flight;
pub mod opening;
pub mod parallax;
pub mod pointer;
pub mod reveal;
pub mod scene;
pub mod spring;
pub mod timeline;

// Billboard shader shared with the web renderer
pub static SPRITES_WGSL: &str = include_str!("../shaders/sprites.wgsl");

pub use audio::*;
pub use camera::*;
pub use celebration::*;
pub use config::*;
pub use constants::*;
pub use drift::*;
pub use error::*;
pub use evasive::*;
pub use flight::*;
pub use opening::*;
pub use parallax::*;
pub use pointer::*;
pub use reveal::*;
pub use scene::*;
pub use spring::*;
pub use timeline::*;
