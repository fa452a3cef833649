use std::path::PathBuf;

use squarechase_engine::window::RuntimeConfig;

/// Game loop and asset settings.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed updates per second.
    pub update_rate: u32,
    /// Updates allowed per rendered frame before the loop falls behind.
    pub max_steps_per_frame: u32,
    pub square_texture: PathBuf,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    pub window: RuntimeConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            update_rate: 60,
            max_steps_per_frame: 5,
            square_texture: PathBuf::from("assets/textures/square.png"),
            seed: None,
            window: RuntimeConfig::default(),
        }
    }
}
