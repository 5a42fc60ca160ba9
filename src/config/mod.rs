// Engine configuration

mod loader;
mod settings;

pub use loader::{load_config, load_config_from};
pub use settings::EngineConfig;
