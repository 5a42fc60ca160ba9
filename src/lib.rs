// Banter - conversational reply assistant that learns from human feedback
// Library exports

pub mod classifier;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod generator;
pub mod trainer;

pub use engine::Engine;
pub use error::EngineError;
