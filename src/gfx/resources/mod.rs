// src/gfx/resources/mod.rs
//! Scene resources handed to the host renderer.

pub mod material;

// Re-export main types
pub use material::{Material, MaterialId, MaterialManager, MaterialUniform};
