//! Perlin terrain library - gradient noise heightfields with an infinite-scrolling grid

pub mod camera;
pub mod cli;
pub mod controls;
pub mod error;
pub mod export;
pub mod movement;
pub mod noise;
pub mod params;
pub mod rendering;
pub mod terrain;
pub mod timing;

pub use error::{Result, TerrainError};
