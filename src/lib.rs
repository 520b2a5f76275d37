//! Tonefit - skin-tone color analysis
//!
//! Classifies a sampled skin color against reference tones and recommends
//! catalog products in the tone's suitable colors.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
