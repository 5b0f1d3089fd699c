//! Simulation core for a fixed-tick arcade invaders game.
//!
//! Everything in here is terminal-agnostic: the binary feeds an
//! [`input::InputState`] into [`compute::tick`] once per frame and draws the
//! [`render::RenderFrame`] it gets back.

pub mod bunker;
pub mod collision;
pub mod compute;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod input;
pub mod render;
pub mod swarm;
