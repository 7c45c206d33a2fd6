//! Terminal wave-combat engine.
//!
//! Everything in this crate is terminal-agnostic except `input::decode`,
//! which maps `crossterm` events onto engine actions. The binary owns the
//! terminal, the input thread and the renderer.

pub mod combat;
pub mod compute;
pub mod config;
pub mod entities;
pub mod input;
pub mod movement;
pub mod projectile;
pub mod shape;
pub mod signals;
pub mod wave;
