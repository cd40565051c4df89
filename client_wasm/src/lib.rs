//! Browser host for the Pong game
//!
//! Canvas 2D drawing, Web Audio tones and DOM input on top of `game_core`.
//! Only `input` and the tone table build off wasm32.

pub mod audio;
pub mod input;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod client;
#[cfg(target_arch = "wasm32")]
mod logging;

#[cfg(target_arch = "wasm32")]
pub use client::PongClient;
