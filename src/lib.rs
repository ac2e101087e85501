#![warn(clippy::all)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod audio;
pub mod backend;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod tts;

use std::sync::Mutex;

use crate::backend::vits::Vits;

/// Shared server state: the synthesizer is loaded once at startup and
/// serialized behind a mutex because inference takes `&mut self`.
pub struct AppState {
    pub engine: Mutex<Vits>,
}
