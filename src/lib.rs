#[macro_use]
pub mod model;

pub mod app_config;
pub mod codec;
mod extensions;
pub mod loader;
pub mod models;
pub mod serialization;
pub mod verify;

pub use model::Model;
