// Library exports for the generator binary and tests
pub mod config;
pub mod constants;
pub mod draw;
pub mod generator;
pub mod icon;

pub use config::GeneratorConfig;
pub use generator::{generate_all, icon_file_name};
pub use icon::{render, IconLayout};
