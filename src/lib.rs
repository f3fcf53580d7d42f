pub mod common;
pub mod images;
pub mod web;

pub use common::ServerConfig;
pub use images::ImageLibrary;
