pub mod download;
pub mod render;
pub mod session;
