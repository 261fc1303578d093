pub mod color;
pub mod format;
pub mod phone;
pub mod validate;
