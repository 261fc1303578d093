//! Payload formatting, validation and rendering for styled QR codes.
//!
//! The core is [`utils::format::format_qr_data`] and
//! [`utils::validate::validate_qr_data`]: pure functions from raw form input
//! and a [`models::data_type::DataType`] to the encoded payload and a
//! validity flag. Rendering hands the payload to the `qrcode` crate.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod structs;
pub mod utils;

pub use models::data_type::DataType;
pub use utils::format::format_qr_data;
pub use utils::phone::parse_phone_with_country_code;
pub use utils::validate::validate_qr_data;
