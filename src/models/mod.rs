pub mod data_type;
pub mod payload;
pub mod qr_options;
