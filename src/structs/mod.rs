pub mod cli_args;
pub mod qr_request;
