use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::handlers::download::DownloadFormat;
use crate::models::data_type::DataType;
use crate::models::payload::{PhoneData, VcardData, WifiData, encode_shape};
use crate::models::qr_options::{DotType, ErrorCorrectionLevel, QrOptions};

#[derive(Parser, Debug)]
#[command(
    name = "makemeqr",
    version,
    about = "Format, validate and render styled QR codes"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the payload that would be encoded
    Format(DataArgs),
    /// Check raw data against its data type (exit code 1 when invalid)
    Validate(DataArgs),
    /// Split a phone number into country code and local number
    SplitPhone { phone: String },
    /// Render a QR code image into a directory
    Render(RenderArgs),
    /// List the supported data types with their labels and example input
    Types,
}

#[derive(Args, Debug)]
pub struct DataArgs {
    /// url, text, email, phone, wifi or vcard
    #[arg(long = "type", short = 't', default_value = "url")]
    pub data_type: DataType,
    /// Raw value; composite types also accept a JSON object
    pub data: Option<String>,
    #[arg(long)]
    pub ssid: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub country_code: Option<String>,
    #[arg(long)]
    pub number: Option<String>,
}

impl DataArgs {
    /// The raw `data` string: taken verbatim when given, otherwise built
    /// from the per-field flags of composite types.
    pub fn raw_data(&self) -> String {
        if let Some(data) = &self.data {
            return data.clone();
        }

        let field = |v: &Option<String>| v.clone().unwrap_or_default();
        match self.data_type {
            DataType::Phone if self.country_code.is_some() || self.number.is_some() => {
                encode_shape(&PhoneData::new(field(&self.country_code), field(&self.number)))
            }
            DataType::Wifi if self.ssid.is_some() || self.password.is_some() => {
                encode_shape(&WifiData::new(field(&self.ssid), field(&self.password)))
            }
            DataType::Vcard if self.name.is_some() => encode_shape(&VcardData::new(
                field(&self.name),
                field(&self.phone),
                field(&self.country_code),
            )),
            _ => String::new(),
        }
    }
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub data: DataArgs,
    /// png or svg
    #[arg(long, default_value = "png")]
    pub format: DownloadFormat,
    #[arg(long, env = "QR_OUTPUT_DIR", default_value = ".")]
    pub out_dir: PathBuf,
    /// Hex (#rgb, #rrggbb) or hsl(h, s%, l%)
    #[arg(long, env = "QR_FOREGROUND", default_value = "#000000")]
    pub foreground: String,
    #[arg(long, env = "QR_BACKGROUND", default_value = "#FFFFFF")]
    pub background: String,
    /// Edge length in pixels (100-500)
    #[arg(long, env = "QR_SIZE", default_value_t = 300)]
    pub size: u32,
    #[arg(long, default_value = "square")]
    pub dot_type: DotType,
    #[arg(long = "ec-level", default_value = "M")]
    pub error_correction_level: ErrorCorrectionLevel,
}

impl RenderArgs {
    pub fn options(&self) -> QrOptions {
        QrOptions {
            foreground_color: self.foreground.clone(),
            background_color: self.background.clone(),
            size: self.size,
            dot_type: self.dot_type,
            error_correction_level: self.error_correction_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Command {
        Cli::try_parse_from(args).unwrap().cmd
    }

    #[test]
    fn positional_data_wins() {
        let Command::Format(args) = parse(&["makemeqr", "format", "-t", "wifi", "Home", "--ssid", "x"])
        else {
            panic!("expected format");
        };
        assert_eq!(args.raw_data(), "Home");
    }

    #[test]
    fn builds_json_from_fields() {
        let Command::Format(args) = parse(&[
            "makemeqr", "format", "--type", "vcard", "--name", "Jane", "--phone", "555",
        ]) else {
            panic!("expected format");
        };
        assert_eq!(
            args.raw_data(),
            r#"{"name":"Jane","phone":"555","countryCode":""}"#
        );

        let Command::Validate(args) = parse(&[
            "makemeqr", "validate", "--type", "phone", "--country-code", "+1", "--number", "5551234",
        ]) else {
            panic!("expected validate");
        };
        assert_eq!(args.raw_data(), r#"{"countryCode":"+1","number":"5551234"}"#);
    }

    #[test]
    fn missing_data_is_empty() {
        let Command::Format(args) = parse(&["makemeqr", "format", "--type", "text"]) else {
            panic!("expected format");
        };
        assert_eq!(args.raw_data(), "");
    }

    #[test]
    fn types_takes_no_arguments() {
        assert!(matches!(parse(&["makemeqr", "types"]), Command::Types));
        assert!(Cli::try_parse_from(["makemeqr", "types", "url"]).is_err());
    }

    #[test]
    fn rejects_unknown_type() {
        assert!(Cli::try_parse_from(["makemeqr", "format", "--type", "fax", "x"]).is_err());
    }

    #[test]
    fn render_flags_map_to_options() {
        let Command::Render(args) = parse(&[
            "makemeqr",
            "render",
            "hello",
            "--type",
            "text",
            "--out-dir",
            "/tmp/qr",
            "--foreground",
            "#336699",
            "--size",
            "250",
            "--dot-type",
            "rounded",
            "--ec-level",
            "H",
            "--format",
            "svg",
        ]) else {
            panic!("expected render");
        };
        let options = args.options();
        assert_eq!(options.foreground_color, "#336699");
        assert_eq!(options.size, 250);
        assert_eq!(options.dot_type, DotType::Rounded);
        assert_eq!(options.error_correction_level, ErrorCorrectionLevel::H);
        assert_eq!(args.format, DownloadFormat::Svg);
        assert_eq!(args.out_dir, PathBuf::from("/tmp/qr"));
    }
}
