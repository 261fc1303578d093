use anyhow::{Context, Result, bail};
use std::io::Write;
use validator::Validate;

use crate::handlers::download::save_qr_code;
use crate::models::data_type::DataType;
use crate::structs::cli_args::{Command, RenderArgs};
use crate::structs::qr_request::QrRequest;
use crate::utils::format::format_qr_data;
use crate::utils::phone::parse_phone_with_country_code;
use crate::utils::validate::validate_qr_data;

/// Dispatch a parsed command. Returns `false` when the command ran but the
/// outcome should map to a failing exit code (invalid data).
pub fn run_command(cmd: Command, out: &mut impl Write) -> Result<bool> {
    match cmd {
        Command::Format(args) => {
            let payload = format_qr_data(&args.raw_data(), args.data_type);
            writeln!(out, "{}", payload)?;
            Ok(true)
        }
        Command::Validate(args) => {
            let valid = validate_qr_data(&args.raw_data(), args.data_type);
            writeln!(out, "{}", if valid { "valid" } else { "invalid" })?;
            Ok(valid)
        }
        Command::SplitPhone { phone } => {
            let split = parse_phone_with_country_code(&phone);
            let json = serde_json::to_string(&split).context("Failed to serialize phone")?;
            writeln!(out, "{}", json)?;
            Ok(true)
        }
        Command::Render(args) => render(args, out),
        Command::Types => {
            list_types(out)?;
            Ok(true)
        }
    }
}

// One tab-separated row per type: name, label, example input, URI prefix
// ("-" for none) and whether a JSON object is accepted.
fn list_types(out: &mut impl Write) -> Result<()> {
    for t in DataType::all() {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            t.as_str(),
            t.label(),
            t.placeholder(),
            t.prefix().unwrap_or("-"),
            if t.is_composite() { "json" } else { "text" }
        )?;
    }
    Ok(())
}

fn render(args: RenderArgs, out: &mut impl Write) -> Result<bool> {
    let req = QrRequest::new(args.data.raw_data(), args.data.data_type).with_options(args.options());

    // Invalid input only warns; generation is never blocked by it.
    if let Err(errors) = req.validate() {
        log::warn!("Generating anyway: {}", errors);
    }

    let payload = req.payload();
    if payload.is_empty() {
        bail!("No data given for type {}", req.data_type);
    }

    let path = save_qr_code(&args.out_dir, &payload, &req.options, args.format)?;
    writeln!(out, "{}", path.display())?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::cli_args::Cli;
    use clap::Parser;

    fn run(args: &[&str]) -> (Result<bool>, String) {
        let _ = env_logger::builder().is_test(true).try_init();
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let result = run_command(cli.cmd, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn format_prints_payload() {
        let (result, out) = run(&["makemeqr", "format", "--type", "email", "a@b.com"]);
        assert!(result.unwrap());
        assert_eq!(out, "mailto:a@b.com\n");
    }

    #[test]
    fn format_wifi_from_fields() {
        let (result, out) = run(&[
            "makemeqr", "format", "-t", "wifi", "--ssid", "MyNet", "--password", "secret",
        ]);
        assert!(result.unwrap());
        assert_eq!(out, "WIFI:S:MyNet;T:WPA;P:secret;;\n");
    }

    #[test]
    fn validate_reports_and_fails_on_invalid() {
        let (result, out) = run(&["makemeqr", "validate", "-t", "email", "not-an-email"]);
        assert!(!result.unwrap());
        assert_eq!(out, "invalid\n");

        let (result, out) = run(&["makemeqr", "validate", "-t", "url", "example.com"]);
        assert!(result.unwrap());
        assert_eq!(out, "valid\n");
    }

    #[test]
    fn split_phone_prints_json() {
        let (result, out) = run(&["makemeqr", "split-phone", "+15551234567"]);
        assert!(result.unwrap());
        assert_eq!(out, "{\"countryCode\":\"+1\",\"number\":\"5551234567\"}\n");
    }

    #[test]
    fn types_lists_every_data_type() {
        let (result, out) = run(&["makemeqr", "types"]);
        assert!(result.unwrap());
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows.len(), DataType::all().len());
        assert_eq!(rows[0], "url\tWebsite URL\thttps://example.com\t-\ttext");
        assert!(rows.contains(&"phone\tPhone\t+1234567890\ttel:\tjson"));
        assert!(rows.contains(&"email\tEmail\tname@example.com\tmailto:\ttext"));
    }

    #[test]
    fn render_writes_file_even_for_invalid_data() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();
        let (result, out) = run(&[
            "makemeqr", "render", "-t", "email", "nobody", "--out-dir", dir, "--format", "svg",
        ]);
        assert!(result.unwrap());
        let path = std::path::PathBuf::from(out.trim());
        assert!(path.exists());
        assert_eq!(path.extension().unwrap(), "svg");
    }

    #[test]
    fn render_without_data_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();
        let (result, out) = run(&["makemeqr", "render", "-t", "text", "--out-dir", dir]);
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
