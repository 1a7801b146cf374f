//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::forward::Rendered;
use colored::*;
use otpfwd_domain::{Classification, ExtractionResult};
use otpfwd_store::CountryTable;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format one classification.
    pub fn format_classification(&self, classification: &Classification) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(classification)?),
            OutputFormat::Table => Ok(self.classification_table(classification)),
            OutputFormat::Quiet => Ok(classification
                .accepted()
                .map(|r| r.otp_code.clone())
                .unwrap_or_default()),
        }
    }

    fn classification_table(&self, classification: &Classification) -> String {
        let result = match classification {
            Classification::Accepted(result) => result,
            Classification::Rejected(rejection) => {
                return self.warning(&format!("Rejected: {}", rejection));
            }
        };

        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (field, value) in result_fields(result) {
            builder.push_record([field, value]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", self.success("OTP accepted"), table)
    }

    /// Format the results of a batch scan, in input order.
    pub fn format_scan(&self, results: &[Classification]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
            OutputFormat::Table => Ok(self.scan_table(results)),
            OutputFormat::Quiet => {
                let codes: Vec<&str> = results
                    .iter()
                    .filter_map(Classification::accepted)
                    .map(|r| r.otp_code.as_str())
                    .collect();
                Ok(codes.join("\n"))
            }
        }
    }

    fn scan_table(&self, results: &[Classification]) -> String {
        if results.is_empty() {
            return self.colorize("No messages found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Status", "OTP", "Service", "Country", "Number", "Pattern"]);

        let mut accepted = 0;
        for (index, classification) in results.iter().enumerate() {
            let position = (index + 1).to_string();
            match classification {
                Classification::Accepted(result) => {
                    accepted += 1;
                    builder.push_record([
                        position.as_str(),
                        "accepted",
                        result.otp_code.as_str(),
                        result.service.as_str(),
                        result.country.display.as_str(),
                        result.masked_number.as_str(),
                        result.matched_pattern_id.as_str(),
                    ]);
                }
                Classification::Rejected(rejection) => {
                    let reason = rejection.to_string();
                    builder.push_record([position.as_str(), "rejected", "", "", "", "", reason.as_str()]);
                }
            }
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let summary = format!(
            "Scanned {} message(s): {} accepted, {} rejected",
            results.len(),
            accepted,
            results.len() - accepted
        );
        format!("{}\n{}", table, self.info(&summary))
    }

    /// Format the country table.
    pub fn format_countries(&self, table: &CountryTable) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(table.to_json()?),
            OutputFormat::Quiet => Ok(table
                .records()
                .map(|r| r.key.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if table.is_empty() {
                    return Ok(self.colorize("No countries configured.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Key", "Name", "Flag", "Dial Code"]);
                for record in table.records() {
                    let info = record.to_info();
                    builder.push_record([
                        record.key.as_str(),
                        info.name.as_str(),
                        info.flag.as_str(),
                        info.dial_code.as_str(),
                    ]);
                }

                let mut rendered = builder.build();
                rendered
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(rendered.to_string())
            }
        }
    }

    /// Format a cleaned caption; `None` means the caption is dropped.
    pub fn format_caption(&self, caption: Option<&str>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "caption": caption
            }))?),
            OutputFormat::Quiet => Ok(caption.unwrap_or_default().to_string()),
            OutputFormat::Table => Ok(match caption {
                Some(text) => text.to_string(),
                None => self.info("Caption removed (nothing left after cleaning)"),
            }),
        }
    }

    /// Format the outcome of rendering a forward message.
    pub fn format_rendered(&self, rendered: &Rendered) -> Result<String> {
        match (self.format, rendered) {
            (OutputFormat::Json, Rendered::Forward(message)) => Ok(serde_json::to_string_pretty(
                &serde_json::json!({ "action": "forward", "message": message }),
            )?),
            (OutputFormat::Json, Rendered::Passthrough(message)) => Ok(serde_json::to_string_pretty(
                &serde_json::json!({ "action": "passthrough", "message": message }),
            )?),
            (OutputFormat::Json, Rendered::Dropped(rejection)) => Ok(serde_json::to_string_pretty(
                &serde_json::json!({ "action": "drop", "rejection": rejection }),
            )?),
            (_, Rendered::Forward(message)) | (_, Rendered::Passthrough(message)) => {
                Ok(message.clone())
            }
            (OutputFormat::Quiet, Rendered::Dropped(_)) => Ok(String::new()),
            (OutputFormat::Table, Rendered::Dropped(rejection)) => {
                Ok(self.warning(&format!("Not forwarded: {}", rejection)))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn result_fields(result: &ExtractionResult) -> [(&'static str, &str); 5] {
    [
        ("OTP Code", result.otp_code.as_str()),
        ("Number", result.masked_number.as_str()),
        ("Service", result.service.as_str()),
        ("Country", result.country.display.as_str()),
        ("Pattern", result.matched_pattern_id.as_str()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use otpfwd_domain::{CountryField, Rejection};

    fn accepted() -> Classification {
        Classification::Accepted(ExtractionResult {
            otp_code: "123456".to_string(),
            country: CountryField {
                display: "🇸🇩 Sudan".to_string(),
                name: "Sudan".to_string(),
                flag: "🇸🇩".to_string(),
                dial_code: "+249".to_string(),
            },
            masked_number: "+249112****445".to_string(),
            service: "WhatsApp".to_string(),
            matched_pattern_id: "messenger".to_string(),
        })
    }

    fn rejected() -> Classification {
        Classification::Rejected(Rejection::NoPasscode)
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_classification(&accepted()).unwrap();
        assert!(output.contains("\"otp_code\": \"123456\""));
        assert!(output.contains("\"status\": \"accepted\""));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(formatter.format_classification(&accepted()).unwrap(), "123456");
        assert_eq!(formatter.format_classification(&rejected()).unwrap(), "");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_classification(&accepted()).unwrap();
        assert!(output.starts_with("✓ OTP accepted"));
        assert!(output.contains("OTP Code"));
        assert!(output.contains("+249112****445"));

        let output = formatter.format_classification(&rejected()).unwrap();
        assert_eq!(output, "⚠ Rejected: no passcode found");
    }

    #[test]
    fn test_scan_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_scan(&[accepted(), rejected()]).unwrap();
        assert!(output.contains("messenger"));
        assert!(output.contains("no passcode found"));
        assert!(output.ends_with("ℹ Scanned 2 message(s): 1 accepted, 1 rejected"));

        let empty = formatter.format_scan(&[]).unwrap();
        assert!(empty.contains("No messages found"));
    }

    #[test]
    fn test_scan_quiet_and_json() {
        let quiet = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(quiet.format_scan(&[rejected(), accepted()]).unwrap(), "123456");

        let json = Formatter::new(OutputFormat::Json, false);
        let parsed: serde_json::Value =
            serde_json::from_str(&json.format_scan(&[accepted(), rejected()]).unwrap()).unwrap();
        assert_eq!(parsed[1]["detail"]["reason"], "no_passcode");
    }

    #[test]
    fn test_countries_format() {
        let table = CountryTable::builtin();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_countries(&table).unwrap();
        assert!(output.contains("Dial Code"));
        assert!(output.contains("+249"));

        let quiet = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(quiet.format_countries(&table).unwrap().lines().count(), table.len());
    }

    #[test]
    fn test_caption_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.format_caption(Some("Sudan list")).unwrap(), "Sudan list");
        assert!(formatter.format_caption(None).unwrap().contains("Caption removed"));

        let json = Formatter::new(OutputFormat::Json, false);
        assert!(json.format_caption(None).unwrap().contains("null"));
    }

    #[test]
    fn test_rendered_format() {
        let table = Formatter::new(OutputFormat::Table, false);
        let dropped = Rendered::Dropped(Rejection::NoPasscode);
        assert_eq!(
            table.format_rendered(&dropped).unwrap(),
            "⚠ Not forwarded: no passcode found"
        );
        assert_eq!(
            table.format_rendered(&Rendered::Forward("hi".to_string())).unwrap(),
            "hi"
        );

        let quiet = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(quiet.format_rendered(&dropped).unwrap(), "");

        let json = Formatter::new(OutputFormat::Json, false);
        let parsed: serde_json::Value =
            serde_json::from_str(&json.format_rendered(&dropped).unwrap()).unwrap();
        assert_eq!(parsed["action"], "drop");
        assert_eq!(parsed["rejection"]["reason"], "no_passcode");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.error("bad"), "✗ bad");
    }
}
