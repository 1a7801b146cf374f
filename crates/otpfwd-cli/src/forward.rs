//! Forward-message rendering.

use chrono::NaiveDateTime;
use otpfwd_domain::{Classification, CountryDirectory, ExtractionResult, Rejection};
use otpfwd_extractor::Pipeline;
use std::panic::{self, AssertUnwindSafe};
use tracing::error;

/// Headline of the message sent when a message could not be formatted.
pub const PASSTHROUGH_HEADER: &str = "⚠️ Error processing OTP! Could not format. Original message: ";

/// What to send for one incoming message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// The formatted forward message
    Forward(String),
    /// Nothing; the message was rejected
    Dropped(Rejection),
    /// Classification failed unexpectedly; forward the original text
    Passthrough(String),
}

/// Render an accepted result into the forward template.
pub fn forward_message(result: &ExtractionResult, now: &NaiveDateTime) -> String {
    let country = &result.country.display;
    let service = &result.service;
    let otp = &result.otp_code;

    format!(
        "✅ {country} {service} OTP Received Successfully 🎉\n\
         \n\
         🔑 **OTP Code:** `{otp}`\n\
         \n\
         📞 **Number:** `{number}`\n\
         🛠️ **Service:** {service}\n\
         🌍 **Country:** {country}\n\
         ⏰ **Time:** {time}\n\
         📅 **Date:** {date}\n\
         \n\
         # Your {service} verification code: `{otp}`\n\
         Do not share this code with anyone!\n",
        number = result.masked_number,
        time = now.format("%I:%M:%S %p"),
        date = now.format("%d-%m-%Y"),
    )
}

/// The message forwarded verbatim when formatting fails.
pub fn passthrough_message(raw: &str) -> String {
    format!("{}\n\n`{}`", PASSTHROUGH_HEADER, raw)
}

/// Classify and render `raw`, degrading to passthrough if classification panics.
pub fn render<C>(pipeline: &Pipeline<C>, raw: &str, now: &NaiveDateTime) -> Rendered
where
    C: CountryDirectory + 'static,
{
    render_with(|text| pipeline.classify(text), raw, now)
}

fn render_with<F>(classify: F, raw: &str, now: &NaiveDateTime) -> Rendered
where
    F: FnOnce(&str) -> Classification,
{
    match panic::catch_unwind(AssertUnwindSafe(|| classify(raw))) {
        Ok(Classification::Accepted(result)) => Rendered::Forward(forward_message(&result, now)),
        Ok(Classification::Rejected(rejection)) => Rendered::Dropped(rejection),
        Err(_) => {
            error!("Classification panicked; forwarding original message");
            Rendered::Passthrough(passthrough_message(raw))
        }
    }
}
