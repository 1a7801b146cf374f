//! The classification pipeline

use otpfwd_domain::{Classification, CountryDirectory, ExtractionResult, Rejection};
use otpfwd_gatekeeper::SpamGate;
use tracing::{debug, info};

use crate::country::CountryResolver;
use crate::otp::OtpExtractor;
use crate::phone::capture_number;
use crate::service::ServiceClassifier;
use crate::{ExtractorConfig, ExtractorError};

/// Classifies OTP messages
///
/// Optional size cap, then spam gate, then passcode extraction; country, number
/// and service are resolved only for messages that carry a passcode.
/// Holds no mutable state, so one instance can be shared behind an `Arc`.
#[derive(Debug)]
pub struct Pipeline<C> {
    gate: SpamGate,
    otp: OtpExtractor,
    countries: CountryResolver,
    services: ServiceClassifier,
    directory: C,
    config: ExtractorConfig,
}

impl<C> Pipeline<C>
where
    C: CountryDirectory + 'static,
{
    /// Create a pipeline
    pub fn new(directory: C, gate: SpamGate, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate()?;
        Ok(Self::assemble(directory, gate, config))
    }

    /// Create a pipeline with the default gate and configuration
    pub fn with_defaults(directory: C) -> Self {
        Self::assemble(directory, SpamGate::default(), ExtractorConfig::default())
    }

    fn assemble(directory: C, gate: SpamGate, config: ExtractorConfig) -> Self {
        Self {
            gate,
            otp: OtpExtractor::new(),
            countries: CountryResolver::new(),
            services: ServiceClassifier::new(),
            directory,
            config,
        }
    }

    /// Classify one message
    pub fn classify(&self, raw: &str) -> Classification {
        if let Some(max) = self.config.max_text_length.filter(|max| raw.len() > *max) {
            debug!("Rejected: {} bytes exceeds {}", raw.len(), max);
            return Classification::Rejected(Rejection::Oversized { len: raw.len(), max });
        }

        if let Some(phrase) = self.gate.check(raw) {
            debug!("Rejected: spam phrase '{}'", phrase);
            return Classification::Rejected(Rejection::Spam {
                phrase: phrase.to_string(),
            });
        }

        let Some(otp) = self.otp.extract(raw) else {
            debug!("Rejected: no passcode");
            return Classification::Rejected(Rejection::NoPasscode);
        };

        let (country, stage) = self.countries.resolve_with_stage(raw, &self.directory);
        let number = capture_number(raw);
        let service = self.services.classify(raw);

        debug!(
            "Passcode via '{}', country via {:?}, number found: {}",
            otp.rule,
            stage,
            number.is_found()
        );
        info!(
            "Accepted {} message from {} (pattern '{}')",
            service, country.name, otp.rule
        );

        Classification::Accepted(ExtractionResult {
            otp_code: otp.code,
            country: country.into(),
            masked_number: number.display().to_string(),
            service,
            matched_pattern_id: otp.rule.id().to_string(),
        })
    }

    /// Country directory in use
    pub fn directory(&self) -> &C {
        &self.directory
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Spam gate in use
    pub fn gate(&self) -> &SpamGate {
        &self.gate
    }
}
