//! Configuration constants and decode options.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::{DecodeError, Result};

/// Core HL7 V3 namespace. Every dispatched element lives here unless noted.
pub const HL7_NAMESPACE: &str = "urn:hl7-org:v3";

/// Structured documents extension namespace.
pub const SDTC_NAMESPACE: &str = "urn:hl7-org:sdtc";

/// Local name of the single top-level element.
pub const ROOT_ELEMENT: &str = "ClinicalDocument";

/// Default maximum input size in bytes (50 MB).
///
/// CCDs with embedded base64 attachments can run to several megabytes;
/// anything past this is rejected before parsing.
pub const DEFAULT_MAX_DOCUMENT_SIZE: usize = 50 * 1024 * 1024;

/// Environment variable selecting the numeric policy.
pub const NUMERIC_POLICY_ENV: &str = "CCD_NUMERIC_POLICY";

/// Environment variable overriding the maximum document size.
pub const MAX_DOCUMENT_SIZE_ENV: &str = "CCD_MAX_DOCUMENT_SIZE";

/// How a malformed integer or double attribute is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum NumericPolicy {
    /// Skip the field, record a warning and keep decoding.
    #[default]
    Lenient,
    /// Abort the whole decode.
    Strict,
}

impl NumericPolicy {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for NumericPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumericPolicy {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            _ => Err(DecodeError::InvalidNumericPolicy(s.to_string())),
        }
    }
}

/// Options for a decode run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    pub numeric_policy: NumericPolicy,
    pub max_document_size: usize,
}

impl DecodeOptions {
    /// Build options from `CCD_NUMERIC_POLICY` and `CCD_MAX_DOCUMENT_SIZE`.
    ///
    /// # Errors
    /// Returns `InvalidNumericPolicy` if the policy variable is set to an
    /// unknown value. An unparsable size falls back to the default.
    pub fn from_env() -> Result<Self> {
        let numeric_policy = match std::env::var(NUMERIC_POLICY_ENV) {
            Ok(value) => value.parse()?,
            Err(_) => NumericPolicy::default(),
        };

        let max_document_size = std::env::var(MAX_DOCUMENT_SIZE_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_DOCUMENT_SIZE);

        Ok(Self {
            numeric_policy,
            max_document_size,
        })
    }

    #[must_use]
    pub fn with_numeric_policy(mut self, policy: NumericPolicy) -> Self {
        self.numeric_policy = policy;
        self
    }

    #[must_use]
    pub fn with_max_document_size(mut self, limit: usize) -> Self {
        self.max_document_size = limit;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            numeric_policy: NumericPolicy::default(),
            max_document_size: DEFAULT_MAX_DOCUMENT_SIZE,
        }
    }
}
