//! URL construction for the third-party QR image endpoint.
//!
//! The endpoint renders the image; we only compose the GET request.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Default QR image service.
pub const DEFAULT_QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

pub const MIN_QR_SIZE: u32 = 64;
pub const MAX_QR_SIZE: u32 = 1024;
pub const DEFAULT_QR_SIZE: u32 = 300;
pub const MAX_QR_MARGIN: u32 = 50;
pub const DEFAULT_QR_MARGIN: u32 = 10;

/// Errors building a QR request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QrError {
    #[error("QR payload is empty")]
    EmptyPayload,

    #[error("Invalid colour '{value}': expected 3 or 6 hex digits")]
    InvalidColor { value: String },

    #[error("Invalid QR endpoint '{endpoint}': {message}")]
    InvalidEndpoint { endpoint: String, message: String },

    #[error("Unsupported QR format '{0}' (expected png, svg or jpg)")]
    UnsupportedFormat(String),
}

/// Image format returned by the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrFormat {
    #[default]
    Png,
    Svg,
    Jpg,
}

impl QrFormat {
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Jpg => "jpg",
        }
    }
}

impl fmt::Display for QrFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl FromStr for QrFormat {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "jpg" | "jpeg" => Ok(Self::Jpg),
            other => Err(QrError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// A QR image request.
///
/// Size and margin are clamped when set; colours are validated when the
/// URL is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrRequest {
    data: String,
    size: u32,
    margin: u32,
    foreground: String,
    background: String,
    format: QrFormat,
}

impl QrRequest {
    /// Black on white PNG with default size and margin.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            size: DEFAULT_QR_SIZE,
            margin: DEFAULT_QR_MARGIN,
            foreground: "000000".to_string(),
            background: "ffffff".to_string(),
            format: QrFormat::Png,
        }
    }

    /// Edge length in pixels, clamped to `[64, 1024]`.
    #[must_use]
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size.clamp(MIN_QR_SIZE, MAX_QR_SIZE);
        self
    }

    /// Quiet-zone margin in pixels, clamped to `[0, 50]`.
    #[must_use]
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin.min(MAX_QR_MARGIN);
        self
    }

    /// Foreground colour, with or without a leading `#`.
    #[must_use]
    pub fn with_foreground(mut self, color: impl Into<String>) -> Self {
        self.foreground = color.into();
        self
    }

    /// Background colour, with or without a leading `#`.
    #[must_use]
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = color.into();
        self
    }

    #[must_use]
    pub const fn with_format(mut self, format: QrFormat) -> Self {
        self.format = format;
        self
    }

    pub const fn size(&self) -> u32 {
        self.size
    }

    pub const fn margin(&self) -> u32 {
        self.margin
    }

    pub const fn format(&self) -> QrFormat {
        self.format
    }

    /// File name offered when the image is downloaded.
    pub fn suggested_file_name(&self) -> String {
        format!("qr-code.{}", self.format.as_param())
    }

    /// Compose the GET URL against `endpoint`.
    pub fn to_url(&self, endpoint: &str) -> Result<Url, QrError> {
        if self.data.trim().is_empty() {
            return Err(QrError::EmptyPayload);
        }

        let color = normalize_hex(&self.foreground)?;
        let bgcolor = normalize_hex(&self.background)?;

        let mut url = Url::parse(endpoint).map_err(|e| QrError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })?;

        url.query_pairs_mut()
            .append_pair("size", &format!("{0}x{0}", self.size))
            .append_pair("data", &self.data)
            .append_pair("margin", &self.margin.to_string())
            .append_pair("color", &color)
            .append_pair("bgcolor", &bgcolor)
            .append_pair("format", self.format.as_param());

        Ok(url)
    }
}

/// Strip an optional `#` and validate 3 or 6 hex digits. Returns lowercase.
pub fn normalize_hex(value: &str) -> Result<String, QrError> {
    let digits = value.trim().trim_start_matches('#');
    let valid = matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(digits.to_ascii_lowercase())
    } else {
        Err(QrError::InvalidColor {
            value: value.to_string(),
        })
    }
}
