use std::fmt;

use reqwest::StatusCode;

pub const CONNECTIVITY_MESSAGE: &str =
    "Unable to connect to AI service. Please check your internet connection and try again.";

#[derive(Debug)]
pub enum GenerateError {
    CredentialsMissing,
    Api {
        status: StatusCode,
        message: String,
    },
    MalformedResponse {
        body: String,
    },
    Connectivity {
        source: reqwest::Error,
    },
    Request {
        source: reqwest::Error,
    },
    EmptyContent,
}

impl GenerateError {
    pub(crate) fn from_transport(source: reqwest::Error) -> Self {
        if source.is_connect() {
            Self::Connectivity { source }
        } else {
            Self::Request { source }
        }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CredentialsMissing => write!(f, "Missing Cloudflare credentials"),
            Self::Api { status, message } => {
                write!(f, "API error: {} - {message}", status.as_u16())
            }
            Self::MalformedResponse { .. } => write!(f, "Invalid API response format"),
            Self::Connectivity { .. } => f.write_str(CONNECTIVITY_MESSAGE),
            Self::Request { source } => write!(f, "Failed to generate content: {source}"),
            Self::EmptyContent => write!(f, "No valid content generated"),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Connectivity { source } | Self::Request { source } => Some(source),
            _ => None,
        }
    }
}
