use std::env;
use std::fmt;

pub const ACCOUNT_ID_ENV: &str = "VITE_CLOUDFLARE_ACCOUNT_ID";
pub const API_TOKEN_ENV: &str = "VITE_CLOUDFLARE_API_TOKEN";

/// Cloudflare account id and API token used to authenticate Workers AI calls.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    account_id: String,
    api_token: String,
}

impl Credentials {
    /// Builds credentials when both values are non-blank. A partial pair is
    /// treated the same as no credentials at all.
    pub fn new(account_id: impl Into<String>, api_token: impl Into<String>) -> Option<Self> {
        let account_id = account_id.into().trim().to_string();
        let api_token = api_token.into().trim().to_string();
        if account_id.is_empty() || api_token.is_empty() {
            return None;
        }
        Some(Self {
            account_id,
            api_token,
        })
    }

    /// Reads `VITE_CLOUDFLARE_ACCOUNT_ID` and `VITE_CLOUDFLARE_API_TOKEN`.
    pub fn from_env() -> Option<Self> {
        let account_id = env::var(ACCOUNT_ID_ENV).ok()?;
        let api_token = env::var(API_TOKEN_ENV).ok()?;
        Self::new(account_id, api_token)
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("api_token", &"<redacted>")
            .finish()
    }
}
