//! Authentication configuration.

/// Configuration for token issuance and verification.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Server-held HMAC secret for token signing.
    pub secret: String,
    /// Token lifetime in seconds (default: 2_592_000 = 30 days).
    pub token_lifetime_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            token_lifetime_secs: 2_592_000,
        }
    }
}
