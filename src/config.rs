//! Compile-time auth provider configuration.
//!
//! DESIGN
//! ======
//! The provider endpoint and public key are baked in at build time. A missing
//! value produces a visible configuration error screen instead of a client
//! quietly pointed at a placeholder endpoint.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Connection settings for the auth provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Base URL of the provider, e.g. `https://auth.example.com`.
    pub base_url: String,
    /// Public API key sent as the `apikey` header on every request.
    pub anon_key: String,
}

/// Read the provider configuration from build-time environment values.
///
/// # Errors
///
/// Returns a human-readable message when `SITECHAT_AUTH_URL` or
/// `SITECHAT_AUTH_ANON_KEY` was absent at build time.
pub fn provider_config() -> Result<ProviderConfig, String> {
    build_config(option_env!("SITECHAT_AUTH_URL"), option_env!("SITECHAT_AUTH_ANON_KEY"))
}

fn build_config(url: Option<&str>, key: Option<&str>) -> Result<ProviderConfig, String> {
    match (non_empty(url), non_empty(key)) {
        (Some(base_url), Some(anon_key)) => Ok(ProviderConfig {
            base_url: base_url.trim_end_matches('/').to_owned(),
            anon_key: anon_key.to_owned(),
        }),
        _ => Err(
            "Auth provider is not configured. Set SITECHAT_AUTH_URL and \
             SITECHAT_AUTH_ANON_KEY before building the console."
                .to_owned(),
        ),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
