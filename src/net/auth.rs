//! REST client for the auth provider (GoTrue-style endpoints).
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the access
//! token persisted in `localStorage` so a reload can restore the session.
//! Server-side (SSR): stubs returning `None`/error since auth only happens
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Sign-in/sign-up/sign-out/password-update surface the provider's own error
//! message verbatim as `Err(String)`; the session lookup fails open to `None`
//! so a broken fetch lands the user on the login screen, not an error page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::types::Identity;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ProviderError;

/// `localStorage` key holding the provider access token.
#[cfg(feature = "hydrate")]
const TOKEN_STORAGE_KEY: &str = "sitechat.access_token";

#[cfg(any(test, feature = "hydrate"))]
fn session_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/user")
}

#[cfg(any(test, feature = "hydrate"))]
fn password_grant_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/token?grant_type=password")
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/signup")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/logout")
}

/// Extract the provider's error message from a failed response body,
/// falling back to a generic status line when the body is not parseable.
#[cfg(any(test, feature = "hydrate"))]
fn provider_error_message(status: u16, body: &str) -> String {
    let parsed: ProviderError = serde_json::from_str(body).unwrap_or_default();
    [parsed.error_description, parsed.msg, parsed.message]
        .into_iter()
        .flatten()
        .find(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("request failed: {status}"))
}

/// Build the signup request body, tucking the full name into profile metadata.
#[cfg(any(test, feature = "hydrate"))]
fn signup_payload(email: &str, password: &str, full_name: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "password": password,
        "data": { "full_name": full_name },
    })
}

#[cfg(feature = "hydrate")]
fn stored_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(TOKEN_STORAGE_KEY).ok()?
}

#[cfg(feature = "hydrate")]
fn store_token(token: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
    }
}

#[cfg(feature = "hydrate")]
fn clear_token() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}

/// Fetch the identity for the persisted session token, if any.
/// Returns `None` when no token is stored, the token is stale, the provider
/// is unreachable, or we are on the server.
pub async fn fetch_session() -> Option<Identity> {
    #[cfg(feature = "hydrate")]
    {
        let config = crate::config::provider_config().ok()?;
        let token = stored_token()?;
        let resp = gloo_net::http::Request::get(&session_endpoint(&config.base_url))
            .header("apikey", &config.anon_key)
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            clear_token();
            return None;
        }
        resp.json::<Identity>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with email and password via the password grant.
///
/// # Errors
///
/// Returns the provider's error message when the credentials are rejected or
/// the request fails.
pub async fn sign_in(email: &str, password: &str) -> Result<Identity, String> {
    #[cfg(feature = "hydrate")]
    {
        let config = crate::config::provider_config()?;
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&password_grant_endpoint(&config.base_url))
            .header("apikey", &config.anon_key)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(provider_error_message(resp.status(), &body));
        }
        let body: super::types::TokenResponse = resp.json().await.map_err(|e| e.to_string())?;
        store_token(&body.access_token);
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account and sign in, recording the full name as profile metadata.
///
/// # Errors
///
/// Returns the provider's error message when signup is rejected or the
/// request fails.
pub async fn sign_up(email: &str, password: &str, full_name: &str) -> Result<Identity, String> {
    #[cfg(feature = "hydrate")]
    {
        let config = crate::config::provider_config()?;
        let payload = signup_payload(email, password, full_name);
        let resp = gloo_net::http::Request::post(&signup_endpoint(&config.base_url))
            .header("apikey", &config.anon_key)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(provider_error_message(resp.status(), &body));
        }
        let body: super::types::TokenResponse = resp.json().await.map_err(|e| e.to_string())?;
        store_token(&body.access_token);
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, full_name);
        Err("not available on server".to_owned())
    }
}

/// Revoke the current session and drop the persisted token.
///
/// # Errors
///
/// Returns the provider's error message when the logout request fails. The
/// local token is cleared either way so the client never keeps a session the
/// user asked to end.
pub async fn sign_out() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let config = crate::config::provider_config()?;
        let token = stored_token();
        clear_token();
        let Some(token) = token else { return Ok(()) };
        let resp = gloo_net::http::Request::post(&logout_endpoint(&config.base_url))
            .header("apikey", &config.anon_key)
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(provider_error_message(resp.status(), &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Change the signed-in user's password.
///
/// # Errors
///
/// Returns the provider's error message when no session token is available
/// or the provider rejects the update.
pub async fn update_password(new_password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let config = crate::config::provider_config()?;
        let token = stored_token().ok_or_else(|| "no active session".to_owned())?;
        let payload = serde_json::json!({ "password": new_password });
        let resp = gloo_net::http::Request::put(&session_endpoint(&config.base_url))
            .header("apikey", &config.anon_key)
            .header("Authorization", &format!("Bearer {token}"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(provider_error_message(resp.status(), &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = new_password;
        Err("not available on server".to_owned())
    }
}
