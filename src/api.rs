//! Client for the external auth service.
//!
//! The service exposes two JSON endpoints, `/auth/login` and `/auth/signup`.
//! Nothing here retries or times out: one submit is one request.

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::AuthError;

const LOGIN_REJECTED_DEFAULT: &str = "Invalid credentials.";
const SIGNUP_REJECTED_DEFAULT: &str = "Unknown error";

// -- Request bodies --

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    /// Username or email address.
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Everything the sign-up form collects, including the confirmation field
/// that never leaves the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Check the confirmation and build the wire body.
    pub fn validate(&self) -> Result<SignupRequest, AuthError> {
        if self.password != self.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        Ok(SignupRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

// -- Response body --

/// Reply from either endpoint. Success carries `token`; login failures carry
/// `message`, sign-up failures carry `error`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

// -- Transport --

/// Raw HTTP reply: status code plus the undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn decode(&self) -> Result<AuthResponse, AuthError> {
        serde_json::from_str(&self.body).map_err(|e| AuthError::Decode(e.to_string()))
    }
}

#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpReply, AuthError>;
}

/// `fetch` through gloo-net.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpReply, AuthError> {
        let response = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))?;

        Ok(HttpReply { status, body })
    }
}

// -- Auth client --

#[derive(Debug, Clone)]
pub struct AuthClient<T> {
    config: AppConfig,
    transport: T,
}

impl AuthClient<GlooTransport> {
    pub fn browser() -> Self {
        Self::new(AppConfig::from_env(), GlooTransport)
    }
}

impl<T: Transport> AuthClient<T> {
    pub fn new(config: AppConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Log in and return the issued token.
    /// Any non-2xx reply is `Rejected` with the server's `message`, or
    /// "Invalid credentials." when there is none.
    pub async fn login(&self, request: &LoginRequest) -> Result<String, AuthError> {
        let body = serde_json::to_value(request).map_err(|e| AuthError::Decode(e.to_string()))?;
        let reply = self
            .transport
            .post_json(&self.config.login_url(), &body)
            .await?;

        if !reply.is_success() {
            let message = reply.decode().ok().and_then(|r| r.message);
            return Err(rejected(message, LOGIN_REJECTED_DEFAULT));
        }
        token_from(&reply)
    }

    /// Validate the form, then register and return the issued token.
    /// A password mismatch returns before any request is made.
    pub async fn signup(&self, form: &SignupForm) -> Result<String, AuthError> {
        let request = form.validate()?;
        log::debug!("Submitting sign-up for {}", request.username);

        let body = serde_json::to_value(&request).map_err(|e| AuthError::Decode(e.to_string()))?;
        let reply = self
            .transport
            .post_json(&self.config.signup_url(), &body)
            .await?;

        if !reply.is_success() {
            let error = reply.decode().ok().and_then(|r| r.error);
            return Err(rejected(error, SIGNUP_REJECTED_DEFAULT));
        }
        token_from(&reply)
    }
}

fn rejected(server_text: Option<String>, default: &str) -> AuthError {
    let text = server_text
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| default.to_string());
    AuthError::Rejected(text)
}

fn token_from(reply: &HttpReply) -> Result<String, AuthError> {
    reply
        .decode()?
        .token
        .ok_or_else(|| AuthError::Decode("response has no token".to_string()))
}
