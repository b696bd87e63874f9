//! Google Gemini API implementation.
//!
//! This module provides a client for the Google Gemini API with support for:
//! - Per-request model selection (different agents can use different models)
//! - Client pooling with lazy initialization (one client per model)
//! - Automatic retry with exponential backoff for transient failures
//! - Thread-safe concurrent access
//!
//! # Architecture
//!
//! The [`GeminiClient`] maintains a pool of model-specific clients. When a
//! request specifies a model (via `GenerateRequest.model`), the client either
//! retrieves the existing client for that model or creates a new one
//! on-demand. The API key is read from the environment exactly once, at
//! construction, and a missing key is a typed configuration failure rather
//! than a late panic.
//!
//! # Example
//!
//! ```no_run
//! use scrivano_models::GeminiClient;
//! use scrivano_core::{GenerateRequest, Message};
//! use scrivano_interface::ScrivanoDriver;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//!
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::user("Hello")])
//!     .model(Some("gemini-2.5-flash".to_string()))
//!     .build()?;
//! let response = client.generate(&request).await?;
//! println!("{}", response.text);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::env;
use std::sync::{Arc, Mutex};
use tracing::instrument;

use gemini_rust::{Gemini, client::Model};

use scrivano_core::{GenerateRequest, GenerateResponse, Role};
use scrivano_error::{GeminiError, GeminiErrorKind, RetryableError, ScrivanoResult};
use scrivano_interface::ScrivanoDriver;

use super::GeminiResult;

/// Client for the Google Gemini API with per-model client pooling.
///
/// Clients are created lazily on first use for each model and cached for the
/// lifetime of this value. Transient HTTP failures (408/429/5xx) are retried
/// with exponential backoff and jitter; permanent failures surface
/// immediately.
pub struct GeminiClient {
    /// Cache of model-specific API clients
    clients: Arc<Mutex<HashMap<String, Gemini>>>,
    /// API key for creating new clients
    api_key: String,
    /// Default model name when req.model is None
    model_name: String,
    /// Retry configuration
    no_retry: bool,
    max_retries: Option<usize>,
    retry_backoff_ms: Option<u64>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let client_count = self.clients.lock().map(|pool| pool.len()).unwrap_or(0);
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .field("cached_clients", &client_count)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Maps common model name strings to their corresponding Model enum
    /// variants. Uses Model::Custom for unrecognized model names,
    /// automatically adding the "models/" prefix required by the Gemini API.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }

    /// Create a new Gemini client.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable and
    /// fails with a typed error when it is absent. Defaults to the Gemini
    /// 2.5 Flash model for requests that do not select one.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use scrivano_models::GeminiClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = GeminiClient::new()?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> ScrivanoResult<Self> {
        Self::new_internal().map_err(Into::into)
    }

    /// Create a new Gemini client with retry configuration.
    ///
    /// # Arguments
    ///
    /// * `no_retry` - Disable automatic retry
    /// * `max_retries` - Override maximum retry attempts
    /// * `retry_backoff_ms` - Override initial backoff delay
    #[instrument(name = "gemini_client_new_with_retry")]
    pub fn new_with_retry(
        no_retry: bool,
        max_retries: Option<usize>,
        retry_backoff_ms: Option<u64>,
    ) -> ScrivanoResult<Self> {
        let mut client = Self::new_internal()?;
        client.no_retry = no_retry;
        client.max_retries = max_retries;
        client.retry_backoff_ms = retry_backoff_ms;
        Ok(client)
    }

    /// Internal constructor that returns Gemini-specific errors.
    fn new_internal() -> GeminiResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        Ok(Self {
            clients: Arc::new(Mutex::new(HashMap::new())),
            api_key,
            model_name: "gemini-2.5-flash".to_string(),
            no_retry: false,
            max_retries: None,
            retry_backoff_ms: None,
        })
    }

    /// Get or lazily create the pooled client for a model.
    fn client_for(&self, model_name: &str) -> GeminiResult<Gemini> {
        let mut clients = self.clients.lock().map_err(|_| {
            GeminiError::new(GeminiErrorKind::ClientCreation(
                "client pool lock poisoned".to_string(),
            ))
        })?;

        if let Some(client) = clients.get(model_name) {
            return Ok(client.clone());
        }

        let model_enum = Self::model_name_to_enum(model_name);
        let client = Gemini::with_model(&self.api_key, model_enum)
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;
        clients.insert(model_name.to_string(), client.clone());

        tracing::debug!(model = %model_name, "Created Gemini client for model");
        Ok(client)
    }

    /// Build and dispatch one request against a pooled client.
    async fn dispatch(client: &Gemini, req: &GenerateRequest) -> GeminiResult<GenerateResponse> {
        let mut builder = client.generate_content();

        // Gemini takes the system instruction separately from the
        // conversation turns.
        let mut system_prompt = None;

        for msg in req.messages() {
            match msg.role {
                Role::System => system_prompt = Some(msg.content.clone()),
                Role::User => builder = builder.with_user_message(&msg.content),
                Role::Assistant => builder = builder.with_model_message(&msg.content),
            }
        }

        if let Some(prompt) = system_prompt {
            builder = builder.with_system_prompt(&prompt);
        }

        if let Some(temp) = req.temperature() {
            builder = builder.with_temperature(*temp);
        }

        if let Some(max_tok) = req.max_tokens() {
            builder = builder.with_max_output_tokens(*max_tok as i32);
        }

        if let Some(top_p) = req.top_p() {
            builder = builder.with_top_p(*top_p);
        }

        let response = builder.execute().await.map_err(Self::parse_gemini_error)?;

        // Empty text is a valid response, not an error.
        Ok(GenerateResponse {
            text: response.text(),
        })
    }

    /// Internal generate method that returns Gemini-specific errors.
    async fn generate_internal(&self, req: &GenerateRequest) -> GeminiResult<GenerateResponse> {
        use tokio_retry2::{Retry, RetryError, strategy::ExponentialBackoff, strategy::jitter};

        let model_name = req.model().as_ref().unwrap_or(&self.model_name);
        let client = self.client_for(model_name)?;

        // First attempt resolves the fast path and, on failure, selects the
        // error-specific retry strategy.
        let err = match Self::dispatch(&client, req).await {
            Ok(response) => return Ok(response),
            Err(e) => e,
        };

        if self.no_retry || !err.is_retryable() {
            return Err(err);
        }

        let (mut initial_ms, mut max_retries, max_delay_secs) = err.retry_strategy_params();
        if let Some(override_backoff) = self.retry_backoff_ms {
            initial_ms = override_backoff;
        }
        if let Some(override_retries) = self.max_retries {
            max_retries = override_retries;
        }

        tracing::info!(
            error = %err,
            model = %model_name,
            initial_backoff_ms = initial_ms,
            max_retries,
            max_delay_secs,
            "Gemini request failed, will retry with configured strategy"
        );

        let retry_strategy = ExponentialBackoff::from_millis(initial_ms)
            .factor(2)
            .max_delay(std::time::Duration::from_secs(max_delay_secs))
            .map(jitter)
            .take(max_retries);

        Retry::spawn(retry_strategy, || {
            let client = client.clone();
            async move {
                match Self::dispatch(&client, req).await {
                    Ok(response) => Ok(response),
                    Err(e) => {
                        if e.is_retryable() {
                            tracing::warn!(error = %e, "Gemini request failed, will retry");
                            Err(RetryError::Transient {
                                err: e,
                                retry_after: None,
                            })
                        } else {
                            tracing::warn!(error = %e, "Permanent Gemini error, failing immediately");
                            Err(RetryError::Permanent(e))
                        }
                    }
                }
            }
        })
        .await
    }

    /// Parse gemini-rust errors to extract HTTP status codes.
    ///
    /// Converts generic API error strings into structured GeminiError with
    /// HTTP status codes when available, which drives retry classification.
    fn parse_gemini_error(err: impl std::fmt::Display) -> GeminiError {
        let err_msg = err.to_string();

        if let Some(status_code) = Self::extract_status_code(&err_msg) {
            GeminiError::new(GeminiErrorKind::HttpError {
                status_code,
                message: err_msg,
            })
        } else {
            GeminiError::new(GeminiErrorKind::ApiRequest(err_msg))
        }
    }

    /// Extract HTTP status code from error message string.
    ///
    /// Parses strings like "bad response from server; code 503; description: ..."
    /// and extracts the numeric status code.
    fn extract_status_code(error_msg: &str) -> Option<u16> {
        if let Some(code_start) = error_msg.find("code ") {
            let code_str = &error_msg[code_start + 5..];
            if let Some(end) = code_str.find(|c: char| !c.is_numeric()) {
                return code_str[..end].parse().ok();
            }
        }
        None
    }
}

#[async_trait]
impl ScrivanoDriver for GeminiClient {
    async fn generate(&self, req: &GenerateRequest) -> ScrivanoResult<GenerateResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    /// Returns the default model name used when `GenerateRequest.model` is None.
    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_model_names_map_to_enum_variants() {
        assert!(matches!(
            GeminiClient::model_name_to_enum("gemini-2.5-flash"),
            Model::Gemini25Flash
        ));
        assert!(matches!(
            GeminiClient::model_name_to_enum("gemini-2.5-pro"),
            Model::Gemini25Pro
        ));
    }

    #[test]
    fn unknown_model_names_get_models_prefix() {
        match GeminiClient::model_name_to_enum("gemini-2.0-flash") {
            Model::Custom(name) => assert_eq!(name, "models/gemini-2.0-flash"),
            _ => panic!("expected custom model"),
        }
    }

    #[test]
    fn prefixed_model_names_are_preserved() {
        match GeminiClient::model_name_to_enum("models/gemini-2.0-flash") {
            Model::Custom(name) => assert_eq!(name, "models/gemini-2.0-flash"),
            _ => panic!("expected custom model"),
        }
    }

    #[test]
    fn status_codes_are_extracted_from_error_text() {
        assert_eq!(
            GeminiClient::extract_status_code("bad response from server; code 503; description"),
            Some(503)
        );
        assert_eq!(GeminiClient::extract_status_code("no code here"), None);
    }
}
