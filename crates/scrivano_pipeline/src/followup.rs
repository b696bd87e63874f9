//! Follow-up question generation.

use derive_getters::Getters;
use scrivano_core::{GenerateRequest, Message};
use scrivano_interface::ScrivanoDriver;

/// Fallback text returned when follow-up generation fails.
pub const FOLLOW_UP_FALLBACK: &str = "Could not generate follow-up questions.";

/// Model and temperature for the follow-up call.
///
/// Unlike agents, the follow-up step is not configurable per run; these
/// values are fixed at executor construction.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct FollowUpConfig {
    /// Model identifier for the follow-up call
    model: String,
    /// Sampling temperature for the follow-up call
    temperature: f32,
}

impl FollowUpConfig {
    /// Create a follow-up configuration.
    pub fn new(model: impl Into<String>, temperature: f32) -> Self {
        Self {
            model: model.into(),
            temperature,
        }
    }
}

impl Default for FollowUpConfig {
    fn default() -> Self {
        Self::new("gemini-2.5-flash", 0.7)
    }
}

/// Generates suggested follow-up questions after a successful run.
///
/// This call never fails from the caller's perspective: backend errors are
/// logged and degrade to [`FOLLOW_UP_FALLBACK`], so the run it follows is
/// never left in an ambiguous state.
pub struct FollowUpGenerator<'d, D> {
    driver: &'d D,
    config: FollowUpConfig,
}

impl<'d, D: ScrivanoDriver> FollowUpGenerator<'d, D> {
    /// Create a generator with the default model and temperature.
    pub fn new(driver: &'d D) -> Self {
        Self::with_config(driver, FollowUpConfig::default())
    }

    /// Create a generator with an explicit configuration.
    pub fn with_config(driver: &'d D, config: FollowUpConfig) -> Self {
        Self { driver, config }
    }

    /// Generate follow-up questions for the given context.
    #[tracing::instrument(skip(self, context), fields(context_len = context.len(), model = %self.config.model))]
    pub async fn generate(&self, context: &str) -> String {
        let prompt = format!(
            "Based on the following context, generate 3 insightful follow-up questions \
             someone might ask. Format them as a numbered list.\n\nContext:\n{context}"
        );

        let request = match GenerateRequest::builder()
            .messages(vec![Message::user(prompt)])
            .model(Some(self.config.model.clone()))
            .temperature(Some(self.config.temperature))
            .build()
        {
            Ok(request) => request,
            Err(e) => {
                tracing::error!(error = %e, "Failed to build follow-up request");
                return FOLLOW_UP_FALLBACK.to_string();
            }
        };

        match self.driver.generate(&request).await {
            Ok(response) => response.text,
            Err(e) => {
                tracing::error!(error = %e, "Follow-up generation failed");
                FOLLOW_UP_FALLBACK.to_string()
            }
        }
    }
}
