//! Agent configuration types.

use derive_builder::Builder;
use derive_getters::Getters;
use scrivano_error::{PipelineError, PipelineErrorKind};
use serde::{Deserialize, Serialize};

/// Placeholder substituted with the previous step's output when building an
/// agent's prompt.
pub(crate) const INPUT_PLACEHOLDER: &str = "{{input}}";

/// Configuration for a single generative agent.
///
/// An agent couples a model selection with generation parameters and the
/// prompt pair that shapes its behavior. The `user_prompt` should contain
/// the `{{input}}` placeholder; when it does not, the literal prompt is sent
/// unchanged, which is legal but usually a configuration mistake.
///
/// # Examples
///
/// ```
/// use scrivano_core::AgentConfig;
///
/// let agent = AgentConfig::builder()
///     .name("Summarizer")
///     .description("Concise summary generator")
///     .model("gemini-2.5-flash")
///     .temperature(0.3)
///     .max_tokens(512u32)
///     .top_p(0.95)
///     .system_prompt("You are a helpful assistant that summarizes text concisely.")
///     .user_prompt("Summarize the following text:\n\n{{input}}")
///     .build()
///     .unwrap();
///
/// assert!(agent.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
pub struct AgentConfig {
    /// Identifying name, shown on pipeline steps
    name: String,
    /// Human-readable description of what this agent does
    #[serde(default)]
    #[builder(default)]
    description: String,
    /// Model identifier selecting the generative backend model
    model: String,
    /// Sampling temperature, within [0, 1]
    temperature: f32,
    /// Maximum output tokens, at least 1
    max_tokens: u32,
    /// Nucleus sampling cutoff, within [0, 1]
    top_p: f32,
    /// System instruction setting the agent's behavior
    system_prompt: String,
    /// Prompt template; `{{input}}` marks where the step input is inserted
    user_prompt: String,
}

impl AgentConfig {
    /// Create a builder for an agent configuration.
    pub fn builder() -> AgentConfigBuilder {
        AgentConfigBuilder::default()
    }

    /// Validate the generation parameters.
    ///
    /// A `user_prompt` without `{{input}}` is accepted with a warning; the
    /// literal prompt will be sent with no substitution.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank, `temperature` or `top_p` fall
    /// outside [0, 1], or `max_tokens` is zero.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.name.trim().is_empty() {
            return Err(PipelineError::new(PipelineErrorKind::InvalidAgentName(
                "agent name cannot be empty".to_string(),
            )));
        }

        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(PipelineError::new(PipelineErrorKind::InvalidParameter {
                agent: self.name.clone(),
                message: format!("temperature must be within [0, 1], got {}", self.temperature),
            }));
        }

        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(PipelineError::new(PipelineErrorKind::InvalidParameter {
                agent: self.name.clone(),
                message: format!("top_p must be within [0, 1], got {}", self.top_p),
            }));
        }

        if self.max_tokens < 1 {
            return Err(PipelineError::new(PipelineErrorKind::InvalidParameter {
                agent: self.name.clone(),
                message: "max_tokens must be at least 1".to_string(),
            }));
        }

        if !self.user_prompt.contains(INPUT_PLACEHOLDER) {
            tracing::warn!(
                agent = %self.name,
                placeholder = INPUT_PLACEHOLDER,
                "user_prompt is missing the input placeholder; the literal prompt will be sent"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent_with(temperature: f32, max_tokens: u32, top_p: f32) -> AgentConfig {
        AgentConfig::builder()
            .name("Test")
            .model("gemini-2.5-flash")
            .temperature(temperature)
            .max_tokens(max_tokens)
            .top_p(top_p)
            .system_prompt("system")
            .user_prompt("{{input}}")
            .build()
            .unwrap()
    }

    #[test]
    fn in_range_parameters_validate() {
        assert!(agent_with(0.0, 1, 0.0).validate().is_ok());
        assert!(agent_with(1.0, 4096, 1.0).validate().is_ok());
    }

    #[test]
    fn out_of_range_temperature_is_rejected() {
        let err = agent_with(1.5, 512, 0.95).validate().unwrap_err();
        assert!(err.to_string().contains("temperature"));
    }

    #[test]
    fn zero_max_tokens_is_rejected() {
        let err = agent_with(0.5, 0, 0.95).validate().unwrap_err();
        assert!(err.to_string().contains("max_tokens"));
    }

    #[test]
    fn prompt_without_placeholder_is_accepted() {
        let mut agent = agent_with(0.5, 512, 0.95);
        agent.user_prompt = "no placeholder here".to_string();
        assert!(agent.validate().is_ok());
    }
}
