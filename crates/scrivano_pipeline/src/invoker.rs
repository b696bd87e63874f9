//! Single-agent invocation.

use scrivano_core::{AgentConfig, GenerateRequest, Message, template};
use scrivano_error::AgentError;
use scrivano_interface::ScrivanoDriver;

/// Wraps one call to the generative backend for one agent.
///
/// The invoker is a black box from the executor's perspective: it always
/// returns a discriminated success/failure result, never an uncaught
/// failure, and imposes no timeout of its own.
pub struct AgentInvoker<'d, D> {
    driver: &'d D,
}

impl<'d, D: ScrivanoDriver> AgentInvoker<'d, D> {
    /// Create an invoker over the given driver.
    pub fn new(driver: &'d D) -> Self {
        Self { driver }
    }

    /// Invoke one agent with the given input.
    ///
    /// Builds the prompt by substituting `{{input}}` in the agent's user
    /// prompt (a prompt without the placeholder is sent literally), then
    /// dispatches a single request carrying the agent's model and
    /// generation parameters verbatim. An empty response text is a valid
    /// result, not an error.
    ///
    /// # Errors
    ///
    /// Any backend failure (auth, network, rejection, malformed response)
    /// is wrapped in an [`AgentError`] naming the agent.
    #[tracing::instrument(skip(self, agent, input), fields(agent = %agent.name(), model = %agent.model()))]
    pub async fn invoke(&self, agent: &AgentConfig, input: &str) -> Result<String, AgentError> {
        let prompt = template::render_with_input(agent.user_prompt(), input);

        let request = GenerateRequest::builder()
            .messages(vec![
                Message::system(agent.system_prompt().clone()),
                Message::user(prompt),
            ])
            .model(Some(agent.model().clone()))
            .temperature(Some(*agent.temperature()))
            .max_tokens(Some(*agent.max_tokens()))
            .top_p(Some(*agent.top_p()))
            .build()
            .map_err(|e| AgentError::new(agent.name(), e.to_string()))?;

        match self.driver.generate(&request).await {
            Ok(response) => {
                tracing::debug!(output_len = response.text.len(), "Agent call resolved");
                Ok(response.text)
            }
            Err(e) => Err(AgentError::new(agent.name(), e.to_string())),
        }
    }
}
