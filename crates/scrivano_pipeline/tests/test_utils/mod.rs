// Mock driver for executor tests.
//
// The driver dispatches on the requested model name so one instance can
// serve a whole agent roster: "upper" uppercases, "exclaim" appends "!",
// "boom" fails, "empty" returns no text, "slow" echoes after a delay, and
// anything else echoes the prompt back.

use async_trait::async_trait;
use scrivano_core::{AgentConfig, GenerateRequest, GenerateResponse, Role};
use scrivano_error::{BackendError, ScrivanoResult};
use scrivano_interface::ScrivanoDriver;
use scrivano_pipeline::Pipeline;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Default)]
pub struct MockDriver {
    /// (model, user prompt) per generate call, in call order
    calls: Mutex<Vec<(String, String)>>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_for_model(&self, model: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, _)| m == model)
            .count()
    }
}

#[async_trait]
impl ScrivanoDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> ScrivanoResult<GenerateResponse> {
        let model = req.model().clone().unwrap_or_default();
        let prompt = req
            .messages()
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.clone())
            .unwrap_or_default();

        self.calls
            .lock()
            .unwrap()
            .push((model.clone(), prompt.clone()));

        match model.as_str() {
            "upper" => Ok(GenerateResponse {
                text: prompt.to_uppercase(),
            }),
            "exclaim" => Ok(GenerateResponse {
                text: format!("{prompt}!"),
            }),
            "boom" => Err(BackendError::new("simulated backend outage").into()),
            "empty" => Ok(GenerateResponse::default()),
            "slow" => {
                tokio::time::sleep(Duration::from_millis(100)).await;
                Ok(GenerateResponse { text: prompt })
            }
            _ => Ok(GenerateResponse { text: prompt }),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "echo"
    }
}

/// A test agent whose prompt is the bare `{{input}}` placeholder, so the
/// prompt reaching the driver equals the step input.
pub fn agent(name: &str, model: &str) -> AgentConfig {
    AgentConfig::builder()
        .name(name)
        .model(model)
        .temperature(0.5)
        .max_tokens(64u32)
        .top_p(0.9)
        .system_prompt("test system")
        .user_prompt("{{input}}")
        .build()
        .expect("test agent is complete")
}

pub fn pipeline_of(agents: &[(&str, &str)]) -> Pipeline {
    let agents = agents
        .iter()
        .map(|(name, model)| agent(name, model))
        .collect();
    Pipeline::new("test", "test pipeline", agents)
}
