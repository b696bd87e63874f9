//! Core data structures for pipelines.

use crate::PipelineProvider;
use derive_getters::Getters;
use scrivano_core::AgentConfig;
use scrivano_error::{PipelineError, PipelineErrorKind};
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

/// Pipeline metadata from the `[pipeline]` section.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Getters)]
pub struct PipelineMetadata {
    /// Unique identifier for this pipeline
    name: String,
    /// Human-readable description of what this pipeline does
    #[serde(default)]
    description: String,
}

/// Intermediate structure for deserializing a pipeline TOML file.
#[derive(Debug, Clone, serde::Deserialize)]
struct TomlPipelineFile {
    pipeline: PipelineMetadata,
    #[serde(default)]
    agents: Vec<AgentConfig>,
}

/// Complete pipeline structure parsed from TOML.
///
/// # Example TOML Structure
///
/// ```toml
/// [pipeline]
/// name = "default"
/// description = "Summarize, rewrite, and structure text"
///
/// [[agents]]
/// name = "Summarizer"
/// description = "Concise summary generator"
/// model = "gemini-2.5-flash"
/// temperature = 0.3
/// max_tokens = 512
/// top_p = 0.95
/// system_prompt = "You are a helpful assistant that summarizes text concisely."
/// user_prompt = "Summarize the following text:\n\n{{input}}"
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, Getters)]
pub struct Pipeline {
    /// Pipeline metadata
    metadata: PipelineMetadata,
    /// Agents in execution order
    agents: Vec<AgentConfig>,
}

impl Pipeline {
    /// Create a pipeline from metadata parts and an agent list.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        agents: Vec<AgentConfig>,
    ) -> Self {
        Self {
            metadata: PipelineMetadata {
                name: name.into(),
                description: description.into(),
            },
            agents,
        }
    }

    /// Loads a pipeline from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML is invalid
    /// - Validation fails (blank or duplicate agent names, parameters out
    ///   of range)
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| PipelineError::new(PipelineErrorKind::FileRead(e.to_string())))?;
        content.parse()
    }

    /// The built-in three-agent pipeline: summarize, rewrite, structure.
    pub fn standard() -> Self {
        let agents = vec![
            AgentConfig::builder()
                .name("Summarizer")
                .description("Concise summary generator")
                .model("gemini-2.5-flash")
                .temperature(0.3)
                .max_tokens(512u32)
                .top_p(0.95)
                .system_prompt("You are a helpful assistant that summarizes text concisely.")
                .user_prompt("Summarize the following text:\n\n{{input}}")
                .build()
                .expect("standard summarizer agent is complete"),
            AgentConfig::builder()
                .name("Style Rewriter")
                .description("Style transformation expert")
                .model("gemini-2.5-pro")
                .temperature(0.5)
                .max_tokens(1024u32)
                .top_p(0.95)
                .system_prompt("You are an expert copywriter.")
                .user_prompt(
                    "Rewrite the following text in a professional and friendly tone:\n\n{{input}}",
                )
                .build()
                .expect("standard rewriter agent is complete"),
            AgentConfig::builder()
                .name("JSON Converter")
                .description("Converts text to structured JSON")
                .model("gemini-2.5-flash")
                .temperature(0.1)
                .max_tokens(1024u32)
                .top_p(0.95)
                .system_prompt(
                    "You are a data processing expert. Convert the following text into a \
                     structured JSON object with keys `title`, `summary`, and `keywords` \
                     (an array of strings).",
                )
                .user_prompt("Convert this to JSON:\n\n{{input}}")
                .build()
                .expect("standard converter agent is complete"),
        ];

        Self::new("standard", "Summarize, rewrite, and structure text", agents)
    }

    /// Validates the pipeline structure.
    ///
    /// Ensures agent names are non-blank and unique and that every agent's
    /// generation parameters are in range. An empty agent list is valid; a
    /// run over it completes immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    #[tracing::instrument(skip(self), fields(name = %self.metadata.name(), agent_count = self.agents.len()))]
    pub fn validate(&self) -> Result<(), PipelineError> {
        let mut seen = HashSet::new();
        for agent in &self.agents {
            agent.validate()?;
            if !seen.insert(agent.name().as_str()) {
                return Err(PipelineError::new(PipelineErrorKind::InvalidAgentName(
                    format!("duplicate agent name: {}", agent.name()),
                )));
            }
        }
        Ok(())
    }
}

impl FromStr for Pipeline {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let file: TomlPipelineFile = toml::from_str(s)
            .map_err(|e| PipelineError::new(PipelineErrorKind::TomlParse(e.to_string())))?;

        let pipeline = Pipeline {
            metadata: file.pipeline,
            agents: file.agents,
        };
        pipeline.validate()?;
        Ok(pipeline)
    }
}

impl PipelineProvider for Pipeline {
    fn name(&self) -> &str {
        self.metadata.name()
    }

    fn description(&self) -> &str {
        self.metadata.description()
    }

    fn agents(&self) -> &[AgentConfig] {
        &self.agents
    }
}
