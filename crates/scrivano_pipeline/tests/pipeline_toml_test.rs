// Pipeline TOML parsing and validation tests.

use scrivano_pipeline::{Pipeline, PipelineProvider};

const VALID_PIPELINE: &str = r#"
[pipeline]
name = "review"
description = "Summarize then question"

[[agents]]
name = "Summarizer"
description = "Concise summary generator"
model = "gemini-2.5-flash"
temperature = 0.3
max_tokens = 512
top_p = 0.95
system_prompt = "You are a helpful assistant that summarizes text concisely."
user_prompt = """
Summarize the following text:

{{input}}"""

[[agents]]
name = "Questioner"
model = "gemini-2.5-pro"
temperature = 0.6
max_tokens = 256
top_p = 0.9
system_prompt = "You ask probing questions."
user_prompt = "Ask three questions about:\n\n{{input}}"
"#;

#[test]
fn valid_toml_parses_in_order() {
    let pipeline: Pipeline = VALID_PIPELINE.parse().unwrap();

    assert_eq!(pipeline.name(), "review");
    assert_eq!(pipeline.description(), "Summarize then question");
    let agents = PipelineProvider::agents(&pipeline);
    assert_eq!(agents.len(), 2);
    assert_eq!(agents[0].name(), "Summarizer");
    assert_eq!(agents[1].name(), "Questioner");
    assert_eq!(*agents[1].temperature(), 0.6);
}

#[test]
fn missing_description_defaults_to_empty() {
    let pipeline: Pipeline = r#"
[pipeline]
name = "bare"
"#
    .parse()
    .unwrap();

    assert_eq!(pipeline.description(), "");
    assert!(PipelineProvider::agents(&pipeline).is_empty());
}

#[test]
fn malformed_toml_is_rejected() {
    let result: Result<Pipeline, _> = "[pipeline".parse();
    assert!(result.is_err());
}

#[test]
fn out_of_range_temperature_names_the_agent() {
    let toml = VALID_PIPELINE.replace("temperature = 0.3", "temperature = 1.3");
    let err = toml.parse::<Pipeline>().unwrap_err();

    let message = err.to_string();
    assert!(message.contains("Summarizer"));
    assert!(message.contains("temperature"));
}

#[test]
fn duplicate_agent_names_are_rejected() {
    let toml = VALID_PIPELINE.replace("name = \"Questioner\"", "name = \"Summarizer\"");
    let err = toml.parse::<Pipeline>().unwrap_err();
    assert!(err.to_string().contains("duplicate"));
}

#[test]
fn prompts_without_the_placeholder_still_parse() {
    let toml = VALID_PIPELINE.replace("{{input}}", "fixed text");
    let pipeline = toml.parse::<Pipeline>().unwrap();
    assert_eq!(PipelineProvider::agents(&pipeline).len(), 2);
}

#[test]
fn files_load_through_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("review.toml");
    std::fs::write(&path, VALID_PIPELINE).unwrap();

    let pipeline = Pipeline::from_file(&path).unwrap();
    assert_eq!(pipeline.name(), "review");
}

#[test]
fn missing_files_are_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Pipeline::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("read"));
}

#[test]
fn the_standard_pipeline_validates() {
    let pipeline = Pipeline::standard();
    assert!(pipeline.validate().is_ok());

    let agents = PipelineProvider::agents(&pipeline);
    assert_eq!(agents.len(), 3);
    assert_eq!(agents[0].name(), "Summarizer");
    assert_eq!(agents[1].name(), "Style Rewriter");
    assert_eq!(agents[2].name(), "JSON Converter");
    assert!(agents.iter().all(|a| a.user_prompt().contains("{{input}}")));
}
