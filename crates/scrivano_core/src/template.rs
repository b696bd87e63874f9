//! Placeholder substitution for templates and agent prompts.
//!
//! Templates mark substitution points with `{{name}}` tokens. Rendering is a
//! single pass over the input: substituted values are never re-scanned, so a
//! value that itself contains `{{...}}` text is emitted verbatim. Keys absent
//! from the context are left in place as literal `{{name}}` text so missing
//! columns stay visible instead of silently blanking out.

use crate::DatasetRecord;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("placeholder pattern is valid"));

/// Substitute `{{key}}` placeholders in `template` with values from `context`.
///
/// The same key may appear any number of times. Unknown keys are re-emitted
/// unchanged.
///
/// # Examples
///
/// ```
/// use scrivano_core::template::render;
/// use std::collections::HashMap;
///
/// let context = HashMap::from([("name".to_string(), "Ann".to_string())]);
/// assert_eq!(render("Hello {{name}}", &context), "Hello Ann");
/// assert_eq!(render("{{missing}}", &context), "{{missing}}");
/// ```
pub fn render(template: &str, context: &HashMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| match context.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Render a template against one dataset record.
///
/// Scalars are coerced to their display form before substitution.
pub fn render_record(template: &str, record: &DatasetRecord) -> String {
    let context: HashMap<String, String> = record
        .iter()
        .map(|(key, value)| (key.clone(), value.to_string()))
        .collect();
    render(template, &context)
}

/// Render an agent prompt, substituting the special `input` key only.
pub fn render_with_input(template: &str, input: &str) -> String {
    let context = HashMap::from([("input".to_string(), input.to_string())]);
    render(template, &context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scalar;

    #[test]
    fn text_without_placeholders_is_unchanged() {
        let context = HashMap::from([("name".to_string(), "Ann".to_string())]);
        assert_eq!(render("plain text, no tokens", &context), "plain text, no tokens");
    }

    #[test]
    fn covering_context_leaves_no_placeholders() {
        let context = HashMap::from([
            ("name".to_string(), "Ann".to_string()),
            ("city".to_string(), "Oslo".to_string()),
        ]);
        let rendered = render("{{name}} lives in {{city}}", &context);
        assert_eq!(rendered, "Ann lives in Oslo");
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn missing_key_is_left_as_literal_text() {
        assert_eq!(render("{{missing}}", &HashMap::new()), "{{missing}}");
    }

    #[test]
    fn repeated_keys_substitute_every_occurrence() {
        let context = HashMap::from([("x".to_string(), "a".to_string())]);
        assert_eq!(render("{{x}}-{{x}}-{{x}}", &context), "a-a-a");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        // A value containing placeholder syntax must come through verbatim;
        // rendering is one pass, not applied to its own output.
        let context = HashMap::from([
            ("a".to_string(), "{{b}}".to_string()),
            ("b".to_string(), "boom".to_string()),
        ]);
        assert_eq!(render("{{a}}", &context), "{{b}}");
    }

    #[test]
    fn record_scalars_coerce_to_display_form() {
        let record = DatasetRecord::from([
            ("n".to_string(), Scalar::Number(3.0)),
            ("ok".to_string(), Scalar::Bool(false)),
        ]);
        assert_eq!(render_record("{{n}} {{ok}}", &record), "3 false");
    }

    #[test]
    fn input_rendering_touches_only_the_input_key() {
        let rendered = render_with_input("{{input}} and {{other}}", "hi");
        assert_eq!(rendered, "hi and {{other}}");
    }
}
