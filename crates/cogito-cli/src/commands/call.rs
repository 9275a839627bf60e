//! One-shot tool invocation

use super::{ctrl_c_token, load_config};
use anyhow::{Context, bail};
use cogito_core::llm::LlmClient;
use cogito_core::tools::ToolRegistry;
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::Arc;

/// Call `tool` once and print the provider's text to stdout
pub async fn run(
    config_file: Option<&Path>,
    tool: &str,
    args: Vec<(String, String)>,
    json: Option<&str>,
) -> anyhow::Result<()> {
    let arguments = build_arguments(args, json)?;

    let config = load_config(config_file, true)?;
    let client = LlmClient::from_config(&config).context("failed to build LLM client")?;
    let registry = ToolRegistry::with_defaults(Arc::new(client));

    let text = registry
        .call(tool, arguments, &ctrl_c_token())
        .await
        .with_context(|| format!("tool '{}' failed", tool))?;
    println!("{}", text);
    Ok(())
}

/// Merge `--json` and `--arg` values into one arguments object.
///
/// Values that parse as unsigned integers become JSON numbers.
fn build_arguments(args: Vec<(String, String)>, json: Option<&str>) -> anyhow::Result<Value> {
    let mut map = match json {
        Some(raw) => match serde_json::from_str::<Value>(raw).context("--json is not valid JSON")? {
            Value::Object(map) => map,
            _ => bail!("--json must be a JSON object"),
        },
        None => Map::new(),
    };

    for (key, value) in args {
        let value = match value.parse::<u64>() {
            Ok(n) => Value::from(n),
            Err(_) => Value::String(value),
        };
        map.insert(key, value);
    }
    Ok(Value::Object(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integers_become_numbers() {
        let args = vec![
            ("problem".to_string(), "Why?".to_string()),
            ("max_steps".to_string(), "4".to_string()),
        ];
        let value = build_arguments(args, None).unwrap();
        assert_eq!(value, json!({ "problem": "Why?", "max_steps": 4 }));
    }

    #[test]
    fn test_args_override_json() {
        let args = vec![("style".to_string(), "bullets".to_string())];
        let value =
            build_arguments(args, Some(r#"{"text":"abc","style":"paragraph"}"#)).unwrap();
        assert_eq!(value, json!({ "text": "abc", "style": "bullets" }));
    }

    #[test]
    fn test_json_must_be_object() {
        assert!(build_arguments(vec![], Some("[1,2]")).is_err());
        assert!(build_arguments(vec![], Some("{broken")).is_err());
    }
}
