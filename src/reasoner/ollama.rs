//! Commonsense reasoning via a local Ollama model.
//!
//! Runs `ollama run <model>` as a subprocess, feeds the judgment prompt on
//! stdin and extracts the first brace-delimited JSON object from stdout.
//! Every failure mode (binary missing, spawn failure, timeout, exit
//! status, no JSON, unparseable JSON) collapses to [`Judgment::fallback`].

use async_trait::async_trait;
use serde::Deserialize;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::verdict::BiasType;

use super::{CommonsenseReasoner, Judgment, JudgmentVerdict};

/// Configuration for the Ollama reasoner.
#[derive(Debug, Clone)]
pub struct ReasonerConfig {
    /// Model name passed to `ollama run`
    pub model: String,
    /// Hard bound on one judgment call
    pub timeout: Duration,
}

impl Default for ReasonerConfig {
    fn default() -> Self {
        Self {
            model: "llama3".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ReasonerConfig {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Local Ollama-backed commonsense reasoner.
pub struct OllamaReasoner {
    config: ReasonerConfig,
}

/// Raw engine response; fields default so a partially well-formed object
/// still yields a usable judgment.
#[derive(Debug, Deserialize)]
struct RawJudgment {
    #[serde(default)]
    verdict: JudgmentVerdict,
    #[serde(default)]
    reasoning: String,
    #[serde(default)]
    corrected_statement: Option<String>,
    #[serde(default)]
    bias: Option<String>,
    #[serde(default)]
    bias_type: Option<BiasType>,
}

fn judgment_prompt(statement: &str) -> String {
    format!(
        r#"You are an expert fact checker and bias analyst.

Judge the following statement using common sense and general world knowledge.

Rules:
- Ignore rare edge cases unless explicitly stated.
- Be conservative and realistic.
- If generally false, verdict = false
- If generally true, verdict = true
- If partially true or context-dependent, verdict = misleading
- If cannot be judged, verdict = unverifiable

Bias rules:
- If the statement stereotypes or unfairly generalizes a group, bias = yes
- Otherwise, bias = no
- If bias = yes, choose ONE bias_type from:
  gender, social, racial, ethical, political

Respond ONLY in valid JSON with EXACTLY these fields:
- verdict
- reasoning
- corrected_statement
- bias
- bias_type

Statement:
"{}"
"#,
        statement
    )
}

/// Slice out the first brace-delimited JSON object in model output. Models
/// often wrap the object in prose or code fences.
fn extract_json_block(output: &str) -> Option<&str> {
    let start = output.find('{')?;
    let end = output.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&output[start..=end])
}

fn parse_judgment(statement: &str, raw_output: &str) -> Result<Judgment> {
    let json_text = extract_json_block(raw_output)
        .ok_or_else(|| Error::Reasoner("no JSON object in engine output".to_string()))?;

    let raw: RawJudgment = serde_json::from_str(json_text)?;

    Ok(Judgment {
        verdict: raw.verdict,
        reasoning: raw.reasoning,
        corrected_statement: raw
            .corrected_statement
            .unwrap_or_else(|| statement.to_string()),
        bias: raw.bias.as_deref() == Some("yes"),
        bias_type: raw.bias_type.unwrap_or(BiasType::None),
    }
    .normalized())
}

impl OllamaReasoner {
    pub fn new(config: ReasonerConfig) -> Self {
        Self { config }
    }

    /// Whether the `ollama` binary is on PATH. Useful for choosing a
    /// different reasoner at startup; the judge call itself degrades
    /// gracefully either way.
    pub fn is_available() -> bool {
        which::which("ollama").is_ok()
    }

    async fn run_engine(&self, statement: &str) -> Result<Judgment> {
        let mut child = Command::new("ollama")
            .arg("run")
            .arg(&self.config.model)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::SubprocessComm(format!("failed to spawn ollama: {}", e)))?;

        let prompt = judgment_prompt(statement);
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(prompt.as_bytes())
                .await
                .map_err(|e| Error::SubprocessComm(format!("failed to write prompt: {}", e)))?;
            // Dropping stdin closes the pipe so the model knows input ended.
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| Error::SubprocessComm(format!("failed to read ollama output: {}", e)))?;

        if !output.status.success() {
            return Err(Error::Reasoner(format!(
                "ollama exited with status {}",
                output.status
            )));
        }

        let raw_output = String::from_utf8_lossy(&output.stdout);
        debug!(model = %self.config.model, "ollama raw output: {}", raw_output.trim());

        parse_judgment(statement, raw_output.trim())
    }
}

#[async_trait]
impl CommonsenseReasoner for OllamaReasoner {
    async fn judge(&self, statement: &str) -> Judgment {
        let bounded = tokio::time::timeout(self.config.timeout, self.run_engine(statement));

        match bounded.await {
            Ok(Ok(judgment)) => judgment,
            Ok(Err(e)) => {
                warn!(error = %e, "commonsense reasoner failed, using fallback judgment");
                Judgment::fallback(statement)
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.config.timeout.as_millis() as u64,
                    "commonsense reasoner timed out, using fallback judgment"
                );
                Judgment::fallback(statement)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_json_block_with_surrounding_prose() {
        let output = "Sure! Here is my judgment:\n{\"verdict\": \"false\"}\nHope that helps.";
        assert_eq!(extract_json_block(output), Some("{\"verdict\": \"false\"}"));
    }

    #[test]
    fn test_extract_json_block_missing() {
        assert_eq!(extract_json_block("no json here"), None);
        assert_eq!(extract_json_block("} reversed {"), None);
    }

    #[test]
    fn test_parse_full_judgment() {
        let raw = r#"{
            "verdict": "false",
            "reasoning": "Norway is wealthy.",
            "corrected_statement": "Norway is one of the richest countries.",
            "bias": "no",
            "bias_type": "none"
        }"#;
        let judgment = parse_judgment("Norway is the poorest country", raw).unwrap();
        assert_eq!(judgment.verdict, JudgmentVerdict::False);
        assert_eq!(
            judgment.corrected_statement,
            "Norway is one of the richest countries."
        );
        assert!(!judgment.bias);
    }

    #[test]
    fn test_parse_defaults_missing_fields() {
        let judgment = parse_judgment("some claim", "{}").unwrap();
        assert_eq!(judgment.verdict, JudgmentVerdict::Unverifiable);
        assert_eq!(judgment.corrected_statement, "some claim");
        assert!(!judgment.bias);
        assert_eq!(judgment.bias_type, BiasType::None);
    }

    #[test]
    fn test_parse_forces_bias_type_none_when_bias_is_no() {
        let raw = r#"{"verdict": "true", "bias": "no", "bias_type": "gender"}"#;
        let judgment = parse_judgment("x", raw).unwrap();
        assert_eq!(judgment.bias_type, BiasType::None);
    }

    #[test]
    fn test_parse_keeps_bias_type_when_bias_is_yes() {
        let raw = r#"{"verdict": "misleading", "bias": "yes", "bias_type": "racial"}"#;
        let judgment = parse_judgment("x", raw).unwrap();
        assert!(judgment.bias);
        assert_eq!(judgment.bias_type, BiasType::Racial);
    }

    #[test]
    fn test_parse_rejects_non_json_output() {
        assert!(parse_judgment("x", "I think this is false.").is_err());
    }

    #[tokio::test]
    async fn test_judge_never_fails_outward() {
        // Point at a model name that cannot exist; whether ollama is
        // installed or not, the call must resolve to the fallback.
        let reasoner = OllamaReasoner::new(
            ReasonerConfig::default()
                .with_model("definitely-not-a-real-model-xyz")
                .with_timeout(Duration::from_millis(500)),
        );
        let judgment = reasoner.judge("The moon is made of cheese").await;
        // Either a timeout, spawn failure or engine error; all collapse to
        // the same safe shape.
        if judgment.verdict == JudgmentVerdict::Unverifiable {
            assert_eq!(judgment.corrected_statement, "The moon is made of cheese");
        }
    }
}
