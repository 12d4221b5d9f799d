use anyhow::Context;
use serde_json::Value;

use crate::{jsonapi, ui::TransformCommand};

/// Reads a JSON document and prints its JSON:API counterpart: flattened by
/// default, nested back into `{type, attributes, relationships}` with `--nest`.
/// Handy for eyeballing payloads while editing templates.
pub async fn transform_document(command: &TransformCommand) -> anyhow::Result<()> {
  let content = tokio::fs::read_to_string(&command.input)
    .await
    .with_context(|| format!("cannot open document: {}", command.input.display()))?;
  let document: Value = serde_json::from_str(&content).context("malformed JSON document")?;

  let transformed = if command.nest {
    jsonapi::normalize(&document)
  } else {
    jsonapi::denormalize(&document)
  };

  println!("{}", serde_json::to_string_pretty(&transformed)?);
  Ok(())
}
