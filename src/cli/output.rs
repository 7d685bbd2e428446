use std::fmt::Write;

use serde_json::{json, Value};

use crate::batch::BatchEntry;
use crate::models::{Extracted, OutputFormat};

/// Render the batch results in the requested format.
///
/// Text output only covers files that were described; failures are
/// reported separately. JSON output has one element per input, with
/// failures as `{"path", "error"}` objects.
pub fn render(entries: &[BatchEntry], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(entries)),
        OutputFormat::Json => render_json(entries),
    }
}

fn render_text(entries: &[BatchEntry]) -> String {
    let mut out = String::new();
    let described = entries.iter().filter_map(|entry| entry.result.as_ref().ok());
    for (i, extracted) in described.enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match extracted {
            Extracted::Single(descriptor) => {
                let _ = writeln!(out, "{}", descriptor);
            }
            Extracted::Collection(descriptors) => {
                let total = descriptors.len();
                for (index, descriptor) in descriptors.iter().enumerate() {
                    if index > 0 {
                        out.push('\n');
                    }
                    let _ = writeln!(out, "# font {} of {}", index + 1, total);
                    let _ = writeln!(out, "{}", descriptor);
                }
            }
        }
    }
    out
}

fn render_json(entries: &[BatchEntry]) -> serde_json::Result<String> {
    let values = entries
        .iter()
        .map(|entry| match &entry.result {
            Ok(extracted) => serde_json::to_value(extracted),
            Err(err) => Ok(json!({
                "path": entry.input.display().to_string(),
                "error": err.to_string(),
            })),
        })
        .collect::<serde_json::Result<Vec<Value>>>()?;
    serde_json::to_string_pretty(&values)
}
