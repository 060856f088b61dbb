//! Classify one landmark frame

use anyhow::{Context, Result};
use bloom_gesture::GestureClassifier;

use super::load_config;

pub fn run(input: &str, config: Option<&str>) -> Result<()> {
    let config = load_config(config)?;
    let text =
        std::fs::read_to_string(input).with_context(|| format!("reading landmarks {input}"))?;
    // `null` stands for a frame with no hand
    let points: Option<Vec<[f32; 3]>> =
        serde_json::from_str(&text).with_context(|| format!("parsing landmarks {input}"))?;

    let classifier = GestureClassifier::new(config.gesture.classifier);
    let sample = classifier.classify_frame(points.as_deref());

    let palm = sample
        .palm
        .map(|p| serde_json::json!([p.x, p.y]))
        .unwrap_or(serde_json::Value::Null);
    let out = serde_json::json!({
        "kind": sample.kind,
        "extended": sample.extended_count,
        "palm": palm,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
