//! Schema generator for the proxy event and result shapes.
//!
//! Writes `proxy_schema.json` containing JSON Schemas for the inbound
//! API Gateway REST proxy event and the result handlers return, so the
//! contract can be checked by tooling outside Rust.

use anyhow::{Context, Result};
use samoyed::models::{ApiGatewayProxyEvent, ApiGatewayProxyResult};
use schemars::{JsonSchema, schema_for};
use serde_json::{Value, json};
use std::fs;

const OUTPUT_PATH: &str = "proxy_schema.json";

fn main() -> Result<()> {
    let schemas = json!({
        "event": generate_schema::<ApiGatewayProxyEvent>()?,
        "result": generate_schema::<ApiGatewayProxyResult>()?,
    });

    let json = serde_json::to_string_pretty(&schemas).context("Failed to serialize schema")?;
    fs::write(OUTPUT_PATH, json).with_context(|| format!("Failed to write {OUTPUT_PATH}"))?;

    println!("✅ Generated {OUTPUT_PATH}");
    Ok(())
}

// Generates a schema for the given type, without the `$schema` marker
fn generate_schema<T: JsonSchema>() -> Result<Value> {
    let mut schema = serde_json::to_value(schema_for!(T)).context("Failed to serialize schema")?;

    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$schema");
    }

    Ok(schema)
}
