//! `canary-piet snapshot` — collect one snapshot and print it.

use anyhow::{bail, Result};
use colored::Colorize;
use serde_json::{Map, Value};

use crate::config::LogFormat;
use crate::domain::collector::SnapshotCollector;
use crate::server::init_tracing;

/// Section key and heading, in print order.
const SECTIONS: &[(&str, &str)] = &[
    ("platform", "Platform"),
    ("resources", "Resources"),
    ("network", "Network"),
    ("kubernetes", "Kubernetes"),
    ("environment", "Environment"),
];

pub fn run(format: &str) -> Result<()> {
    if !matches!(format, "table" | "json") {
        bail!("unknown format '{}' (expected 'table' or 'json')", format);
    }

    // Degraded readers still show up as warnings on stderr
    init_tracing("warn", LogFormat::Pretty);

    let rt = tokio::runtime::Runtime::new()?;
    let snapshot = rt.block_on(SnapshotCollector::live().collect(None));
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        _ => print_table(&serde_json::to_value(&snapshot)?),
    }
    Ok(())
}

fn print_table(snapshot: &Value) {
    println!("{}", "═══ Canary Piet ═══".cyan().bold());
    println!(
        "  Hostname:  {}",
        snapshot["hostname"].as_str().unwrap_or_default().bold()
    );
    println!(
        "  Collected: {}",
        snapshot["timestamp"].as_str().unwrap_or_default()
    );

    for (key, title) in SECTIONS {
        if let Some(section) = snapshot[*key].as_object() {
            println!();
            println!("{}", format!("── {} ──", title).yellow());
            print_entries(section);
        }
    }
}

fn print_entries(section: &Map<String, Value>) {
    let width = section.keys().map(|k| k.len()).max().unwrap_or(0) + 1;
    for (key, value) in section {
        let label = format!("{:<width$}", format!("{}:", key));
        let text = value_text(value);
        if key == "Error" {
            println!("  {} {}", label.red(), text.red());
        } else {
            println!("  {} {}", label, text);
        }
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_format_is_rejected_before_collection() {
        let err = run("yaml").unwrap_err();
        assert!(err.to_string().contains("unknown format"));
    }

    #[test]
    fn strings_print_without_quotes() {
        assert_eq!(value_text(&Value::String("4.00 GB".into())), "4.00 GB");
        assert_eq!(value_text(&Value::Bool(true)), "true");
    }
}
