//! Simple decoder to inspect EU4 save metadata.
//!
//! Accepts either a `.eu4` save container or a raw `meta` blob.

use std::fs;

use eu4_meta::{decode_date, read_meta, scan, Value};

fn format_value(v: &Value) -> String {
    match v {
        Value::Control(c) => format!("{:?}", c),
        Value::Id(name) => format!("ID({})", name),
        Value::String(s) => {
            let preview: String = s.chars().take(80).collect();
            if s.chars().count() > 80 {
                format!("\"{}...\"", preview)
            } else {
                format!("\"{}\"", preview)
            }
        }
        Value::Integer(i) => format!("{}", i),
        Value::Boolean(b) => format!("{}", b),
        Value::Float(f) => format!("{:.3}", f),
        Value::WideFloat(f) => format!("{:.5}", f),
    }
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "autosave.eu4".to_string());

    println!("Reading: {}", path);

    let data = match read_meta(&path) {
        Ok(meta) => meta,
        Err(_) => fs::read(&path).expect("Failed to read file"),
    };
    println!("Meta size: {} bytes", data.len());

    match decode_date(&data) {
        Ok(date) => println!("Date: {}", date),
        Err(e) => println!("Date: <{}>", e),
    }

    println!("\n=== First 40 Tokens ===");
    for item in scan(&data).take(40) {
        match item {
            Ok(t) => println!("[{:>6}] {:<16} {}", t.position, t.token.to_string(), format_value(&t.value)),
            Err(e) => {
                println!("error: {}", e);
                break;
            }
        }
    }
}
