//! Rows Example
//!
//! Drives a row controller the way a dynamic "contacts" form would:
//! - Add rows at the end and at the front
//! - Duplicate a row along with its values
//! - Drag one row onto another
//! - Remove rows and watch their values disappear from the store
//!
//! Mutations are logged to `rows.log`.

use std::fs::File;
use std::sync::Arc;

use log::LevelFilter;
use rowform::prelude::*;
use serde_json::{Value, json};
use simplelog::{Config, WriteLogger};

fn print_form(rows: &Rows<MemoryFormStore<String, Value>>) {
    let values = rows.store().snapshot();
    println!("revision {} (dirty: {})", rows.revision(), rows.is_dirty());
    for (index, row) in rows.rows().iter().enumerate() {
        let value = values.get(row).cloned().unwrap_or(Value::Null);
        println!("  {index}. {row}: {value}");
    }
}

fn main() {
    // Initialize file logging
    if let Ok(log_file) = File::create("rows.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let store = Arc::new(MemoryFormStore::with_values(vec![
        ("ada".to_string(), json!({ "name": "Ada", "phone": "555-0100" })),
        ("alan".to_string(), json!({ "name": "Alan", "phone": "555-0199" })),
    ]));
    let rows = Rows::with_config(
        RowFactory::sequential("contact-"),
        Arc::clone(&store),
        Some(vec!["ada".to_string(), "alan".to_string()]),
        RowsConfig::new("contacts"),
    );
    print_form(&rows);

    let blank = rows.push();
    rows.unshift(None, Some(json!({ "name": "Grace" })));
    let twin = rows.copy(&"ada".to_string(), None, None);
    println!("added {blank}, copied ada to {twin}");
    print_form(&rows);

    rows.drag(&blank, &"ada".to_string());
    rows.remove(&"alan".to_string());
    if let Err(e) = rows.move_row(0, 10) {
        println!("move rejected: {e}");
    }
    print_form(&rows);
}
