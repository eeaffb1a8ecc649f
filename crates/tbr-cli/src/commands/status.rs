//! Status command handler

use anyhow::Result;

use tbr_core::{Status, Store};

use crate::output::{Output, OutputFormat};

/// Show status information
pub fn show(store: &Store, output: &Output) -> Result<()> {
    let config = store.config();
    let snapshot_path = config.snapshot_path();
    let snapshot_size = std::fs::metadata(&snapshot_path).map(|m| m.len()).ok();

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "snapshot": {
                        "path": snapshot_path,
                        "exists": snapshot_path.exists(),
                        "size": snapshot_size
                    },
                    "counts": {
                        "total": store.book_count(),
                        "reading": store.shelf_count(Status::Reading),
                        "later": store.shelf_count(Status::Later),
                        "done": store.shelf_count(Status::Done)
                    }
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", store.book_count());
        }
        OutputFormat::Human => {
            println!("TBR Status");
            println!("==========");
            println!();
            println!("Storage:");
            println!("  Location: {}", config.data_dir.display());
            println!(
                "  Snapshot: {} ({})",
                snapshot_path.display(),
                match snapshot_size {
                    Some(size) => format!("{} bytes", size),
                    None => "not written yet".to_string(),
                }
            );
            println!();
            println!("Shelves:");
            for status in Status::ALL {
                println!(
                    "  {:<17} {}",
                    format!("{}:", status.heading()),
                    store.shelf_count(status)
                );
            }
            println!("  {:<17} {}", "Total:", store.book_count());
        }
    }

    Ok(())
}
