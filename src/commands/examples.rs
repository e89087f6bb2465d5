use crate::OutputFormat;
use crate::catalog;
use anyhow::{Context, Result};

/// Print the built-in examples catalog.
pub fn list(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(catalog::all())
                .context("Failed to serialize catalog")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("{:<18} {:<38} {:<22}", "ID", "Title", "Type");
            println!("{}", "-".repeat(78));
            for example in catalog::all() {
                println!(
                    "{:<18} {:<38} {:<22}",
                    example.id, example.title, example.doc_type
                );
                println!("  {}", example.description);
            }
            println!("\nLoad one with 'docchat example load <ID>'.");
        }
    }
    Ok(())
}
