//! JSON output formatter

use quillint_core::FileReport;

pub fn output_json(reports: &[FileReport]) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(reports)?);
    Ok(())
}
