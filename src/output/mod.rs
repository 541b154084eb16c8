// src/output/mod.rs
use std::io::Write;

use crate::models::MasterData;
use crate::utils::error::OutputError;

/// Writes the master data as 2-space indented JSON followed by a newline.
/// Non-ASCII text is written as-is.
pub fn write_master_data<W: Write>(data: &MasterData, mut writer: W) -> Result<(), OutputError> {
    serde_json::to_writer_pretty(&mut writer, data)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    tracing::info!(
        "Wrote {} events and {} entries",
        data.events.len(),
        data.entries.len()
    );
    Ok(())
}
