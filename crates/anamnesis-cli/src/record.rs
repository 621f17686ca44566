//! Patient records stored as JSON files.

use std::path::Path;

use eyre::WrapErr;

use anamnesis_core::models::patient::PatientHistory;
use anamnesis_scoring::reorder;

/// Read a record. The socio-economic tier and the complaint order are
/// re-derived on load, so every command sees the same record.
pub fn load_record(path: &Path) -> eyre::Result<PatientHistory> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read record at {}", path.display()))?;
    let mut history = PatientHistory::from_json(&contents)
        .wrap_err_with(|| format!("{} is not a valid patient record", path.display()))?;
    history.chief_complaints = reorder(&history.chief_complaints);
    Ok(history)
}

/// Write a record. Refuses to replace an existing file unless `overwrite`.
pub fn save_record(path: &Path, history: &PatientHistory, overwrite: bool) -> eyre::Result<()> {
    if path.exists() && !overwrite {
        return Err(eyre::eyre!(
            "{} already exists (use --force to replace it)",
            path.display()
        ));
    }
    let json = history.to_json()?;
    std::fs::write(path, json.as_bytes())
        .wrap_err_with(|| format!("failed to write record at {}", path.display()))?;
    tracing::info!(path = %path.display(), "record saved");
    Ok(())
}
