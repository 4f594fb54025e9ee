use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::appointment::Appointment;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Appointment list as a pretty-printed JSON array.
pub(crate) fn export_json(appointments: &[&Appointment], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(appointments)?;
    fs::write(path, json_data)?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Appointment list as CSV, header row derived from the field names.
pub(crate) fn export_csv(appointments: &[&Appointment], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for item in appointments {
        wtr.serialize(item)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Read back a JSON appointment list; dates and times are re-parsed.
pub fn read_json(path: &Path) -> AppResult<Vec<Appointment>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
