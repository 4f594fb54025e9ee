use crate::core::store::AppointmentStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json, read_json};
use crate::export::range::parse_range;
use crate::models::appointment::Appointment;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

/// High level export / import of appointment lists.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `appointments` to `file`.
    ///
    /// `range`: `None`, `"all"` or a `YYYY[-MM[-DD]][:YYYY[-MM[-DD]]]` expression
    /// restricting by appointment date. Returns the number of rows written.
    pub fn export(
        appointments: &[&Appointment],
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let selected: Vec<&Appointment> = appointments
            .iter()
            .copied()
            .filter(|a| bounds.is_none_or(|(from, to)| a.date >= from && a.date <= to))
            .collect();

        if selected.is_empty() {
            warning("No appointments found for selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&selected, path)?,
            ExportFormat::Json => export_json(&selected, path)?,
        }

        Ok(selected.len())
    }

    /// Append appointments from a JSON export, skipping ids already present.
    /// Returns `(imported, skipped)`.
    pub fn import(store: &mut AppointmentStore, file: &str) -> AppResult<(usize, usize)> {
        let incoming = read_json(Path::new(file))?;

        let mut imported = 0;
        let mut skipped = 0;
        for a in incoming {
            if store.get(&a.id).is_some() {
                skipped += 1;
            } else {
                store.add(a);
                imported += 1;
            }
        }

        Ok((imported, skipped))
    }
}
