use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::ContactsResult;
use crate::import::header_columns;
use crate::model::Contact;

/// Writes the header and one row per contact, comma-delimited, `\n`-terminated.
pub fn write_contacts<W: Write>(writer: W, contacts: &[Contact]) -> ContactsResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(header_columns())?;
    for contact in contacts {
        wtr.write_record(contact.to_row())?;
    }
    wtr.flush()?;
    Ok(())
}

/// `<prefix><unix timestamp>.txt`
pub fn export_filename(prefix: &str, timestamp: i64) -> String {
    format!("{prefix}{timestamp}.txt")
}

/// Exports into `dir` under a timestamped name and returns the file path.
pub fn export_to_dir(dir: &Path, prefix: &str, contacts: &[Contact]) -> ContactsResult<PathBuf> {
    let path = dir.join(export_filename(prefix, Utc::now().timestamp()));
    let file = File::create(&path)?;
    write_contacts(file, contacts)?;
    tracing::info!(path = %path.display(), contacts = contacts.len(), "exported contacts");
    Ok(path)
}
