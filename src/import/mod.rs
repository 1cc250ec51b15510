use std::collections::HashSet;
use std::path::Path;

use crate::error::{ContactsError, ContactsResult};
use crate::model::{Contact, ContactId, Field, IdSource};

/// Header line written on export and skipped on import.
pub const HEADER: &str = "ID,FIRST_NAME,LAST_NAME,PHONE_NUMBER,EMAIL,COMPANY,TITLE,RELATIONSHIP";

/// Data line without an ID column.
const SHORT_ROW: usize = 7;
/// Data line with the ID in the first column.
const FULL_ROW: usize = 8;

/// Column names in file order, `ID` first.
pub fn header_columns() -> Vec<&'static str> {
    std::iter::once("ID")
        .chain(Field::ALL.iter().map(|f| f.column_name()))
        .collect()
}

/// A line dropped because it had the wrong number of fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based.
    pub line_number: usize,
    pub field_count: usize,
}

#[derive(Debug, Default)]
pub struct ImportReport {
    pub contacts: Vec<Contact>,
    pub rejected: Vec<RejectedLine>,
    pub lines_read: usize,
    /// Lines identical to an earlier line, ID column included.
    pub duplicates_dropped: usize,
    /// 1-based numbers of rows without an ID that were dropped because no
    /// free ID was left to give them.
    pub unassigned: Vec<usize>,
}

/// Splits one comma-delimited line into fields. Quoted fields may contain
/// commas. An empty line has no fields.
pub fn parse_line(line: &str) -> ContactsResult<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(record) => Ok(record?.iter().map(str::to_string).collect()),
        None => Ok(Vec::new()),
    }
}

/// Two raw lines are the same import row only if every field matches
/// exactly, ID included. This is the equality the import's dedup set uses.
/// Compare [`Contact::is_semantic_duplicate`], which ignores the ID.
pub fn is_structurally_identical_line(a: &[String], b: &[String]) -> bool {
    a == b
}

/// Turns raw lines into contacts.
///
/// Lines with the wrong field count are reported and skipped, exact repeats
/// are dropped, and rows without an ID get one that collides neither with
/// an ID given anywhere in the batch nor with one generated earlier in it.
/// A row that cannot get an ID because the ID space is full is listed in
/// `unassigned`; the rest of the batch is still imported.
/// Field values are not validated here; see `contact_ops::admit_import`.
pub fn import_lines<I, S>(
    lines: I,
    ids: &mut dyn IdSource,
    max_attempts: usize,
) -> ContactsResult<ImportReport>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = ImportReport::default();
    let mut in_use: HashSet<ContactId> = HashSet::new();
    let mut seen: HashSet<Vec<String>> = HashSet::new();
    let mut rows: Vec<(usize, Vec<String>)> = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let line_number = index + 1;
        report.lines_read += 1;

        if line == HEADER {
            continue;
        }

        let fields = parse_line(line)?;
        match fields.len() {
            SHORT_ROW => {}
            FULL_ROW => {
                in_use.insert(ContactId::from_raw(&fields[0]));
            }
            field_count => {
                tracing::warn!(
                    line = line_number,
                    fields = field_count,
                    "invalid number of fields, line not imported"
                );
                report.rejected.push(RejectedLine {
                    line_number,
                    field_count,
                });
                continue;
            }
        }

        if seen.insert(fields.clone()) {
            rows.push((line_number, fields));
        } else {
            report.duplicates_dropped += 1;
        }
    }

    for (line_number, fields) in rows {
        let contact = if fields.len() == SHORT_ROW {
            let id = match ContactId::generate(ids, &in_use, max_attempts) {
                Ok(id) => id,
                Err(ContactsError::IdSpaceExhausted { max }) => {
                    tracing::warn!(
                        line = line_number,
                        max,
                        "no free contact id, line not imported"
                    );
                    report.unassigned.push(line_number);
                    continue;
                }
                Err(e) => return Err(e),
            };
            in_use.insert(id.clone());
            Contact::from_values(id.as_str(), fields.as_slice())
        } else {
            Contact::from_values(&fields[0], &fields[1..])
        };
        report.contacts.push(contact);
    }

    tracing::info!(
        lines = report.lines_read,
        contacts = report.contacts.len(),
        rejected = report.rejected.len(),
        duplicates = report.duplicates_dropped,
        unassigned = report.unassigned.len(),
        "import parsed"
    );
    Ok(report)
}

/// Reads a `.txt` or `.csv` file and runs [`import_lines`] over it.
pub fn import_file(
    path: &Path,
    ids: &mut dyn IdSource,
    max_attempts: usize,
) -> ContactsResult<ImportReport> {
    if !has_supported_extension(path) {
        return Err(ContactsError::UnsupportedFile {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    let report = import_lines(content.lines(), ids, max_attempts)?;
    tracing::info!("Read {} lines in file: {}", report.lines_read, path.display());
    Ok(report)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("txt") || ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}
