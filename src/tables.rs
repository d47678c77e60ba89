//! Table serialization to CSV.
//!
//! Rows are written as comma-delimited records; after each table's rows,
//! exactly one blank record separates it from the next. An empty table
//! list produces a file with zero bytes of table content.

use std::fs;
use std::path::Path;

use csv::WriterBuilder;

use crate::error::Result;
use crate::model::Table;

/// Serialize tables to a CSV file at `path`.
///
/// The content is assembled in memory and written in a single operation,
/// so an I/O failure never leaves partially-written table content behind.
///
/// # Errors
///
/// Returns [`crate::Error::TableSerialize`] on encoding failure or
/// [`crate::Error::Io`] on write failure. Callers treat either as fatal
/// for the table artifact only; the text result stays valid.
///
/// # Example
/// ```no_run
/// use docutext::model::Table;
/// use docutext::tables::serialize_tables;
///
/// let tables = vec![Table::from_rows([vec!["a", "b"], vec!["c", "d"]])];
/// serialize_tables(&tables, "out_tables.csv").unwrap();
/// ```
pub fn serialize_tables<P: AsRef<Path>>(tables: &[Table], path: P) -> Result<()> {
    let bytes = serialize_tables_to_vec(tables)?;
    fs::write(&path, bytes)?;
    log::debug!(
        "wrote {} table(s) to {}",
        tables.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Serialize tables to CSV bytes.
pub fn serialize_tables_to_vec(tables: &[Table]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();

    for table in tables {
        {
            // Rows may have unequal lengths.
            let mut writer = WriterBuilder::new().flexible(true).from_writer(&mut buffer);
            for row in &table.rows {
                writer.write_record(&row.cells)?;
            }
            writer.flush()?;
        }
        // One blank record after each table.
        buffer.push(b'\n');
    }

    Ok(buffer)
}
