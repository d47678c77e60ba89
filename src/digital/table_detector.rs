//! Table detection from column alignment in extracted text.
//!
//! Works on the plain-text lines Engine B extracts: cells are separated by
//! runs of two or more spaces, and a table is a run of consecutive lines
//! whose cell start columns align. No graphical line information is used.

use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::model::{Table, TableRow};

/// A cell candidate on one line.
#[derive(Debug, Clone)]
struct CellSpan {
    /// Start column (in characters)
    start: usize,
    /// Trimmed cell text
    text: String,
}

/// Table detector configuration.
#[derive(Debug, Clone)]
pub struct TableDetectorConfig {
    /// Minimum number of rows to consider as table
    pub min_rows: usize,
    /// Minimum number of columns to consider as table
    pub min_columns: usize,
    /// Maximum number of columns (above this, likely word-level splitting)
    pub max_columns: usize,
    /// Minimum fraction of rows a column start must appear in (0.0-1.0)
    pub min_alignment_ratio: f32,
    /// Column bucket width in characters when grouping start positions
    pub bucket_size: usize,
    /// Minimum gap between column starts (characters)
    pub min_column_gap: usize,
}

impl Default for TableDetectorConfig {
    fn default() -> Self {
        Self {
            min_rows: 2,
            min_columns: 2,
            max_columns: 8,
            min_alignment_ratio: 0.5,
            bucket_size: 2,
            min_column_gap: 3,
        }
    }
}

/// Detects tables in extracted plain text.
pub struct TableDetector {
    config: TableDetectorConfig,
    separator: Regex,
}

impl TableDetector {
    /// Create a new table detector with default configuration.
    pub fn new() -> Self {
        Self::with_config(TableDetectorConfig::default())
    }

    /// Create a new table detector with custom configuration.
    pub fn with_config(config: TableDetectorConfig) -> Self {
        Self {
            config,
            // Cell boundaries are runs of 2+ spaces.
            separator: Regex::new(r" {2,}").expect("static pattern"),
        }
    }

    /// Detect tables in the given text.
    ///
    /// Returns detected tables in document order. Rows may have unequal
    /// cell counts; no rectangularity is enforced.
    pub fn detect(&self, text: &str) -> Vec<Table> {
        let mut tables = Vec::new();
        let mut run: Vec<Vec<CellSpan>> = Vec::new();

        for line in text.lines() {
            let spans = self.line_spans(line);
            if spans.len() >= 2 {
                run.push(spans);
            } else {
                self.flush_run(&mut run, &mut tables);
            }
        }
        self.flush_run(&mut run, &mut tables);

        log::debug!("TableDetector: found {} table(s)", tables.len());
        tables
    }

    /// Close the current run of multi-cell lines, emitting a table if the
    /// run passes the alignment gates.
    fn flush_run(&self, run: &mut Vec<Vec<CellSpan>>, tables: &mut Vec<Table>) {
        let rows = std::mem::take(run);
        if rows.len() < self.config.min_rows {
            return;
        }

        let columns = self.detect_columns(&rows);
        if columns.len() < self.config.min_columns {
            log::debug!(
                "TableDetector: skipping run: not enough aligned columns ({} < {})",
                columns.len(),
                self.config.min_columns
            );
            return;
        }
        if columns.len() > self.config.max_columns {
            log::debug!(
                "TableDetector: skipping run: too many columns ({} > {})",
                columns.len(),
                self.config.max_columns
            );
            return;
        }
        if self.is_list_pattern(&rows, columns.len()) {
            log::debug!("TableDetector: skipping run: detected as list pattern");
            return;
        }

        tables.push(self.build_table(&rows, &columns));
    }

    /// Split a line into cell spans at runs of 2+ spaces, recording each
    /// span's start column.
    fn line_spans(&self, line: &str) -> Vec<CellSpan> {
        let mut spans = Vec::new();
        let mut last = 0usize;

        let mut push_segment = |from: usize, to: usize| {
            let segment = &line[from..to];
            let trimmed = segment.trim();
            if trimmed.is_empty() {
                return;
            }
            let leading = segment.len() - segment.trim_start().len();
            // Separators are ASCII spaces, so char columns need counting
            // only once per segment.
            let start = line[..from + leading].chars().count();
            spans.push(CellSpan {
                start,
                text: trimmed.to_string(),
            });
        };

        for sep in self.separator.find_iter(line) {
            if sep.start() > last {
                push_segment(last, sep.start());
            }
            last = sep.end();
        }
        if last < line.len() {
            push_segment(last, line.len());
        }

        spans
    }

    /// Detect column start positions that align across rows.
    fn detect_columns(&self, rows: &[Vec<CellSpan>]) -> Vec<usize> {
        let bucket_size = self.config.bucket_size.max(1);
        let mut edge_counts: HashMap<usize, usize> = HashMap::new();

        for row in rows {
            // Count each bucket once per row.
            let mut row_buckets: HashSet<usize> = HashSet::new();
            for span in row {
                row_buckets.insert(span.start / bucket_size);
            }
            for bucket in row_buckets {
                *edge_counts.entry(bucket).or_insert(0) += 1;
            }
        }

        let min_occurrences =
            ((rows.len() as f32 * self.config.min_alignment_ratio) as usize).max(2);

        let mut edges: Vec<usize> = edge_counts
            .into_iter()
            .filter(|(_, count)| *count >= min_occurrences)
            .map(|(bucket, _)| bucket * bucket_size)
            .collect();
        edges.sort_unstable();

        // Merge edges closer than the minimum column gap.
        let mut merged: Vec<usize> = Vec::new();
        for edge in edges {
            match merged.last() {
                Some(&last) if edge - last < self.config.min_column_gap => {}
                _ => merged.push(edge),
            }
        }

        merged
    }

    /// Assemble the model table, assigning each span to its column.
    fn build_table(&self, rows: &[Vec<CellSpan>], columns: &[usize]) -> Table {
        let mut table = Table::new();

        for row in rows {
            let mut cells = vec![String::new(); columns.len()];
            for span in row {
                let idx = self.column_for(span.start, columns);
                if !cells[idx].is_empty() {
                    cells[idx].push(' ');
                }
                cells[idx].push_str(&span.text);
            }
            table.add_row(TableRow::new(cells));
        }

        table
    }

    /// Rightmost column whose start is at or before the span start (with
    /// bucket-sized tolerance for slightly indented cells).
    fn column_for(&self, start: usize, columns: &[usize]) -> usize {
        let tolerance = self.config.bucket_size;
        let mut index = 0;
        for (i, &column) in columns.iter().enumerate() {
            if start + tolerance >= column {
                index = i;
            } else {
                break;
            }
        }
        index
    }

    /// Check whether the rows actually represent a bulleted or numbered
    /// list. List markers and their text land at two aligned columns and
    /// would otherwise be reported as a two-column table.
    fn is_list_pattern(&self, rows: &[Vec<CellSpan>], column_count: usize) -> bool {
        if column_count < 2 || rows.is_empty() {
            return false;
        }

        let mut bullet_count = 0;
        let mut number_count = 0;

        for row in rows {
            if let Some(first) = row.iter().min_by_key(|span| span.start) {
                if is_bullet_marker(&first.text) {
                    bullet_count += 1;
                } else if is_number_marker(&first.text) {
                    number_count += 1;
                }
            }
        }

        let bullet_ratio = bullet_count as f32 / rows.len() as f32;
        let total_ratio = (bullet_count + number_count) as f32 / rows.len() as f32;

        // Bullet markers are almost never real table data.
        if bullet_ratio >= 0.5 {
            return true;
        }

        // Numbered markers only reject two-column runs, to avoid false
        // negatives on real tables with a numbered first column.
        if column_count == 2 && total_ratio >= 0.5 {
            return true;
        }

        false
    }
}

impl Default for TableDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if text is a bullet marker (•, -, etc.).
fn is_bullet_marker(text: &str) -> bool {
    matches!(
        text.trim(),
        "-" | "–" | "—" | "•" | "·" | "*" | "○" | "▪" | "◦" | "▸" | "▹" | "►" | "■" | "●"
    )
}

/// Check if text is a number-style list marker (1., 2), a., etc.).
fn is_number_marker(text: &str) -> bool {
    let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return false;
    }

    if let Some(pos) = cleaned.find(|c: char| !c.is_ascii_digit()) {
        let prefix = &cleaned[..pos];
        let suffix = &cleaned[pos..];
        if !prefix.is_empty() && (suffix == "." || suffix == ")") {
            return true;
        }
    }

    if cleaned.parse::<u32>().is_ok() {
        return true;
    }

    // Letter marker: "a.", "B)"
    if cleaned.len() == 2 {
        let chars: Vec<char> = cleaned.chars().collect();
        if chars[0].is_alphabetic() && (chars[1] == '.' || chars[1] == ')') {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_simple_table() {
        let detector = TableDetector::new();
        let text = "Name     Age\nAlice    30\nBob      25\n";

        let tables = detector.detect(text);
        assert_eq!(tables.len(), 1);

        let table = &tables[0];
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.rows[0].cells, vec!["Name", "Age"]);
        assert_eq!(table.rows[1].cells, vec!["Alice", "30"]);
        assert_eq!(table.rows[2].cells, vec!["Bob", "25"]);
    }

    #[test]
    fn test_prose_is_not_a_table() {
        let detector = TableDetector::new();
        let text = "This is a paragraph of running text.\nIt continues on a second line.\nAnd a third line without columns.\n";

        assert!(detector.detect(text).is_empty());
    }

    #[test]
    fn test_table_surrounded_by_prose() {
        let detector = TableDetector::new();
        let text = "Quarterly results are shown below.\n\n\
                    Region     Q1     Q2\n\
                    North      10     20\n\
                    South      30     40\n\n\
                    Figures are in thousands.\n";

        let tables = detector.detect(text);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].row_count(), 3);
        assert_eq!(tables[0].column_count(), 3);
        assert_eq!(tables[0].rows[2].cells, vec!["South", "30", "40"]);
    }

    #[test]
    fn test_single_multicell_line_is_not_a_table() {
        let detector = TableDetector::new();
        let text = "Header    Value\njust prose here\n";

        assert!(detector.detect(text).is_empty());
    }

    #[test]
    fn test_numbered_list_not_detected_as_table() {
        let detector = TableDetector::new();
        let text = "1.  Introduction\n2.  Methods\n3.  Results\n4.  Discussion\n";

        assert!(detector.detect(text).is_empty());
    }

    #[test]
    fn test_bullet_list_not_detected_as_table() {
        let detector = TableDetector::new();
        let text = "-  Management\n-  Interface options\n-  Firmware\n";

        assert!(detector.detect(text).is_empty());
    }

    #[test]
    fn test_ragged_table_rows() {
        let detector = TableDetector::new();
        let text = "Item       Price    Notes\nApple      1.00     fresh\nBanana     0.50\n";

        let tables = detector.detect(text);
        assert_eq!(tables.len(), 1);
        // The short row still has three cells, the last one empty.
        assert_eq!(tables[0].rows[2].cells, vec!["Banana", "0.50", ""]);
    }

    #[test]
    fn test_two_tables_separated_by_prose() {
        let detector = TableDetector::new();
        let text = "Name    Role\nAda     Engineer\n\nsome separator prose\n\nCity    Country\nOslo    Norway\n";

        let tables = detector.detect(text);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].rows[0].cells, vec!["Name", "Role"]);
        assert_eq!(tables[1].rows[1].cells, vec!["Oslo", "Norway"]);
    }

    #[test]
    fn test_markers() {
        assert!(is_bullet_marker("•"));
        assert!(is_bullet_marker("-"));
        assert!(!is_bullet_marker("Name"));

        assert!(is_number_marker("1."));
        assert!(is_number_marker("12)"));
        assert!(is_number_marker("7"));
        assert!(is_number_marker("a."));
        assert!(!is_number_marker("Alice"));
        assert!(!is_number_marker(""));
    }
}
