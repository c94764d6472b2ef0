use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;
use umya_spreadsheet::{Spreadsheet, Worksheet, XlsxError};

use crate::entry::Entry;

/// Name of the single worksheet holding the data
pub const SHEET_NAME: &str = "Data";

/// Column headers, written bold on row 1
const HEADER: [&str; 2] = ["Name", "Priority"];

/// First row containing entry data (row 1 is the header)
const FIRST_DATA_ROW: u32 = 2;

/// Errors from the workbook store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The workbook could not be written back to disk
    #[error("failed to write workbook {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: XlsxError,
    },
}

/// Workbook-backed row store.
///
/// Holds the whole spreadsheet in memory and rewrites the file on every
/// `persist`. Row-level operations mutate the in-memory workbook only;
/// nothing reaches disk until `persist` is called.
pub struct WorkbookStore {
    book: Spreadsheet,
    path: PathBuf,
}

impl WorkbookStore {
    /// Open the workbook at `path`, or start from an empty one if the file
    /// is missing or unreadable. Ensures the `Data` sheet exists with its
    /// bold header row. Never fails.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let book = match umya_spreadsheet::reader::xlsx::read(path.as_path()) {
            Ok(book) => book,
            Err(err) => {
                warn!(
                    "workbook {} not readable ({}), starting with an empty one",
                    path.display(),
                    err
                );
                let mut book = umya_spreadsheet::new_file();
                if let Some(sheet) = book.get_sheet_mut(&0) {
                    sheet.set_name(SHEET_NAME);
                }
                book
            }
        };

        let mut store = Self { book, path };
        store.ensure_sheet();
        store
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_sheet(&mut self) {
        if self.book.get_sheet_by_name(SHEET_NAME).is_none() {
            // Only fails on duplicate sheet names, which the check rules out
            let _ = self.book.new_sheet(SHEET_NAME);
        }
        if let Some(sheet) = self.book.get_sheet_by_name_mut(SHEET_NAME) {
            for (idx, title) in HEADER.iter().enumerate() {
                let cell = sheet.get_cell_mut((idx as u32 + 1, 1u32));
                cell.set_value(*title);
                cell.get_style_mut().get_font_mut().set_bold(true);
            }
        }
    }

    fn sheet(&self) -> Option<&Worksheet> {
        self.book.get_sheet_by_name(SHEET_NAME)
    }

    fn sheet_mut(&mut self) -> Option<&mut Worksheet> {
        self.book.get_sheet_by_name_mut(SHEET_NAME)
    }

    /// Read every entry from the data rows, in worksheet order.
    ///
    /// Rows with an empty name cell are skipped. Returns an empty list if
    /// the sheet is missing.
    pub fn read_all(&self) -> Vec<Entry> {
        let Some(sheet) = self.sheet() else {
            warn!(
                "sheet '{}' missing from {}, returning no entries",
                SHEET_NAME,
                self.path.display()
            );
            return Vec::new();
        };

        let mut entries = Vec::new();
        for row in FIRST_DATA_ROW..=sheet.get_highest_row() {
            let name = sheet.get_value((1, row));
            if name.is_empty() {
                continue;
            }
            let priority = sheet.get_value((2, row));
            entries.push(Entry { name, priority });
        }
        entries
    }

    /// Append one entry as a new row after the current highest row
    pub fn append(&mut self, entry: &Entry) {
        let Some(sheet) = self.sheet_mut() else {
            return;
        };
        let row = sheet.get_highest_row() + 1;
        sheet.get_cell_mut((1, row)).set_value(entry.name.as_str());
        sheet
            .get_cell_mut((2, row))
            .set_value(entry.priority.as_str());
    }

    /// Overwrite every row whose name cell equals `key` with `entry`.
    /// Returns the number of rows updated.
    pub fn update_rows(&mut self, key: &str, entry: &Entry) -> usize {
        let Some(sheet) = self.sheet_mut() else {
            return 0;
        };
        let mut updated = 0;
        for row in FIRST_DATA_ROW..=sheet.get_highest_row() {
            if sheet.get_value((1, row)) == key {
                sheet.get_cell_mut((1, row)).set_value(entry.name.as_str());
                sheet
                    .get_cell_mut((2, row))
                    .set_value(entry.priority.as_str());
                updated += 1;
            }
        }
        updated
    }

    /// Row numbers of every data row whose name cell equals `key`
    pub fn rows_matching(&self, key: &str) -> Vec<u32> {
        let Some(sheet) = self.sheet() else {
            return Vec::new();
        };
        (FIRST_DATA_ROW..=sheet.get_highest_row())
            .filter(|row| sheet.get_value((1, *row)) == key)
            .collect()
    }

    /// Remove the given rows, highest index first so pending row numbers
    /// are not shifted by earlier removals.
    pub fn delete_rows(&mut self, mut rows: Vec<u32>) {
        let Some(sheet) = self.sheet_mut() else {
            return;
        };
        rows.sort_unstable();
        for row in rows.into_iter().rev() {
            sheet.remove_row(&row, &1);
        }
    }

    /// Serialize the whole workbook back to the backing file, overwriting it
    pub fn persist(&self) -> Result<(), StoreError> {
        umya_spreadsheet::writer::xlsx::write(&self.book, self.path.as_path()).map_err(|source| {
            StoreError::Write {
                path: self.path.clone(),
                source,
            }
        })
    }
}
