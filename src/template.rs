use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use calamine::{Data, Reader, open_workbook_auto};
use regex::Regex;
use umya_spreadsheet::Style;
use umya_spreadsheet::structs::HorizontalAlignmentValues;

use crate::error::{ReportError, Result};

const MAX_COLUMN: u32 = 16_384;
const MAX_ROW: u32 = 1_048_576;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[A-Za-z][A-Za-z0-9_]*$").expect("valid regex"));

/// 1-based cell coordinates. Ordering is row-major, which is document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    pub row: u32,
    pub column: u32,
}

fn column_number_to_name(mut column: u32) -> String {
    // 1 -> A, 26 -> Z, 27 -> AA ...
    let mut name = String::new();
    while column > 0 {
        let rem = ((column - 1) % 26) as u8;
        name.insert(0, (b'A' + rem) as char);
        column = (column - 1) / 26;
    }
    name
}

impl CellAddress {
    pub fn new(column: u32, row: u32) -> Self {
        Self { row, column }
    }

    fn checked(column: u32, row: u32) -> Option<Self> {
        if (1..=MAX_COLUMN).contains(&column) && (1..=MAX_ROW).contains(&row) {
            Some(Self::new(column, row))
        } else {
            None
        }
    }

    /// Same row, one column to the right.
    pub fn next_cell(self) -> Result<Self> {
        Self::checked(self.column + 1, self.row).ok_or_else(|| ReportError::TemplateWrite {
            address: self.to_string(),
            message: "no column to the right of the sheet edge".to_string(),
        })
    }

    /// One row down, back at `start_column`.
    pub fn next_row(self, start_column: u32) -> Result<Self> {
        Self::checked(start_column, self.row + 1).ok_or_else(|| ReportError::TemplateWrite {
            address: self.to_string(),
            message: "no row below the sheet edge".to_string(),
        })
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_number_to_name(self.column), self.row)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

/// Display formats registered for the calls table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKind {
    /// General format, right-aligned.
    Text,
    /// `[h]:mm:ss`, right-aligned.
    Duration,
    /// `dd.mm.yyyy hh:mm`.
    DateTime,
}

pub fn create_style(kind: StyleKind) -> Style {
    let mut style = Style::default();
    let (format_code, right_aligned) = match kind {
        StyleKind::Text => ("General", true),
        StyleKind::Duration => ("[h]:mm:ss", true),
        StyleKind::DateTime => ("dd.mm.yyyy hh:mm", false),
    };
    style.get_number_format_mut().set_format_code(format_code);
    if right_aligned {
        style
            .get_alignment_mut()
            .set_horizontal(HorizontalAlignmentValues::Right);
    }
    style
}

/// Scans the sheet once and remembers where every `#tag` cell sits. A tag is
/// a cell whose whole trimmed text is `#` followed by a word, so prose that
/// merely starts with `#` is not indexed. The first occurrence in document
/// order wins.
fn scan_tags(path: &Path, sheet: &str) -> Result<HashMap<String, CellAddress>> {
    let open_err = |message: String| ReportError::TemplateOpen {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| open_err(e.to_string()))?;
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| open_err(format!("sheet {sheet}: {e}")))?;

    let (first_row, first_col) = range.start().unwrap_or((0, 0));
    let mut tags = HashMap::new();

    for (row, col, cell) in range.used_cells() {
        let Data::String(text) = cell else {
            continue;
        };
        let text = text.trim();
        if !TAG_RE.is_match(text) {
            continue;
        }
        // calamine is 0-based and relative to the range start; addresses are 1-based
        let addr = CellAddress::new(first_col + col as u32 + 1, first_row + row as u32 + 1);
        tags.entry(text.to_string()).or_insert(addr);
    }

    Ok(tags)
}

/// An opened template: the writable document plus the tag index of one sheet.
pub struct Template {
    path: PathBuf,
    sheet: String,
    book: umya_spreadsheet::Spreadsheet,
    tags: HashMap<String, CellAddress>,
}

impl Template {
    pub fn open(path: &Path, sheet: &str) -> Result<Self> {
        let tags = scan_tags(path, sheet)?;

        let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|e| {
            ReportError::TemplateOpen {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;

        if book.get_sheet_by_name(sheet).is_none() {
            return Err(ReportError::TemplateOpen {
                path: path.to_path_buf(),
                message: format!("sheet {sheet} not found"),
            });
        }

        tracing::debug!(path = %path.display(), sheet, tags = tags.len(), "opened template");
        Ok(Self {
            path: path.to_path_buf(),
            sheet: sheet.to_string(),
            book,
            tags,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn find_tag(&self, tag: &str) -> Option<CellAddress> {
        self.tags.get(tag).copied()
    }

    /// Like [`Template::find_tag`], but a missing tag is an error naming the
    /// template.
    pub fn require_tag(&self, tag: &str) -> Result<CellAddress> {
        self.find_tag(tag).ok_or_else(|| ReportError::TagNotFound {
            tag: tag.to_string(),
            template: self.path.clone(),
        })
    }

    fn sheet_mut(&mut self, addr: CellAddress) -> Result<&mut umya_spreadsheet::Worksheet> {
        let sheet = &self.sheet;
        self.book
            .get_sheet_by_name_mut(sheet)
            .ok_or_else(|| ReportError::TemplateWrite {
                address: addr.to_string(),
                message: format!("sheet {sheet} not found"),
            })
    }

    pub fn set_value(&mut self, addr: CellAddress, value: &CellValue) -> Result<()> {
        let a1 = addr.to_string();
        let cell = self.sheet_mut(addr)?.get_cell_mut(a1.as_str());
        match value {
            CellValue::Text(text) => {
                cell.set_value_string(text.as_str());
            }
            CellValue::Number(n) => {
                cell.set_value_number(*n);
            }
        }
        Ok(())
    }

    /// Applies `style` to every cell of the inclusive rectangle `start..=end`.
    pub fn set_style(&mut self, start: CellAddress, end: CellAddress, style: &Style) -> Result<()> {
        let sheet = self.sheet_mut(start)?;
        for row in start.row.min(end.row)..=start.row.max(end.row) {
            for column in start.column.min(end.column)..=start.column.max(end.column) {
                let a1 = CellAddress::new(column, row).to_string();
                sheet.get_cell_mut(a1.as_str()).set_style(style.clone());
            }
        }
        Ok(())
    }

    /// Current text of a cell, empty if the cell was never written.
    #[cfg(test)]
    pub(crate) fn value_at(&self, addr: CellAddress) -> String {
        self.book
            .get_sheet_by_name(&self.sheet)
            .map(|sheet| sheet.get_value(addr.to_string().as_str()))
            .unwrap_or_default()
    }

    pub fn save(&self, output: &Path) -> Result<()> {
        umya_spreadsheet::writer::xlsx::write(&self.book, output).map_err(|e| {
            ReportError::TemplateSave {
                path: output.to_path_buf(),
                message: e.to_string(),
            }
        })?;
        tracing::info!(path = %output.display(), "saved report");
        Ok(())
    }
}
