#![allow(dead_code)]

use std::path::{Path, PathBuf};

use calamine::{Data, Reader, open_workbook_auto};

pub const HEADER_TAGS: [(&str, &str); 7] = [
    ("B1", "#reportName"),
    ("B2", "#periodFrom"),
    ("D2", "#periodTo"),
    ("B3", "#generationDate"),
    ("B4", "#totalCalls"),
    ("B5", "#totalTalkTime"),
    ("B6", "#avgTalkTime"),
];

pub const TABLE_ANCHOR: (&str, &str) = ("B9", "#callsTableStart");

/// Writes a one-sheet template with the given cells as text.
pub fn write_template(path: &Path, cells: &[(&str, &str)]) {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_sheet_by_name_mut("Sheet1").unwrap();
    for (addr, value) in cells {
        sheet.get_cell_mut(*addr).set_value_string(*value);
    }
    umya_spreadsheet::writer::xlsx::write(&book, path).unwrap();
}

pub fn full_template(dir: &Path) -> PathBuf {
    let path = dir.join("template.xlsx");
    let mut cells = HEADER_TAGS.to_vec();
    cells.push(("A8", "Call ID"));
    cells.push(TABLE_ANCHOR);
    write_template(&path, &cells);
    path
}

pub fn write_calls(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("calls.json");
    std::fs::write(&path, json).unwrap();
    path
}

pub const CALLS: &str = r#"[
  {"call_id": 101, "from": "+79990000001", "to": "+79990000002", "talktime": 125, "timestamp": 8640000},
  {"call_id": 102, "from": "+79990000003", "to": "+79990000001", "talktime": 3661, "timestamp": 4320000},
  {"call_id": 103, "from": "+79990000002", "to": "+79990000004", "talktime": 0, "timestamp": 17280000}
]"#;

fn data_to_string(cell: Option<&Data>) -> String {
    match cell {
        None => String::new(),
        Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.clone(),
        Some(Data::Float(n)) => {
            if n.fract() == 0.0 {
                format!("{:.0}", n)
            } else {
                n.to_string()
            }
        }
        Some(Data::Int(n)) => n.to_string(),
        Some(other) => format!("{other:?}"),
    }
}

/// Reads `Sheet1` of a saved report and returns the text of the given
/// 1-based cells.
pub fn read_cells(path: &Path, cells: &[(u32, u32)]) -> Vec<String> {
    let mut workbook = open_workbook_auto(path).unwrap();
    let range = workbook.worksheet_range("Sheet1").unwrap();
    cells
        .iter()
        .map(|&(col, row)| data_to_string(range.get_value((row - 1, col - 1))))
        .collect()
}
