use anyhow::Result;

fn main() -> Result<()> {
    let mut book = umya_spreadsheet::new_file();

    let sheet = book.get_active_sheet_mut();

    let labels = [
        ("A1", "Report", "B1", "#reportName"),
        ("A2", "From", "B2", "#periodFrom"),
        ("C2", "To", "D2", "#periodTo"),
        ("A3", "Generated", "B3", "#generationDate"),
        ("A4", "Calls", "B4", "#totalCalls"),
        ("A5", "Talk time", "B5", "#totalTalkTime"),
        ("A6", "Average", "B6", "#avgTalkTime"),
    ];
    for (label_cell, label, tag_cell, tag) in labels {
        sheet.get_cell_mut(label_cell).set_value_string(label);
        sheet.get_cell_mut(tag_cell).set_value_string(tag);
    }

    for (col, header) in ["A8", "B8", "C8", "D8", "E8"]
        .into_iter()
        .zip(["Call ID", "From", "To", "Duration", "Date and time"])
    {
        sheet.get_cell_mut(col).set_value_string(header);
    }
    // the table anchor; rows are written from here down
    sheet.get_cell_mut("A9").set_value_string("#callsTableStart");

    umya_spreadsheet::writer::xlsx::write(&book, "template.xlsx")?;

    let calls = r#"[
  {"call_id": 1, "from": "+79990000001", "to": "+79990000002", "talktime": 125, "timestamp": 1717236000},
  {"call_id": 2, "from": "+79990000003", "to": "+79990000001", "talktime": 3661, "timestamp": 1717322400},
  {"call_id": 3, "from": "+79990000002", "to": "+79990000004", "talktime": 0, "timestamp": 1717408800}
]
"#;
    std::fs::write("calls.json", calls)?;

    println!("Wrote template.xlsx and calls.json");
    Ok(())
}
