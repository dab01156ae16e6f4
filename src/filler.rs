use chrono::NaiveDate;

use crate::aggregate::ReportAggregates;
use crate::datefmt::{self, DisplayZone};
use crate::duration;
use crate::error::{ReportError, Result};
use crate::locale::Language;
use crate::model::PhoneCall;
use crate::template::{CellAddress, CellValue, StyleKind, Template, create_style};

pub mod tags {
    pub const REPORT_NAME: &str = "#reportName";
    pub const PERIOD_FROM: &str = "#periodFrom";
    pub const PERIOD_TO: &str = "#periodTo";
    pub const GENERATION_DATE: &str = "#generationDate";
    pub const TOTAL_CALLS: &str = "#totalCalls";
    pub const TOTAL_TALK_TIME: &str = "#totalTalkTime";
    pub const AVG_TALK_TIME: &str = "#avgTalkTime";
    pub const CALLS_TABLE_START: &str = "#callsTableStart";
}

/// How the header and table are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub language: Language,
    pub zone: DisplayZone,
    pub generation_date: NaiveDate,
}

/// One column of the calls table.
struct Column {
    style: StyleKind,
    value: fn(&PhoneCall, DisplayZone) -> Result<CellValue>,
}

// text, so ids past 2^53 are not rounded by the f64 cell value
fn call_id(call: &PhoneCall, _: DisplayZone) -> Result<CellValue> {
    Ok(CellValue::Text(call.id.to_string()))
}

fn caller(call: &PhoneCall, _: DisplayZone) -> Result<CellValue> {
    Ok(CellValue::Text(call.from.clone()))
}

fn callee(call: &PhoneCall, _: DisplayZone) -> Result<CellValue> {
    Ok(CellValue::Text(call.to.clone()))
}

fn talk_time(call: &PhoneCall, _: DisplayZone) -> Result<CellValue> {
    Ok(CellValue::Number(duration::fractional_day(call.talktime)))
}

fn started_at(call: &PhoneCall, zone: DisplayZone) -> Result<CellValue> {
    datefmt::format_date_time(call.timestamp, zone).map(CellValue::Text)
}

const COLUMNS: [Column; 5] = [
    Column { style: StyleKind::Text, value: call_id },
    Column { style: StyleKind::Text, value: caller },
    Column { style: StyleKind::Text, value: callee },
    Column { style: StyleKind::Duration, value: talk_time },
    Column { style: StyleKind::DateTime, value: started_at },
];

fn set_by_tag(template: &mut Template, tag: &str, value: CellValue) -> Result<CellAddress> {
    let addr = template.require_tag(tag)?;
    template.set_value(addr, &value)?;
    tracing::debug!(tag, cell = %addr, "filled tag");
    Ok(addr)
}

/// Writes the header fields. The period is taken from the first and last
/// calls as they appear in the input, not from the earliest and latest.
pub fn fill_header(
    template: &mut Template,
    calls: &[PhoneCall],
    aggregates: &ReportAggregates,
    options: &ReportOptions,
) -> Result<()> {
    let (Some(first), Some(last)) = (calls.first(), calls.last()) else {
        return Err(ReportError::NoCalls);
    };
    let lang = options.language;

    set_by_tag(
        template,
        tags::REPORT_NAME,
        CellValue::Text(lang.report_title().to_string()),
    )?;
    set_by_tag(
        template,
        tags::PERIOD_FROM,
        CellValue::Text(datefmt::format_date(first.timestamp, options.zone)?),
    )?;
    set_by_tag(
        template,
        tags::PERIOD_TO,
        CellValue::Text(datefmt::format_date(last.timestamp, options.zone)?),
    )?;
    set_by_tag(
        template,
        tags::GENERATION_DATE,
        CellValue::Text(options.generation_date.format(datefmt::DATE_FORMAT).to_string()),
    )?;
    set_by_tag(
        template,
        tags::TOTAL_CALLS,
        CellValue::Number(aggregates.total_calls as f64),
    )?;
    set_by_tag(
        template,
        tags::TOTAL_TALK_TIME,
        CellValue::Text(duration::render_total(aggregates.total_talk_time, lang)),
    )?;
    set_by_tag(
        template,
        tags::AVG_TALK_TIME,
        CellValue::Text(duration::render_average(aggregates.average_talk_time, lang)),
    )?;

    Ok(())
}

/// Writes one row per call starting at the `#callsTableStart` cell. Every
/// row starts again at the anchor's column.
pub fn fill_table(template: &mut Template, calls: &[PhoneCall], zone: DisplayZone) -> Result<usize> {
    let anchor = template.require_tag(tags::CALLS_TABLE_START)?;
    let styles: Vec<_> = COLUMNS.iter().map(|c| create_style(c.style)).collect();

    let mut row_start = anchor;
    for (i, call) in calls.iter().enumerate() {
        if i > 0 {
            row_start = row_start.next_row(anchor.column)?;
        }

        let mut cell = row_start;
        for (j, (column, style)) in COLUMNS.iter().zip(&styles).enumerate() {
            if j > 0 {
                cell = cell.next_cell()?;
            }
            template.set_style(cell, cell, style)?;
            template.set_value(cell, &(column.value)(call, zone)?)?;
        }
    }

    tracing::debug!(rows = calls.len(), anchor = %anchor, "filled calls table");
    Ok(calls.len())
}

pub fn fill_report(
    template: &mut Template,
    calls: &[PhoneCall],
    aggregates: &ReportAggregates,
    options: &ReportOptions,
) -> Result<()> {
    fill_header(template, calls, aggregates, options)?;
    fill_table(template, calls, options.zone)?;
    Ok(())
}
