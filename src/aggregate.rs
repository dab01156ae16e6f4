use crate::error::{ReportError, Result};
use crate::model::PhoneCall;

/// Summary numbers printed in the report header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportAggregates {
    pub total_calls: usize,
    /// Seconds.
    pub total_talk_time: u64,
    /// Seconds, rounded up.
    pub average_talk_time: u64,
}

pub fn aggregate(calls: &[PhoneCall]) -> Result<ReportAggregates> {
    if calls.is_empty() {
        return Err(ReportError::NoCalls);
    }

    let total_talk_time = calls
        .iter()
        .try_fold(0u64, |acc, c| acc.checked_add(c.talktime))
        .ok_or(ReportError::TalkTimeOverflow { calls: calls.len() })?;
    let total_calls = calls.len();
    let average_talk_time = total_talk_time.div_ceil(total_calls as u64);

    Ok(ReportAggregates {
        total_calls,
        total_talk_time,
        average_talk_time,
    })
}
