//! AgentScope run status → `FinishReason`.

use crate::types::FinishReason;

/// Map a run/message status. Total: unknown or absent statuses map to
/// `FinishReason::Unknown`.
pub fn map_finish_reason(status: Option<&str>) -> FinishReason {
    match status {
        Some("completed") => FinishReason::Stop,
        Some("failed") => FinishReason::Error,
        Some("canceled") => FinishReason::Other,
        Some("rejected") => FinishReason::ContentFilter,
        _ => FinishReason::Unknown,
    }
}
