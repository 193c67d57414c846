//! Deadline arithmetic for session announcements.
//!
//! A deadline is a pure offset from "now" in Brasília time: no business
//! hours, no holidays, no running countdown. Each compute reads the clock
//! afresh.

use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::clock::Clock;
use crate::session::SessionState;

/// Proposal and document submission windows.
pub const SUBMISSION_MINUTES: u32 = 120;
pub const APPEAL_MIN_MINUTES: u32 = 10;
pub const APPEAL_MAX_MINUTES: u32 = 60;
pub const APPEAL_DEFAULT_MINUTES: u32 = 20;
pub const CUSTOM_MIN_MINUTES: u32 = 1;
pub const CUSTOM_DEFAULT_MINUTES: u32 = 30;

/// Deadline types offered to the officer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "minutes", rename_all = "snake_case")]
pub enum DeadlinePreset {
    ProposalSubmission,
    DocumentSubmission,
    AppealIntent(u32),
    Custom(u32),
}

impl DeadlinePreset {
    /// Window length in minutes, clamped to the bounds of the preset.
    pub fn duration_minutes(&self) -> u32 {
        match *self {
            Self::ProposalSubmission | Self::DocumentSubmission => SUBMISSION_MINUTES,
            Self::AppealIntent(m) => {
                let clamped = m.clamp(APPEAL_MIN_MINUTES, APPEAL_MAX_MINUTES);
                if clamped != m {
                    warn!(requested = m, clamped, "appeal window clamped");
                }
                clamped
            }
            Self::Custom(m) => {
                let clamped = m.max(CUSTOM_MIN_MINUTES);
                if clamped != m {
                    warn!(requested = m, clamped, "custom window clamped");
                }
                clamped
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ProposalSubmission => "Envio de Proposta (2h)",
            Self::DocumentSubmission => "Envio de Documentos (2h)",
            Self::AppealIntent(_) => "Intenção de Recurso (Min. 10 min)",
            Self::Custom(_) => "Personalizado",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineResult {
    pub duration_minutes: u32,
    pub deadline_instant: DateTime<FixedOffset>,
    /// Local `HH:MM`, seconds dropped.
    pub display_time: String,
    /// Advisory text for the session chat.
    pub message: String,
}

/// `now + duration_minutes`, formatted for the chat.
pub fn compute_deadline(duration_minutes: u32, now: DateTime<FixedOffset>) -> DeadlineResult {
    let deadline_instant = now + Duration::minutes(i64::from(duration_minutes));
    let display_time = deadline_instant.format("%H:%M").to_string();
    let message = advisory_message(duration_minutes, &display_time);

    DeadlineResult {
        duration_minutes,
        deadline_instant,
        display_time,
        message,
    }
}

pub fn advisory_message(duration_minutes: u32, display_time: &str) -> String {
    format!(
        "O prazo de {duration_minutes} minutos encerra-se às {display_time} (Horário de Brasília)."
    )
}

/// Current time caption, `HH:MM:SS`.
pub fn current_time_display(clock: &impl Clock) -> String {
    clock.now().format("%H:%M:%S").to_string()
}

/// Computes deadlines against an injected clock and records the last one in
/// the session.
pub struct DeadlineCalculator<C: Clock> {
    clock: C,
}

impl<C: Clock> DeadlineCalculator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Compute the deadline for `preset` from the current instant and
    /// overwrite the session's last deadline and message.
    pub fn compute(&self, preset: DeadlinePreset, session: &mut SessionState) -> DeadlineResult {
        let minutes = preset.duration_minutes();
        let result = compute_deadline(minutes, self.clock.now());
        info!(
            preset = preset.label(),
            minutes,
            deadline = %result.display_time,
            "deadline computed"
        );
        session.record_deadline(&result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn at(hour: u32, minute: u32) -> DateTime<FixedOffset> {
        FixedClock::at(2025, 11, 3, hour, minute, 0).unwrap().0
    }

    #[test]
    fn two_hour_submission_window() {
        let result = compute_deadline(120, at(9, 15));
        assert_eq!(result.display_time, "11:15");
        assert_eq!(result.deadline_instant, at(11, 15));
    }

    #[test]
    fn twenty_minute_appeal_window() {
        assert_eq!(compute_deadline(20, at(14, 50)).display_time, "15:10");
    }

    #[test]
    fn wraps_past_midnight() {
        let result = compute_deadline(20, at(23, 50));
        assert_eq!(result.display_time, "00:10");
        assert_eq!(result.deadline_instant.to_rfc3339(), "2025-11-04T00:10:00-03:00");
    }

    #[test]
    fn seconds_are_discarded() {
        let now = FixedClock::at(2025, 11, 3, 9, 15, 59).unwrap().0;
        assert_eq!(compute_deadline(1, now).display_time, "09:16");
    }

    #[test]
    fn hours_are_zero_padded() {
        assert_eq!(compute_deadline(5, at(7, 0)).display_time, "07:05");
    }

    #[test]
    fn advisory_message_text() {
        let result = compute_deadline(120, at(9, 15));
        assert_eq!(
            result.message,
            "O prazo de 120 minutos encerra-se às 11:15 (Horário de Brasília)."
        );
    }

    #[test]
    fn preset_durations() {
        assert_eq!(DeadlinePreset::ProposalSubmission.duration_minutes(), 120);
        assert_eq!(DeadlinePreset::DocumentSubmission.duration_minutes(), 120);
        assert_eq!(DeadlinePreset::AppealIntent(20).duration_minutes(), 20);
        assert_eq!(DeadlinePreset::Custom(30).duration_minutes(), 30);
    }

    #[test]
    fn appeal_window_clamped_to_slider_range() {
        assert_eq!(DeadlinePreset::AppealIntent(5).duration_minutes(), 10);
        assert_eq!(DeadlinePreset::AppealIntent(90).duration_minutes(), 60);
        assert_eq!(DeadlinePreset::AppealIntent(10).duration_minutes(), 10);
        assert_eq!(DeadlinePreset::AppealIntent(60).duration_minutes(), 60);
    }

    #[test]
    fn custom_window_has_floor_only() {
        assert_eq!(DeadlinePreset::Custom(0).duration_minutes(), 1);
        assert_eq!(DeadlinePreset::Custom(10_000).duration_minutes(), 10_000);
    }

    #[test]
    fn calculator_records_into_session() {
        let calculator = DeadlineCalculator::new(FixedClock::at(2025, 11, 3, 14, 50, 0).unwrap());
        let mut session = SessionState::default();

        let result = calculator.compute(DeadlinePreset::AppealIntent(20), &mut session);
        assert_eq!(result.display_time, "15:10");
        assert_eq!(session.last_deadline(), Some("15:10"));
        assert_eq!(session.last_message(), Some(result.message.as_str()));

        let result = calculator.compute(DeadlinePreset::ProposalSubmission, &mut session);
        assert_eq!(session.last_deadline(), Some("16:50"));
        assert_eq!(session.last_message(), Some(result.message.as_str()));
    }

    #[test]
    fn current_time_caption() {
        let clock = FixedClock::at(2025, 11, 3, 8, 5, 9).unwrap();
        assert_eq!(current_time_display(&clock), "08:05:09");
    }

    #[test]
    fn compute_is_idempotent_for_fixed_now() {
        assert_eq!(compute_deadline(45, at(10, 0)), compute_deadline(45, at(10, 0)));
    }
}
