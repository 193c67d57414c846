//! Decision and templating rules for the pregoeiro cockpit: bidder
//! eligibility, deadline arithmetic, and session announcements.

pub mod announcement;
pub mod clock;
pub mod config;
pub mod deadline;
pub mod eligibility;
mod error;
pub mod session;

pub use announcement::{AnnouncementParams, Scenario, render_announcement};
pub use clock::{Clock, FixedClock, SystemClock, brasilia_offset};
pub use config::{Citations, TenderConfig};
pub use deadline::{DeadlineCalculator, DeadlinePreset, DeadlineResult, compute_deadline};
pub use eligibility::{
    EligibilityVerdict, FinancialAssessment, FinancialOutcome, FinancialProfile,
    TechnicalProfile, evaluate, evaluate_financial, evaluate_overall, evaluate_technical,
};
pub use error::CockpitError;
pub use session::{SessionKey, SessionState};
