pub mod candidates;
mod mapping;
pub mod switch;

pub use candidates::{CandidateStatus, CandidatesOutcome};
pub use mapping::SkipReason;
pub use switch::SwitchOutcome;
