pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::creativity::Creativity;
pub use models::plan::Plan;
pub use models::plan_info::PlanInfo;
pub use models::preferences::{Preferences, PreferencesUpdate};
pub use models::profile_update::ProfileUpdate;
pub use models::registration_form::{MIN_PASSWORD_LENGTH, RegistrationForm};
pub use models::tone::Tone;
pub use models::use_case::UseCase;
pub use models::user_identity::{UserIdentity, username_from_email};
