pub mod creativity;
pub mod plan;
pub mod plan_info;
pub mod preferences;
pub mod profile_update;
pub mod registration_form;
pub mod tone;
pub mod use_case;
pub mod user_identity;
