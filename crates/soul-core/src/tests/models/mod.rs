mod plan;
mod preferences;
mod profile_update;
mod registration_form;
mod user_identity;
