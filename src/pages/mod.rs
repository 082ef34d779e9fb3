//! Route views for the application.

pub mod create_fundraiser;
pub mod fundraiser_detail;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
