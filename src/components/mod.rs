//! Reusable view components.

pub mod fundraiser_card;
pub mod nav_bar;
pub mod pledge_form;
