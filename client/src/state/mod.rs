//! Client-side state owned by pages.

pub mod lead_form;
