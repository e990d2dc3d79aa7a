//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the landing page sections from variant copy. Only
//! `lead_form` reads or writes controller state; the rest are static markup.

pub mod background;
pub mod confirmation;
pub mod hero;
pub mod lead_form;
pub mod showcase;
pub mod site_header;
