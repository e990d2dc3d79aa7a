//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own outbound delivery so route handlers can stay focused
//! on protocol translation and rate limiting.

pub mod sink;
