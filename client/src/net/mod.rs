//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the lead sink abstraction and the browser HTTP sink that posts
//! to the relay. The wire schema itself lives in the shared `leads` crate.

pub mod api;
