//! Travel Companion - Travel planning backend
//!
//! Serves destination search, currency conversion, and AI-generated
//! itineraries, packing checklists and travel chat over a JSON API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
