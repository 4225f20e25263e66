//! Vagabot - Conversational Job-Search Assistant
//!
//! This crate guides a chat user through site selection, job title and
//! location, then queries an external search backend and relays the
//! postings back as text.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
