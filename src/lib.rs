//! Pythia - a terminal oracle.
//!
//! Cast three digits, hold your question in mind, and receive one short
//! enigmatic answer from a generative-text service.
//!
//! This library exposes core types for testing.
//! The binary entry point is in main.rs.

pub mod config;
pub mod digits;
pub mod oracle;
pub mod provider;

// Internal modules (not exposed for testing)
mod app;
mod input;
mod theme;
mod ui;
