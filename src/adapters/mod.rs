//! Adapters - implementations of the ports plus the HTTP surface.
//!
//! - `ai` - generation providers (OpenAI-compatible, offline templates, mock)
//! - `document` - markdown rendering and PDF export
//! - `http` - axum routes for the workspace page and JSON API

pub mod ai;
pub mod document;
pub mod http;
