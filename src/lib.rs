//! Yellow Notes - study-note generator.
//!
//! Collects a prompt plus a note type and detail level, asks an
//! OpenAI-compatible chat endpoint for markdown notes, renders them and
//! exports the rendered region to PDF.
//!
//! Layout:
//! - `domain` - request composition, notes, the workspace snapshot and its reducer
//! - `ports` - traits for generation, rendering and PDF export
//! - `adapters` - provider, renderer, exporter and HTTP implementations
//! - `application` - handlers that run reducer effects against the ports
//! - `config` - environment-driven configuration
//! - `server` - wiring and lifecycle

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod server;
