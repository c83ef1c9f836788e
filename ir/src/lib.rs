//! Content model Intermediate Representation (IR)
//!
//! Serde data structures for a Contentful-style content model export.
//! Shared between:
//! - codegen library (declaration rendering)
//! - codegen binary (model.json + TypeScript output)
//!
//! Two layers:
//! 1. Content type — identity, description, system metadata
//! 2. Field       — key, kind, flags, kind-specific constraints

pub mod content_type;
pub mod field;

pub use content_type::*;
pub use field::*;
