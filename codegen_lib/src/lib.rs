//! Codegen Library - declaration rendering core
//!
//! Turns a content model into TypeScript declaration source text. Used by
//! the codegen binary to produce `.d.ts` output from a model export.

pub mod content_type;
pub mod error;
pub mod field_type;
pub mod fields_only;
pub mod naming;
pub mod overrides;
pub mod typescript;
pub mod typescript_types;

// Re-export IR types (shared with the binary)
pub use contentful_ir::{
    ArrayItems, ContentModel, ContentType, Field, FieldKind, LinkCategory, Sys, Validation,
};

pub use content_type::{render_content_type, render_field, render_fields, Flavor};
pub use error::RenderError;
pub use fields_only::FieldsOnlyGenerator;
pub use overrides::{resolve_override, OverrideMap};
pub use typescript_types::TypesGenerator;

/// Codegen trait - implement this for each declaration flavor
pub trait Codegen {
    fn generate(&self, model: &ContentModel) -> Result<GeneratedCode, RenderError>;
    fn flavor(&self) -> &str;
}

pub struct GeneratedCode {
    pub files: Vec<GeneratedFile>,
}

pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}
