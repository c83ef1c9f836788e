use thiserror::Error;

/// Fatal rendering faults. Each one aborts the whole content type render;
/// partial declarations are never emitted.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("unsupported field kind '{kind}' on field '{field}'")]
    UnsupportedFieldKind { field: String, kind: String },

    #[error("override for '{content_type}.{field}' must be a string, found {found}")]
    InvalidOverride {
        content_type: String,
        field: String,
        found: &'static str,
    },

    #[error("array field '{field}' has no items definition")]
    MissingArrayItems { field: String },

    #[error("field '{field}' nests element types deeper than {max} levels")]
    NestingTooDeep { field: String, max: usize },
}
