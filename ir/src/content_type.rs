//! Content type IR — identity, description, system metadata, fields.

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// System metadata attached to a content type by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sys {
    /// Content type identifier (e.g. `blogPost`).
    pub id: String,

    /// Record type discriminator (e.g. `ContentType`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl Sys {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: None,
            created_at: None,
            updated_at: None,
            locale: None,
        }
    }
}

/// A named schema entry describing the shape of one category of record.
///
/// Identity is `sys.id`; immutable once handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentType {
    pub sys: Sys,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_field: Option<String>,

    /// Ordered field list. Schema order is authoritative and is reproduced
    /// in generated output.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

impl ContentType {
    /// Content type identifier.
    pub fn id(&self) -> &str {
        &self.sys.id
    }
}

/// A complete content model export.
///
/// Accepts both the space export key (`contentTypes`) and the delivery API
/// collection key (`items`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentModel {
    #[serde(alias = "items")]
    pub content_types: Vec<ContentType>,
}
