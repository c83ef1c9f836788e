//! Field IR — one named, typed slot within a content type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared field kind.
///
/// The known set is closed; anything else in an export is carried verbatim
/// in `Other` so the renderer can report it instead of dropping the field
/// at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Array,
    Boolean,
    Date,
    Integer,
    Link,
    Location,
    Number,
    Object,
    RichText,
    Symbol,
    Text,
    /// Unrecognized kind string from the export.
    Other(String),
}

impl From<String> for FieldKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Array" => Self::Array,
            "Boolean" => Self::Boolean,
            "Date" => Self::Date,
            "Integer" => Self::Integer,
            "Link" => Self::Link,
            "Location" => Self::Location,
            "Number" => Self::Number,
            "Object" => Self::Object,
            "RichText" => Self::RichText,
            "Symbol" => Self::Symbol,
            "Text" => Self::Text,
            _ => Self::Other(value),
        }
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Array => "Array",
            Self::Boolean => "Boolean",
            Self::Date => "Date",
            Self::Integer => "Integer",
            Self::Link => "Link",
            Self::Location => "Location",
            Self::Number => "Number",
            Self::Object => "Object",
            Self::RichText => "RichText",
            Self::Symbol => "Symbol",
            Self::Text => "Text",
            Self::Other(other) => other,
        };
        f.write_str(name)
    }
}

/// Link target category: a content entry or a binary asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkCategory {
    Entry,
    Asset,
}

/// A single validation attached to a field or array element.
///
/// Only the constraint the renderer consumes is modeled; unknown validation
/// keys in the export are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    /// Allowed target content type ids for a Link field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_content_type: Option<Vec<String>>,
}

/// Element definition of an Array field.
///
/// Recursive: the element kind may itself be Array, so the chain is boxed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayItems {
    /// Element kind.
    #[serde(rename = "type")]
    pub kind: FieldKind,

    /// Link category when the element kind is Link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<LinkCategory>,

    /// Nested element definition when the element kind is Array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<ArrayItems>>,

    /// Element-level validations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validations: Vec<Validation>,
}

impl ArrayItems {
    /// Element definition of the given kind with no constraints.
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            link_type: None,
            items: None,
            validations: vec![],
        }
    }

    /// Allowed target content type ids, from the first `linkContentType`
    /// validation if any.
    pub fn link_content_types(&self) -> Option<&[String]> {
        link_targets(&self.validations)
    }
}

/// A field in a content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Field key, unique within its content type.
    pub id: String,

    /// Human-readable name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Declared kind.
    #[serde(rename = "type")]
    pub kind: FieldKind,

    #[serde(default)]
    pub localized: bool,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub disabled: bool,

    /// Author-controlled exclusion from generated output.
    #[serde(default)]
    pub omitted: bool,

    /// Link category when the kind is Link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<LinkCategory>,

    /// Element definition when the kind is Array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<ArrayItems>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validations: Vec<Validation>,
}

impl Field {
    /// Minimal field of the given kind. All flags start false, matching the
    /// deserialization defaults.
    pub fn new(id: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            name: None,
            kind,
            localized: false,
            required: false,
            disabled: false,
            omitted: false,
            link_type: None,
            items: None,
            validations: vec![],
        }
    }

    /// Allowed target content type ids, from the first `linkContentType`
    /// validation if any.
    pub fn link_content_types(&self) -> Option<&[String]> {
        link_targets(&self.validations)
    }
}

fn link_targets(validations: &[Validation]) -> Option<&[String]> {
    validations
        .iter()
        .find_map(|v| v.link_content_type.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_known_names() {
        assert_eq!(FieldKind::from("Symbol".to_string()), FieldKind::Symbol);
        assert_eq!(FieldKind::from("RichText".to_string()), FieldKind::RichText);
        assert_eq!(FieldKind::from("Array".to_string()), FieldKind::Array);
    }

    #[test]
    fn kind_carries_unknown_names() {
        let kind = FieldKind::from("Hologram".to_string());
        assert_eq!(kind, FieldKind::Other("Hologram".to_string()));
        assert_eq!(kind.to_string(), "Hologram");
    }

    #[test]
    fn kind_serde_roundtrip() {
        for name in ["Symbol", "Integer", "Link", "Hologram"] {
            let json = format!("\"{}\"", name);
            let kind: FieldKind = serde_json::from_str(&json).unwrap();
            assert_eq!(serde_json::to_string(&kind).unwrap(), json);
        }
    }

    #[test]
    fn field_from_export_json() {
        let json = r#"{
            "id": "author",
            "name": "Author",
            "type": "Link",
            "localized": false,
            "required": true,
            "linkType": "Entry",
            "validations": [{ "linkContentType": ["person"] }]
        }"#;
        let field: Field = serde_json::from_str(json).unwrap();
        assert_eq!(field.id, "author");
        assert_eq!(field.kind, FieldKind::Link);
        assert_eq!(field.link_type, Some(LinkCategory::Entry));
        assert!(field.required);
        assert!(!field.omitted);
        assert_eq!(field.link_content_types(), Some(&["person".to_string()][..]));
    }

    #[test]
    fn array_items_nest() {
        let json = r#"{
            "id": "matrix",
            "type": "Array",
            "items": { "type": "Array", "items": { "type": "Symbol" } }
        }"#;
        let field: Field = serde_json::from_str(json).unwrap();
        let outer = field.items.unwrap();
        assert_eq!(outer.kind, FieldKind::Array);
        let inner = outer.items.unwrap();
        assert_eq!(inner.kind, FieldKind::Symbol);
        assert!(inner.items.is_none());
    }

    #[test]
    fn unknown_validation_keys_ignored() {
        let json = r#"{ "size": { "max": 10 }, "linkContentType": ["page"] }"#;
        let validation: Validation = serde_json::from_str(json).unwrap();
        assert_eq!(validation.link_content_type.unwrap(), vec!["page"]);
    }
}
