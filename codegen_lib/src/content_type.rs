//! Content type declaration rendering.
//!
//! Field member lines, the ordered field block, and the two declaration
//! flavors: the entry shape with its sys metadata block, and the resolved
//! fields-only shape. Both flavors share the same field walk, so filtering
//! and ordering cannot drift between them.

use contentful_ir::{ContentType, Field};

use crate::error::RenderError;
use crate::field_type::render_field_type;
use crate::naming::declaration_name;
use crate::overrides::{resolve_override, OverrideMap};
use crate::typescript::{indent, render_interface};

/// Declaration flavor. Only the fields-only flavor consults overrides.
#[derive(Debug, Clone, Copy)]
pub enum Flavor<'a> {
    /// Entry shape: sys metadata block plus top-level field members.
    WithMetadata,
    /// Resolved shape: members nested under `fields`, catch-all for the
    /// rest, no metadata.
    FieldsOnly { overrides: Option<&'a OverrideMap> },
}

/// Render one declaration member: key, optionality marker, value type.
///
/// The marker reflects the field's own required flag no matter where the
/// value type text came from.
pub fn render_field(field: &Field, value_type: &str) -> String {
    let marker = if field.required { "" } else { "?" };
    format!("{}{}: {};", field.id, marker, value_type)
}

/// Render the member block for a content type's fields.
///
/// Omitted fields are dropped; the rest keep schema order. Each field takes
/// its override when one exists, otherwise the kind-based renderer. Members
/// are separated by a blank line. Any per-field fault aborts the whole
/// block.
pub fn render_fields(
    content_type_id: &str,
    fields: &[Field],
    overrides: Option<&OverrideMap>,
) -> Result<String, RenderError> {
    let mut members = Vec::new();
    for field in fields.iter().filter(|f| !f.omitted) {
        let value_type = match resolve_override(field, content_type_id, overrides)? {
            Some(text) => text.to_string(),
            None => render_field_type(field)?,
        };
        members.push(render_field(field, &value_type));
    }
    Ok(members.join("\n\n"))
}

/// Render the full declaration for one content type.
pub fn render_content_type(
    content_type: &ContentType,
    flavor: Flavor<'_>,
) -> Result<String, RenderError> {
    let name = declaration_name(content_type.id());
    match flavor {
        Flavor::WithMetadata => {
            let fields = render_fields(content_type.id(), &content_type.fields, None)?;
            let sys = render_sys(content_type.id());
            let description = content_type.description.as_deref().filter(|d| !d.is_empty());
            Ok(render_interface(&name, &fields, description, Some(&sys)))
        }
        Flavor::FieldsOnly { overrides } => {
            let fields = render_fields(content_type.id(), &content_type.fields, overrides)?;
            Ok(render_interface(&name, &fields_only_body(&fields), None, None))
        }
    }
}

/// Fixed-shape sys metadata block. The content type's own id is embedded as
/// a string literal inside the self-referential type link.
fn render_sys(id: &str) -> String {
    format!(
        "sys: {{
  id: string;
  type: string;
  createdAt: string;
  updatedAt: string;
  locale: string;
  contentType: {{
    sys: {{
      id: '{id}';
      linkType: 'ContentType';
      type: 'Link';
    }};
  }};
}};"
    )
}

/// Nest the member block under `fields` and keep the shape permissive for
/// keys the model does not declare.
fn fields_only_body(fields: &str) -> String {
    if fields.is_empty() {
        return "fields: {};\n\n[otherKeys: string]: any;".to_string();
    }
    format!(
        "fields: {{\n{}\n}};\n\n[otherKeys: string]: any;",
        indent(fields, 1)
    )
}
