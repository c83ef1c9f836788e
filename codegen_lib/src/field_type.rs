//! Per-kind field type renderers and the dispatch over `FieldKind`.
//!
//! Each renderer is pure and looks only at the constraint shape its kind
//! carries. The dispatch is an exhaustive match so adding a kind without a
//! renderer is a build error, not a runtime surprise.

use contentful_ir::{ArrayItems, Field, FieldKind, LinkCategory};

use crate::error::RenderError;
use crate::naming::declaration_name;

/// Hard ceiling on element-type nesting. Real exports nest one level; the
/// guard keeps an unvalidated schema from recursing unbounded.
pub const MAX_TYPE_DEPTH: usize = 16;

/// Render the value type text for one field, dispatching on its kind.
pub fn render_field_type(field: &Field) -> Result<String, RenderError> {
    render_kind(
        &field.kind,
        field.link_type,
        field.items.as_ref(),
        field.link_content_types(),
        &field.id,
        0,
    )
}

fn render_kind(
    kind: &FieldKind,
    link_type: Option<LinkCategory>,
    items: Option<&ArrayItems>,
    link_targets: Option<&[String]>,
    field_id: &str,
    depth: usize,
) -> Result<String, RenderError> {
    if depth > MAX_TYPE_DEPTH {
        return Err(RenderError::NestingTooDeep {
            field: field_id.to_string(),
            max: MAX_TYPE_DEPTH,
        });
    }

    match kind {
        FieldKind::Symbol | FieldKind::Text | FieldKind::Date => Ok(render_symbol().to_string()),
        FieldKind::Integer | FieldKind::Number => Ok(render_number().to_string()),
        FieldKind::Boolean => Ok(render_boolean().to_string()),
        FieldKind::Location => Ok(render_location().to_string()),
        FieldKind::Object => Ok(render_object().to_string()),
        FieldKind::RichText => Ok(render_rich_text().to_string()),
        FieldKind::Link => Ok(render_link(link_type, link_targets)),
        FieldKind::Array => render_array(items, field_id, depth),
        FieldKind::Other(name) => Err(RenderError::UnsupportedFieldKind {
            field: field_id.to_string(),
            kind: name.clone(),
        }),
    }
}

/// Free text and dates share one scalar text type.
fn render_symbol() -> &'static str {
    "string"
}

/// Integer and floating declarations share one numeric type.
fn render_number() -> &'static str {
    "number"
}

fn render_boolean() -> &'static str {
    "boolean"
}

fn render_location() -> &'static str {
    "{ lat: number; lon: number }"
}

/// The schema does not constrain an Object field's internal shape.
fn render_object() -> &'static str {
    "Record<string, any>"
}

/// Opaque document-node root; the document model is not re-derived here.
fn render_rich_text() -> &'static str {
    "Document"
}

/// Union of link stubs over the allowed targets, or the generic entry/asset
/// shape when unconstrained. A link with no category is read as an entry
/// link.
fn render_link(link_type: Option<LinkCategory>, link_targets: Option<&[String]>) -> String {
    if link_type == Some(LinkCategory::Asset) {
        return "Link.Asset".to_string();
    }
    match link_targets {
        Some(targets) if !targets.is_empty() => targets
            .iter()
            .map(|id| format!("Link.Entry<{}>", declaration_name(id)))
            .collect::<Vec<_>>()
            .join(" | "),
        _ => "Link.Entry<{ [fieldId: string]: unknown }>".to_string(),
    }
}

/// Ordered sequence of the element type, rendered through the same dispatch.
fn render_array(
    items: Option<&ArrayItems>,
    field_id: &str,
    depth: usize,
) -> Result<String, RenderError> {
    let items = items.ok_or_else(|| RenderError::MissingArrayItems {
        field: field_id.to_string(),
    })?;
    let element = render_kind(
        &items.kind,
        items.link_type,
        items.items.as_deref(),
        items.link_content_types(),
        field_id,
        depth + 1,
    )?;
    Ok(format!("({})[]", element))
}

#[cfg(test)]
mod tests {
    use contentful_ir::Validation;
    use proptest::prelude::*;

    use super::*;

    fn field(kind: FieldKind) -> Field {
        Field::new("sample", kind)
    }

    fn link_field(targets: &[&str]) -> Field {
        let mut f = field(FieldKind::Link);
        f.link_type = Some(LinkCategory::Entry);
        f.validations = vec![Validation {
            link_content_type: Some(targets.iter().map(|t| t.to_string()).collect()),
        }];
        f
    }

    /// `wrappers` levels of Array around a Symbol element.
    fn nested_array_field(wrappers: usize) -> Field {
        let mut f = field(FieldKind::Symbol);
        if wrappers == 0 {
            return f;
        }
        let mut items = ArrayItems::new(FieldKind::Symbol);
        for _ in 1..wrappers {
            let mut outer = ArrayItems::new(FieldKind::Array);
            outer.items = Some(Box::new(items));
            items = outer;
        }
        f.kind = FieldKind::Array;
        f.items = Some(items);
        f
    }

    #[test]
    fn scalar_kinds_collapse() {
        for kind in [FieldKind::Symbol, FieldKind::Text, FieldKind::Date] {
            assert_eq!(render_field_type(&field(kind)).unwrap(), "string");
        }
        for kind in [FieldKind::Integer, FieldKind::Number] {
            assert_eq!(render_field_type(&field(kind)).unwrap(), "number");
        }
        assert_eq!(render_field_type(&field(FieldKind::Boolean)).unwrap(), "boolean");
    }

    #[test]
    fn location_has_lat_lon() {
        assert_eq!(
            render_field_type(&field(FieldKind::Location)).unwrap(),
            "{ lat: number; lon: number }"
        );
    }

    #[test]
    fn object_and_rich_text() {
        assert_eq!(
            render_field_type(&field(FieldKind::Object)).unwrap(),
            "Record<string, any>"
        );
        assert_eq!(render_field_type(&field(FieldKind::RichText)).unwrap(), "Document");
    }

    #[test]
    fn link_union_over_targets() {
        assert_eq!(
            render_field_type(&link_field(&["person", "organization"])).unwrap(),
            "Link.Entry<Person> | Link.Entry<Organization>"
        );
    }

    #[test]
    fn link_asset() {
        let mut f = field(FieldKind::Link);
        f.link_type = Some(LinkCategory::Asset);
        assert_eq!(render_field_type(&f).unwrap(), "Link.Asset");
    }

    #[test]
    fn link_unconstrained() {
        let mut f = field(FieldKind::Link);
        f.link_type = Some(LinkCategory::Entry);
        assert_eq!(
            render_field_type(&f).unwrap(),
            "Link.Entry<{ [fieldId: string]: unknown }>"
        );
    }

    #[test]
    fn array_of_symbol() {
        let mut f = field(FieldKind::Array);
        f.items = Some(ArrayItems::new(FieldKind::Symbol));
        assert_eq!(render_field_type(&f).unwrap(), "(string)[]");
    }

    #[test]
    fn array_of_link_wraps_union() {
        let mut items = ArrayItems::new(FieldKind::Link);
        items.link_type = Some(LinkCategory::Entry);
        items.validations = vec![Validation {
            link_content_type: Some(vec!["a".into(), "b".into()]),
        }];
        let mut f = field(FieldKind::Array);
        f.items = Some(items);
        assert_eq!(
            render_field_type(&f).unwrap(),
            "(Link.Entry<A> | Link.Entry<B>)[]"
        );
    }

    #[test]
    fn array_of_array() {
        assert_eq!(
            render_field_type(&nested_array_field(2)).unwrap(),
            "((string)[])[]"
        );
    }

    #[test]
    fn array_without_items_faults() {
        let result = render_field_type(&field(FieldKind::Array));
        assert!(matches!(result, Err(RenderError::MissingArrayItems { .. })));
    }

    #[test]
    fn unrecognized_kind_faults() {
        let result = render_field_type(&field(FieldKind::Other("Hologram".into())));
        match result {
            Err(RenderError::UnsupportedFieldKind { field, kind }) => {
                assert_eq!(field, "sample");
                assert_eq!(kind, "Hologram");
            }
            other => panic!("expected UnsupportedFieldKind, got {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn nesting_guard(wrappers in 0usize..40) {
            let result = render_field_type(&nested_array_field(wrappers));
            if wrappers <= MAX_TYPE_DEPTH {
                prop_assert!(result.is_ok());
            } else {
                prop_assert!(
                    matches!(result, Err(RenderError::NestingTooDeep { .. })),
                    "expected NestingTooDeep error"
                );
            }
        }
    }
}
