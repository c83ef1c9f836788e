//! Generic TypeScript declaration printing.
//!
//! The renderers hand this module a name and pre-rendered body fragments;
//! only this module knows the outer `export interface` syntax.

/// Ambient types shared by every generated file. Emitted once per output
/// file ahead of the declarations that reference them.
pub const PRELUDE: &str = "\
/** Root node of a rich text document. */
interface Document {
  nodeType: 'document';
  content: unknown[];
  data: Record<string, unknown>;
}

declare namespace Link {
  /** Reference to an entry of the tagged target type. */
  interface Entry<Target> {
    sys: {
      id: string;
      type: 'Link';
      linkType: 'Entry';
    };
    /** Populated once the client resolves the reference. */
    target?: Target;
  }

  /** Reference to a binary asset. */
  interface Asset {
    sys: {
      id: string;
      type: 'Link';
      linkType: 'Asset';
    };
  }
}
";

/// Print one interface declaration.
///
/// `fields` and `sys` arrive unindented; the sys block, when present, leads
/// the body with a blank line before the field block. Absent description or
/// sys simply drop their section.
pub fn render_interface(
    name: &str,
    fields: &str,
    description: Option<&str>,
    sys: Option<&str>,
) -> String {
    let mut out = String::new();
    if let Some(description) = description {
        out.push_str("/** ");
        out.push_str(description);
        out.push_str(" */\n");
    }
    out.push_str("export interface ");
    out.push_str(name);
    out.push_str(" {\n");

    let mut body = String::new();
    if let Some(sys) = sys {
        body.push_str(sys);
        if !fields.is_empty() {
            body.push_str("\n\n");
        }
    }
    body.push_str(fields);

    if !body.is_empty() {
        out.push_str(&indent(&body, 1));
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

/// Indent every non-empty line by `levels` two-space steps.
pub fn indent(text: &str, levels: usize) -> String {
    let pad = "  ".repeat(levels);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
