//! Boilerplate rendering for generated templates
//!
//! Output layout is load-bearing: the blocks are pasted into the system
//! package's data-model and sheet files, so indentation and separators
//! match what the existing hand-written files use.

use std::fmt::Write;

use crate::codegen::reader::{AttrKind, Attribute, Template};

/// Placeholder schema expression for attributes with no type given
const DEFAULT_FIELD: &str = "SWNShared.requiredString(\"\")";

/// Render the class-schema block for one template.
pub fn render_schema(template: &Template) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "export default class {} extends foundry.abstract.TypeDataModel {{",
        template.name
    );
    out.push_str("  static defineSchema() {\n");
    for attr in &template.attributes {
        render_schema_attr(&mut out, attr);
    }
    out.push_str("  });\n");
    out.push_str("}\n");
    out
}

fn render_schema_attr(out: &mut String, attr: &Attribute) {
    match &attr.kind {
        AttrKind::Typed(expr) => {
            let _ = writeln!(out, "    schema.{} = {};", attr.name, expr);
        }
        AttrKind::Default => {
            let _ = writeln!(out, "    schema.{} = {};", attr.name, DEFAULT_FIELD);
        }
        AttrKind::Nested(subs) => {
            let _ = writeln!(out, "    schema.{} = new fields.SchemaField({{", attr.name);
            for sub in subs {
                let _ = writeln!(out, "      {}: {},", sub.name, sub.type_expr);
            }
            out.push_str("    });\n");
        }
    }
}

/// Render the sheet form fragment for one template.
pub fn render_form(template: &Template) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<div class='grid grid-4col'> <!-- {}-->", template.name);
    for attr in &template.attributes {
        render_form_attr(&mut out, attr);
    }
    let _ = writeln!(out, "</div><!-- end grid-col {} -->", template.name);
    out
}

fn render_form_attr(out: &mut String, attr: &Attribute) {
    match &attr.kind {
        AttrKind::Nested(subs) => {
            out.push_str("  <div class=\"resource-group\">\n");
            for sub in subs {
                out.push_str("    <div class=\"resource\">\n");
                let _ = writeln!(
                    out,
                    "      {{{{formGroup systemFields.{attr}.fields.{sub} value=system.{attr}.{sub} localize=true}}}}",
                    attr = attr.name,
                    sub = sub.name,
                );
                out.push_str("    </div>\n");
            }
            out.push_str("  </div><!-- end resource-group -->\n");
        }
        _ => {
            out.push_str("  <div class=\"resource\">\n");
            let _ = writeln!(
                out,
                "   {{{{formGroup systemFields.{attr} value=system.{attr} localize=true}}}}",
                attr = attr.name,
            );
            out.push_str("  </div>\n");
        }
    }
}

/// Render both blocks for one template, with the separator the existing
/// generated files carry between them.
pub fn render(template: &Template) -> String {
    let mut out = render_schema(template);
    out.push_str("\n\n\n");
    out.push_str(&render_form(template));
    out.push('\n');
    out
}
