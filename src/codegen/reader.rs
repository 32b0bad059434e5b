//! CSV parsing and template grouping

use serde::Deserialize;
use std::io::Read;

/// One spreadsheet row. Unknown columns (notes, comments) are ignored.
#[derive(Debug, Deserialize)]
struct Row {
    #[serde(rename = "Name / Template", default)]
    name: String,
    #[serde(rename = "New Type", default)]
    new_type: String,
    #[serde(rename = "Attribute", default)]
    attribute: String,
    #[serde(rename = "Sub", default)]
    sub: String,
}

/// A named data-model template with its ordered attributes
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub name: String,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub kind: AttrKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttrKind {
    /// Scalar type expression, emitted verbatim
    Typed(String),
    /// No type given; emits the required-string placeholder
    Default,
    /// SchemaField grouping of sub-entries
    Nested(Vec<SubField>),
}

/// One entry of a nested schema field. The type expression may be empty
/// and is emitted verbatim either way.
#[derive(Debug, Clone, PartialEq)]
pub struct SubField {
    pub name: String,
    pub type_expr: String,
}

/// Accumulates rows into templates, closing any open nested group before
/// an append or a flush so groups are never lost or reordered.
#[derive(Default)]
struct Grouper {
    templates: Vec<Template>,
    current: Option<Template>,
    open_group: Option<(String, Vec<SubField>)>,
}

impl Grouper {
    fn push(&mut self, row: Row) {
        if !row.name.is_empty() {
            self.flush();
            self.current = Some(Template {
                name: row.name,
                attributes: Vec::new(),
            });
            return;
        }
        // Rows before the first named template carry no context; skip them.
        let Some(current) = self.current.as_mut() else {
            return;
        };
        if !row.attribute.is_empty() {
            if let Some((name, subs)) = self.open_group.take() {
                current.attributes.push(Attribute {
                    name,
                    kind: AttrKind::Nested(subs),
                });
            }
            if row.new_type.is_empty() {
                current.attributes.push(Attribute {
                    name: row.attribute,
                    kind: AttrKind::Default,
                });
            } else if row.new_type.contains("SchemaField") {
                self.open_group = Some((row.attribute, Vec::new()));
            } else {
                current.attributes.push(Attribute {
                    name: row.attribute,
                    kind: AttrKind::Typed(row.new_type),
                });
            }
        } else if !row.sub.is_empty() {
            // A Sub row with no open schema field has nowhere to go; the
            // spreadsheet occasionally has these and they are skipped.
            if let Some((_, subs)) = self.open_group.as_mut() {
                subs.push(SubField {
                    name: row.sub,
                    type_expr: row.new_type,
                });
            }
        }
    }

    fn flush(&mut self) {
        if let Some(mut current) = self.current.take() {
            if let Some((name, subs)) = self.open_group.take() {
                current.attributes.push(Attribute {
                    name,
                    kind: AttrKind::Nested(subs),
                });
            }
            self.templates.push(current);
        }
        self.open_group = None;
    }

    fn finish(mut self) -> Vec<Template> {
        self.flush();
        self.templates
    }
}

/// Read the CSV description and group its rows into templates.
///
/// The reader is lenient about record length (spreadsheet exports often
/// drop trailing empty cells) and about extra columns.
pub fn read_templates<R: Read>(reader: R) -> Result<Vec<Template>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut grouper = Grouper::default();
    for row in rdr.deserialize::<Row>() {
        grouper.push(row?);
    }
    Ok(grouper.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(csv: &str) -> Vec<Template> {
        read_templates(csv.as_bytes()).unwrap()
    }

    const HEADER: &str = "Name / Template,New Type,Attribute,Sub\n";

    #[test]
    fn test_single_template_scalar_attribute() {
        let templates = parse(&format!(
            "{HEADER}Pilot,,,\n,SWNShared.requiredNumber(0),speed,\n"
        ));
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].name, "Pilot");
        assert_eq!(
            templates[0].attributes,
            vec![Attribute {
                name: "speed".into(),
                kind: AttrKind::Typed("SWNShared.requiredNumber(0)".into()),
            }]
        );
    }

    #[test]
    fn test_untyped_attribute_defaults() {
        let templates = parse(&format!("{HEADER}Pilot,,,\n,,callsign,\n"));
        assert_eq!(
            templates[0].attributes,
            vec![Attribute {
                name: "callsign".into(),
                kind: AttrKind::Default,
            }]
        );
    }

    #[test]
    fn test_schema_field_collects_subs() {
        let templates = parse(&format!(
            "{HEADER}\
             Mech,,,\n\
             ,new fields.SchemaField,hull,\n\
             ,SWNShared.requiredNumber(10),,value\n\
             ,SWNShared.requiredNumber(10),,max\n"
        ));
        assert_eq!(
            templates[0].attributes,
            vec![Attribute {
                name: "hull".into(),
                kind: AttrKind::Nested(vec![
                    SubField {
                        name: "value".into(),
                        type_expr: "SWNShared.requiredNumber(10)".into(),
                    },
                    SubField {
                        name: "max".into(),
                        type_expr: "SWNShared.requiredNumber(10)".into(),
                    },
                ]),
            }]
        );
    }

    #[test]
    fn test_attribute_row_closes_open_group() {
        let templates = parse(&format!(
            "{HEADER}\
             Mech,,,\n\
             ,new fields.SchemaField,hull,\n\
             ,SWNShared.requiredNumber(10),,value\n\
             ,SWNShared.requiredString(\"\"),model,\n"
        ));
        let attrs = &templates[0].attributes;
        assert_eq!(attrs.len(), 2);
        assert!(matches!(attrs[0].kind, AttrKind::Nested(_)));
        assert_eq!(attrs[0].name, "hull");
        assert_eq!(attrs[1].name, "model");
    }

    #[test]
    fn test_open_group_survives_template_boundary() {
        let templates = parse(&format!(
            "{HEADER}\
             Mech,,,\n\
             ,new fields.SchemaField,hull,\n\
             ,SWNShared.requiredNumber(10),,value\n\
             Drone,,,\n\
             ,,fitting,\n"
        ));
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].attributes.len(), 1);
        assert!(matches!(templates[0].attributes[0].kind, AttrKind::Nested(_)));
        assert_eq!(templates[1].name, "Drone");
        assert_eq!(templates[1].attributes.len(), 1);
    }

    #[test]
    fn test_open_group_flushed_at_eof() {
        let templates = parse(&format!(
            "{HEADER}\
             Mech,,,\n\
             ,new fields.SchemaField,hull,\n\
             ,SWNShared.requiredNumber(10),,value\n"
        ));
        assert_eq!(templates[0].attributes.len(), 1);
        assert!(matches!(templates[0].attributes[0].kind, AttrKind::Nested(_)));
    }

    #[test]
    fn test_sub_without_open_group_is_skipped() {
        let templates = parse(&format!("{HEADER}Pilot,,,\n,SWNShared.requiredNumber(0),,stray\n"));
        assert!(templates[0].attributes.is_empty());
    }

    #[test]
    fn test_rows_before_first_template_are_ignored() {
        let templates = parse(&format!("{HEADER},,orphan,\nPilot,,,\n"));
        assert_eq!(templates.len(), 1);
        assert!(templates[0].attributes.is_empty());
    }

    #[test]
    fn test_extra_columns_ignored() {
        let templates = parse(
            "Name / Template,New Type,Attribute,Sub,wsAI Comments\n\
             Pilot,,,,migrated from v1\n\
             ,SWNShared.requiredNumber(0),speed,,\n",
        );
        assert_eq!(templates[0].attributes.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse(HEADER).is_empty());
    }
}
