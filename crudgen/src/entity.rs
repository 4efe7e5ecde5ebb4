//! Entity and field descriptions parsed from command-line field specs.
//!
//! The generators never introspect a live schema; the entity is described on
//! the command line as `name:type` pairs with an optional `optional`
//! modifier, e.g. `title:string`, `published_at:datetime:optional`.

use anyhow::{bail, Context, Result};
use convert_case::{Case, Casing};
use inflector::Inflector;
use serde::Serialize;
use serde_json::{json, Value};

use crate::humanize::humanize_sentence;

/// Closed set of field types the generators know how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Short text, rendered as a single-line input
    String,
    /// Long text, rendered as a textarea
    Text,
    /// 32-bit integer
    Integer,
    /// 64-bit integer
    BigInt,
    /// Double-precision float
    Float,
    /// Boolean, rendered as a checkbox
    Boolean,
    /// Calendar date
    Date,
    /// Date and time
    DateTime,
}

impl FieldType {
    /// Parse a type token from a field spec.
    ///
    /// # Errors
    ///
    /// Returns an error naming the supported tokens when `token` is not one
    /// of them.
    pub fn parse(token: &str) -> Result<Self> {
        let parsed = match token.to_lowercase().as_str() {
            "string" | "str" => Self::String,
            "text" => Self::Text,
            "integer" | "int" | "i32" => Self::Integer,
            "bigint" | "i64" => Self::BigInt,
            "float" | "f64" => Self::Float,
            "bool" | "boolean" => Self::Boolean,
            "date" => Self::Date,
            "datetime" | "timestamp" => Self::DateTime,
            other => bail!(
                "Unsupported field type '{other}'. Supported types: string, text, integer, bigint, float, boolean, date, datetime"
            ),
        };
        Ok(parsed)
    }

    /// Rust type emitted into generated code.
    #[must_use]
    pub const fn rust_type(self) -> &'static str {
        match self {
            Self::String | Self::Text => "String",
            Self::Integer => "i32",
            Self::BigInt => "i64",
            Self::Float => "f64",
            Self::Boolean => "bool",
            Self::Date => "chrono::NaiveDate",
            Self::DateTime => "chrono::NaiveDateTime",
        }
    }

    /// HTML input type used by generated form and filter views.
    #[must_use]
    pub const fn input_kind(self) -> &'static str {
        match self {
            Self::String => "text",
            Self::Text => "textarea",
            Self::Integer | Self::BigInt | Self::Float => "number",
            Self::Boolean => "checkbox",
            Self::Date => "date",
            Self::DateTime => "datetime-local",
        }
    }

    /// Whether the multi-search input should match this field.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::String | Self::Text)
    }
}

/// One field of the entity being scaffolded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    /// Field name, normalized to snake_case
    pub name: String,
    /// Parsed field type
    pub field_type: FieldType,
    /// Whether the field is nullable in forms and models
    pub optional: bool,
}

impl FieldDefinition {
    /// Parse a `name:type[:optional]` field spec.
    ///
    /// # Errors
    ///
    /// Returns an error on a malformed spec, an unsupported type token, or
    /// an unknown modifier.
    pub fn parse(spec: &str) -> Result<Self> {
        let parts: Vec<&str> = spec.split(':').collect();
        if parts.len() < 2 {
            bail!("Invalid field spec '{spec}'. Expected 'name:type' or 'name:type:optional'");
        }

        let raw_name = parts[0].trim();
        if raw_name.is_empty() || !is_valid_field_name(raw_name) {
            bail!("Invalid field name '{raw_name}' in spec '{spec}'. Names must start with a letter and contain only letters, digits and underscores");
        }

        let field_type = FieldType::parse(parts[1].trim())
            .with_context(|| format!("Invalid field spec '{spec}'"))?;

        let mut optional = false;
        for modifier in &parts[2..] {
            match modifier.trim() {
                "optional" | "nullable" => optional = true,
                other => bail!("Unknown field modifier '{other}' in spec '{spec}'"),
            }
        }

        Ok(Self {
            name: raw_name.to_case(Case::Snake),
            field_type,
            optional,
        })
    }

    /// Rust type of the matching form field, honoring optionality.
    #[must_use]
    pub fn form_type(&self) -> String {
        if self.optional {
            format!("Option<{}>", self.field_type.rust_type())
        } else {
            self.field_type.rust_type().to_string()
        }
    }

    /// Validation rules the generated form derives for this field, joined
    /// into a single `#[validate(..)]` argument list.
    #[must_use]
    pub fn validation(&self) -> Option<String> {
        let mut rules = Vec::new();
        match self.field_type {
            FieldType::String if !self.optional => {
                rules.push("length(min = 1, max = 255)".to_string());
            }
            FieldType::Text if !self.optional => {
                rules.push("length(min = 1)".to_string());
            }
            _ => {}
        }
        if self.name.contains("email") {
            rules.push("email".to_string());
        }
        if rules.is_empty() {
            None
        } else {
            Some(rules.join(", "))
        }
    }

    fn context(&self) -> Value {
        let kind = self.field_type.input_kind();
        json!({
            "name": self.name,
            "column_name": self.name,
            // Askama expression emitted verbatim into generated views; kept
            // out of the skeletons so handlebars never re-parses it.
            "value_expr": format!("{{{{ item.{} }}}}", self.name),
            "field_type": self.field_type,
            "rust_type": self.field_type.rust_type(),
            "form_type": self.form_type(),
            "input_kind": kind,
            "is_textarea": kind == "textarea",
            "is_checkbox": kind == "checkbox",
            "is_input": kind != "textarea" && kind != "checkbox",
            "is_text": self.field_type.is_text(),
            "optional": self.optional,
            "validation": self.validation(),
        })
    }
}

/// The entity a CRUD scaffold is generated for.
#[derive(Debug, Clone)]
pub struct EntityDefinition {
    name: String,
    fields: Vec<FieldDefinition>,
}

impl EntityDefinition {
    /// Build an entity from its name and raw field specs.
    ///
    /// # Errors
    ///
    /// Returns an error when the name is not PascalCase, when no fields are
    /// given, or when any field spec fails to parse.
    pub fn new(name: &str, field_specs: &[String]) -> Result<Self> {
        if !is_pascal_case(name) {
            bail!("Entity name must be PascalCase (start with an uppercase letter): '{name}'");
        }

        let fields = field_specs
            .iter()
            .map(|spec| FieldDefinition::parse(spec))
            .collect::<Result<Vec<_>>>()
            .context("Failed to parse field definitions")?;

        if fields.is_empty() {
            bail!("At least one field must be specified");
        }

        Ok(Self {
            name: name.to_string(),
            fields,
        })
    }

    /// Entity name as given, e.g. `BlogPost`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parsed fields, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Entity name in snake_case, e.g. `blog_post`.
    #[must_use]
    pub fn snake_name(&self) -> String {
        self.name.to_case(Case::Snake)
    }

    /// Pluralized snake_case name, doubling as the table name,
    /// e.g. `blog_posts`.
    #[must_use]
    pub fn plural_snake(&self) -> String {
        self.name.to_table_case()
    }

    /// Human-readable entity title, e.g. `Blog post`.
    #[must_use]
    pub fn title(&self) -> String {
        humanize_sentence(&self.name)
    }

    /// Human-readable plural title, e.g. `Blog posts`.
    #[must_use]
    pub fn plural_title(&self) -> String {
        humanize_sentence(&self.plural_snake())
    }

    /// Template context shared by every skeleton: entity name forms plus
    /// per-field metadata.
    #[must_use]
    pub fn template_context(&self) -> Value {
        let fields: Vec<Value> = self.fields.iter().map(FieldDefinition::context).collect();
        let text_fields: Vec<&str> = self
            .fields
            .iter()
            .filter(|field| field.field_type.is_text())
            .map(|field| field.name.as_str())
            .collect();

        json!({
            "entity_name": self.name,
            "entity_snake": self.snake_name(),
            "entity_plural": self.plural_snake(),
            "table_name": self.plural_snake(),
            "title": self.title(),
            "plural_title": self.plural_title(),
            "fields": fields,
            "has_text_fields": !text_fields.is_empty(),
            "text_fields": text_fields,
        })
    }
}

fn is_pascal_case(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

fn is_valid_field_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|first| first.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
