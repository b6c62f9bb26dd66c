//! In-memory description of the models collected during a session.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{GenError, Result};
use crate::naming::ModelNames;

/// Persistence paradigm a generated model targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// MongoDB through Mongoose.
    Document,
    /// PostgreSQL through Sequelize.
    Relational,
}

impl Backend {
    pub fn field_types(self) -> &'static [FieldType] {
        match self {
            Backend::Document => &[
                FieldType::String,
                FieldType::Number,
                FieldType::Date,
                FieldType::Boolean,
                FieldType::ObjectId,
                FieldType::Mixed,
                FieldType::Array,
                FieldType::Buffer,
                FieldType::Decimal128,
            ],
            Backend::Relational => &[
                FieldType::String,
                FieldType::Integer,
                FieldType::Float,
                FieldType::Boolean,
                FieldType::Date,
                FieldType::DateTime,
            ],
        }
    }

    /// Human label used in prompts and status lines.
    pub fn label(self) -> &'static str {
        match self {
            Backend::Document => "MongoDB",
            Backend::Relational => "PostgreSQL",
        }
    }

    /// Name of the connection-string variable the generated project reads.
    pub fn url_env_var(self) -> &'static str {
        match self {
            Backend::Document => "MONGO_URL",
            Backend::Relational => "POSTGRES_URL",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Backend {
    type Err = GenError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "document" | "mongodb" | "mongo" => Ok(Backend::Document),
            "relational" | "postgresql" | "postgres" => Ok(Backend::Relational),
            _ => Err(GenError::UnsupportedBackend(tag.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Number,
    Integer,
    Float,
    Decimal128,
    Boolean,
    Date,
    DateTime,
    ObjectId,
    Mixed,
    Array,
    Buffer,
}

impl FieldType {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "String",
            FieldType::Number => "Number",
            FieldType::Integer => "Integer",
            FieldType::Float => "Float",
            FieldType::Decimal128 => "Decimal128",
            FieldType::Boolean => "Boolean",
            FieldType::Date => "Date",
            FieldType::DateTime => "DateTime",
            FieldType::ObjectId => "ObjectId",
            FieldType::Mixed => "Mixed",
            FieldType::Array => "Array",
            FieldType::Buffer => "Buffer",
        }
    }

    /// Check a user-entered default against this type and return it in the
    /// form it is stored and rendered.
    pub fn normalize_default(self, raw: &str) -> Result<String> {
        let value = raw.trim();
        let rejected = |expected: &str| {
            GenError::invalid(format!(
                "Default for a {} field must be {}, got '{}'",
                self, expected, raw
            ))
        };
        match self {
            FieldType::String => Ok(raw.to_string()),
            FieldType::Number | FieldType::Float | FieldType::Decimal128 => {
                match value.parse::<f64>() {
                    Ok(n) if n.is_finite() => Ok(value.to_string()),
                    _ => Err(rejected("a number")),
                }
            }
            FieldType::Integer => value
                .parse::<i64>()
                .map(|n| n.to_string())
                .map_err(|_| rejected("an integer")),
            FieldType::Boolean => match value.to_ascii_lowercase().as_str() {
                "true" => Ok("true".to_string()),
                "false" => Ok("false".to_string()),
                _ => Err(rejected("true or false")),
            },
            FieldType::Array => match serde_json::from_str::<Value>(value) {
                Ok(array @ Value::Array(_)) => Ok(array.to_string()),
                _ => Err(rejected("a JSON array such as []")),
            },
            FieldType::Date
            | FieldType::DateTime
            | FieldType::ObjectId
            | FieldType::Mixed
            | FieldType::Buffer => {
                if value.is_empty() {
                    Err(rejected("non-empty"))
                } else {
                    Ok(value.to_string())
                }
            }
        }
    }

    /// Parse a type name, accepting only the vocabulary of `backend`.
    pub fn parse_for(name: &str, backend: Backend) -> Result<Self> {
        backend
            .field_types()
            .iter()
            .copied()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| {
                GenError::invalid(format!(
                    "'{}' is not a {} type. Available: {}",
                    name,
                    backend.label(),
                    backend
                        .field_types()
                        .iter()
                        .map(|ty| ty.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaAttribute {
    pub name: String,
    pub ty: FieldType,
    pub required: bool,
    pub unique: bool,
    pub default: Option<String>,
}

impl SchemaAttribute {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            required: false,
            unique: false,
            default: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// The default rendered as a JavaScript literal, if one was given.
    /// Numbers, booleans and arrays are emitted bare, `Mixed` values bare when
    /// they are JSON, everything else as a quoted string.
    pub fn default_literal(&self) -> Option<String> {
        let value = self.default.as_deref()?;
        let bare = match self.ty {
            FieldType::Number
            | FieldType::Integer
            | FieldType::Float
            | FieldType::Decimal128
            | FieldType::Boolean
            | FieldType::Array => true,
            FieldType::Mixed => serde_json::from_str::<Value>(value).is_ok(),
            _ => false,
        };
        if bare {
            Some(value.trim().to_string())
        } else {
            Some(format!("'{}'", escape_single_quoted(value)))
        }
    }
}

fn escape_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// One model, fully collected. Attribute order is the generated field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSchema {
    pub names: ModelNames,
    pub attributes: Vec<SchemaAttribute>,
    pub backend: Backend,
}

impl ModelSchema {
    /// Build a schema, checking the model name, attribute names and
    /// that every attribute type belongs to the backend's vocabulary.
    pub fn new(
        raw_name: &str,
        attributes: Vec<SchemaAttribute>,
        backend: Backend,
    ) -> Result<Self> {
        let names = ModelNames::derive(raw_name)?;
        let mut attributes = attributes;
        for attr in &mut attributes {
            if let Some(raw) = attr.default.take() {
                attr.default = Some(attr.ty.normalize_default(&raw)?);
            }
        }
        for (i, attr) in attributes.iter().enumerate() {
            validate_attribute_name(&attr.name, &attributes[..i], &names)?;
            if !backend.field_types().contains(&attr.ty) {
                return Err(GenError::invalid(format!(
                    "Attribute '{}' uses {} which is not a {} type",
                    attr.name,
                    attr.ty,
                    backend.label()
                )));
            }
        }
        Ok(Self {
            names,
            attributes,
            backend,
        })
    }

    pub fn name(&self) -> &str {
        &self.names.pascal
    }

    pub fn required_attributes(&self) -> impl Iterator<Item = &SchemaAttribute> {
        self.attributes.iter().filter(|attr| attr.required)
    }
}

const RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "export", "extends", "finally", "for", "function", "if", "import", "in", "instanceof",
    "new", "return", "super", "switch", "this", "throw", "try", "typeof", "var", "void", "while",
    "with", "yield", "let", "static", "enum", "await", "null", "true", "false", "arguments",
    "eval",
];

/// Identifiers the generated model and controller bind for every model.
/// Attributes are destructured into locals, so they must not reuse these.
const GENERATED_BINDINGS: &[&str] = &[
    "req",
    "res",
    "payload",
    "updated",
    "deleted",
    "StatusCodes",
    "BadRequestError",
    "NotFoundError",
    "mongoose",
    "DataTypes",
    "sequelize",
    "require",
    "module",
    "exports",
];

fn is_generated_binding(name: &str, model: &ModelNames) -> bool {
    GENERATED_BINDINGS.contains(&name)
        || name == model.pascal
        || name == model.lower
        || name == model.plural
        || model.handlers().iter().any(|handler| handler == name)
}

/// Check that `name` is a usable JavaScript field name for `model`, not
/// already taken in `existing` or by the generated code.
pub fn validate_attribute_name(
    name: &str,
    existing: &[SchemaAttribute],
    model: &ModelNames,
) -> Result<()> {
    if name.is_empty() {
        return Err(GenError::invalid("Attribute name cannot be empty"));
    }

    let mut chars = name.chars();
    if let Some(first) = chars.next() {
        if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
            return Err(GenError::invalid(format!(
                "Attribute name '{}' must start with a letter, '_' or '$'",
                name
            )));
        }
    }
    if let Some(c) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '$')) {
        return Err(GenError::invalid(format!(
            "Attribute name '{}' contains invalid character '{}'",
            name, c
        )));
    }

    if RESERVED_WORDS.contains(&name) {
        return Err(GenError::invalid(format!(
            "'{}' is a reserved JavaScript word",
            name
        )));
    }

    if is_generated_binding(name, model) {
        return Err(GenError::invalid(format!(
            "'{}' is used by the generated {} code, pick another name",
            name, model.pascal
        )));
    }

    if existing.iter().any(|attr| attr.name == name) {
        return Err(GenError::invalid(format!(
            "Attribute '{}' is already defined on this model",
            name
        )));
    }

    Ok(())
}
