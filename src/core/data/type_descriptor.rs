//! Prop type descriptors.
//!
//! Serialized with a `name` tag so the JSON shape matches what documentation
//! consumers expect, e.g. `{"name": "arrayOf", "value": {"name": "string"}}`.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Simple validator names that carry no arguments.
pub const SIMPLE_PROP_TYPES: &[&str] = &[
    "array", "bool", "func", "number", "object", "string", "any", "element", "node", "symbol",
];

/// Validator names that take one argument.
pub const COMPLEX_PROP_TYPES: &[&str] = &[
    "oneOf",
    "oneOfType",
    "instanceOf",
    "arrayOf",
    "objectOf",
    "shape",
];

/// Classification of a prop validator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "name", rename_all = "camelCase")]
pub enum TypeDescriptor {
    Array,
    Bool,
    Func,
    Number,
    Object,
    String,
    Any,
    Element,
    Node,
    Symbol,
    /// `oneOf([...])`
    Enum { value: Computable<Vec<EnumMember>> },
    /// `oneOfType([...])`
    Union { value: Computable<Vec<TypeDescriptor>> },
    /// `arrayOf(type)`
    ArrayOf { value: Box<TypeDescriptor> },
    /// `objectOf(type)`
    ObjectOf { value: Box<TypeDescriptor> },
    /// `instanceOf(Constructor)`, holding the printed constructor expression.
    InstanceOf { value: String },
    /// `shape({...})`
    Shape {
        value: Computable<IndexMap<String, ShapeField>>,
    },
    /// Anything that is not a recognized validator, holding the printed source.
    Custom { raw: String },
}

/// A validator argument that was either statically understood or kept as raw
/// source text because it could not be resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Computable<T> {
    Resolved(T),
    Raw(String),
}

/// One allowed value of a `oneOf` validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumMember {
    /// Printed source of the value, quotes included for strings.
    pub value: String,
    /// True when the value is not a literal (e.g. a constant reference).
    pub computed: bool,
}

/// One field of a `shape` validator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeField {
    #[serde(flatten)]
    pub prop_type: TypeDescriptor,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TypeDescriptor {
    /// Descriptor for a simple validator name such as `string` or `node`.
    pub fn simple(name: &str) -> Option<Self> {
        let descriptor = match name {
            "array" => Self::Array,
            "bool" => Self::Bool,
            "func" => Self::Func,
            "number" => Self::Number,
            "object" => Self::Object,
            "string" => Self::String,
            "any" => Self::Any,
            "element" => Self::Element,
            "node" => Self::Node,
            "symbol" => Self::Symbol,
            _ => return None,
        };
        Some(descriptor)
    }

    pub fn is_complex_name(name: &str) -> bool {
        COMPLEX_PROP_TYPES.contains(&name)
    }

    pub fn custom(raw: impl Into<String>) -> Self {
        Self::Custom { raw: raw.into() }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom { .. })
    }

    /// The serialized `name` tag of this descriptor.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Bool => "bool",
            Self::Func => "func",
            Self::Number => "number",
            Self::Object => "object",
            Self::String => "string",
            Self::Any => "any",
            Self::Element => "element",
            Self::Node => "node",
            Self::Symbol => "symbol",
            Self::Enum { .. } => "enum",
            Self::Union { .. } => "union",
            Self::ArrayOf { .. } => "arrayOf",
            Self::ObjectOf { .. } => "objectOf",
            Self::InstanceOf { .. } => "instanceOf",
            Self::Shape { .. } => "shape",
            Self::Custom { .. } => "custom",
        }
    }
}

/// Compact one-line rendering used by the text report.
impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enum { value } => match value {
                Computable::Resolved(members) => {
                    let values: Vec<&str> = members.iter().map(|m| m.value.as_str()).collect();
                    write!(f, "enum({})", values.join("|"))
                }
                Computable::Raw(raw) => write!(f, "enum({})", raw),
            },
            Self::Union { value } => match value {
                Computable::Resolved(types) => {
                    let types: Vec<String> = types.iter().map(ToString::to_string).collect();
                    write!(f, "union({})", types.join("|"))
                }
                Computable::Raw(raw) => write!(f, "union({})", raw),
            },
            Self::ArrayOf { value } => write!(f, "arrayOf({})", value),
            Self::ObjectOf { value } => write!(f, "objectOf({})", value),
            Self::InstanceOf { value } => write!(f, "instanceOf({})", value),
            Self::Shape { value } => match value {
                Computable::Resolved(fields) => {
                    let fields: Vec<String> = fields
                        .iter()
                        .map(|(name, field)| {
                            let marker = if field.required { "" } else { "?" };
                            format!("{}{}: {}", name, marker, field.prop_type)
                        })
                        .collect();
                    write!(f, "shape({{{}}})", fields.join(", "))
                }
                Computable::Raw(raw) => write!(f, "shape({})", raw),
            },
            Self::Custom { raw } => write!(f, "custom({})", raw),
            simple => f.write_str(simple.name()),
        }
    }
}
