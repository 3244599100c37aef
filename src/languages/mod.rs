//! Per-language lexical tables.
//!
//! A [`LanguageDefinition`] is plain data: string fragments with `{placeholder}`
//! slots, Tera templates for the multi-line declarations, and the capability
//! flags the IR printer branches on. Parsers and IR nodes never ask which
//! language they are printing; they only read this table.

pub mod java;
pub mod kotlin;
pub mod python;
pub mod typescript;

use crate::naming::to_snake_case;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// File layout shared by every language: package line, imports, then the
/// top-level declarations separated by two blank lines.
pub const FILE_TEMPLATE: &str = r#"{% if package %}{{ package }}

{% endif %}{% for line in imports %}{{ line }}
{% endfor %}{% if imports | length > 0 %}
{% endif %}{% for declaration in declarations %}{% if not loop.first %}

{% endif %}{{ declaration }}
{% endfor %}"#;

/// The closed set of target languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedLanguage {
    Java,
    Kotlin,
    #[serde(alias = "ts")]
    TypeScript,
    Python,
}

impl SupportedLanguage {
    pub const ALL: [SupportedLanguage; 4] = [
        SupportedLanguage::Java,
        SupportedLanguage::Kotlin,
        SupportedLanguage::TypeScript,
        SupportedLanguage::Python,
    ];

    /// The lexical table for this language.
    pub fn definition(&self) -> &'static LanguageDefinition {
        match self {
            Self::Java => &java::JAVA,
            Self::Kotlin => &kotlin::KOTLIN,
            Self::TypeScript => &typescript::TYPESCRIPT,
            Self::Python => &python::PYTHON,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Kotlin => "kotlin",
            Self::TypeScript => "typescript",
            Self::Python => "python",
        }
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupportedLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "java" => Ok(Self::Java),
            "kotlin" | "kt" => Ok(Self::Kotlin),
            "typescript" | "ts" => Ok(Self::TypeScript),
            "python" | "py" => Ok(Self::Python),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

/// The four OpenAPI primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NativeType {
    String,
    Number,
    Integer,
    Boolean,
}

impl NativeType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "number" => Some(Self::Number),
            "integer" => Some(Self::Integer),
            "boolean" => Some(Self::Boolean),
            _ => None,
        }
    }
}

/// One fragment per primitive.
#[derive(Debug)]
pub struct NativeTypeNames {
    pub string: &'static str,
    pub number: &'static str,
    pub integer: &'static str,
    pub boolean: &'static str,
}

impl NativeTypeNames {
    pub fn get(&self, native: NativeType) -> &'static str {
        match native {
            NativeType::String => self.string,
            NativeType::Number => self.number,
            NativeType::Integer => self.integer,
            NativeType::Boolean => self.boolean,
        }
    }
}

/// Forms of one comparison clause of the equality method, keyed by `{name}`.
#[derive(Debug)]
pub struct EqualityForms {
    pub method_name: &'static str,
    pub parameter_name: &'static str,
    /// Lines run before the comparison; `{class}` is the compared class.
    pub guard: &'static [&'static str],
    pub numeric: &'static str,
    pub generic: &'static str,
    pub object: &'static str,
    pub array: &'static str,
    pub join: &'static str,
}

/// Fragments the table-schema class is assembled from.
#[derive(Debug)]
pub struct DatabaseFragments {
    /// `{row}` and `{column}`.
    pub row_getters: NativeTypeNames,
    /// `{items}`, nullable-safe.
    pub list_literal: &'static str,
    /// `{value}` is a `;`-joined string.
    pub split: &'static str,
    /// `{value}` is a list of strings.
    pub join: &'static str,
    /// `{value}` is a list of table-backed objects.
    pub join_ids: &'static str,
    /// `{items}` mapped through `{expr}`, `row` bound per element.
    pub map_rows: &'static str,
    pub first_or_null: &'static str,
    /// `{value}`, or null when `{check}` is null.
    pub null_guard: &'static str,
    /// `{type}` and `{value}`.
    pub enum_from_value: &'static str,
    pub enum_to_value: &'static str,
    /// `{item}` over `{items}` of `{type}`.
    pub for_each: &'static str,
    /// Declaration of the generated `Database` abstraction.
    pub database_declaration: &'static str,
    /// Declaration of the generated `Row` abstraction.
    pub row_declaration: &'static str,
}

/// Fragments the API request class is assembled from.
#[derive(Debug)]
pub struct ApiFragments {
    /// `{name}` and `{value}`.
    pub variable_declaration: &'static str,
    /// `{value}`.
    pub if_not_null: &'static str,
    pub to_string: &'static str,
    /// `{url}` and `{query}`; the query starts with a stray `&`.
    pub finish_url: &'static str,
}

#[derive(Debug)]
pub struct LanguageDefinition {
    pub language: SupportedLanguage,

    pub file_extension: &'static str,
    pub snake_case_file_names: bool,
    /// `{package}`.
    pub package_template: Option<&'static str>,
    pub prelude: &'static [&'static str],
    /// `{package}`, `{name}` and `{file}`.
    pub import_template: &'static str,
    /// Used instead of `import_template` inside one package; `None` when a
    /// package needs no imports of its own members.
    pub same_package_import_template: Option<&'static str>,
    /// Tera: `decorators`, `declaration`, `body`.
    pub class_template: &'static str,
    /// Tera: `name`, `constants` (`name`, `value`).
    pub enum_template: &'static str,

    pub indent: &'static str,
    pub block_open: &'static str,
    pub block_close: Option<&'static str>,
    pub empty_block: Option<&'static str>,
    pub statement_end: &'static str,

    pub use_dataclass_for_models: bool,
    pub need_declare_fields: bool,
    pub is_constructor_in_class_definition: bool,
    pub constructor_also_declare_fields: bool,
    pub needs_hash_code_method: bool,
    pub supports_default_values: bool,
    /// Enums live inside their class; otherwise they are top-level siblings.
    pub nested_enums: bool,

    pub class_keyword: &'static str,
    pub data_class_keyword: &'static str,
    pub static_class_keyword: &'static str,
    pub data_class_decorator: Option<&'static str>,
    /// `{name}`.
    pub extends_clause: &'static str,
    /// `{names}`.
    pub implements_clause: &'static str,
    /// When set, superclass and interfaces form one list, `{list}`.
    pub supertypes_clause: Option<&'static str>,
    /// `{name}`, `{type}`, `{init}`.
    pub field_template: &'static str,
    pub constant_template: &'static str,
    pub parameter_template: &'static str,
    /// Parameter that also declares a field (header or parameter properties).
    pub field_parameter_template: &'static str,
    /// `{value}`.
    pub initializer_template: &'static str,
    /// `{class}`, `{params}`.
    pub constructor_template: &'static str,
    /// `{override}`, `{name}`, `{params}`, `{ret}`.
    pub method_template: &'static str,
    pub static_method_template: &'static str,
    pub override_marker: &'static str,
    pub instance_receiver: Option<&'static str>,
    /// `{owner}` and `{name}`.
    pub enum_reference: &'static str,

    pub native_types: NativeTypeNames,
    /// Wrapper names for nullable primitives and generic arguments.
    pub boxed_types: Option<NativeTypeNames>,
    /// `{item}`.
    pub list_type: &'static str,
    /// `{type}`.
    pub nullable_type: &'static str,
    pub void_type: &'static str,
    pub any_type: &'static str,

    pub self_reference: &'static str,
    pub null_literal: &'static str,
    pub true_literal: &'static str,
    pub false_literal: &'static str,
    /// `{value}`.
    pub non_null_assertion: Option<&'static str>,
    /// `{class}`, `{args}`.
    pub construct_template: &'static str,
    pub named_arguments: bool,
    /// `{object}` and `{name}`, `{object}` may be null.
    pub nullable_member: &'static str,

    pub equality: EqualityForms,
    /// `{fields}`; `None` when the language derives hashing on its own.
    pub hash_code_expression: Option<&'static str>,
    pub hash_code_type: &'static str,

    pub database: DatabaseFragments,
    pub api: ApiFragments,
}

impl LanguageDefinition {
    /// Base name of the file holding class `name`.
    pub fn file_stem(&self, name: &str) -> String {
        if self.snake_case_file_names {
            to_snake_case(name)
        } else {
            name.to_string()
        }
    }

    pub fn file_name(&self, name: &str) -> String {
        format!("{}.{}", self.file_stem(name), self.file_extension)
    }

    /// A complete statement: the fragment plus the statement terminator.
    pub fn statement(&self, code: &str) -> String {
        format!("{code}{}", self.statement_end)
    }

    pub fn return_statement(&self, value: &str) -> String {
        self.statement(&format!("return {value}"))
    }

    pub fn member(&self, object: &str, name: &str) -> String {
        format!("{object}.{name}")
    }

    pub fn self_member(&self, name: &str) -> String {
        self.member(self.self_reference, name)
    }

    pub fn string_literal(&self, value: &str) -> String {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    }

    pub fn bool_literal(&self, value: bool) -> &'static str {
        if value {
            self.true_literal
        } else {
            self.false_literal
        }
    }

    pub fn assert_non_null(&self, value: &str) -> String {
        match self.non_null_assertion {
            Some(template) => fill(template, &[("value", value)]),
            None => value.to_string(),
        }
    }

    /// Call a static member of `class`.
    pub fn static_call(&self, class: &str, method: &str, args: &[String]) -> String {
        format!("{class}.{method}({})", args.join(", "))
    }

    /// Instantiate `class`; `args` are `(parameter name, value)` pairs in
    /// constructor order.
    pub fn construct(&self, class: &str, args: &[(String, String)]) -> String {
        let args: Vec<String> = args
            .iter()
            .map(|(name, value)| {
                if self.named_arguments {
                    format!("{name}={value}")
                } else {
                    value.clone()
                }
            })
            .collect();
        fill(self.construct_template, &[("class", class), ("args", &args.join(", "))])
    }

    pub fn list_literal(&self, items: &[String]) -> String {
        fill(self.database.list_literal, &[("items", &items.join(", "))])
    }
}

/// Substitute `{key}` slots in one pass. Unknown slots and lone braces are
/// copied through, so code fragments with braces survive untouched.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        result.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let replacement = after.find('}').and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (end, *value))
        });

        match replacement {
            Some((end, value)) => {
                result.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                result.push('{');
                rest = after;
            }
        }
    }

    result.push_str(rest);
    result
}
