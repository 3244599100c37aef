//! Printable intermediate representation.
//!
//! Class parsers build a tree of these nodes; each node prints itself from a
//! [`LanguageDefinition`] alone. Multi-line declarations (class shell, enums,
//! the file) go through the language's Tera templates, everything else is
//! assembled from the table's string fragments.

pub mod class;
pub mod enums;
pub mod method;
pub mod property;
pub mod statement;
pub mod types;

use crate::error::Result;
use crate::languages::LanguageDefinition;
use tera::{Context, Tera};

pub use class::{print_file, ClassDefinition, Import};
pub use enums::EnumDefinition;
pub use method::{ConstructorDefinition, MethodDefinition};
pub use property::{ParameterDefinition, PropertyDefinition};
pub use statement::Statement;
pub use types::{TypeDefinition, TypeKind};

pub trait Printable {
    fn print(&self, language: &LanguageDefinition) -> Result<String>;
}

pub(crate) fn render(template: &str, context: &Context) -> Result<String> {
    Ok(Tera::one_off(template, context, false)?)
}

/// Prefix every non-empty line with `depth` indentation units.
pub(crate) fn indent_text(text: &str, language: &LanguageDefinition, depth: usize) -> Vec<String> {
    let indent = language.indent.repeat(depth);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{indent}{line}")
            }
        })
        .collect()
}
