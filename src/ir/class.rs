use super::{
    indent_text, render, ConstructorDefinition, EnumDefinition, MethodDefinition, Printable,
    PropertyDefinition,
};
use crate::error::Result;
use crate::languages::{fill, LanguageDefinition, FILE_TEMPLATE};
use std::collections::BTreeSet;
use tera::Context;

/// A type another file declares, plus the class whose file declares it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Import {
    pub package: String,
    pub name: String,
    pub owner: String,
}

impl Import {
    pub fn class(package: &str, name: &str) -> Self {
        Self {
            package: package.to_string(),
            name: name.to_string(),
            owner: name.to_string(),
        }
    }

    /// A type declared in another class's file, such as a hoisted enum.
    pub fn member(package: &str, name: &str, owner: &str) -> Self {
        Self {
            package: package.to_string(),
            name: name.to_string(),
            owner: owner.to_string(),
        }
    }

    /// Split a package-qualified name; bare names need no import.
    pub fn qualified(name: &str) -> Option<Self> {
        let (package, simple) = name.rsplit_once('.')?;
        Some(Self::class(package, simple))
    }

    pub fn print(&self, language: &LanguageDefinition, current_package: &str) -> Option<String> {
        let template = if self.package == current_package {
            language.same_package_import_template?
        } else {
            language.import_template
        };
        Some(fill(
            template,
            &[
                ("package", &self.package),
                ("name", &self.name),
                ("file", &language.file_stem(&self.owner)),
            ],
        ))
    }
}

/// One generated class and everything its file needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassDefinition {
    pub name: String,
    pub package: String,
    pub is_data_class: bool,
    /// Every member is static; no instances, no constructor.
    pub is_static: bool,
    pub inherits_from: Option<String>,
    pub implements: Vec<String>,
    pub imports: Vec<Import>,
    pub constants: Vec<PropertyDefinition>,
    pub properties: Vec<PropertyDefinition>,
    pub constructor: Option<ConstructorDefinition>,
    pub methods: Vec<MethodDefinition>,
    pub enums: Vec<EnumDefinition>,
}

impl ClassDefinition {
    pub fn new(name: &str, package: &str) -> Self {
        Self {
            name: name.to_string(),
            package: package.to_string(),
            ..Self::default()
        }
    }

    pub fn add_import(&mut self, import: Import) {
        if import.name != self.name && !self.imports.contains(&import) {
            self.imports.push(import);
        }
    }

    /// The class body lines, sections separated by blank lines.
    fn body(&self, language: &LanguageDefinition) -> Result<Vec<String>> {
        let data = self.is_data_class && language.use_dataclass_for_models;
        let print_fields = (data && !language.is_constructor_in_class_definition)
            || (!data && language.need_declare_fields);
        let explicit_constructor =
            !data && !self.is_static && !language.is_constructor_in_class_definition;

        let mut sections: Vec<Vec<String>> = Vec::new();

        let mut constants = Vec::new();
        for constant in &self.constants {
            constants.extend(indent_text(&constant.print(language)?, language, 1));
        }
        sections.push(constants);

        if print_fields {
            let mut fields = Vec::new();
            for property in &self.properties {
                fields.extend(indent_text(&property.print(language)?, language, 1));
            }
            sections.push(fields);
        }

        if explicit_constructor {
            if let Some(constructor) = &self.constructor {
                let mut lines = Vec::new();
                constructor.to_statement(language)?.print_lines(language, 1, &mut lines);
                sections.push(lines);
            }
        }

        for method in &self.methods {
            let mut lines = Vec::new();
            method.to_statement(language)?.print_lines(language, 1, &mut lines);
            sections.push(lines);
        }

        if language.nested_enums {
            for definition in &self.enums {
                sections.push(indent_text(&definition.print(language)?, language, 1));
            }
        }

        let mut body = Vec::new();
        for section in sections.into_iter().filter(|s| !s.is_empty()) {
            if !body.is_empty() {
                body.push(String::new());
            }
            body.extend(section);
        }
        Ok(body)
    }

    fn declaration(&self, language: &LanguageDefinition) -> Result<String> {
        let data = self.is_data_class && language.use_dataclass_for_models;
        let keyword = if self.is_static {
            language.static_class_keyword
        } else if data {
            language.data_class_keyword
        } else {
            language.class_keyword
        };

        let header_constructor = match &self.constructor {
            Some(constructor) if language.is_constructor_in_class_definition && !self.is_static => {
                format!("({})", constructor.header_parameters(language)?)
            }
            _ => String::new(),
        };

        Ok(format!(
            "{keyword} {}{header_constructor}{}",
            self.name,
            self.supertypes(language)
        ))
    }

    fn supertypes(&self, language: &LanguageDefinition) -> String {
        let superclass = self
            .inherits_from
            .as_deref()
            .map(|name| fill(language.extends_clause, &[("name", simple_name(name))]));
        let interfaces: Vec<&str> = self.implements.iter().map(|name| simple_name(name)).collect();

        match language.supertypes_clause {
            Some(clause) => {
                let mut list: Vec<String> = superclass.into_iter().collect();
                list.extend(interfaces.iter().map(|name| name.to_string()));
                if list.is_empty() {
                    String::new()
                } else {
                    fill(clause, &[("list", &list.join(", "))])
                }
            }
            None => {
                let mut clause = superclass.unwrap_or_default();
                if !interfaces.is_empty() {
                    clause.push_str(&fill(
                        language.implements_clause,
                        &[("names", &interfaces.join(", "))],
                    ));
                }
                clause
            }
        }
    }

    fn import_lines(&self, language: &LanguageDefinition) -> Vec<String> {
        let mut imports: BTreeSet<Import> = self.imports.iter().cloned().collect();
        let supertypes = self.inherits_from.iter().chain(self.implements.iter());
        imports.extend(supertypes.filter_map(|name| Import::qualified(name)));

        let mut lines: Vec<String> = language.prelude.iter().map(|line| line.to_string()).collect();
        let mut printed: Vec<String> = imports
            .iter()
            .filter(|import| import.name != self.name)
            .filter_map(|import| import.print(language, &self.package))
            .collect();
        printed.dedup();
        lines.extend(printed);
        lines
    }
}

impl Printable for ClassDefinition {
    /// The complete file: package line, imports, then the class wrapped in the
    /// language's class template, with sibling enums around it.
    fn print(&self, language: &LanguageDefinition) -> Result<String> {
        let body = self.body(language)?;
        let body = if body.is_empty() {
            String::new()
        } else {
            format!("{}\n", body.join("\n"))
        };

        let decorators: Vec<&str> = if self.is_data_class && language.use_dataclass_for_models {
            language.data_class_decorator.into_iter().collect()
        } else {
            Vec::new()
        };

        let mut context = Context::new();
        context.insert("decorators", &decorators);
        context.insert("declaration", &self.declaration(language)?);
        context.insert("body", &body);
        let class = render(language.class_template, &context)?;

        let mut declarations = Vec::new();
        if !language.nested_enums {
            for definition in &self.enums {
                declarations.push(definition.print(language)?);
            }
        }
        declarations.push(class.trim_end().to_string());

        print_file(language, &self.package, self.import_lines(language), &declarations)
    }
}

/// Lay out one source file around already-printed declarations.
pub fn print_file(
    language: &LanguageDefinition,
    package: &str,
    imports: Vec<String>,
    declarations: &[String],
) -> Result<String> {
    let package_line = match language.package_template {
        Some(template) if !package.is_empty() => fill(template, &[("package", package)]),
        _ => String::new(),
    };

    let mut context = Context::new();
    context.insert("package", &package_line);
    context.insert("imports", &imports);
    context.insert("declarations", declarations);
    render(FILE_TEMPLATE, &context)
}

fn simple_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

#[cfg(test)]
#[path = "class/class_tests.rs"]
mod class_tests;
