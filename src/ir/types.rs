use super::Printable;
use crate::error::Result;
use crate::languages::{fill, LanguageDefinition, NativeType};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Native(NativeType),
    /// A generated class, enum, or one of the `Database`/`Row` abstractions.
    Named(String),
    List(Box<TypeDefinition>),
    Void,
    Any,
}

/// A type as it appears in a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDefinition {
    pub kind: TypeKind,
    pub nullable: bool,
}

impl TypeDefinition {
    pub fn native(native: NativeType) -> Self {
        Self {
            kind: TypeKind::Native(native),
            nullable: false,
        }
    }

    pub fn named(name: &str) -> Self {
        Self {
            kind: TypeKind::Named(name.to_string()),
            nullable: false,
        }
    }

    pub fn list(item: TypeDefinition) -> Self {
        Self {
            kind: TypeKind::List(Box::new(item)),
            nullable: false,
        }
    }

    pub fn void() -> Self {
        Self {
            kind: TypeKind::Void,
            nullable: false,
        }
    }

    pub fn any() -> Self {
        Self {
            kind: TypeKind::Any,
            nullable: false,
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn is_list(&self) -> bool {
        matches!(self.kind, TypeKind::List(_))
    }

    /// Every named type this one mentions, list elements included.
    pub fn named_types(&self) -> Vec<&str> {
        match &self.kind {
            TypeKind::Named(name) => vec![name.as_str()],
            TypeKind::List(item) => item.named_types(),
            _ => Vec::new(),
        }
    }

    fn render(&self, language: &LanguageDefinition, generic_argument: bool) -> String {
        let (base, nullability_applied) = match &self.kind {
            TypeKind::Native(native) => match &language.boxed_types {
                Some(boxed) if self.nullable || generic_argument => (boxed.get(*native).to_string(), true),
                _ => (language.native_types.get(*native).to_string(), false),
            },
            TypeKind::Named(name) => (name.clone(), false),
            TypeKind::List(item) => (
                fill(language.list_type, &[("item", &item.render(language, true))]),
                false,
            ),
            TypeKind::Void => return language.void_type.to_string(),
            TypeKind::Any => (language.any_type.to_string(), false),
        };

        if self.nullable && !nullability_applied {
            fill(language.nullable_type, &[("type", &base)])
        } else {
            base
        }
    }
}

impl Printable for TypeDefinition {
    fn print(&self, language: &LanguageDefinition) -> Result<String> {
        Ok(self.render(language, false))
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::languages::SupportedLanguage;
    use test_case::test_case;

    fn print(ty: &TypeDefinition, language: SupportedLanguage) -> String {
        ty.print(language.definition()).unwrap()
    }

    #[test_case(SupportedLanguage::Java, "long", "Long")]
    #[test_case(SupportedLanguage::Kotlin, "Long", "Long?")]
    #[test_case(SupportedLanguage::TypeScript, "number", "number | null")]
    #[test_case(SupportedLanguage::Python, "int", "Optional[int]")]
    fn TypeDefinition___integer___threads_nullability(
        language: SupportedLanguage,
        required: &str,
        optional: &str,
    ) {
        let integer = TypeDefinition::native(NativeType::Integer);

        assert_eq!(print(&integer, language), required);
        assert_eq!(print(&integer.nullable(true), language), optional);
    }

    #[test_case(SupportedLanguage::Java, "List<Long>")]
    #[test_case(SupportedLanguage::Kotlin, "List<Long>")]
    #[test_case(SupportedLanguage::TypeScript, "Array<number>")]
    #[test_case(SupportedLanguage::Python, "List[int]")]
    fn TypeDefinition___list___boxes_generic_arguments(language: SupportedLanguage, expected: &str) {
        let list = TypeDefinition::list(TypeDefinition::native(NativeType::Integer));

        assert_eq!(print(&list, language), expected);
    }

    #[test]
    fn TypeDefinition___void___ignores_nullability() {
        let void = TypeDefinition::void().nullable(true);

        assert_eq!(print(&void, SupportedLanguage::Kotlin), "Unit");
    }

    #[test]
    fn TypeDefinition___named_types___walks_lists() {
        let list = TypeDefinition::list(TypeDefinition::named("Tag"));

        assert_eq!(list.named_types(), ["Tag"]);
        assert!(TypeDefinition::any().named_types().is_empty());
    }
}
