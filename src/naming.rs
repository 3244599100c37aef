//! Naming convention utilities shared by the graph builder, the path converter
//! and the class parsers.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `word` | [`capitalize`] | `Word` |
//! | `Word` | [`lower_first`] | `word` |
//! | `user-name` | [`to_pascal_case`] | `UserName` |
//! | `PetCategory` | [`to_snake_case`] | `pet_category` |
//! | `petCategory` | [`to_upper_snake_case`] | `PET_CATEGORY` |

/// Capitalize the first letter of a string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first letter of a string.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string separated by `-`, `_`, `.` or spaces to PascalCase.
///
/// Already-capitalized words keep their inner casing, so `userId` becomes
/// `UserId`.
pub fn to_pascal_case(s: &str) -> String {
    s.split(['-', '_', '.', ' '])
        .map(capitalize)
        .collect()
}

/// Convert camelCase or PascalCase to snake_case.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut previous_lower = false;

    for c in s.chars() {
        if c == '-' || c == ' ' || c == '.' {
            result.push('_');
            previous_lower = false;
        } else if c.is_uppercase() {
            if previous_lower {
                result.push('_');
            }
            result.extend(c.to_lowercase());
            previous_lower = false;
        } else {
            result.push(c);
            previous_lower = c.is_lowercase() || c.is_ascii_digit();
        }
    }

    result
}

/// Convert camelCase or PascalCase to SCREAMING_SNAKE_CASE.
pub fn to_upper_snake_case(s: &str) -> String {
    to_snake_case(s).to_uppercase()
}

/// Turn an arbitrary enum value into an identifier usable as an enum constant.
pub fn to_enum_constant(value: &str) -> String {
    let mut constant: String = to_upper_snake_case(value)
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    if constant.is_empty() || constant.starts_with(|c: char| c.is_ascii_digit()) {
        constant.insert(0, '_');
    }

    constant
}
