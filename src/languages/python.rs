use super::{
    ApiFragments, DatabaseFragments, EqualityForms, LanguageDefinition, NativeTypeNames,
    SupportedLanguage,
};

const CLASS_TEMPLATE: &str = r#"{% for decorator in decorators %}{{ decorator }}
{% endfor %}{{ declaration }}:
{% if body %}{{ body }}{% else %}    pass
{% endif %}"#;

const ENUM_TEMPLATE: &str = r#"class {{ name }}(Enum):
{%- for constant in constants %}
    {{ constant.name }} = "{{ constant.value }}"
{%- endfor %}"#;

const DATABASE_DECLARATION: &str = r#"class Database(Protocol):
    def execute(self, sql: str, args: List[Any]) -> None: ...

    def query(self, sql: str, args: List[Any]) -> List[Row]: ..."#;

const ROW_DECLARATION: &str = r#"class Row(Protocol):
    def __getitem__(self, column: str) -> Any: ..."#;

pub static PYTHON: LanguageDefinition = LanguageDefinition {
    language: SupportedLanguage::Python,

    file_extension: "py",
    snake_case_file_names: true,
    package_template: None,
    prelude: &[
        "from __future__ import annotations",
        "from dataclasses import dataclass",
        "from enum import Enum",
        "from typing import Any, List, Optional, Protocol",
    ],
    import_template: "from {package}.{file} import {name}",
    same_package_import_template: Some("from {package}.{file} import {name}"),
    class_template: CLASS_TEMPLATE,
    enum_template: ENUM_TEMPLATE,

    indent: "    ",
    block_open: ":",
    block_close: None,
    empty_block: Some("pass"),
    statement_end: "",

    use_dataclass_for_models: true,
    need_declare_fields: false,
    is_constructor_in_class_definition: false,
    constructor_also_declare_fields: false,
    needs_hash_code_method: false,
    supports_default_values: true,
    nested_enums: false,

    class_keyword: "class",
    data_class_keyword: "class",
    static_class_keyword: "class",
    data_class_decorator: Some("@dataclass(kw_only=True)"),
    extends_clause: "{name}",
    implements_clause: "{names}",
    supertypes_clause: Some("({list})"),
    field_template: "{name}: {type}{init}",
    constant_template: "{name}: {type}{init}",
    parameter_template: "{name}: {type}{init}",
    field_parameter_template: "{name}: {type}{init}",
    initializer_template: " = {value}",
    constructor_template: "def __init__({params}) -> None",
    method_template: "{override}def {name}({params}) -> {ret}",
    static_method_template: "@staticmethod\ndef {name}({params}) -> {ret}",
    override_marker: "",
    instance_receiver: Some("self"),
    enum_reference: "{name}",

    native_types: NativeTypeNames {
        string: "str",
        number: "float",
        integer: "int",
        boolean: "bool",
    },
    boxed_types: None,
    list_type: "List[{item}]",
    nullable_type: "Optional[{type}]",
    void_type: "None",
    any_type: "Any",

    self_reference: "self",
    null_literal: "None",
    true_literal: "True",
    false_literal: "False",
    non_null_assertion: None,
    construct_template: "{class}({args})",
    named_arguments: true,
    nullable_member: "({object}.{name} if {object} is not None else None)",

    equality: EqualityForms {
        method_name: "__eq__",
        parameter_name: "other",
        guard: &[
            "if self is other:\n    return True",
            "if not isinstance(other, {class}):\n    return False",
            "that = other",
        ],
        numeric: "self.{name} == that.{name}",
        generic: "self.{name} == that.{name}",
        object: "self.{name} == that.{name}",
        array: "list(self.{name} or []) == list(that.{name} or [])",
        join: " and ",
    },
    hash_code_expression: None,
    hash_code_type: "int",

    database: DatabaseFragments {
        row_getters: NativeTypeNames {
            string: "{row}[{column}]",
            number: "{row}[{column}]",
            integer: "{row}[{column}]",
            boolean: "{row}[{column}]",
        },
        list_literal: "[{items}]",
        split: "({value}.split(\";\") if {value} is not None else None)",
        join: "(\";\".join({value}) if {value} is not None else None)",
        join_ids: "(\";\".join(str(e.id) for e in {value}) if {value} is not None else None)",
        map_rows: "[{expr} for row in {items}]",
        first_or_null: "next(iter({value}), None)",
        null_guard: "None if {check} is None else {value}",
        enum_from_value: "({type}({value}) if {value} is not None else None)",
        enum_to_value: "({value}.value if {value} is not None else None)",
        for_each: "for {item} in {items}",
        database_declaration: DATABASE_DECLARATION,
        row_declaration: ROW_DECLARATION,
    },
    api: ApiFragments {
        variable_declaration: "{name} = {value}",
        if_not_null: "if {value} is not None",
        to_string: "str({value})",
        finish_url: "{url} + \"?\" + {query}[1:] if {query} else {url}",
    },
};
