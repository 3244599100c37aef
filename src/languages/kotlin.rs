use super::{
    ApiFragments, DatabaseFragments, EqualityForms, LanguageDefinition, NativeTypeNames,
    SupportedLanguage,
};

const CLASS_TEMPLATE: &str = r#"{% for decorator in decorators %}{{ decorator }}
{% endfor %}{{ declaration }} {
{{ body }}}"#;

const ENUM_TEMPLATE: &str = r#"enum class {{ name }}(val value: String) {
{%- for constant in constants %}
    {{ constant.name }}("{{ constant.value }}"){% if loop.last %};{% else %},{% endif %}
{%- endfor %}

    companion object {
        fun fromValue(value: String?): {{ name }}? = values().firstOrNull { it.value == value }
    }
}"#;

const DATABASE_DECLARATION: &str = r#"interface Database {
    fun execute(sql: String, args: List<Any?>)

    fun query(sql: String, args: List<Any?>): List<Row>
}"#;

const ROW_DECLARATION: &str = r#"interface Row {
    fun getString(column: String): String?

    fun getLong(column: String): Long?

    fun getDouble(column: String): Double?

    fun getBoolean(column: String): Boolean?
}"#;

pub static KOTLIN: LanguageDefinition = LanguageDefinition {
    language: SupportedLanguage::Kotlin,

    file_extension: "kt",
    snake_case_file_names: false,
    package_template: Some("package {package}"),
    prelude: &["import java.util.Objects"],
    import_template: "import {package}.{name}",
    same_package_import_template: None,
    class_template: CLASS_TEMPLATE,
    enum_template: ENUM_TEMPLATE,

    indent: "    ",
    block_open: " {",
    block_close: Some("}"),
    empty_block: None,
    statement_end: "",

    use_dataclass_for_models: true,
    need_declare_fields: false,
    is_constructor_in_class_definition: true,
    constructor_also_declare_fields: true,
    needs_hash_code_method: false,
    supports_default_values: true,
    nested_enums: true,

    class_keyword: "class",
    data_class_keyword: "data class",
    static_class_keyword: "object",
    data_class_decorator: None,
    extends_clause: "{name}()",
    implements_clause: "{names}",
    supertypes_clause: Some(" : {list}"),
    field_template: "var {name}: {type}{init}",
    constant_template: "const val {name}: {type}{init}",
    parameter_template: "{name}: {type}{init}",
    field_parameter_template: "val {name}: {type}{init}",
    initializer_template: " = {value}",
    constructor_template: "constructor({params})",
    method_template: "{override}fun {name}({params}): {ret}",
    static_method_template: "fun {name}({params}): {ret}",
    override_marker: "override ",
    instance_receiver: None,
    enum_reference: "{owner}.{name}",

    native_types: NativeTypeNames {
        string: "String",
        number: "Double",
        integer: "Long",
        boolean: "Boolean",
    },
    boxed_types: None,
    list_type: "List<{item}>",
    nullable_type: "{type}?",
    void_type: "Unit",
    any_type: "Any",

    self_reference: "this",
    null_literal: "null",
    true_literal: "true",
    false_literal: "false",
    non_null_assertion: Some("{value}!!"),
    construct_template: "{class}({args})",
    named_arguments: false,
    nullable_member: "{object}?.{name}",

    equality: EqualityForms {
        method_name: "equals",
        parameter_name: "other",
        guard: &[
            "if (this === other) return true",
            "if (other !is {class}) return false",
            "val that = other",
        ],
        numeric: "this.{name} == that.{name}",
        generic: "Objects.equals(this.{name}, that.{name})",
        object: "(this.{name}?.equals(that.{name}) ?: (that.{name} == null))",
        array: "this.{name}?.toList() == that.{name}?.toList()",
        join: " && ",
    },
    hash_code_expression: None,
    hash_code_type: "Int",

    database: DatabaseFragments {
        row_getters: NativeTypeNames {
            string: "{row}.getString({column})",
            number: "{row}.getDouble({column})",
            integer: "{row}.getLong({column})",
            boolean: "{row}.getBoolean({column})",
        },
        list_literal: "listOf<Any?>({items})",
        split: "{value}?.split(\";\")",
        join: "{value}?.joinToString(\";\")",
        join_ids: "{value}?.joinToString(\";\") { it.id.toString() }",
        map_rows: "{items}.map { row -> {expr} }",
        first_or_null: "{value}.firstOrNull()",
        null_guard: "if ({check} == null) null else {value}",
        enum_from_value: "{type}.fromValue({value})",
        enum_to_value: "{value}?.value",
        for_each: "for ({item} in {items})",
        database_declaration: DATABASE_DECLARATION,
        row_declaration: ROW_DECLARATION,
    },
    api: ApiFragments {
        variable_declaration: "var {name} = {value}",
        if_not_null: "if ({value} != null)",
        to_string: "{value}",
        finish_url: "if ({query}.isEmpty()) {url} else {url} + \"?\" + {query}.substring(1)",
    },
};
