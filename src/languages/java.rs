use super::{
    ApiFragments, DatabaseFragments, EqualityForms, LanguageDefinition, NativeTypeNames,
    SupportedLanguage,
};

const CLASS_TEMPLATE: &str = r#"{% for decorator in decorators %}{{ decorator }}
{% endfor %}{{ declaration }} {
{{ body }}}"#;

const ENUM_TEMPLATE: &str = r#"public enum {{ name }} {
{%- for constant in constants %}
    {{ constant.name }}("{{ constant.value }}"){% if loop.last %};{% else %},{% endif %}
{%- endfor %}

    public final String value;

    {{ name }}(String value) {
        this.value = value;
    }

    public static {{ name }} fromValue(String value) {
        for ({{ name }} item : values()) {
            if (item.value.equals(value)) return item;
        }
        return null;
    }
}"#;

const DATABASE_DECLARATION: &str = r#"public interface Database {
    void execute(String sql, List<Object> args);

    List<Row> query(String sql, List<Object> args);
}"#;

const ROW_DECLARATION: &str = r#"public interface Row {
    String getString(String column);

    Long getLong(String column);

    Double getDouble(String column);

    Boolean getBoolean(String column);
}"#;

pub static JAVA: LanguageDefinition = LanguageDefinition {
    language: SupportedLanguage::Java,

    file_extension: "java",
    snake_case_file_names: false,
    package_template: Some("package {package};"),
    prelude: &["import java.util.*;", "import java.util.stream.*;"],
    import_template: "import {package}.{name};",
    same_package_import_template: None,
    class_template: CLASS_TEMPLATE,
    enum_template: ENUM_TEMPLATE,

    indent: "    ",
    block_open: " {",
    block_close: Some("}"),
    empty_block: None,
    statement_end: ";",

    use_dataclass_for_models: false,
    need_declare_fields: true,
    is_constructor_in_class_definition: false,
    constructor_also_declare_fields: false,
    needs_hash_code_method: true,
    supports_default_values: false,
    nested_enums: true,

    class_keyword: "public class",
    data_class_keyword: "public class",
    static_class_keyword: "public final class",
    data_class_decorator: None,
    extends_clause: " extends {name}",
    implements_clause: " implements {names}",
    supertypes_clause: None,
    field_template: "public {type} {name}{init};",
    constant_template: "public static final {type} {name}{init};",
    parameter_template: "{type} {name}",
    field_parameter_template: "{type} {name}",
    initializer_template: " = {value}",
    constructor_template: "public {class}({params})",
    method_template: "{override}public {ret} {name}({params})",
    static_method_template: "public static {ret} {name}({params})",
    override_marker: "@Override\n",
    instance_receiver: None,
    enum_reference: "{owner}.{name}",

    native_types: NativeTypeNames {
        string: "String",
        number: "double",
        integer: "long",
        boolean: "boolean",
    },
    boxed_types: Some(NativeTypeNames {
        string: "String",
        number: "Double",
        integer: "Long",
        boolean: "Boolean",
    }),
    list_type: "List<{item}>",
    nullable_type: "{type}",
    void_type: "void",
    any_type: "Object",

    self_reference: "this",
    null_literal: "null",
    true_literal: "true",
    false_literal: "false",
    non_null_assertion: None,
    construct_template: "new {class}({args})",
    named_arguments: false,
    nullable_member: "({object} == null ? null : {object}.{name})",

    equality: EqualityForms {
        method_name: "equals",
        parameter_name: "other",
        guard: &[
            "if (this == other) return true;",
            "if (!(other instanceof {class})) return false;",
            "{class} that = ({class}) other;",
        ],
        numeric: "Objects.equals(this.{name}, that.{name})",
        generic: "Objects.equals(this.{name}, that.{name})",
        object: "Objects.equals(this.{name}, that.{name})",
        array: "Objects.deepEquals(this.{name}, that.{name})",
        join: " && ",
    },
    hash_code_expression: Some("Objects.hash({fields})"),
    hash_code_type: "int",

    database: DatabaseFragments {
        row_getters: NativeTypeNames {
            string: "{row}.getString({column})",
            number: "{row}.getDouble({column})",
            integer: "{row}.getLong({column})",
            boolean: "{row}.getBoolean({column})",
        },
        list_literal: "Arrays.<Object>asList({items})",
        split: "({value} == null ? null : Arrays.asList({value}.split(\";\")))",
        join: "({value} == null ? null : String.join(\";\", {value}))",
        join_ids: "({value} == null ? null : {value}.stream().map(e -> String.valueOf(e.id)).collect(Collectors.joining(\";\")))",
        map_rows: "{items}.stream().map(row -> {expr}).collect(Collectors.toList())",
        first_or_null: "{value}.stream().findFirst().orElse(null)",
        null_guard: "{check} == null ? null : {value}",
        enum_from_value: "{type}.fromValue({value})",
        enum_to_value: "({value} == null ? null : {value}.value)",
        for_each: "for ({type} {item} : {items})",
        database_declaration: DATABASE_DECLARATION,
        row_declaration: ROW_DECLARATION,
    },
    api: ApiFragments {
        variable_declaration: "var {name} = {value}",
        if_not_null: "if ({value} != null)",
        to_string: "{value}",
        finish_url: "{query}.isEmpty() ? {url} : {url} + \"?\" + {query}.substring(1)",
    },
};
