use super::{
    ApiFragments, DatabaseFragments, EqualityForms, LanguageDefinition, NativeTypeNames,
    SupportedLanguage,
};

const CLASS_TEMPLATE: &str = r#"{% for decorator in decorators %}{{ decorator }}
{% endfor %}{{ declaration }} {
{{ body }}}"#;

const ENUM_TEMPLATE: &str = r#"export enum {{ name }} {
{%- for constant in constants %}
    {{ constant.name }} = "{{ constant.value }}",
{%- endfor %}
}"#;

const DATABASE_DECLARATION: &str = r#"export interface Database {
    execute(sql: string, args: unknown[]): void;

    query(sql: string, args: unknown[]): Row[];
}"#;

const ROW_DECLARATION: &str = r#"export interface Row {
    getString(column: string): string | null;

    getNumber(column: string): number | null;

    getBoolean(column: string): boolean | null;
}"#;

pub static TYPESCRIPT: LanguageDefinition = LanguageDefinition {
    language: SupportedLanguage::TypeScript,

    file_extension: "ts",
    snake_case_file_names: false,
    package_template: None,
    prelude: &[],
    import_template: "import { {name} } from \"{package}/{file}\";",
    same_package_import_template: Some("import { {name} } from \"./{file}\";"),
    class_template: CLASS_TEMPLATE,
    enum_template: ENUM_TEMPLATE,

    indent: "    ",
    block_open: " {",
    block_close: Some("}"),
    empty_block: None,
    statement_end: ";",

    use_dataclass_for_models: false,
    need_declare_fields: false,
    is_constructor_in_class_definition: false,
    constructor_also_declare_fields: true,
    needs_hash_code_method: false,
    supports_default_values: true,
    nested_enums: false,

    class_keyword: "export class",
    data_class_keyword: "export class",
    static_class_keyword: "export class",
    data_class_decorator: None,
    extends_clause: " extends {name}",
    implements_clause: " implements {names}",
    supertypes_clause: None,
    field_template: "{name}: {type}{init};",
    constant_template: "static readonly {name}: {type}{init};",
    parameter_template: "{name}: {type}{init}",
    field_parameter_template: "public {name}: {type}{init}",
    initializer_template: " = {value}",
    constructor_template: "constructor({params})",
    method_template: "{override}{name}({params}): {ret}",
    static_method_template: "static {name}({params}): {ret}",
    override_marker: "",
    instance_receiver: None,
    enum_reference: "{name}",

    native_types: NativeTypeNames {
        string: "string",
        number: "number",
        integer: "number",
        boolean: "boolean",
    },
    boxed_types: None,
    list_type: "Array<{item}>",
    nullable_type: "{type} | null",
    void_type: "void",
    any_type: "unknown",

    self_reference: "this",
    null_literal: "null",
    true_literal: "true",
    false_literal: "false",
    non_null_assertion: Some("{value}!"),
    construct_template: "new {class}({args})",
    named_arguments: false,
    nullable_member: "{object}?.{name}",

    equality: EqualityForms {
        method_name: "equals",
        parameter_name: "other",
        guard: &[
            "if (this === other) return true;",
            "if (!(other instanceof {class})) return false;",
            "const that = other;",
        ],
        numeric: "this.{name} === that.{name}",
        generic: "this.{name} === that.{name}",
        object: "(this.{name} === that.{name} || (this.{name} != null && this.{name}.equals(that.{name})))",
        array: "JSON.stringify(this.{name}) === JSON.stringify(that.{name})",
        join: " && ",
    },
    hash_code_expression: None,
    hash_code_type: "number",

    database: DatabaseFragments {
        row_getters: NativeTypeNames {
            string: "{row}.getString({column})",
            number: "{row}.getNumber({column})",
            integer: "{row}.getNumber({column})",
            boolean: "{row}.getBoolean({column})",
        },
        list_literal: "[{items}]",
        split: "({value}?.split(\";\") ?? null)",
        join: "({value}?.join(\";\") ?? null)",
        join_ids: "({value}?.map((e) => String(e.id)).join(\";\") ?? null)",
        map_rows: "{items}.map((row) => {expr})",
        first_or_null: "({value}[0] ?? null)",
        null_guard: "{check} == null ? null : {value}",
        enum_from_value: "({value} as {type} | null)",
        enum_to_value: "{value}",
        for_each: "for (const {item} of {items})",
        database_declaration: DATABASE_DECLARATION,
        row_declaration: ROW_DECLARATION,
    },
    api: ApiFragments {
        variable_declaration: "let {name} = {value}",
        if_not_null: "if ({value} != null)",
        to_string: "{value}",
        finish_url: "{query} === \"\" ? {url} : {url} + \"?\" + {query}.substring(1)",
    },
};
