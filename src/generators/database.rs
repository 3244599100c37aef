//! Table-schema classes: one static class per table-backed definition with
//! column constants, DDL, CRUD and relationship navigation.
//!
//! Storage layout:
//!
//! | Property | Column |
//! |----------|--------|
//! | native or enum | one column, see [`column_type`] |
//! | `string[]` | one `TEXT` column, values joined with `;` |
//! | object without a table | its fields as `<property>_<field>` columns |
//! | object with a table (ONE_TO_ONE) | the referenced id |
//! | array of table objects (ONE_TO_N) | `TEXT` column of `;`-joined ids |
//! | array of table objects (N_TO_ONE) | nothing; the child holds the foreign key |

use super::{enum_name, ClassParser, DATABASE_TYPE, ROW_TYPE};
use crate::config::ClassKindSettings;
use crate::error::Result;
use crate::ir::{
    ClassDefinition, Import, MethodDefinition, ParameterDefinition, Printable, PropertyDefinition,
    Statement, TypeDefinition,
};
use crate::languages::{fill, LanguageDefinition, NativeType};
use crate::naming::{to_snake_case, to_upper_snake_case};
use crate::schema_processor::{
    foreign_key_name, DefinitionGraph, DefinitionHelper, DefinitionPropertyHelper, Relationship,
    ID_PROPERTY,
};
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::{debug, warn};

const DB: &str = "db";
const ROW: &str = "row";
const ROWS: &str = "rows";
const ITEM: &str = "item";
const ITEMS: &str = "items";

/// SQLite keywords; a table or column carrying one of these names is quoted.
static SQL_KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "ABORT", "ACTION", "ADD", "AFTER", "ALL", "ALTER", "ALWAYS", "ANALYZE", "AND", "AS", "ASC",
        "ATTACH", "AUTOINCREMENT", "BEFORE", "BEGIN", "BETWEEN", "BY", "CASCADE", "CASE", "CAST",
        "CHECK", "COLLATE", "COLUMN", "COMMIT", "CONFLICT", "CONSTRAINT", "CREATE", "CROSS",
        "CURRENT", "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP", "DATABASE", "DEFAULT",
        "DEFERRABLE", "DEFERRED", "DELETE", "DESC", "DETACH", "DISTINCT", "DO", "DROP", "EACH",
        "ELSE", "END", "ESCAPE", "EXCEPT", "EXCLUDE", "EXCLUSIVE", "EXISTS", "EXPLAIN", "FAIL",
        "FILTER", "FIRST", "FOLLOWING", "FOR", "FOREIGN", "FROM", "FULL", "GENERATED", "GLOB",
        "GROUP", "GROUPS", "HAVING", "IF", "IGNORE", "IMMEDIATE", "IN", "INDEX", "INDEXED",
        "INITIALLY", "INNER", "INSERT", "INSTEAD", "INTERSECT", "INTO", "IS", "ISNULL", "JOIN",
        "KEY", "LAST", "LEFT", "LIKE", "LIMIT", "MATCH", "MATERIALIZED", "NATURAL", "NO", "NOT",
        "NOTHING", "NOTNULL", "NULL", "NULLS", "OF", "OFFSET", "ON", "OR", "ORDER", "OTHERS",
        "OUTER", "OVER", "PARTITION", "PLAN", "PRAGMA", "PRECEDING", "PRIMARY", "QUERY", "RAISE",
        "RANGE", "RECURSIVE", "REFERENCES", "REGEXP", "REINDEX", "RELEASE", "RENAME", "REPLACE",
        "RESTRICT", "RETURNING", "RIGHT", "ROLLBACK", "ROW", "ROWS", "SAVEPOINT", "SELECT", "SET",
        "TABLE", "TEMP", "TEMPORARY", "THEN", "TIES", "TO", "TRANSACTION", "TRIGGER", "UNBOUNDED",
        "UNION", "UNIQUE", "UPDATE", "USING", "VACUUM", "VALUES", "VIEW", "VIRTUAL", "WHEN",
        "WHERE", "WINDOW", "WITH", "WITHOUT",
    ]
    .into_iter()
    .collect()
});

/// A table or column name as written inside SQL text.
pub fn sql_identifier(name: &str) -> String {
    if SQL_KEYWORDS.contains(name.to_ascii_uppercase().as_str()) {
        format!("\"{name}\"")
    } else {
        name.to_string()
    }
}

/// SQL column type of a scalar; `None` for anything without a mapping.
pub fn column_type(is_enum: bool, type_name: &str) -> Option<&'static str> {
    if is_enum {
        return Some("TEXT");
    }
    match type_name {
        "string" => Some("TEXT"),
        "number" => Some("REAL"),
        "integer" | "boolean" => Some("INTEGER"),
        _ => None,
    }
}

/// One column of a `CREATE TABLE` statement.
pub fn column_definition(name: &str, sql_type: &str, is_id: bool, required: bool) -> String {
    let name = sql_identifier(name);
    if is_id {
        format!("{name} {sql_type} NOT NULL PRIMARY KEY")
    } else if required {
        format!("{name} {sql_type} NOT NULL")
    } else {
        format!("{name} {sql_type}")
    }
}

pub fn table_name(definition: &str) -> String {
    to_snake_case(definition)
}

pub fn schema_class_name(definition: &str) -> String {
    format!("{definition}TableSchema")
}

fn column_constant(column: &str) -> String {
    format!("{}_FIELD", to_upper_snake_case(column))
}

/// How one property is persisted.
enum Storage<'g> {
    Scalar { native: NativeType, is_enum: bool },
    StringList,
    Flattened(&'g DefinitionHelper),
    ForeignKey { target: &'g DefinitionHelper, id: NativeType },
    IdList(&'g DefinitionHelper),
    Navigation { target: &'g DefinitionHelper, owner: String },
    Unsupported(&'static str),
}

struct Column {
    name: String,
    constant: String,
    sql_type: &'static str,
    is_id: bool,
    required: bool,
    /// Expression producing the stored value from the item being written.
    value: String,
}

pub struct DatabaseTableSchemaClassParser<'a> {
    definition: &'a DefinitionHelper,
    graph: &'a DefinitionGraph,
    language: &'a LanguageDefinition,
    settings: &'a ClassKindSettings,
    model_settings: &'a ClassKindSettings,
}

impl<'a> DatabaseTableSchemaClassParser<'a> {
    pub fn new(
        definition: &'a DefinitionHelper,
        graph: &'a DefinitionGraph,
        language: &'a LanguageDefinition,
        settings: &'a ClassKindSettings,
        model_settings: &'a ClassKindSettings,
    ) -> Self {
        Self {
            definition,
            graph,
            language,
            settings,
            model_settings,
        }
    }

    fn schema(&self) -> String {
        schema_class_name(&self.definition.name)
    }

    fn table(&self) -> String {
        table_name(&self.definition.name)
    }

    fn constant_reference(&self, constant: &str) -> String {
        format!("{}.{constant}", self.schema())
    }

    fn model_type(&self) -> TypeDefinition {
        TypeDefinition::named(&self.definition.name)
    }

    fn storage(&self, owner: &DefinitionHelper, property: &DefinitionPropertyHelper) -> Result<Storage<'a>> {
        let graph: &'a DefinitionGraph = self.graph;
        let declared = &property.property_type;
        let element = declared.element();

        if element.is_enum {
            if declared.is_array() {
                return Ok(Storage::Unsupported("array of enums"));
            }
            return Ok(Storage::Scalar {
                native: NativeType::String,
                is_enum: property.enum_values().is_some(),
            });
        }

        if let Some(native) = NativeType::from_name(&element.name) {
            return Ok(match (declared.is_array(), native) {
                (false, native) => Storage::Scalar {
                    native,
                    is_enum: false,
                },
                (true, NativeType::String) => Storage::StringList,
                (true, _) => Storage::Unsupported("array of non-string primitives"),
            });
        }

        let target = graph.require(&element.name)?;
        if !target.needs_table {
            if declared.is_array() {
                return Ok(Storage::Unsupported("array of objects without a table"));
            }
            return Ok(Storage::Flattened(target));
        }

        if declared.is_array() {
            let back_reference = target
                .references
                .iter()
                .any(|edge| edge.relationship == Relationship::NToOne && edge.definition == owner.name);
            return Ok(if back_reference {
                Storage::Navigation {
                    target,
                    owner: owner.name.clone(),
                }
            } else {
                Storage::IdList(target)
            });
        }

        Ok(match id_type(target) {
            Some(id) => Storage::ForeignKey { target, id },
            None => Storage::Unsupported("referenced id is not a primitive"),
        })
    }

    fn row_value(&self, native: NativeType, constant: &str) -> String {
        fill(
            self.language.database.row_getters.get(native),
            &[("row", ROW), ("column", &self.constant_reference(constant))],
        )
    }

    /// Printed reference to the enum of `property` on `owner`, importing it.
    fn enum_reference(&self, owner: &DefinitionHelper, property: &str, imports: &mut Vec<Import>) -> String {
        let name = enum_name(&owner.name, property);
        let package = &self.model_settings.package;
        if self.language.nested_enums {
            imports.push(Import::class(package, &owner.name));
        } else {
            imports.push(Import::member(package, &name, &owner.name));
        }
        fill(self.language.enum_reference, &[("owner", &owner.name), ("name", &name)])
    }

    fn collect_columns(
        &self,
        definition: &DefinitionHelper,
        prefix: &str,
        object: &str,
        object_nullable: bool,
        object_required: bool,
        columns: &mut Vec<Column>,
    ) -> Result<()> {
        let language = self.language;
        let fragments = &language.database;

        for property in &definition.properties {
            let name = format!("{prefix}{}", to_snake_case(&property.name));
            let member = if object_nullable {
                fill(language.nullable_member, &[("object", object), ("name", &property.name)])
            } else {
                language.member(object, &property.name)
            };

            let required = object_required && property.required;
            let (sql_type, value) = match self.storage(definition, property)? {
                Storage::Scalar { is_enum, .. } => {
                    let type_name = property.property_type.element().name.as_str();
                    let Some(sql_type) = column_type(is_enum, type_name) else {
                        warn!(definition = %definition.name, property = %property.name, "no column type, skipping");
                        continue;
                    };
                    let value = if is_enum {
                        fill(fragments.enum_to_value, &[("value", &member)])
                    } else {
                        member
                    };
                    (sql_type, value)
                }
                Storage::StringList => ("TEXT", fill(fragments.join, &[("value", &member)])),
                Storage::Flattened(nested) => {
                    let prefix = format!("{name}_");
                    self.collect_columns(nested, &prefix, &member, true, required, columns)?;
                    continue;
                }
                Storage::ForeignKey { target, id } => {
                    let Some(sql_type) = column_type(false, native_name(id)) else {
                        continue;
                    };
                    debug!(column = %name, target = %target.name, "foreign key column");
                    let value = fill(language.nullable_member, &[("object", &member), ("name", ID_PROPERTY)]);
                    (sql_type, value)
                }
                Storage::IdList(_) => ("TEXT", fill(fragments.join_ids, &[("value", &member)])),
                Storage::Navigation { .. } => continue,
                Storage::Unsupported(reason) => {
                    warn!(definition = %definition.name, property = %property.name, reason, "property not stored");
                    continue;
                }
            };

            columns.push(Column {
                constant: column_constant(&name),
                is_id: property.name == ID_PROPERTY,
                required,
                sql_type,
                value,
                name,
            });
        }
        Ok(())
    }

    /// Expression rebuilding `property` of `owner` from the current row.
    fn read_value(
        &self,
        owner: &DefinitionHelper,
        property: &DefinitionPropertyHelper,
        prefix: &str,
        imports: &mut Vec<Import>,
    ) -> Result<String> {
        let language = self.language;
        let fragments = &language.database;
        let column = format!("{prefix}{}", to_snake_case(&property.name));
        let constant = column_constant(&column);

        let value = match self.storage(owner, property)? {
            Storage::Scalar { native, is_enum } => {
                let raw = self.row_value(native, &constant);
                if is_enum {
                    let enum_type = self.enum_reference(owner, &property.name, imports);
                    fill(fragments.enum_from_value, &[("type", &enum_type), ("value", &raw)])
                } else {
                    raw
                }
            }
            Storage::StringList => fill(
                fragments.split,
                &[("value", &self.row_value(NativeType::String, &constant))],
            ),
            Storage::Flattened(nested) => {
                imports.push(Import::class(&self.model_settings.package, &nested.name));
                let prefix = format!("{column}_");
                let mut args = Vec::with_capacity(nested.properties.len());
                for field in &nested.properties {
                    args.push((field.name.clone(), self.read_value(nested, field, &prefix, imports)?));
                }
                let constructed = language.construct(&nested.name, &args);
                if property.required {
                    return Ok(constructed);
                }
                return Ok(match self.presence_check(nested, &prefix)? {
                    Some(check) => fill(fragments.null_guard, &[("check", &check), ("value", &constructed)]),
                    None => constructed,
                });
            }
            Storage::ForeignKey { target, id } => {
                let schema = schema_class_name(&target.name);
                imports.push(Import::class(&self.settings.package, &schema));
                language.static_call(&schema, "selectById", &[DB.to_string(), self.row_value(id, &constant)])
            }
            Storage::IdList(target) => {
                let schema = schema_class_name(&target.name);
                imports.push(Import::class(&self.settings.package, &schema));
                return Ok(language.static_call(
                    &schema,
                    "selectAllIdsInList",
                    &[DB.to_string(), self.row_value(NativeType::String, &constant)],
                ));
            }
            Storage::Navigation { target, owner: parent } => {
                let schema = schema_class_name(&target.name);
                imports.push(Import::class(&self.settings.package, &schema));
                let id = id_type(self.definition).unwrap_or(NativeType::String);
                return Ok(language.static_call(
                    &schema,
                    &format!("selectBy{parent}Id"),
                    &[DB.to_string(), self.row_value(id, &column_constant(ID_PROPERTY))],
                ));
            }
            Storage::Unsupported(_) => return Ok(language.null_literal.to_string()),
        };

        Ok(if property.required {
            language.assert_non_null(&value)
        } else {
            value
        })
    }

    /// A column that is null exactly when the flattened object was null: the
    /// first column of a required field. `None` when every field is optional.
    fn presence_check(&self, nested: &DefinitionHelper, prefix: &str) -> Result<Option<String>> {
        for field in nested.properties.iter().filter(|field| field.required) {
            let column = format!("{prefix}{}", to_snake_case(&field.name));
            let native = match self.storage(nested, field)? {
                Storage::Scalar { native, .. } => native,
                Storage::StringList | Storage::IdList(_) => NativeType::String,
                Storage::ForeignKey { id, .. } => id,
                Storage::Flattened(inner) => match self.presence_check(inner, &format!("{column}_"))? {
                    Some(check) => return Ok(Some(check)),
                    None => continue,
                },
                Storage::Navigation { .. } | Storage::Unsupported(_) => continue,
            };
            return Ok(Some(self.row_value(native, &column_constant(&column))));
        }
        Ok(None)
    }

    fn execute(&self, sql: &str, args: &[String]) -> Statement {
        let language = self.language;
        Statement::line(language.statement(&format!(
            "{DB}.execute({}, {})",
            language.string_literal(sql),
            language.list_literal(args)
        )))
    }

    /// `return <Schema>.select(db, "<where>", [args])`
    fn select_where(&self, clause: &str, args: &[String]) -> Statement {
        let language = self.language;
        let call = language.static_call(
            &self.schema(),
            "select",
            &[
                DB.to_string(),
                language.string_literal(clause),
                language.list_literal(args),
            ],
        );
        Statement::line(language.return_statement(&call))
    }

    fn db_parameter() -> ParameterDefinition {
        ParameterDefinition::new(DB, TypeDefinition::named(DATABASE_TYPE))
    }

    fn model_list(&self) -> TypeDefinition {
        TypeDefinition::list(self.model_type())
    }

    fn crud_methods(&self, columns: &[Column], read_args: &[(String, String)]) -> Result<Vec<MethodDefinition>> {
        let language = self.language;
        let fragments = &language.database;
        let schema = self.schema();
        let table = sql_identifier(&self.table());
        let id = TypeDefinition::native(id_type(self.definition).unwrap_or(NativeType::String)).nullable(true);

        let column_definitions: Vec<String> = columns
            .iter()
            .map(|c| column_definition(&c.name, c.sql_type, c.is_id, c.required))
            .collect();
        let column_names: Vec<String> = columns.iter().map(|c| sql_identifier(&c.name)).collect();
        let placeholders = vec!["?"; columns.len()];
        let values: Vec<String> = columns.iter().map(|c| c.value.clone()).collect();

        let create_table = MethodDefinition::new("createTable", vec![Self::db_parameter()], TypeDefinition::void())
            .with_body(vec![self.execute(
                &format!("CREATE TABLE IF NOT EXISTS {table} ({})", column_definitions.join(", ")),
                &[],
            )]);

        let read_from_db = MethodDefinition::new(
            "readFromDb",
            vec![
                Self::db_parameter(),
                ParameterDefinition::new(ROW, TypeDefinition::named(ROW_TYPE)),
            ],
            self.model_type(),
        )
        .with_body(vec![Statement::line(
            language.return_statement(&language.construct(&self.definition.name, read_args)),
        )]);

        let insert_or_update = MethodDefinition::new(
            "insertOrUpdate",
            vec![Self::db_parameter(), ParameterDefinition::new(ITEM, self.model_type())],
            TypeDefinition::void(),
        )
        .with_body(vec![self.execute(
            &format!(
                "INSERT OR REPLACE INTO {table} ({}) VALUES ({})",
                column_names.join(", "),
                placeholders.join(", ")
            ),
            &values,
        )]);

        let model_name = self.model_type().print(language)?;
        let batch_insert_or_update = MethodDefinition::new(
            "batchInsertOrUpdate",
            vec![Self::db_parameter(), ParameterDefinition::new(ITEMS, self.model_list())],
            TypeDefinition::void(),
        )
        .with_body(vec![Statement::block(
            fill(
                fragments.for_each,
                &[("type", &model_name), ("item", ITEM), ("items", ITEMS)],
            ),
            vec![Statement::line(language.statement(&language.static_call(
                &schema,
                "insertOrUpdate",
                &[DB.to_string(), ITEM.to_string()],
            )))],
        )]);

        let delete_by_id = MethodDefinition::new(
            "deleteById",
            vec![Self::db_parameter(), ParameterDefinition::new(ID_PROPERTY, id.clone())],
            TypeDefinition::void(),
        )
        .with_body(vec![self.execute(
            &format!("DELETE FROM {table} WHERE {ID_PROPERTY} = ?"),
            &[ID_PROPERTY.to_string()],
        )]);

        let read_list_from_db = MethodDefinition::new(
            "readListFromDb",
            vec![
                Self::db_parameter(),
                ParameterDefinition::new(ROWS, TypeDefinition::list(TypeDefinition::named(ROW_TYPE))),
            ],
            self.model_list(),
        )
        .with_body(vec![Statement::line(language.return_statement(&fill(
            fragments.map_rows,
            &[
                ("items", ROWS),
                (
                    "expr",
                    &language.static_call(&schema, "readFromDb", &[DB.to_string(), ROW.to_string()]),
                ),
            ],
        )))]);

        let select = MethodDefinition::new(
            "select",
            vec![
                Self::db_parameter(),
                ParameterDefinition::new("whereClause", TypeDefinition::native(NativeType::String)),
                ParameterDefinition::new("args", TypeDefinition::list(TypeDefinition::any().nullable(true))),
            ],
            self.model_list(),
        )
        .with_body(vec![Statement::line(language.return_statement(&language.static_call(
            &schema,
            "readListFromDb",
            &[
                DB.to_string(),
                format!(
                    "{DB}.query({} + whereClause, args)",
                    language.string_literal(&format!("SELECT * FROM {table} WHERE "))
                ),
            ],
        )))]);

        let select_all = MethodDefinition::new("selectAll", vec![Self::db_parameter()], self.model_list())
            .with_body(vec![Statement::line(language.return_statement(&language.static_call(
                &schema,
                "readListFromDb",
                &[
                    DB.to_string(),
                    format!(
                        "{DB}.query({}, {})",
                        language.string_literal(&format!("SELECT * FROM {table}")),
                        language.list_literal(&[])
                    ),
                ],
            )))]);

        let select_by_id = MethodDefinition::new(
            "selectById",
            vec![Self::db_parameter(), ParameterDefinition::new(ID_PROPERTY, id)],
            self.model_type().nullable(true),
        )
        .with_body(vec![Statement::line(language.return_statement(&fill(
            fragments.first_or_null,
            &[(
                "value",
                &language.static_call(
                    &schema,
                    "select",
                    &[
                        DB.to_string(),
                        language.string_literal(&format!("{ID_PROPERTY} = ?")),
                        language.list_literal(&[ID_PROPERTY.to_string()]),
                    ],
                ),
            )],
        )))]);

        Ok([
            create_table,
            read_from_db,
            insert_or_update,
            batch_insert_or_update,
            delete_by_id,
            read_list_from_db,
            select,
            select_all,
            select_by_id,
        ]
        .into_iter()
        .map(MethodDefinition::static_method)
        .collect())
    }

    /// One lookup per incoming edge, so the owner side can re-hydrate.
    fn navigation_methods(&self) -> Result<Vec<MethodDefinition>> {
        let mut methods = Vec::new();

        for reference in &self.definition.references {
            let owner = self.graph.require(&reference.definition)?;

            let method = match reference.relationship {
                Relationship::OneToN => {
                    let ids = "ids";
                    MethodDefinition::new(
                        "selectAllIdsInList",
                        vec![
                            Self::db_parameter(),
                            ParameterDefinition::new(ids, TypeDefinition::native(NativeType::String).nullable(true)),
                        ],
                        self.model_list(),
                    )
                    .with_body(vec![self.select_where(
                        "instr(';' || ? || ';', ';' || id || ';') > 0",
                        &[ids.to_string()],
                    )])
                }
                Relationship::NToOne => {
                    let parameter = foreign_key_name(&owner.name);
                    let native = self
                        .definition
                        .property(&reference.property)
                        .and_then(|p| NativeType::from_name(&p.property_type.name))
                        .unwrap_or(NativeType::String);
                    MethodDefinition::new(
                        &format!("selectBy{}Id", owner.name),
                        vec![
                            Self::db_parameter(),
                            ParameterDefinition::new(&parameter, TypeDefinition::native(native).nullable(true)),
                        ],
                        self.model_list(),
                    )
                    .with_body(vec![self.select_where(
                        &format!("{} = ?", sql_identifier(&to_snake_case(&reference.property))),
                        &[parameter],
                    )])
                }
                Relationship::OneToOne => {
                    let Some(native) = owner.needs_table.then(|| id_type(owner)).flatten() else {
                        debug!(owner = %owner.name, target = %self.definition.name, "owner has no table, no lookup");
                        continue;
                    };
                    let parameter = foreign_key_name(&owner.name);
                    MethodDefinition::new(
                        &format!("selectBy{}Id", owner.name),
                        vec![
                            Self::db_parameter(),
                            ParameterDefinition::new(&parameter, TypeDefinition::native(native).nullable(true)),
                        ],
                        self.model_list(),
                    )
                    .with_body(vec![self.select_where(
                        &format!(
                            "{ID_PROPERTY} IN (SELECT {} FROM {} WHERE {ID_PROPERTY} = ?)",
                            sql_identifier(&to_snake_case(&reference.property)),
                            sql_identifier(&table_name(&owner.name))
                        ),
                        &[parameter],
                    )])
                }
            };
            methods.push(method.static_method());
        }

        Ok(methods)
    }
}

impl ClassParser for DatabaseTableSchemaClassParser<'_> {
    fn class_name(&self) -> String {
        self.schema()
    }

    fn parse(&self) -> Result<ClassDefinition> {
        let definition = self.definition;
        let language = self.language;
        let mut class = ClassDefinition::new(&self.schema(), &self.settings.package);
        class.is_static = true;
        class.inherits_from = self.settings.inherits_from.clone();
        class.implements = self.settings.implements_interfaces.clone();

        let mut imports = vec![
            Import::class(&self.model_settings.package, &definition.name),
            Import::class(&self.settings.package, DATABASE_TYPE),
            Import::class(&self.settings.package, ROW_TYPE),
        ];

        let mut columns = Vec::new();
        self.collect_columns(definition, "", ITEM, false, true, &mut columns)?;

        let mut read_args = Vec::with_capacity(definition.properties.len());
        for property in &definition.properties {
            read_args.push((property.name.clone(), self.read_value(definition, property, "", &mut imports)?));
        }

        let string = TypeDefinition::native(NativeType::String);
        class.constants.push(PropertyDefinition::constant(
            "TABLE_NAME",
            string.clone(),
            language.string_literal(&self.table()),
        ));
        for column in &columns {
            class.constants.push(PropertyDefinition::constant(
                &column.constant,
                string.clone(),
                language.string_literal(&column.name),
            ));
        }

        let mut seen = HashSet::new();
        let methods = self
            .crud_methods(&columns, &read_args)?
            .into_iter()
            .chain(self.navigation_methods()?);
        for method in methods {
            if seen.insert(method.signature_key(language)?) {
                class.methods.push(method);
            } else {
                debug!(class = %class.name, method = %method.name, "duplicate method skipped");
            }
        }

        for import in imports {
            class.add_import(import);
        }

        debug!(
            class = %class.name,
            columns = columns.len(),
            methods = class.methods.len(),
            "parsed table schema class"
        );
        Ok(class)
    }
}

fn native_name(native: NativeType) -> &'static str {
    match native {
        NativeType::String => "string",
        NativeType::Number => "number",
        NativeType::Integer => "integer",
        NativeType::Boolean => "boolean",
    }
}

/// Primitive type of a definition's `id`, if it has a usable one.
fn id_type(definition: &DefinitionHelper) -> Option<NativeType> {
    let id = definition.id_property()?;
    if id.property_type.is_enum {
        return Some(NativeType::String);
    }
    NativeType::from_name(&id.property_type.name)
}
