//! Entity and field construction from parsed tables.

use indexmap::{IndexMap, IndexSet};
use uuid::Uuid;

use crate::design::{EntityConfig, EntityDesign, FieldDesign, Position, ValidationRule};
use crate::naming::{entity_name, is_base_field, to_camel_case};
use crate::options::ImportOptions;
use crate::sql::{ColumnType, Dialect, ParsedColumn, ParsedTable, TableRegistry, map_type};

/// Build one entity per non-junction table, keyed by registry key and in
/// declaration order.
pub fn build_entities(
    tables: &TableRegistry,
    junctions: &IndexSet<String>,
    dialect: Dialect,
    options: &ImportOptions,
) -> IndexMap<String, EntityDesign> {
    tables
        .iter()
        .filter(|(key, _)| !junctions.contains(*key))
        .enumerate()
        .map(|(index, (key, table))| {
            let entity = build_entity(table, placeholder_position(index, options), dialect, options);
            (key.to_string(), entity)
        })
        .collect()
}

/// Grid slot for the `index`-th entity so nothing overlaps before the
/// canvas lays things out.
fn placeholder_position(index: usize, options: &ImportOptions) -> Position {
    let columns = options.grid_columns.max(1);
    let col = index % columns;
    let row = index / columns;
    Position {
        x: options.origin_x + col as f64 * options.spacing_x,
        y: options.origin_y + row as f64 * options.spacing_y,
    }
}

fn build_entity(
    table: &ParsedTable,
    position: Position,
    dialect: Dialect,
    options: &ImportOptions,
) -> EntityDesign {
    let fk_columns = table.foreign_key_columns();

    let fields = table
        .columns
        .iter()
        .filter(|c| {
            !table.is_primary_key(c)
                && !fk_columns.contains(&c.name.to_lowercase())
                && !is_base_field(&c.name)
        })
        .map(|c| build_field(c, dialect, options))
        .collect();

    EntityDesign {
        id: Uuid::new_v4().to_string(),
        name: entity_name(&table.name),
        table_name: table.name.clone(),
        position,
        fields,
        config: EntityConfig::default(),
    }
}

fn build_field(column: &ParsedColumn, dialect: Dialect, options: &ImportOptions) -> FieldDesign {
    let field_type = map_type(&column.raw_type, dialect);

    let mut validations = Vec::new();
    if !column.nullable {
        if field_type.is_string() {
            validations.push(ValidationRule::NotBlank);
        } else {
            validations.push(ValidationRule::NotNull);
        }
    }
    if field_type.is_string() {
        if let Some(max) = ColumnType::parse(&column.raw_type).length() {
            if max != options.default_string_length {
                validations.push(ValidationRule::Size { max });
            }
        }
    }

    FieldDesign {
        id: Uuid::new_v4().to_string(),
        name: to_camel_case(&column.name),
        column_name: column.name.clone(),
        field_type,
        nullable: column.nullable,
        unique: column.unique,
        validations,
        default_value: column.default.clone(),
    }
}
