//! Relation inference from foreign keys and junction tables.

use indexmap::{IndexMap, IndexSet};
use tracing::debug;
use uuid::Uuid;

use crate::design::{
    EntityDesign, ForeignKeyConfig, JoinTableConfig, ReferentialAction, RelationDesign, RelationType,
};
use crate::error::SkipReason;
use crate::naming::to_camel_case;
use crate::sql::{ParsedForeignKey, ParsedTable, TableRegistry};

/// Builds relations against a fixed set of entities.
pub struct RelationBuilder<'a> {
    tables: &'a TableRegistry,
    junctions: &'a IndexSet<String>,
    entities: &'a IndexMap<String, EntityDesign>,
    relations: Vec<RelationDesign>,
    skipped: Vec<SkipReason>,
}

impl<'a> RelationBuilder<'a> {
    pub fn new(
        tables: &'a TableRegistry,
        junctions: &'a IndexSet<String>,
        entities: &'a IndexMap<String, EntityDesign>,
    ) -> Self {
        Self {
            tables,
            junctions,
            entities,
            relations: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Table-level foreign keys first, then inline references, then
    /// junction tables.
    pub fn build(mut self) -> (Vec<RelationDesign>, Vec<SkipReason>) {
        let (tables, junctions, entities) = (self.tables, self.junctions, self.entities);
        let owners: Vec<(&'a EntityDesign, &'a ParsedTable)> = tables
            .iter()
            .filter_map(|(key, table)| entities.get(key).map(|entity| (entity, table)))
            .collect();

        for (source, table) in &owners {
            for fk in &table.foreign_keys {
                self.add_many_to_one(source, table, fk);
            }
        }

        for (source, table) in &owners {
            for column in &table.columns {
                let Some(reference) = &column.reference else {
                    continue;
                };
                let fk = ParsedForeignKey {
                    columns: vec![column.name.clone()],
                    referenced_table: reference.table.clone(),
                    referenced_columns: vec![reference.column.clone()],
                    on_delete: reference.on_delete,
                    on_update: reference.on_update,
                };
                self.add_many_to_one(source, table, &fk);
            }
        }

        for key in junctions {
            if let Some(table) = tables.get(key) {
                self.add_many_to_many(table);
            }
        }

        (self.relations, self.skipped)
    }

    /// Resolve a referenced table to its entity. Junction tables and
    /// unknown tables have none.
    fn target(&self, referenced_table: &str) -> Option<&'a EntityDesign> {
        self.entities.get(&referenced_table.to_lowercase())
    }

    fn skip(&mut self, reason: SkipReason) {
        debug!(%reason, "relation skipped");
        self.skipped.push(reason);
    }

    fn add_many_to_one(&mut self, source: &EntityDesign, table: &ParsedTable, fk: &ParsedForeignKey) {
        let Some(column) = fk.columns.first() else {
            return;
        };
        let Some(target) = self.target(&fk.referenced_table) else {
            self.skip(SkipReason::UnknownReferencedTable {
                table: table.name.clone(),
                column: column.clone(),
                referenced: fk.referenced_table.clone(),
            });
            return;
        };

        let duplicate = self.relations.iter().any(|r| {
            r.source_entity_id == source.id
                && r.target_entity_id == target.id
                && r
                    .foreign_key
                    .as_ref()
                    .is_some_and(|k| k.column_name.eq_ignore_ascii_case(column))
        });
        if duplicate {
            return;
        }

        let nullable = table.column(column).is_none_or(|c| c.nullable);

        self.relations.push(RelationDesign {
            id: Uuid::new_v4().to_string(),
            relation_type: RelationType::ManyToOne,
            source_entity_id: source.id.clone(),
            target_entity_id: target.id.clone(),
            source_field_name: to_camel_case(&target.name),
            foreign_key: Some(ForeignKeyConfig {
                column_name: column.clone(),
                nullable,
                on_delete: fk.on_delete.unwrap_or_default(),
                on_update: fk.on_update.unwrap_or_default(),
            }),
            join_table: None,
        });
    }

    /// One `ManyToMany` between the targets of the first two resolvable
    /// foreign keys. Any further keys on the junction are not represented.
    fn add_many_to_many(&mut self, table: &ParsedTable) {
        let resolved: Vec<(ParsedForeignKey, &'a EntityDesign)> = table
            .all_foreign_keys()
            .into_iter()
            .filter(|fk| !fk.columns.is_empty())
            .filter_map(|fk| self.target(&fk.referenced_table).map(|entity| (fk, entity)))
            .collect();

        let distinct_targets: IndexSet<&str> = resolved.iter().map(|(_, e)| e.id.as_str()).collect();
        if distinct_targets.len() < 2 {
            self.skip(SkipReason::UnresolvedJunction(table.name.clone()));
            return;
        }

        let (join_fk, source) = &resolved[0];
        let (inverse_fk, target) = &resolved[1];

        self.relations.push(RelationDesign {
            id: Uuid::new_v4().to_string(),
            relation_type: RelationType::ManyToMany,
            source_entity_id: source.id.clone(),
            target_entity_id: target.id.clone(),
            source_field_name: format!("{}s", to_camel_case(&target.name)),
            foreign_key: None,
            join_table: Some(JoinTableConfig {
                table_name: table.name.clone(),
                join_column: join_fk.columns[0].clone(),
                inverse_join_column: inverse_fk.columns[0].clone(),
                on_delete: ReferentialAction::Cascade,
                on_update: ReferentialAction::Cascade,
            }),
        });
    }
}

/// Infer every relation between `entities`.
pub fn build_relations(
    tables: &TableRegistry,
    junctions: &IndexSet<String>,
    entities: &IndexMap<String, EntityDesign>,
) -> (Vec<RelationDesign>, Vec<SkipReason>) {
    RelationBuilder::new(tables, junctions, entities).build()
}
