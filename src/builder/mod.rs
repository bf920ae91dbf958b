//! Turns a parsed table registry into an entity-relationship design.

mod entity;
mod junction;
mod relation;

pub use entity::build_entities;
pub use junction::{detect_junction_tables, is_junction_table};
pub use relation::{RelationBuilder, build_relations};

use serde::Serialize;
use tracing::{info, warn};

use crate::design::ErDesign;
use crate::error::SkipReason;
use crate::options::ImportOptions;
use crate::sql::{Dialect, ParsedSchema};

/// What an import did with its input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub dialect: &'static str,
    pub tables: usize,
    pub junction_tables: Vec<String>,
    /// Everything that contributed nothing, in the order it was met
    pub skipped: Vec<SkipReason>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    pub design: ErDesign,
    pub report: ImportReport,
}

/// Classify junctions, then build entities and relations.
pub fn build_design(schema: ParsedSchema, dialect: Dialect, options: &ImportOptions) -> ImportOutcome {
    let ParsedSchema { tables, mut skipped } = schema;

    if tables.is_empty() {
        warn!(skipped = skipped.len(), "no CREATE TABLE statements found");
    }

    let junctions = detect_junction_tables(&tables);
    let entities = build_entities(&tables, &junctions, dialect, options);
    let (relations, relation_skips) = build_relations(&tables, &junctions, &entities);
    skipped.extend(relation_skips);

    info!(
        tables = tables.len(),
        junctions = junctions.len(),
        entities = entities.len(),
        relations = relations.len(),
        skipped = skipped.len(),
        "DDL import finished"
    );

    ImportOutcome {
        design: ErDesign {
            entities: entities.into_values().collect(),
            relations,
        },
        report: ImportReport {
            dialect: dialect.as_str(),
            tables: tables.len(),
            junction_tables: junctions
                .iter()
                .filter_map(|key| tables.get(key).map(|t| t.name.clone()))
                .collect(),
            skipped,
        },
    }
}
