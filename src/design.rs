//! Entity-relationship design model produced by a DDL import.
//!
//! These are the shapes handed to the diagram canvas and the code
//! generators. Everything serialises with camelCase keys.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::IntegrityError;

/// Result of one import: entities plus the relations between them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErDesign {
    pub entities: Vec<EntityDesign>,
    pub relations: Vec<RelationDesign>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDesign {
    pub id: String,
    /// PascalCase, singular (`order_items` -> `OrderItem`)
    pub name: String,
    pub table_name: String,
    /// Placeholder until the canvas runs its own layout
    pub position: Position,
    pub fields: Vec<FieldDesign>,
    pub config: EntityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Code generation switches. Imports always start from the same defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityConfig {
    pub generate_controller: bool,
    pub generate_service: bool,
    pub enable_caching: bool,
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            generate_controller: true,
            generate_service: true,
            enable_caching: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDesign {
    pub id: String,
    /// camelCase of the column name
    pub name: String,
    pub column_name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub nullable: bool,
    pub unique: bool,
    pub validations: Vec<ValidationRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// Semantic field types understood by the code generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    String,
    Integer,
    Long,
    Float,
    Double,
    BigDecimal,
    Boolean,
    LocalDate,
    LocalTime,
    LocalDateTime,
    Instant,
    #[serde(rename = "UUID")]
    Uuid,
    #[serde(rename = "byte[]")]
    ByteArray,
}

impl FieldType {
    pub fn is_string(self) -> bool {
        matches!(self, Self::String)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ValidationRule {
    NotBlank,
    NotNull,
    Size { max: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationType {
    ManyToOne,
    ManyToMany,
}

/// Referential action on a foreign key, spelled the way SQL spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReferentialAction {
    #[default]
    #[serde(rename = "NO ACTION")]
    NoAction,
    #[serde(rename = "CASCADE")]
    Cascade,
    #[serde(rename = "RESTRICT")]
    Restrict,
    #[serde(rename = "SET NULL")]
    SetNull,
    #[serde(rename = "SET DEFAULT")]
    SetDefault,
}

impl ReferentialAction {
    /// Parse an action phrase such as `SET  NULL` or `no action`.
    pub fn from_sql(s: &str) -> Option<Self> {
        let words: Vec<String> = s.split_whitespace().map(str::to_uppercase).collect();
        match words.join(" ").as_str() {
            "CASCADE" => Some(Self::Cascade),
            "RESTRICT" => Some(Self::Restrict),
            "SET NULL" => Some(Self::SetNull),
            "SET DEFAULT" => Some(Self::SetDefault),
            "NO ACTION" => Some(Self::NoAction),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationDesign {
    pub id: String,
    #[serde(rename = "type")]
    pub relation_type: RelationType,
    pub source_entity_id: String,
    pub target_entity_id: String,
    pub source_field_name: String,
    /// Set for `ManyToOne`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<ForeignKeyConfig>,
    /// Set for `ManyToMany`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_table: Option<JoinTableConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignKeyConfig {
    pub column_name: String,
    pub nullable: bool,
    pub on_delete: ReferentialAction,
    pub on_update: ReferentialAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinTableConfig {
    pub table_name: String,
    pub join_column: String,
    pub inverse_join_column: String,
    pub on_delete: ReferentialAction,
    pub on_update: ReferentialAction,
}

impl ErDesign {
    pub fn entity(&self, id: &str) -> Option<&EntityDesign> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn entity_by_name(&self, name: &str) -> Option<&EntityDesign> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Verify that every relation endpoint names an entity in this design
    /// and that entity, field and relation ids are unique.
    ///
    /// An import never produces a design that fails this check; it exists
    /// for callers that edit or merge designs afterwards.
    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        let mut seen: HashSet<&str> = HashSet::new();
        let ids = self
            .entities
            .iter()
            .flat_map(|e| std::iter::once(&e.id).chain(e.fields.iter().map(|f| &f.id)))
            .chain(self.relations.iter().map(|r| &r.id));
        for id in ids {
            if !seen.insert(id) {
                return Err(IntegrityError::DuplicateId(id.clone()));
            }
        }

        for relation in &self.relations {
            for endpoint in [&relation.source_entity_id, &relation.target_entity_id] {
                if self.entity(endpoint).is_none() {
                    return Err(IntegrityError::DanglingEndpoint {
                        relation: relation.id.clone(),
                        entity: endpoint.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
