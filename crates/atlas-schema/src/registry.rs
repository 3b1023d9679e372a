//! Central schema registry for Atlas content types.
//!
//! The `SchemaRegistry` builds JSON Schemas from atlas-core types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`.

use std::collections::HashMap;

use atlas_core::section::{
    CommonMistakesProps, ComparisonTableProps, ExamplesProps, HeroProps,
    InteractiveChallengeProps, MentalModelProps, PlaygroundProps, TipsProps, UtilityGridProps,
};
use atlas_core::{Section, SectionKind, Slug, Topic, TopicDocument};
use jsonschema::error::ValidationErrorKind;
use schemars::schema_for;

use crate::error::SchemaError;

/// One schema violation, located by a dotted field path such as
/// `rows[0].feature`. The path is empty when the instance itself is wrong.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

/// Central store of all JSON Schemas for Atlas content.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert(
            $name,
            serde_json::to_value(schema_for!($ty)).map_err(|e| {
                SchemaError::Generation(format!("{}: {e}", $name))
            })?,
        );
    };
}

impl SchemaRegistry {
    /// Build a new registry containing the document, topic, section, and
    /// per-kind props schemas.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Generation` if a generated schema cannot be
    /// converted to JSON.
    pub fn new() -> Result<Self, SchemaError> {
        let mut schemas = HashMap::new();

        // --- Documents ---
        register!(schemas, "topic_document", TopicDocument);
        register!(schemas, "topic", Topic);
        register!(schemas, "slug", Slug);

        // --- Sections ---
        register!(schemas, "section", Section);
        register!(schemas, "section_kind", SectionKind);

        // --- Props, one per section kind ---
        register!(schemas, "hero_props", HeroProps);
        register!(schemas, "mental_model_props", MentalModelProps);
        register!(schemas, "comparison_table_props", ComparisonTableProps);
        register!(schemas, "utility_grid_props", UtilityGridProps);
        register!(schemas, "playground_props", PlaygroundProps);
        register!(
            schemas,
            "interactive_challenge_props",
            InteractiveChallengeProps
        );
        register!(schemas, "examples_props", ExamplesProps);
        register!(schemas, "common_mistakes_props", CommonMistakesProps);
        register!(schemas, "tips_props", TipsProps);

        Ok(Self { schemas })
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Props schema name for a section kind, e.g. `playground_props`.
    #[must_use]
    pub fn props_schema_name(kind: SectionKind) -> String {
        format!("{}_props", kind.as_str().replace('-', "_"))
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Every violation of a named schema, sorted by field path.
    ///
    /// A missing required field is located at the field itself rather than
    /// at the object that lacks it.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::Generation` if the schema does not compile.
    pub fn violations(
        &self,
        name: &str,
        instance: &serde_json::Value,
    ) -> Result<Vec<Violation>, SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let mut violations: Vec<Violation> = validator
            .iter_errors(instance)
            .map(|error| {
                let pointer = error.instance_path.to_string();
                match &error.kind {
                    ValidationErrorKind::Required { property } => {
                        let field = property
                            .as_str()
                            .map_or_else(|| property.to_string(), str::to_string);
                        Violation {
                            path: join_field(&field_path(&pointer), &field),
                            message: "required field is missing".into(),
                        }
                    }
                    _ => Violation {
                        path: field_path(&pointer),
                        message: error.to_string(),
                    },
                }
            })
            .collect();

        violations.sort();
        violations.dedup();
        Ok(violations)
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

/// Turn a JSON pointer (`/rows/0/feature`) into a field path (`rows[0].feature`).
fn field_path(pointer: &str) -> String {
    pointer
        .split('/')
        .skip(1)
        .map(|token| token.replace("~1", "/").replace("~0", "~"))
        .fold(String::new(), |path, token| {
            if token.parse::<usize>().is_ok() {
                format!("{path}[{token}]")
            } else {
                join_field(&path, &token)
            }
        })
}

fn join_field(path: &str, field: &str) -> String {
    if path.is_empty() {
        field.to_string()
    } else {
        format!("{path}.{field}")
    }
}
