//! Declarative heuristic configuration.
//!
//! Suppression rules are data, so hosts can add email-client quirks without
//! code changes:
//!
//! ```toml
//! [[suppress]]
//! name = "yahoo-selector-hack"
//! message-contains = "identifier expected"
//! line-contains = ".&"
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::heuristics::{HeuristicSet, SuppressionRule};

/// Errors loading a heuristic table from TOML.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML syntax or shape error.
    #[error("invalid heuristic config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field that must be non-empty was empty. An empty pattern is a
    /// substring of every string and would suppress unconditionally.
    #[error("suppress[{index}].{field} must not be empty")]
    EmptyField {
        /// Index of the offending `[[suppress]]` table.
        index: usize,
        /// Name of the empty field.
        field: &'static str,
    },
}

/// Raw TOML representation of a heuristic table.
#[derive(Debug, Default, Deserialize)]
struct HeuristicConfigDto {
    #[serde(default)]
    suppress: Vec<SuppressDto>,
}

/// TOML representation of one suppression rule.
#[derive(Debug, Deserialize)]
struct SuppressDto {
    name: String,
    #[serde(rename = "message-contains")]
    message_contains: String,
    #[serde(rename = "line-contains")]
    line_contains: String,
}

impl HeuristicSet {
    /// Loads a heuristic set from TOML `[[suppress]]` tables, preserving
    /// their order. An input with no tables yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for invalid TOML and
    /// [`ConfigError::EmptyField`] when a name or pattern is empty.
    pub fn from_toml(toml_text: &str) -> Result<Self, ConfigError> {
        let dto: HeuristicConfigDto = toml::from_str(toml_text)?;
        let rules = dto
            .suppress
            .into_iter()
            .enumerate()
            .map(|(index, rule)| convert(rule, index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(rules))
    }
}

fn convert(dto: SuppressDto, index: usize) -> Result<SuppressionRule, ConfigError> {
    let non_empty = |value: &str, field: &'static str| {
        if value.is_empty() {
            Err(ConfigError::EmptyField { index, field })
        } else {
            Ok(())
        }
    };
    non_empty(&dto.name, "name")?;
    non_empty(&dto.message_contains, "message-contains")?;
    non_empty(&dto.line_contains, "line-contains")?;

    Ok(SuppressionRule::new(
        dto.name,
        dto.message_contains,
        dto.line_contains,
    ))
}
