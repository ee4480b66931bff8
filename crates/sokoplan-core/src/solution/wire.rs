//! Wire document for solved plans.
//!
//! Maps the typed action sequence onto the versioned JSON structure the
//! outside world consumes:
//!
//! ```json
//! { "version": "1.0", "plan": [ { "move": { … } }, { "push_goal": { … } } ] }
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SokoplanError};
use crate::models::Action;

/// Wire version for plans using the v1 action set (move/push).
pub const PLAN_VERSION_V1: &str = "1.0";

/// Wire version for plans containing pull actions (v2 pull domain).
pub const PLAN_VERSION_V1_1: &str = "1.1";

/// A versioned, serializable plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanDocument {
    /// `"1.0"` or `"1.1"`
    pub version: String,
    /// The solved action sequence, in execution order
    pub plan: Vec<Action>,
}

impl PlanDocument {
    /// Wraps an action sequence, stamping the lowest version able to carry
    /// it: `"1.1"` as soon as any pull action is present, `"1.0"` otherwise.
    pub fn from_actions(plan: Vec<Action>) -> Self {
        let version = if plan.iter().any(Action::is_pull) {
            PLAN_VERSION_V1_1
        } else {
            PLAN_VERSION_V1
        };
        Self {
            version: version.to_string(),
            plan,
        }
    }

    /// Serializes the document to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the document to human-readable JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes and version-checks a plan document.
    ///
    /// # Errors
    ///
    /// * [`SokoplanError::Serialization`] — the input is not valid JSON for
    ///   this schema
    /// * [`SokoplanError::UnsupportedSchemaVersion`] — the version string is
    ///   neither `"1.0"` nor `"1.1"`
    pub fn from_json(input: &str) -> Result<Self> {
        let document: PlanDocument = serde_json::from_str(input)?;
        if document.version != PLAN_VERSION_V1 && document.version != PLAN_VERSION_V1_1 {
            return Err(SokoplanError::UnsupportedSchemaVersion {
                version: document.version,
            });
        }
        Ok(document)
    }
}
