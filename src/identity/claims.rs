use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{IdentityError, IdentityResult};

/// Provider-defined key conventionally holding the human-readable name.
pub const NAME_KEY: &str = "name";

/// Attribute set handed back by an external identity provider after the
/// token exchange. Keys and value types are provider-defined; nothing is
/// validated here beyond the [`NAME_KEY`] convention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    pub fn new() -> Self { Self(Map::new()) }

    pub fn get(&self, key: &str) -> Option<&Value> { self.0.get(key) }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> { self.0.iter() }

    /// Resolve the [`NAME_KEY`] convention. This is the single place that
    /// decides what "claim missing" means for display names.
    pub fn display_name(&self) -> IdentityResult<&str> {
        match self.0.get(NAME_KEY) {
            Some(v) => v.as_str().ok_or_else(|| IdentityError::claim_type(NAME_KEY)),
            None => Err(IdentityError::missing_claim(NAME_KEY)),
        }
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(map: Map<String, Value>) -> Self { Self(map) }
}

impl FromIterator<(String, Value)> for Claims {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
