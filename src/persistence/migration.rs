//! Upgrade stored profile records to the current layout
//!
//! Version history:
//! - v1: bare JSON array of `{id, name, avatar, score, created}`
//! - v2: `{version, profiles: [{id, name, avatar, score}]}`

use serde::Deserialize;
use serde_json::Value;

use super::envelope::{ProfileRecord, RECORD_VERSION};
use crate::error::PersistenceError;
use crate::profiles::Profile;

/// v1 entry. `created` (an ISO date string) is dropped since `id` already
/// holds the creation time.
#[derive(Debug, Deserialize)]
struct LegacyProfile {
    id: u64,
    name: String,
    avatar: String,
    #[serde(default)]
    score: u64,
}

impl From<LegacyProfile> for Profile {
    fn from(p: LegacyProfile) -> Self {
        Profile {
            id: p.id,
            name: p.name,
            avatar: p.avatar,
            score: p.score,
        }
    }
}

/// Detect the layout of `value` and convert it to the current profile list
pub fn upgrade(value: Value) -> Result<Vec<Profile>, PersistenceError> {
    if value.is_array() {
        return migrate_v1(value);
    }

    match value.get("version").and_then(Value::as_u64) {
        Some(v) if v > u64::from(RECORD_VERSION) => {
            let version = u32::try_from(v).unwrap_or(u32::MAX);
            Err(PersistenceError::UnsupportedVersion(version))
        }
        _ => serde_json::from_value::<ProfileRecord>(value)
            .map(|record| record.profiles)
            .map_err(PersistenceError::Malformed),
    }
}

fn migrate_v1(value: Value) -> Result<Vec<Profile>, PersistenceError> {
    let legacy: Vec<LegacyProfile> =
        serde_json::from_value(value).map_err(PersistenceError::Malformed)?;
    log::info!("Upgrading {} profiles from v1 to v{}", legacy.len(), RECORD_VERSION);
    Ok(legacy.into_iter().map(Profile::from).collect())
}
