//! Versioned JSON envelope for the profile list

use serde::{Deserialize, Serialize};

use super::migration;
use crate::error::PersistenceError;
use crate::profiles::Profile;

/// Version written by this build
pub const RECORD_VERSION: u32 = 2;

/// On-disk layout of the current version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub version: u32,
    pub profiles: Vec<Profile>,
}

#[derive(Serialize)]
struct ProfileRecordRef<'a> {
    version: u32,
    profiles: &'a [Profile],
}

/// Serialize profiles into the current envelope
pub fn encode_profiles(profiles: &[Profile]) -> Result<String, PersistenceError> {
    let record = ProfileRecordRef {
        version: RECORD_VERSION,
        profiles,
    };
    serde_json::to_string(&record).map_err(PersistenceError::Encode)
}

/// Parse any known layout into the current profile list
pub fn decode_profiles(raw: &str) -> Result<Vec<Profile>, PersistenceError> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(PersistenceError::Malformed)?;
    migration::upgrade(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_version_is_rejected() {
        let raw = r#"{"version": 9, "profiles": []}"#;
        assert!(matches!(
            decode_profiles(raw),
            Err(PersistenceError::UnsupportedVersion(9))
        ));
    }

    #[test]
    fn test_non_json_is_malformed() {
        assert!(matches!(
            decode_profiles("<html>"),
            Err(PersistenceError::Malformed(_))
        ));
    }

    #[test]
    fn test_missing_score_defaults_to_zero() {
        let raw = r#"{"version": 2, "profiles": [{"id": 5, "name": "Ida", "avatar": "x.png"}]}"#;
        let profiles = decode_profiles(raw).unwrap();
        assert_eq!(profiles[0].score, 0);
    }
}
