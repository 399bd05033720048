//! Save/load persistence for profiles and settings
//!
//! Features:
//! - Versioned JSON envelope
//! - Migration of the legacy bare-array layout
//! - Corruption detection (malformed data loads as an empty list)

pub mod envelope;
pub mod migration;
pub mod store;

pub use envelope::{RECORD_VERSION, decode_profiles, encode_profiles};
#[cfg(not(target_arch = "wasm32"))]
pub use store::FileStore;
#[cfg(target_arch = "wasm32")]
pub use store::LocalStore;
pub use store::{KeyValueStore, MemoryStore};

use crate::error::PersistenceError;
use crate::profiles::Profile;

/// Key holding the current profile record
pub const PROFILES_KEY: &str = "zahlen_safari_profiles";
/// Keys written by earlier builds, read only when `PROFILES_KEY` is absent
pub const LEGACY_PROFILE_KEYS: &[&str] = &["safari_profiles_v1"];
/// Key holding the settings record
pub const SETTINGS_KEY: &str = "zahlen_safari_settings";

/// Load the profile list. Never fails: unreadable or malformed data is
/// logged and treated as an empty list.
pub fn load_profiles(store: &impl KeyValueStore) -> Vec<Profile> {
    let keys = std::iter::once(PROFILES_KEY).chain(LEGACY_PROFILE_KEYS.iter().copied());
    for key in keys {
        let raw = match store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => continue,
            Err(e) => {
                log::warn!("Profile store unreadable ({key}): {e}");
                return Vec::new();
            }
        };

        return match decode_profiles(&raw) {
            Ok(profiles) => {
                if key != PROFILES_KEY {
                    log::info!("Migrating {} profiles from legacy key {key}", profiles.len());
                }
                log::info!("Loaded {} profiles", profiles.len());
                profiles
            }
            Err(e) => {
                log::warn!("Discarding unreadable profile data under {key}: {e}");
                Vec::new()
            }
        };
    }

    log::info!("No profiles found, starting fresh");
    Vec::new()
}

/// Write the profile list under the current key and version, then drop any
/// legacy copy
pub fn save_profiles(
    store: &mut impl KeyValueStore,
    profiles: &[Profile],
) -> Result<(), PersistenceError> {
    let json = encode_profiles(profiles)?;
    store.set(PROFILES_KEY, &json)?;
    log::info!("Profiles saved ({} profiles)", profiles.len());

    for key in LEGACY_PROFILE_KEYS {
        if matches!(store.get(key), Ok(Some(_))) {
            match store.remove(key) {
                Ok(()) => log::info!("Removed legacy profile record {key}"),
                Err(e) => log::warn!("Could not remove legacy profile record {key}: {e}"),
            }
        }
    }
    Ok(())
}
