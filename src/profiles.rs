//! Player profiles
//!
//! Persisted through the key-value store, ranked by cumulative score.

use serde::{Deserialize, Serialize};

use crate::error::{PersistenceError, ProfileError};
use crate::persistence::{self, KeyValueStore};

/// Animal icons used as avatars and as counting pictures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Animal {
    Lion,
    Elephant,
    Giraffe,
}

impl Animal {
    pub const ALL: [Animal; 3] = [Animal::Lion, Animal::Elephant, Animal::Giraffe];

    pub fn as_str(&self) -> &'static str {
        match self {
            Animal::Lion => "lion",
            Animal::Elephant => "elephant",
            Animal::Giraffe => "giraffe",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "lion" | "löwe" => Some(Animal::Lion),
            "elephant" | "elefant" => Some(Animal::Elephant),
            "giraffe" => Some(Animal::Giraffe),
            _ => None,
        }
    }

    /// Image file for this animal
    pub fn asset(&self) -> &'static str {
        match self {
            Animal::Lion => "safari_lion_1767717591178.png",
            Animal::Elephant => "safari_elephant_1767717606982.png",
            Animal::Giraffe => "safari_giraffe_1767717621407.png",
        }
    }

    pub fn from_asset(asset: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.asset() == asset)
    }
}

/// A single player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Creation time (Unix ms), unique within a registry
    pub id: u64,
    pub name: String,
    /// Avatar image reference
    pub avatar: String,
    /// Cumulative score
    #[serde(default)]
    pub score: u64,
}

/// All known profiles
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: Vec<Profile>,
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self {
            profiles: Vec::new(),
        }
    }

    pub fn from_profiles(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    /// Load from the store; malformed data yields an empty registry
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self::from_profiles(persistence::load_profiles(store))
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), PersistenceError> {
        persistence::save_profiles(store, &self.profiles)
    }

    /// Create a profile with score 0. The id is the creation time, bumped
    /// past the newest existing id so ids stay unique.
    pub fn add_profile(
        &mut self,
        name: &str,
        avatar: &str,
        now_ms: u64,
    ) -> Result<Profile, ProfileError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }

        let newest = self.profiles.iter().map(|p| p.id).max();
        let id = match newest {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        };

        let profile = Profile {
            id,
            name: name.to_string(),
            avatar: avatar.to_string(),
            score: 0,
        };
        self.profiles.push(profile.clone());
        log::info!("Created profile {} ({})", profile.name, profile.id);
        Ok(profile)
    }

    /// Add points to a profile, returning its new score
    pub fn add_points(&mut self, id: u64, points: u64) -> Result<u64, ProfileError> {
        let profile = self
            .profiles
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProfileError::UnknownProfile(id))?;
        profile.score = profile.score.saturating_add(points);
        Ok(profile.score)
    }

    pub fn get(&self, id: u64) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Profiles sorted by score, highest first. Ties keep creation order.
    pub fn ranked(&self) -> Vec<&Profile> {
        let mut ranked: Vec<&Profile> = self.profiles.iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_add_profile_starts_at_zero() {
        let mut reg = ProfileRegistry::new();
        let p = reg.add_profile("  Mia ", Animal::Lion.asset(), 1000).unwrap();
        assert_eq!(p.name, "Mia");
        assert_eq!(p.score, 0);
        assert_eq!(p.id, 1000);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut reg = ProfileRegistry::new();
        assert!(matches!(
            reg.add_profile("   ", "lion.png", 1),
            Err(ProfileError::EmptyName)
        ));
        assert!(reg.is_empty());
    }

    #[test]
    fn test_ids_stay_unique() {
        let mut reg = ProfileRegistry::new();
        let a = reg.add_profile("A", "x", 500).unwrap();
        let b = reg.add_profile("B", "x", 500).unwrap();
        let c = reg.add_profile("C", "x", 400).unwrap();
        assert_eq!((a.id, b.id, c.id), (500, 501, 502));
    }

    #[test]
    fn test_add_points_and_ranking() {
        let mut reg = ProfileRegistry::new();
        let a = reg.add_profile("A", "x", 1).unwrap();
        let b = reg.add_profile("B", "x", 2).unwrap();
        let c = reg.add_profile("C", "x", 3).unwrap();

        assert_eq!(reg.add_points(b.id, 10).unwrap(), 10);
        assert_eq!(reg.add_points(b.id, 10).unwrap(), 20);
        assert_eq!(reg.add_points(c.id, 20).unwrap(), 20);

        let names: Vec<&str> = reg.ranked().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["B", "C", "A"]);
        assert_eq!(reg.get(a.id).unwrap().score, 0);

        assert!(matches!(
            reg.add_points(99, 1),
            Err(ProfileError::UnknownProfile(99))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let mut store = MemoryStore::new();
        let mut reg = ProfileRegistry::new();
        let p = reg.add_profile("Mia", Animal::Lion.asset(), 7).unwrap();
        reg.add_points(p.id, 10).unwrap();
        reg.save(&mut store).unwrap();

        let loaded = ProfileRegistry::load(&store);
        assert_eq!(loaded.profiles(), reg.profiles());
    }

    #[test]
    fn test_animal_lookup() {
        for animal in Animal::ALL {
            assert_eq!(Animal::from_asset(animal.asset()), Some(animal));
            assert_eq!(Animal::from_str(animal.as_str()), Some(animal));
        }
        assert_eq!(Animal::from_str("Löwe"), Some(Animal::Lion));
        assert_eq!(Animal::from_asset("cat.png"), None);
    }
}
