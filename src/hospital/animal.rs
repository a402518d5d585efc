//! Animal patient records.
//!
//! Animal is a closed set of patient kinds. Every kind carries the same
//! identity fields; each applies its own validity check when treated.

use crate::hospital::error::TreatmentError;
use serde::{Deserialize, Serialize};

/// A patient on the hospital roster.
///
/// Records are never validated at admission. A dog with an impossible age is
/// accepted into the roster and rejected only when treatment is attempted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Animal {
    /// Dogs past age 15 need a protocol this hospital does not offer
    Dog { name: String, age: i32 },
    /// Cats must have a plausible (non-negative) age on file
    Cat { name: String, age: i32 },
    /// Birds are always treatable
    Bird { name: String, age: i32 },
}

impl Animal {
    /// Create a dog record.
    pub fn dog(name: impl Into<String>, age: i32) -> Self {
        Self::Dog {
            name: name.into(),
            age,
        }
    }

    /// Create a cat record.
    pub fn cat(name: impl Into<String>, age: i32) -> Self {
        Self::Cat {
            name: name.into(),
            age,
        }
    }

    /// Create a bird record.
    pub fn bird(name: impl Into<String>, age: i32) -> Self {
        Self::Bird {
            name: name.into(),
            age,
        }
    }

    /// The patient's name.
    pub fn name(&self) -> &str {
        match self {
            Self::Dog { name, .. } | Self::Cat { name, .. } | Self::Bird { name, .. } => name,
        }
    }

    /// The age on file, exactly as admitted (may be invalid).
    pub fn age(&self) -> i32 {
        match self {
            Self::Dog { age, .. } | Self::Cat { age, .. } | Self::Bird { age, .. } => *age,
        }
    }

    /// Lowercase kind label.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Dog { .. } => "dog",
            Self::Cat { .. } => "cat",
            Self::Bird { .. } => "bird",
        }
    }

    /// Treat this patient, printing the treatment performed.
    ///
    /// Validity is checked here, once, synchronously. On success the
    /// treatment line goes to stdout and `Ok(())` is returned.
    pub fn treat(&self) -> Result<(), TreatmentError> {
        match self {
            Self::Dog { name, age } => {
                if *age > 15 {
                    return Err(TreatmentError::ElderlyDog { name: name.clone() });
                }
                println!(
                    "Treating {}: Administering canine medication and checking for fleas.",
                    name
                );
            }
            Self::Cat { name, age } => {
                if *age < 0 {
                    return Err(TreatmentError::InvalidAge {
                        name: name.clone(),
                        age: *age,
                    });
                }
                println!(
                    "Treating {}: Providing feline vaccine and checking for hairballs.",
                    name
                );
            }
            Self::Bird { name, .. } => {
                println!("Treating {}: Clipping wings and checking beak condition.", name);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dog_within_age_limit_is_treatable() {
        let dog = Animal::dog("Rex", 3);
        assert!(dog.treat().is_ok());
    }

    #[test]
    fn test_dog_at_age_limit_is_treatable() {
        let dog = Animal::dog("Buddy", 15);
        assert!(dog.treat().is_ok());
    }

    #[test]
    fn test_elderly_dog_fails_treatment() {
        let dog = Animal::dog("Oldie", 17);
        let err = dog.treat().unwrap_err();
        assert!(err.to_string().contains("special care"));
        assert!(err.to_string().contains("Oldie"));
    }

    #[test]
    fn test_cat_with_valid_age_is_treatable() {
        let cat = Animal::cat("Whiskers", 5);
        assert!(cat.treat().is_ok());
    }

    #[test]
    fn test_newborn_cat_is_treatable() {
        let cat = Animal::cat("Kitten", 0);
        assert!(cat.treat().is_ok());
    }

    #[test]
    fn test_cat_with_negative_age_fails_treatment() {
        let cat = Animal::cat("Mittens", -1);
        let err = cat.treat().unwrap_err();
        assert!(err.to_string().contains("Invalid age"));
        assert!(err.to_string().contains("Mittens"));
    }

    #[test]
    fn test_bird_is_always_treatable() {
        assert!(Animal::bird("Tweety", 2).treat().is_ok());
        assert!(Animal::bird("Methuselah", 200).treat().is_ok());
        assert!(Animal::bird("Glitch", -5).treat().is_ok());
    }

    #[test]
    fn test_name_accessor() {
        assert_eq!(Animal::dog("Rex", 3).name(), "Rex");
        assert_eq!(Animal::cat("Whiskers", 5).name(), "Whiskers");
        assert_eq!(Animal::bird("Tweety", 2).name(), "Tweety");
    }

    #[test]
    fn test_age_accessor_keeps_invalid_values() {
        assert_eq!(Animal::cat("Mittens", -1).age(), -1);
        assert_eq!(Animal::dog("Oldie", 17).age(), 17);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(Animal::dog("Rex", 3).kind(), "dog");
        assert_eq!(Animal::cat("Whiskers", 5).kind(), "cat");
        assert_eq!(Animal::bird("Tweety", 2).kind(), "bird");
    }
}
