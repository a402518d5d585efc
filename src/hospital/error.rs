//! Error types for the hospital demo.
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// A validation failure raised while treating a patient.
///
/// Raised inside [`Animal::treat`](crate::hospital::Animal::treat) and
/// handled by the treatment pass; it never escapes to the driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreatmentError {
    /// Dog is past the age the standard protocol covers
    #[error("Elderly dog {name} requires special care")]
    ElderlyDog { name: String },

    /// Cat record carries an impossible age
    #[error("Invalid age {age} for cat {name}")]
    InvalidAge { name: String, age: i32 },
}
