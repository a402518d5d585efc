//! Animal hospital demo: a roster of patients treated in one pass.
//!
//! This module contains the hospital domain types:
//! - Animal: the closed set of patient kinds (Dog, Cat, Bird)
//! - TreatmentError: validation failure raised while treating a patient
//! - AnimalHospital: the ordered roster and its single treatment pass
//!
//! The module is self-contained and shares no code with the payroll demo.

pub mod animal;
pub mod animal_hospital;
pub mod error;

pub use animal::Animal;
pub use animal_hospital::{AnimalHospital, TreatmentReport};
pub use error::TreatmentError;
