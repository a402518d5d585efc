//! The hospital roster and its single treatment pass.

use crate::hospital::animal::Animal;
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Ordered, append-only roster of admitted patients.
///
/// Insertion order is preserved and duplicates are allowed; there is no key.
/// The roster is populated by [`admit`](AnimalHospital::admit) and consumed
/// by one [`treat_all`](AnimalHospital::treat_all) pass.
#[derive(Debug, Clone, Default)]
pub struct AnimalHospital {
    animals: Vec<Animal>,
}

/// Counts from one treatment pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentReport {
    /// Patients treated successfully
    pub treated: usize,
    /// Patients whose treatment failed validation
    pub failed: usize,
}

impl TreatmentReport {
    /// Total patients the pass attempted, regardless of outcome.
    pub fn attempted(&self) -> usize {
        self.treated + self.failed
    }
}

impl AnimalHospital {
    /// Create an empty hospital.
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a patient. Appends to the roster; never validates, cannot fail.
    pub fn admit(&mut self, animal: Animal) {
        info!("admitted {} ({}), age {}", animal.name(), animal.kind(), animal.age());
        self.animals.push(animal);
    }

    /// The roster in admission order.
    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    /// Number of patients on the roster.
    pub fn len(&self) -> usize {
        self.animals.len()
    }

    /// Check if the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    /// Treat every patient in admission order.
    ///
    /// Each patient gets an attempt line, the treatment itself, and a trailer
    /// line. A failed treatment is reported on stderr and the pass keeps
    /// going; one bad record never aborts the rest.
    pub fn treat_all(&self) -> TreatmentReport {
        println!("\nStarting treatment for all animals:");
        let mut report = TreatmentReport::default();
        for animal in &self.animals {
            println!("\nAttempting to treat {}", animal.name());
            match animal.treat() {
                Ok(()) => report.treated += 1,
                Err(e) => {
                    warn!("treatment failed for {}: {}", animal.name(), e);
                    eprintln!("Treatment failed: {}", e);
                    report.failed += 1;
                }
            }
            println!("Finished processing {}", animal.name());
        }
        info!(
            "treatment pass complete: {} treated, {} failed",
            report.treated, report.failed
        );
        report
    }
}
