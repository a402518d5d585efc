//! Error types for the payroll demo.
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// A validation failure raised while calculating a salary.
///
/// Raised inside [`Employee::calculate_salary`](crate::payroll::Employee::calculate_salary)
/// and handled by the payroll pass; a failed record contributes nothing to
/// the total and the pass continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayrollError {
    /// Full-time base pay must be positive
    #[error("Invalid base pay for full-time employee {name}")]
    InvalidBasePay { name: String },

    /// Part-time hours must be non-negative and the rate positive
    #[error("Invalid hours or rate for part-time employee {name}")]
    InvalidHoursOrRate { name: String },

    /// Intern stipend must be non-negative
    #[error("Invalid stipend for intern {name}")]
    InvalidStipend { name: String },
}
