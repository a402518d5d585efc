//! Payroll demo: a roster of employees settled in one pass.
//!
//! This module contains the payroll domain types:
//! - Employee: the closed set of employment kinds (FullTime, PartTime, Intern)
//! - PayrollError: validation failure raised while calculating a salary
//! - PayrollSystem: the ordered roster, its single pass, and the running total
//!
//! The module is self-contained and shares no code with the hospital demo.

pub mod employee;
pub mod error;
pub mod payroll_system;

pub use employee::Employee;
pub use error::PayrollError;
pub use payroll_system::{PayrollSummary, PayrollSystem};
