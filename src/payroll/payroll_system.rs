//! The payroll roster, its single pass, and the running total.

use crate::payroll::employee::Employee;
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Ordered, append-only roster of employees.
///
/// Insertion order is preserved and duplicates are allowed; there is no key.
/// Populated by [`add_employee`](PayrollSystem::add_employee) and consumed by
/// one [`process_payroll`](PayrollSystem::process_payroll) pass.
#[derive(Debug, Clone, Default)]
pub struct PayrollSystem {
    employees: Vec<Employee>,
}

/// Accounting from one payroll pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Sum of successfully calculated salaries; failed records contribute 0
    pub total: f64,
    /// Employees whose salary was calculated
    pub paid: usize,
    /// Employees whose record failed validation
    pub failed: usize,
}

impl PayrollSummary {
    /// Total employees the pass attempted, regardless of outcome.
    pub fn attempted(&self) -> usize {
        self.paid + self.failed
    }
}

impl PayrollSystem {
    /// Create an empty payroll.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an employee. Appends to the roster; never validates, cannot fail.
    pub fn add_employee(&mut self, employee: Employee) {
        info!("added {} employee {} ({})", employee.kind(), employee.name(), employee.id());
        self.employees.push(employee);
    }

    /// The roster in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Number of employees on the roster.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Check if the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Calculate every employee's salary in insertion order.
    ///
    /// Successful salaries accumulate into a running total printed after the
    /// loop. A failed record is reported on stderr, contributes nothing to
    /// the total, and never aborts the rest of the pass.
    pub fn process_payroll(&self) -> PayrollSummary {
        println!("\nProcessing payroll for all employees:");
        let mut summary = PayrollSummary::default();
        for employee in &self.employees {
            println!("\nProcessing {}", employee.name());
            match employee.calculate_salary() {
                Ok(salary) => {
                    summary.total += salary;
                    summary.paid += 1;
                }
                Err(e) => {
                    warn!("payroll failed for {}: {}", employee.name(), e);
                    eprintln!("Payroll error: {}", e);
                    summary.failed += 1;
                }
            }
            println!("Finished processing {}", employee.name());
        }
        println!("\nTotal payroll amount: ${:.2}", summary.total);
        info!(
            "payroll pass complete: {} paid, {} failed, total {:.2}",
            summary.paid, summary.failed, summary.total
        );
        summary
    }
}
