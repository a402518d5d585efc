//! Employee records and salary calculation.
//!
//! Employee is a closed set of employment kinds. Each kind carries its own
//! pay fields and applies its own validity check when a salary is calculated.

use crate::payroll::error::PayrollError;
use serde::{Deserialize, Serialize};

/// An employee on the payroll roster.
///
/// The `id` field is carried on every record but never printed; records have
/// no identity in the pass beyond insertion order. Pay fields are accepted
/// as-is at construction and validated only at calculation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Employee {
    /// Salaried staff: base pay plus a benefits allowance
    FullTime {
        name: String,
        id: String,
        base_pay: f64,
        benefits: f64,
    },
    /// Hourly staff: hours worked times the hourly rate
    PartTime {
        name: String,
        id: String,
        hours_worked: f64,
        hourly_rate: f64,
    },
    /// Interns draw a flat stipend
    Intern {
        name: String,
        id: String,
        stipend: f64,
    },
}

impl Employee {
    /// Create a full-time employee record.
    pub fn full_time(
        name: impl Into<String>,
        id: impl Into<String>,
        base_pay: f64,
        benefits: f64,
    ) -> Self {
        Self::FullTime {
            name: name.into(),
            id: id.into(),
            base_pay,
            benefits,
        }
    }

    /// Create a part-time employee record.
    pub fn part_time(
        name: impl Into<String>,
        id: impl Into<String>,
        hours_worked: f64,
        hourly_rate: f64,
    ) -> Self {
        Self::PartTime {
            name: name.into(),
            id: id.into(),
            hours_worked,
            hourly_rate,
        }
    }

    /// Create an intern record.
    pub fn intern(name: impl Into<String>, id: impl Into<String>, stipend: f64) -> Self {
        Self::Intern {
            name: name.into(),
            id: id.into(),
            stipend,
        }
    }

    /// The employee's name.
    pub fn name(&self) -> &str {
        match self {
            Self::FullTime { name, .. } | Self::PartTime { name, .. } | Self::Intern { name, .. } => {
                name
            }
        }
    }

    /// The employee's id (e.g. "FT001").
    pub fn id(&self) -> &str {
        match self {
            Self::FullTime { id, .. } | Self::PartTime { id, .. } | Self::Intern { id, .. } => id,
        }
    }

    /// Lowercase kind label.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FullTime { .. } => "full-time",
            Self::PartTime { .. } => "part-time",
            Self::Intern { .. } => "intern",
        }
    }

    /// Calculate this employee's salary, printing the result to 2 decimals.
    ///
    /// Validity is checked here, once, synchronously. The returned amount is
    /// what the pass adds to the running payroll total.
    pub fn calculate_salary(&self) -> Result<f64, PayrollError> {
        match self {
            Self::FullTime {
                name,
                base_pay,
                benefits,
                ..
            } => {
                if *base_pay <= 0.0 {
                    return Err(PayrollError::InvalidBasePay { name: name.clone() });
                }
                let salary = base_pay + benefits;
                println!(
                    "Calculating salary for full-time employee {}: ${:.2}",
                    name, salary
                );
                Ok(salary)
            }
            Self::PartTime {
                name,
                hours_worked,
                hourly_rate,
                ..
            } => {
                if *hours_worked < 0.0 || *hourly_rate <= 0.0 {
                    return Err(PayrollError::InvalidHoursOrRate { name: name.clone() });
                }
                let salary = hours_worked * hourly_rate;
                println!(
                    "Calculating salary for part-time employee {}: ${:.2}",
                    name, salary
                );
                Ok(salary)
            }
            Self::Intern { name, stipend, .. } => {
                if *stipend < 0.0 {
                    return Err(PayrollError::InvalidStipend { name: name.clone() });
                }
                println!("Calculating salary for intern {}: ${:.2}", name, stipend);
                Ok(*stipend)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_time_salary_is_base_plus_benefits() {
        let employee = Employee::full_time("John Kamau", "FT001", 5000.0, 1000.0);
        assert_eq!(employee.calculate_salary().unwrap(), 6000.0);
    }

    #[test]
    fn test_full_time_negative_base_pay_fails() {
        let employee = Employee::full_time("Alice Bowen", "FT002", -100.0, 500.0);
        let err = employee.calculate_salary().unwrap_err();
        assert!(err.to_string().contains("Invalid base pay"));
        assert!(err.to_string().contains("Alice Bowen"));
    }

    #[test]
    fn test_full_time_zero_base_pay_fails() {
        let employee = Employee::full_time("Zero", "FT003", 0.0, 500.0);
        assert!(employee.calculate_salary().is_err());
    }

    #[test]
    fn test_part_time_salary_is_hours_times_rate() {
        let employee = Employee::part_time("Jane Karen", "PT001", 20.0, 25.0);
        assert_eq!(employee.calculate_salary().unwrap(), 500.0);
    }

    #[test]
    fn test_part_time_zero_hours_is_valid() {
        let employee = Employee::part_time("Idle", "PT003", 0.0, 25.0);
        assert_eq!(employee.calculate_salary().unwrap(), 0.0);
    }

    #[test]
    fn test_part_time_negative_hours_fails() {
        let employee = Employee::part_time("Tom Holland", "PT002", -10.0, 20.0);
        let err = employee.calculate_salary().unwrap_err();
        assert!(err.to_string().contains("Invalid hours or rate"));
        assert!(err.to_string().contains("Tom Holland"));
    }

    #[test]
    fn test_part_time_zero_rate_fails() {
        let employee = Employee::part_time("Volunteer", "PT004", 10.0, 0.0);
        assert!(employee.calculate_salary().is_err());
    }

    #[test]
    fn test_intern_salary_is_the_stipend() {
        let employee = Employee::intern("Bob Caulimo", "IN001", 1000.0);
        assert_eq!(employee.calculate_salary().unwrap(), 1000.0);
    }

    #[test]
    fn test_intern_zero_stipend_is_valid() {
        let employee = Employee::intern("Unpaid", "IN002", 0.0);
        assert_eq!(employee.calculate_salary().unwrap(), 0.0);
    }

    #[test]
    fn test_intern_negative_stipend_fails() {
        let employee = Employee::intern("Backwards", "IN003", -1.0);
        let err = employee.calculate_salary().unwrap_err();
        assert!(err.to_string().contains("Invalid stipend"));
    }

    #[test]
    fn test_accessors() {
        let employee = Employee::full_time("John Kamau", "FT001", 5000.0, 1000.0);
        assert_eq!(employee.name(), "John Kamau");
        assert_eq!(employee.id(), "FT001");
        assert_eq!(employee.kind(), "full-time");
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(Employee::part_time("Jane", "PT001", 20.0, 25.0).kind(), "part-time");
        assert_eq!(Employee::intern("Bob", "IN001", 1000.0).kind(), "intern");
    }
}
