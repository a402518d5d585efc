//! Roster - polymorphic record-processing demos
//!
//! Two self-contained demo domains behind one driver: an animal hospital
//! that treats a roster of patients, and a payroll system that settles a
//! roster of employees. Each applies per-kind validity checks during a
//! single in-order pass and keeps going past failures.
//!
//! The two modules deliberately share no code; they are structurally
//! identical renditions of the same dispatch pattern.

pub mod hospital;
pub mod payroll;
