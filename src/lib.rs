//! Payroll Engine
//!
//! This crate computes payroll for hourly and salaried employees and keeps
//! employee, department and payroll records in a repository persisted as
//! JSON documents.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
