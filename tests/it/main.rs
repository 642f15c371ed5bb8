//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best
//! practices, reducing linking overhead from 3x to 1x.
//!
//! Structure:
//! - helpers: builders and fixtures shared across tests
//! - integration: multi-component drag/drop workflow tests
//! - unit: single-component unit tests

mod unit;
