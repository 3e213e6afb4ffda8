//! Level Ethics - AI Assessment Dashboard backend
//!
//! This crate implements a guided EU AI Act compliance questionnaire (a
//! three-step wizard with rule-based guidance and CSV export) next to a
//! read-only evaluation library of test questions, personas, model outputs,
//! evaluation scores and contributor insights.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
