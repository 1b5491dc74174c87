//! Browser-independent core shared by the front-end pages.
//!
//! - `model`: payloads exchanged with the backend and the form field map.
//! - `requests`: typed request bodies produced by validated forms.
//! - `submission`: the per-form submission state machine (`FormController`).
//! - `forms`: the concrete form schemas (reports, signup, signin, payment).
//! - `banner`, `navigation`, `endpoints`, `config`: UI policy and URL building.

pub mod banner;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod forms;
pub mod model;
pub mod navigation;
pub mod requests;
pub mod submission;
pub mod validation;
