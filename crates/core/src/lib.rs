//! # PBAS Core
//!
//! Core domain logic for the PBAS appraisal form service.
//!
//! This crate contains pure data operations:
//! - The canonical flat appraisal record schema consumed by the form renderer
//! - Schema mapping from decoded Firestore documents, with per-field
//!   fallback chains across the historical source shapes
//! - Runtime configuration resolved once at startup
//!
//! **No API concerns**: HTTP routing and DOCX packaging belong in `api-rest`
//! and `pbas-docx`.

pub mod config;
pub mod error;
pub mod mapper;
pub mod record;
pub mod service;

pub use config::CoreConfig;
pub use error::{AppraisalError, AppraisalResult};
pub use mapper::map_document;
pub use record::{
    ActivitiesData, AppraisalRecord, Course, CurrentPost, PriorAppointment, Publication,
    Qualification, ResearchDegree, ResearchPaper, TeachingData,
};
pub use service::AppraisalService;
