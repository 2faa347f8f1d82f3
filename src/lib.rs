//! inspector-prism - convert AWS Inspector findings into Prism issue files
//!
//! This library maps an Inspector findings export onto the issue import
//! format of the Prism risk-management platform, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`conversion`): Source/target models and the pure finding mapper
//! - **Application Layer** (`application`): The conversion use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use inspector_prism::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = ConvertReportUseCase::new(
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case.execute(ConvertRequest::new(PathBuf::from("inspector.json")))?;
//!
//! let output = PrismJsonFormatter::new().format(&response.report)?;
//! FileSystemWriter::new(PathBuf::from("prism.json")).present(&output)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod conversion;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::PrismJsonFormatter;
    pub use crate::application::dto::{ConvertRequest, ConvertResponse};
    pub use crate::application::use_cases::ConvertReportUseCase;
    pub use crate::conversion::domain::{
        AffectedHost, InspectorFinding, InspectorReport, InspectorResource, PrismIssue,
        PrismReport, RatingCounts, RiskRating,
    };
    pub use crate::conversion::policies::SeverityPolicy;
    pub use crate::conversion::services::FindingMapper;
    pub use crate::ports::outbound::{
        OutputPresenter, PrismFormatter, ProgressReporter, ReportReader,
    };
    pub use crate::shared::error::ConvertError;
    pub use crate::shared::Result;
}
