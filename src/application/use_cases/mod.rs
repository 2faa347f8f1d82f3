/// Use cases module containing application business logic orchestration
mod convert_report;

pub use convert_report::ConvertReportUseCase;
