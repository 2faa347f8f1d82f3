/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod convert_request;
mod convert_response;

pub use convert_request::ConvertRequest;
pub use convert_response::ConvertResponse;
