/// Crate-wide result type. Typed failures are `ConvertError` values
/// carried inside `anyhow::Error` so adapters can attach context.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
