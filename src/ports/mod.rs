/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven (outbound) ports exist: the binary calls the use case
/// directly, so there is no separate inbound interface.
pub mod outbound;
