/// Conversion domain - Inspector source model, Prism target model and the
/// pure mapping between them. Nothing in here performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
