/// Domain services for the Inspector to Prism conversion
mod finding_mapper;

pub use finding_mapper::FindingMapper;
