pub mod catalog;
pub mod directory;

pub use catalog::DoctorCatalog;
