pub mod loader;
pub mod types;

pub use loader::{load_organizations, read_organizations, DatasetError, NAME_COLUMN};
pub use types::OrganizationRecord;
