pub mod error;
pub mod fallback;
pub mod filter;
pub mod loader;
pub mod model;

pub use error::LoadError;
pub use loader::{Portfolio, PortfolioLoader};
pub use model::{CommitSummary, RepositorySummary};
