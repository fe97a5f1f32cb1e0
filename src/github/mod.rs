pub mod client;
pub mod types;

pub use client::{GitHubSource, ProjectSource};
#[cfg(test)]
pub use client::MockProjectSource;
