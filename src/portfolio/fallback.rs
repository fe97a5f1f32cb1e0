//! Hand-authored stand-in content for failed fetch cycles.

use super::model::{CommitSummary, PLACEHOLDER_AVATAR, RepositorySummary};

/// The fixed dataset rendered when the repository list cannot be fetched.
///
/// Always exactly two entries; the gallery never mixes these with live
/// data.
pub fn fallback_projects() -> Vec<RepositorySummary> {
    vec![
        RepositorySummary {
            name: "devfolio".to_string(),
            description: Some("This portfolio app: an egui front end over the GitHub API.".to_string()),
            url: "https://github.com/octocat/devfolio".to_string(),
            language: Some("Rust".to_string()),
            stars: 24,
            forks: 3,
            topics: vec!["egui".to_string(), "portfolio".to_string()],
            commits: vec![CommitSummary {
                short_sha: "a1b2c3d".to_string(),
                message: "Wire the project gallery to live data".to_string(),
                date: "Mar 14, 2024".to_string(),
                author: "Octo Cat".to_string(),
                avatar_url: PLACEHOLDER_AVATAR.to_string(),
            }],
        },
        RepositorySummary {
            name: "terminal-garden".to_string(),
            description: Some("A tiny ASCII garden that grows in your terminal.".to_string()),
            url: "https://github.com/octocat/terminal-garden".to_string(),
            language: Some("Rust".to_string()),
            stars: 97,
            forks: 11,
            topics: vec!["cli".to_string(), "generative".to_string()],
            commits: Vec::new(),
        },
    ]
}
