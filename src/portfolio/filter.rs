//! Language filtering for the project gallery.

use super::model::RepositorySummary;

/// The selection that disables filtering.
pub const ALL_LANGUAGES: &str = "All";

/// Returns the projects matching the selected language.
///
/// `"All"` is the identity. Any other selection is an exact,
/// case-sensitive match; projects without a language never match a
/// concrete selection.
pub fn filter_by_language(
    projects: &[RepositorySummary],
    selection: &str,
) -> Vec<RepositorySummary> {
    if selection == ALL_LANGUAGES {
        return projects.to_vec();
    }

    projects
        .iter()
        .filter(|p| p.language.as_deref() == Some(selection))
        .cloned()
        .collect()
}

/// The selectable languages: `"All"` followed by the distinct non-empty
/// languages observed across the projects, in first-seen order.
pub fn language_options(projects: &[RepositorySummary]) -> Vec<String> {
    let mut options = vec![ALL_LANGUAGES.to_string()];

    for project in projects {
        if let Some(language) = &project.language {
            if !language.is_empty() && !options.contains(language) {
                options.push(language.clone());
            }
        }
    }

    options
}
