//! Search, category and featured filters.

use crate::model::project::Project;

/// Category id meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";
/// Maximum number of projects shown in the featured group.
pub const FEATURED_LIMIT: usize = 3;

/// Featured/regular split produced by [`partition_featured`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedPartition<'a> {
    /// At most [`FEATURED_LIMIT`] featured projects, in input order.
    pub featured: Vec<&'a Project>,
    /// Every non-featured project, in input order.
    pub regular: Vec<&'a Project>,
}

/// Keeps projects whose title, description or any tag contains `term`.
///
/// Matching is case-insensitive and ignores leading/trailing whitespace in
/// `term`. A blank term keeps every project.
pub fn search<'a, I>(projects: I, term: &str) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return projects.into_iter().collect();
    }

    projects
        .into_iter()
        .filter(|project| matches_term(project, &needle))
        .collect()
}

/// Keeps projects with a tag containing `category_id` (case-insensitive).
///
/// Substring rather than exact match: category `react` also selects
/// `React Native`. Only the exact id [`ALL_CATEGORIES`] keeps every project;
/// any other id, including `"ALL"` or `""`, is matched against tags as-is, so
/// projects without tags never pass.
pub fn filter_by_category<'a, I>(projects: I, category_id: &str) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    if category_id == ALL_CATEGORIES {
        return projects.into_iter().collect();
    }

    let needle = category_id.to_lowercase();
    projects
        .into_iter()
        .filter(|project| {
            project
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Splits projects into the capped featured group and the regular group.
///
/// Featured projects beyond [`FEATURED_LIMIT`] are dropped from both groups.
pub fn partition_featured<'a, I>(projects: I) -> FeaturedPartition<'a>
where
    I: IntoIterator<Item = &'a Project>,
{
    let mut featured = Vec::with_capacity(FEATURED_LIMIT);
    let mut regular = Vec::new();
    for project in projects {
        if !project.is_featured() {
            regular.push(project);
        } else if featured.len() < FEATURED_LIMIT {
            featured.push(project);
        }
    }
    FeaturedPartition { featured, regular }
}

fn matches_term(project: &Project, needle: &str) -> bool {
    project.title.to_lowercase().contains(needle)
        || project.description.to_lowercase().contains(needle)
        || project
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}
