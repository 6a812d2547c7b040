//! Immutable catalog value and its load paths.

use crate::model::project::{Project, ProjectValidationError};
use log::{error, info};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog load error.
#[derive(Debug)]
pub enum CatalogError {
    InvalidProject(ProjectValidationError),
    /// Two records share one id; the value is the repeated id.
    DuplicateId(String),
    /// Catalog JSON is malformed or a record fails validation while decoding.
    Parse(serde_json::Error),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidProject(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "duplicate project id in catalog: `{id}`"),
            Self::Parse(err) => write!(f, "invalid catalog json: {err}"),
            Self::Io { path, source } => {
                write!(f, "failed to read catalog `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidProject(err) => Some(err),
            Self::DuplicateId(_) => None,
            Self::Parse(err) => Some(err),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ProjectValidationError> for CatalogError {
    fn from(value: ProjectValidationError) -> Self {
        Self::InvalidProject(value)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Ordered, validated, read-only list of projects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Builds a catalog from records in declaration order.
    ///
    /// # Errors
    /// - `InvalidProject` when any record fails `Project::validate()`.
    /// - `DuplicateId` on the first id seen twice.
    pub fn try_new(projects: Vec<Project>) -> CatalogResult<Self> {
        validate_records(&projects)?;
        Ok(Self { projects })
    }

    /// Parses a JSON array of projects and validates it as a catalog.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        Self::try_new(projects)
    }

    /// Reads and parses a JSON catalog file.
    ///
    /// # Side effects
    /// - Emits `catalog_load` logging events with source and project count.
    pub fn from_json_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let loaded = std::fs::read_to_string(path)
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|json| Self::from_json_str(&json));

        match &loaded {
            Ok(catalog) => info!(
                "event=catalog_load module=catalog status=ok source=file projects={}",
                catalog.len()
            ),
            Err(err) => error!(
                "event=catalog_load module=catalog status=error source=file error={}",
                err
            ),
        }
        loaded
    }

    /// Returns the full catalog in declaration order.
    pub fn get_all(&self) -> &[Project] {
        &self.projects
    }

    /// Returns projects carrying `tag` (case-insensitive exact match).
    ///
    /// The tag is compared as given, without trimming. Never fails; unknown
    /// tags yield an empty list.
    pub fn get_by_tag(&self, tag: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| project.has_tag(tag))
            .collect()
    }

    /// Resolves one project by id for detail routing.
    pub fn get_by_id(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Distinct tags in first-seen order, deduplicated case-insensitively.
    ///
    /// The first spelling encountered is kept.
    pub fn tags(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut tags = Vec::new();
        for tag in self.projects.iter().flat_map(|project| project.tags.iter()) {
            if seen.insert(tag.to_lowercase()) {
                tags.push(tag.clone());
            }
        }
        tags
    }

    /// Other projects sharing at least one tag with `id`, in catalog order.
    ///
    /// Returns an empty list for unknown ids or projects without tags.
    pub fn related(&self, id: &str, limit: usize) -> Vec<&Project> {
        let Some(anchor) = self.get_by_id(id) else {
            return Vec::new();
        };
        let anchor_tags = anchor
            .tags
            .iter()
            .map(|tag| tag.to_lowercase())
            .collect::<HashSet<_>>();

        self.projects
            .iter()
            .filter(|project| project.id != anchor.id)
            .filter(|project| {
                project
                    .tags
                    .iter()
                    .any(|tag| anchor_tags.contains(&tag.to_lowercase()))
            })
            .take(limit)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}

fn validate_records(projects: &[Project]) -> CatalogResult<()> {
    let mut seen = HashSet::with_capacity(projects.len());
    for project in projects {
        project.validate()?;
        if !seen.insert(project.id.as_str()) {
            return Err(CatalogError::DuplicateId(project.id.clone()));
        }
    }
    Ok(())
}
