//! Project domain model.
//!
//! # Responsibility
//! - Define one portfolio entry and its wire shape.
//! - Validate identity and display fields before a record enters a catalog.
//!
//! # Invariants
//! - `id` is non-empty and contains no whitespace.
//! - `title` is never blank.
//! - `tags` keep insertion order; duplicates are allowed.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable slug identifier used for routing and relation lookups.
pub type ProjectId = String;

/// Record-level validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    EmptyId,
    /// Id contains whitespace.
    InvalidId(String),
    EmptyTitle { id: ProjectId },
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "project id cannot be empty"),
            Self::InvalidId(id) => {
                write!(f, "project id `{id}` must not contain whitespace")
            }
            Self::EmptyTitle { id } => write!(f, "project `{id}` has an empty title"),
        }
    }
}

impl Error for ProjectValidationError {}

/// One portfolio entry.
///
/// Serialized with the field names the web front end uses (`imageUrl`,
/// `demoUrl`, `codeUrl`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProjectWire")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    /// Short summary shown on cards.
    pub description: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_url: Option<String>,
    /// Display priority follows insertion order.
    pub tags: Vec<String>,
    /// Presentation hint only; query functions other than
    /// `partition_featured` ignore it.
    pub featured: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectWire {
    id: ProjectId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    demo_url: Option<String>,
    #[serde(default)]
    code_url: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    featured: bool,
}

impl TryFrom<ProjectWire> for Project {
    type Error = ProjectValidationError;

    fn try_from(wire: ProjectWire) -> Result<Self, Self::Error> {
        let project = Self {
            id: wire.id,
            title: wire.title,
            description: wire.description,
            image_url: wire.image_url,
            demo_url: wire.demo_url,
            code_url: wire.code_url,
            tags: wire.tags,
            featured: wire.featured,
        };
        project.validate()?;
        Ok(project)
    }
}

impl Project {
    /// Creates a non-featured project with no tags or links.
    ///
    /// Does not validate; catalogs validate on load.
    pub fn new(
        id: impl Into<ProjectId>,
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            image_url: image_url.into(),
            demo_url: None,
            code_url: None,
            tags: Vec::new(),
            featured: false,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_demo_url(mut self, url: impl Into<String>) -> Self {
        self.demo_url = Some(url.into());
        self
    }

    pub fn with_code_url(mut self, url: impl Into<String>) -> Self {
        self.code_url = Some(url.into());
        self
    }

    /// Flags this project for the featured showcase.
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn is_featured(&self) -> bool {
        self.featured
    }

    /// Returns whether any tag equals `tag` under case-insensitive comparison.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|value| value.to_lowercase() == wanted)
    }

    /// Validates identity and display invariants.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.id.is_empty() {
            return Err(ProjectValidationError::EmptyId);
        }
        if self.id.chars().any(char::is_whitespace) {
            return Err(ProjectValidationError::InvalidId(self.id.clone()));
        }
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::EmptyTitle {
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}
