use std::fmt;

use serde::{Deserialize, Serialize};

/// The tab a project is listed under.
///
/// Rows from the backend may carry categories outside the fixed set (for example
/// "Full-Stack"); those are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectCategory {
    AiMl,
    Nlp,
    AiSafety,
    DevOpsApi,
    ComputerVision,
    Other(String),
}

impl ProjectCategory {
    pub fn as_str(&self) -> &str {
        match self {
            ProjectCategory::AiMl => "AI/ML",
            ProjectCategory::Nlp => "NLP",
            ProjectCategory::AiSafety => "AI Safety",
            ProjectCategory::DevOpsApi => "DevOps/API",
            ProjectCategory::ComputerVision => "Computer Vision",
            ProjectCategory::Other(raw) => raw,
        }
    }
}

impl From<String> for ProjectCategory {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "AI/ML" => ProjectCategory::AiMl,
            "NLP" => ProjectCategory::Nlp,
            "AI Safety" => ProjectCategory::AiSafety,
            "DevOps/API" => ProjectCategory::DevOpsApi,
            "Computer Vision" => ProjectCategory::ComputerVision,
            _ => ProjectCategory::Other(raw),
        }
    }
}

impl From<ProjectCategory> for String {
    fn from(category: ProjectCategory) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which projects a listing should include.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    /// `"all"` and blank input select every project.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some("all") => CategoryFilter::All,
            Some(other) => CategoryFilter::Only(ProjectCategory::from(other.to_string())),
        }
    }

    pub fn category(&self) -> Option<&ProjectCategory> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(category) => Some(category),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Completed,
    InProgress,
}

/// Popularity figures of a repository-backed project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepoMetrics {
    pub stars: u32,
    pub forks: u32,
    pub language: Option<String>,
}

impl RepoMetrics {
    /// Display lines shown on the project card, derived from the numbers.
    pub fn highlights(&self) -> Vec<String> {
        vec![
            format!("Stars: {}", self.stars),
            format!("Forks: {}", self.forks),
            format!("Language: {}", self.language.as_deref().unwrap_or("N/A")),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default, alias = "longDescription")]
    pub long_description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub category: ProjectCategory,
    #[serde(default)]
    pub featured: bool,
    pub github: String,
    #[serde(default)]
    pub demo: Option<String>,
    pub image: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<RepoMetrics>,
}

impl Project {
    /// Primary categorization plus the featured flag, as the document store filters.
    pub fn matches(&self, filter: &CategoryFilter, featured_only: bool) -> bool {
        let category_ok = filter.category().map_or(true, |c| &self.category == c);
        category_ok && (!featured_only || self.featured)
    }

    pub fn stars(&self) -> u32 {
        self.metrics.as_ref().map_or(0, |m| m.stars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_is_preserved() {
        let category: ProjectCategory = serde_json::from_str("\"Full-Stack\"").unwrap();
        assert_eq!(category, ProjectCategory::Other("Full-Stack".to_string()));
        assert_eq!(serde_json::to_string(&category).unwrap(), "\"Full-Stack\"");
    }

    #[test]
    fn test_known_category_serializes_to_display_name() {
        let json = serde_json::to_string(&ProjectCategory::DevOpsApi).unwrap();
        assert_eq!(json, "\"DevOps/API\"");
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(CategoryFilter::parse(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(Some("all")), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(Some(" ")), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse(Some("NLP")),
            CategoryFilter::Only(ProjectCategory::Nlp)
        );
    }

    #[test]
    fn test_metrics_highlights() {
        let metrics = RepoMetrics {
            stars: 12,
            forks: 3,
            language: None,
        };
        assert_eq!(
            metrics.highlights(),
            vec!["Stars: 12", "Forks: 3", "Language: N/A"]
        );
    }

    #[test]
    fn test_status_uses_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
    }
}
