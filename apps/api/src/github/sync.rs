//! Repository → project synthesis for the GitHub-backed project list.
//!
//! Pipeline:
//! 1. Drop forks and repositories on the exclusion list
//! 2. Map each remaining repository to a `Project`, inferring its category
//! 3. Apply the tab filter: primary category OR content keyword match
//! 4. Sort by stars, descending (stable, so GitHub's recency order breaks ties)

use std::sync::LazyLock;

use regex::Regex;

use crate::github::thumbnails::ThumbnailOverrides;
use crate::github::Repository;
use crate::models::project::{
    CategoryFilter, Project, ProjectCategory, ProjectStatus, RepoMetrics,
};

/// Utility, admin and self-referential repositories, compared after [`normalize_repo_key`].
pub const EXCLUDED_REPO_KEYS: [&str; 5] = [
    "nlpmini",
    "agenthacks",
    "agentmodules",
    "rohanchavan0701",
    "portfolio",
];

/// Lowercases and strips whitespace, hyphens and underscores.
pub fn normalize_repo_key(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn is_listed(repo: &Repository) -> bool {
    !repo.fork && !EXCLUDED_REPO_KEYS.contains(&normalize_repo_key(&repo.name).as_str())
}

/// Primary category from topics. First matching rule wins; ML languages, ml/ai
/// topics and everything else land in AI/ML.
pub fn infer_category(repo: &Repository) -> ProjectCategory {
    let has = |kw: &str| repo.topics.iter().any(|t| t.to_lowercase().contains(kw));

    if has("nlp") {
        ProjectCategory::Nlp
    } else if has("vision") || has("cv") {
        ProjectCategory::ComputerVision
    } else if has("devops") || has("api") {
        ProjectCategory::DevOpsApi
    } else if has("safety") {
        ProjectCategory::AiSafety
    } else {
        ProjectCategory::AiMl
    }
}

/// Builds the project card for a repository. `order` is its 1-based list position.
pub fn synthesize_project(
    repo: &Repository,
    order: i64,
    default_owner: &str,
    thumbnails: &ThumbnailOverrides,
) -> Project {
    let owner = repo
        .owner
        .as_ref()
        .map_or(default_owner, |o| o.login.as_str());

    let tech = if !repo.topics.is_empty() {
        repo.topics.clone()
    } else if let Some(language) = &repo.language {
        vec![language.clone()]
    } else {
        vec!["GitHub".to_string()]
    };

    let title = if repo.name.is_empty() {
        "GitHub Project".to_string()
    } else {
        repo.name.replace(['-', '_'], " ")
    };

    let description = non_empty(repo.description.as_deref());
    let metrics = RepoMetrics {
        stars: repo.stargazers_count,
        forks: repo.forks_count,
        language: repo.language.clone(),
    };

    Project {
        id: Some(repo.id.to_string()),
        title,
        description: description
            .unwrap_or("Repository hosted on GitHub")
            .to_string(),
        long_description: description.unwrap_or("Imported from GitHub.").to_string(),
        tech,
        category: infer_category(repo),
        featured: false,
        github: repo.html_url.clone(),
        demo: non_empty(repo.homepage.as_deref()).map(str::to_string),
        image: thumbnails.image_for(owner, &repo.name),
        status: ProjectStatus::Completed,
        highlights: metrics.highlights(),
        order,
        metrics: Some(metrics),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn keyword_regex(pattern: &str) -> Regex {
    Regex::new(&format!(r"(?:\b|_)(?:{pattern})(?:\b|_)")).expect("keyword pattern is valid")
}

static AI_ML_KEYWORDS: LazyLock<Regex> =
    LazyLock::new(|| keyword_regex("ai|ml|machine|learning|pytorch|tensorflow|langchain|llm|python"));
static NLP_KEYWORDS: LazyLock<Regex> =
    LazyLock::new(|| keyword_regex("nlp|language|bert|gpt|transformer|chatbot|text"));
static DEVOPS_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    keyword_regex("api|devops|docker|kubernetes|openapi|rest|typescript|node|express")
});
static VISION_KEYWORDS: LazyLock<Regex> =
    LazyLock::new(|| keyword_regex("vision|cv|image|opencv|clip|dinov"));
static SAFETY_KEYWORDS: LazyLock<Regex> =
    LazyLock::new(|| keyword_regex(r"safety|alignment|red\s*team|adversarial|defender"));

fn keywords_for(category: &ProjectCategory) -> Option<&'static Regex> {
    match category {
        ProjectCategory::AiMl => Some(&*AI_ML_KEYWORDS),
        ProjectCategory::Nlp => Some(&*NLP_KEYWORDS),
        ProjectCategory::DevOpsApi => Some(&*DEVOPS_KEYWORDS),
        ProjectCategory::ComputerVision => Some(&*VISION_KEYWORDS),
        ProjectCategory::AiSafety => Some(&*SAFETY_KEYWORDS),
        ProjectCategory::Other(_) => None,
    }
}

/// Whether a project belongs under the selected tab.
///
/// The primary category is OR-ed with a keyword match over title, description and
/// tech, so one project can show up under several tabs. Tabs without a keyword
/// set accept everything.
pub fn visible_under(project: &Project, filter: &CategoryFilter) -> bool {
    let Some(category) = filter.category() else {
        return true;
    };
    if &project.category == category {
        return true;
    }
    match keywords_for(category) {
        Some(keywords) => {
            let haystack = format!(
                "{} {} {}",
                project.title,
                project.description,
                project.tech.join(" ")
            )
            .to_lowercase();
            keywords.is_match(&haystack)
        }
        None => true,
    }
}

/// Runs the full pipeline over a repository listing.
pub fn build_projects(
    repos: &[Repository],
    filter: &CategoryFilter,
    default_owner: &str,
    thumbnails: &ThumbnailOverrides,
) -> Vec<Project> {
    let mut projects: Vec<Project> = repos
        .iter()
        .filter(|repo| is_listed(repo))
        .enumerate()
        .map(|(idx, repo)| synthesize_project(repo, idx as i64 + 1, default_owner, thumbnails))
        .filter(|project| visible_under(project, filter))
        .collect();

    projects.sort_by(|a, b| b.stars().cmp(&a.stars()));
    projects
}
