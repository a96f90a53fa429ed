//! Concrete source providers, one per (origin, section) pair.

use async_trait::async_trait;

use crate::backend_client::BackendClient;
use crate::defaults;
use crate::document_store::DocumentStore;
use crate::errors::SourceError;
use crate::github::sync::build_projects;
use crate::github::thumbnails::ThumbnailOverrides;
use crate::github::GitHubClient;
use crate::models::contact::ContactMessage;
use crate::models::profile::{EducationEntry, ExperienceEntry, PersonalInfo};
use crate::models::project::{CategoryFilter, Project};
use crate::models::skill::SkillSet;
use crate::models::PortfolioComplete;
use crate::resolver::skills::merge_skill_groups;
use crate::resolver::SourceProvider;

/// The remote backend, for every section it serves at a fixed path.
pub struct BackendSource<'a>(pub &'a BackendClient);

#[async_trait]
impl SourceProvider<PersonalInfo> for BackendSource<'_> {
    fn name(&self) -> &'static str {
        "backend"
    }

    async fn attempt(&self) -> Result<PersonalInfo, SourceError> {
        self.0.personal().await
    }
}

#[async_trait]
impl SourceProvider<Vec<EducationEntry>> for BackendSource<'_> {
    fn name(&self) -> &'static str {
        "backend"
    }

    async fn attempt(&self) -> Result<Vec<EducationEntry>, SourceError> {
        self.0.education().await
    }
}

#[async_trait]
impl SourceProvider<Vec<ExperienceEntry>> for BackendSource<'_> {
    fn name(&self) -> &'static str {
        "backend"
    }

    async fn attempt(&self) -> Result<Vec<ExperienceEntry>, SourceError> {
        self.0.experience().await
    }
}

#[async_trait]
impl SourceProvider<SkillSet> for BackendSource<'_> {
    fn name(&self) -> &'static str {
        "backend"
    }

    async fn attempt(&self) -> Result<SkillSet, SourceError> {
        let payload = self.0.skills().await?;
        Ok(merge_skill_groups(&payload, defaults::skills()))
    }
}

#[async_trait]
impl SourceProvider<PortfolioComplete> for BackendSource<'_> {
    fn name(&self) -> &'static str {
        "backend"
    }

    async fn attempt(&self) -> Result<PortfolioComplete, SourceError> {
        let payload = self.0.complete().await?;
        Ok(PortfolioComplete {
            personal: payload.personal,
            education: payload.education,
            experience: payload.experience,
            projects: payload.projects,
            skills: merge_skill_groups(&payload.skills, defaults::skills()),
        })
    }
}

#[async_trait]
impl SourceProvider<Vec<ContactMessage>> for BackendSource<'_> {
    fn name(&self) -> &'static str {
        "backend"
    }

    async fn attempt(&self) -> Result<Vec<ContactMessage>, SourceError> {
        self.0.contact_messages().await
    }
}

pub struct BackendProjects<'a> {
    pub client: &'a BackendClient,
    pub filter: &'a CategoryFilter,
    pub featured_only: bool,
}

#[async_trait]
impl SourceProvider<Vec<Project>> for BackendProjects<'_> {
    fn name(&self) -> &'static str {
        "backend"
    }

    async fn attempt(&self) -> Result<Vec<Project>, SourceError> {
        self.client.projects(self.filter, self.featured_only).await
    }
}

pub struct BackendFeatured<'a>(pub &'a BackendClient);

#[async_trait]
impl SourceProvider<Vec<Project>> for BackendFeatured<'_> {
    fn name(&self) -> &'static str {
        "backend"
    }

    async fn attempt(&self) -> Result<Vec<Project>, SourceError> {
        self.0.featured_projects().await
    }
}

pub struct StoreProjects<'a> {
    pub store: &'a DocumentStore,
    pub filter: &'a CategoryFilter,
    pub featured_only: bool,
}

#[async_trait]
impl SourceProvider<Vec<Project>> for StoreProjects<'_> {
    fn name(&self) -> &'static str {
        "document store"
    }

    async fn attempt(&self) -> Result<Vec<Project>, SourceError> {
        self.store
            .query_projects(self.filter, self.featured_only)
            .await
    }
}

pub struct StoreContactMessages<'a>(pub &'a DocumentStore);

#[async_trait]
impl SourceProvider<Vec<ContactMessage>> for StoreContactMessages<'_> {
    fn name(&self) -> &'static str {
        "document store"
    }

    async fn attempt(&self) -> Result<Vec<ContactMessage>, SourceError> {
        self.0.list_contact_messages().await
    }
}

/// A GitHub account whose public repositories are listed as projects.
#[derive(Clone)]
pub struct GitHubSource {
    pub client: GitHubClient,
    pub username: String,
}

pub struct GitHubProjects<'a> {
    pub source: &'a GitHubSource,
    pub filter: &'a CategoryFilter,
    pub featured_only: bool,
    pub thumbnails: &'a ThumbnailOverrides,
}

#[async_trait]
impl SourceProvider<Vec<Project>> for GitHubProjects<'_> {
    fn name(&self) -> &'static str {
        "github"
    }

    async fn attempt(&self) -> Result<Vec<Project>, SourceError> {
        let repos = self.source.client.list_repos(&self.source.username).await?;
        let mut projects = build_projects(
            &repos,
            self.filter,
            &self.source.username,
            self.thumbnails,
        );
        // synthesized projects are never featured
        if self.featured_only {
            projects.retain(|p| p.featured);
        }
        Ok(projects)
    }
}
