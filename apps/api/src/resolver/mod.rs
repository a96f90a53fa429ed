//! Portfolio resolver: the source cascade behind every section.
//!
//! Each read walks an ordered list of [`SourceProvider`]s and returns the first
//! success, ending in the bundled static default, so reads never fail. The
//! contact write is the exception: it tries the backend, then the document
//! store, and reports the backend's error when both refuse.

pub mod skills;
pub mod sources;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

use crate::backend_client::BackendClient;
use crate::config::Config;
use crate::defaults;
use crate::document_store::{DocumentStore, CONTACT_COLLECTION, PROJECTS_COLLECTION};
use crate::errors::SourceError;
use crate::github::sync::synthesize_project;
use crate::github::thumbnails::ThumbnailOverrides;
use crate::github::GitHubClient;
use crate::models::contact::{ContactMessage, ContactSubmission};
use crate::models::profile::{EducationEntry, ExperienceEntry, PersonalInfo};
use crate::models::project::{CategoryFilter, Project};
use crate::models::skill::SkillSet;
use crate::models::PortfolioComplete;

use self::sources::{
    BackendFeatured, BackendProjects, BackendSource, GitHubProjects, GitHubSource,
    StoreContactMessages, StoreProjects,
};

// ──────────────────────────────────────────────
// Providers
// ──────────────────────────────────────────────

/// One candidate origin for a section's data.
#[async_trait]
pub trait SourceProvider<T: Send>: Send + Sync {
    fn name(&self) -> &'static str;
    async fn attempt(&self) -> Result<T, SourceError>;
}

pub type Chain<'a, T> = Vec<Box<dyn SourceProvider<T> + 'a>>;

/// Tries each provider in order, logging every failure. `None` when all fail.
pub async fn first_success<T: Send>(
    section: &str,
    chain: &[Box<dyn SourceProvider<T> + '_>],
) -> Option<T> {
    for provider in chain {
        match provider.attempt().await {
            Ok(value) => {
                debug!("{section}: served by {}", provider.name());
                return Some(value);
            }
            Err(e) if e.is_timeout() => {
                warn!("{section}: {} timed out, falling back", provider.name());
            }
            Err(e) => {
                warn!("{section}: {} failed, falling back: {e}", provider.name());
            }
        }
    }
    None
}

/// [`first_success`] terminated by a value that cannot fail.
pub async fn resolve_first<T: Send>(
    section: &str,
    chain: Chain<'_, T>,
    fallback: impl FnOnce() -> T,
) -> T {
    match first_success(section, &chain).await {
        Some(value) => value,
        None => {
            if !chain.is_empty() {
                info!("{section}: serving static default");
            }
            fallback()
        }
    }
}

// ──────────────────────────────────────────────
// Resolver
// ──────────────────────────────────────────────

/// Where project writes go: the store when configured, else the backend.
enum ProjectSink<'a> {
    Store(&'a DocumentStore),
    Backend(&'a BackendClient),
}

/// The configured data sources. `Default` is static mode: no network at all.
#[derive(Clone, Default)]
pub struct PortfolioResolver {
    backend: Option<BackendClient>,
    github: Option<GitHubSource>,
    store: Option<DocumentStore>,
    thumbnails: ThumbnailOverrides,
}

impl PortfolioResolver {
    pub fn from_config(config: &Config, client: Client, store: Option<DocumentStore>) -> Self {
        let mut resolver = Self::default();
        if let Some(url) = &config.backend_url {
            resolver = resolver.with_backend(BackendClient::new(
                client.clone(),
                url,
                config.request_timeout,
                config.skills_timeout,
            ));
        }
        if let Some(username) = &config.github_username {
            resolver = resolver.with_github(
                GitHubClient::new(client.clone(), config.request_timeout),
                username,
            );
        }
        if let Some(store) = store {
            resolver = resolver.with_document_store(store);
        }
        resolver
    }

    pub fn with_backend(mut self, backend: BackendClient) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn with_github(mut self, client: GitHubClient, username: &str) -> Self {
        self.github = Some(GitHubSource {
            client,
            username: username.to_string(),
        });
        self
    }

    pub fn with_document_store(mut self, store: DocumentStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Names of the configured sources, for the health report.
    pub fn configured_sources(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.store.is_some() {
            names.push("document_store");
        }
        if self.github.is_some() {
            names.push("github");
        }
        if self.backend.is_some() {
            names.push("backend");
        }
        names
    }

    /// The backend alone, for sections only it serves.
    fn backend_chain<T: Send>(&self) -> Chain<'_, T>
    where
        for<'b> BackendSource<'b>: SourceProvider<T>,
    {
        match &self.backend {
            Some(backend) => vec![Box::new(BackendSource(backend))],
            None => Vec::new(),
        }
    }

    // ── Reads ──

    pub async fn personal_info(&self) -> PersonalInfo {
        resolve_first("personal", self.backend_chain(), defaults::personal_info).await
    }

    pub async fn education(&self) -> Vec<EducationEntry> {
        resolve_first("education", self.backend_chain(), defaults::education).await
    }

    pub async fn experience(&self) -> Vec<ExperienceEntry> {
        resolve_first("experience", self.backend_chain(), defaults::experience).await
    }

    /// Skills with each empty or invalid group replaced by its default.
    pub async fn skills(&self) -> SkillSet {
        resolve_first("skills", self.backend_chain(), defaults::skills).await
    }

    /// Projects from the highest-priority configured source: document store,
    /// then GitHub, then backend.
    pub async fn projects(&self, filter: &CategoryFilter, featured_only: bool) -> Vec<Project> {
        let mut chain: Chain<'_, Vec<Project>> = Vec::new();
        if let Some(store) = &self.store {
            chain.push(Box::new(StoreProjects {
                store,
                filter,
                featured_only,
            }));
        } else if let Some(source) = &self.github {
            chain.push(Box::new(GitHubProjects {
                source,
                filter,
                featured_only,
                thumbnails: &self.thumbnails,
            }));
        } else if let Some(client) = &self.backend {
            chain.push(Box::new(BackendProjects {
                client,
                filter,
                featured_only,
            }));
        }
        resolve_first("projects", chain, || {
            defaults::projects(filter, featured_only)
        })
        .await
    }

    /// Featured projects. GitHub never marks a project featured, so it is skipped here
    /// and the backend answers, whereas `projects(.., true)` in GitHub mode is empty.
    pub async fn featured_projects(&self) -> Vec<Project> {
        let all = CategoryFilter::All;
        let mut chain: Chain<'_, Vec<Project>> = Vec::new();
        if let Some(store) = &self.store {
            chain.push(Box::new(StoreProjects {
                store,
                filter: &all,
                featured_only: true,
            }));
        } else if let Some(backend) = &self.backend {
            chain.push(Box::new(BackendFeatured(backend)));
        }
        resolve_first("featured projects", chain, || {
            defaults::projects(&CategoryFilter::All, true)
        })
        .await
    }

    /// Personal info and education, fetched concurrently.
    pub async fn about(&self) -> (PersonalInfo, Vec<EducationEntry>) {
        tokio::join!(self.personal_info(), self.education())
    }

    /// The backend aggregate, else every section resolved on its own.
    pub async fn complete(&self) -> PortfolioComplete {
        let all = CategoryFilter::All;
        let chain = self.backend_chain::<PortfolioComplete>();
        if let Some(mut complete) = first_success("complete", &chain).await {
            // the backend's project list yields to a higher-priority project source
            if self.store.is_some() || self.github.is_some() {
                complete.projects = self.projects(&all, false).await;
            }
            return complete;
        }
        let (personal, education, experience, projects, skills) = tokio::join!(
            self.personal_info(),
            self.education(),
            self.experience(),
            self.projects(&all, false),
            self.skills(),
        );
        PortfolioComplete {
            personal,
            education,
            experience,
            projects,
            skills,
        }
    }

    /// Backend first, then the document store. Empty when neither answers.
    pub async fn contact_messages(&self) -> Vec<ContactMessage> {
        let mut chain = self.backend_chain::<Vec<ContactMessage>>();
        if let Some(store) = &self.store {
            chain.push(Box::new(StoreContactMessages(store)));
        }
        resolve_first("contact messages", chain, Vec::new).await
    }

    // ── Writes ──

    /// Sends a contact message to the backend, or writes it to the document store
    /// when the backend fails. When both fail the backend's error is returned.
    pub async fn submit_contact_form(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactMessage, SourceError> {
        let primary = match &self.backend {
            Some(backend) => match backend.submit_contact(&submission).await {
                Ok(message) => return Ok(message),
                // a 2xx means the backend took the message; only its echo was unreadable
                Err(SourceError::Decode(e)) => {
                    warn!("contact: backend accepted submission, response unreadable: {e}");
                    return Ok(ContactMessage::from_submission(
                        String::new(),
                        submission,
                        Utc::now(),
                    ));
                }
                Err(e) => e,
            },
            None => SourceError::NotConfigured("backend"),
        };
        warn!("contact: backend rejected submission: {primary}");

        let Some(store) = &self.store else {
            return Err(primary);
        };

        let now = Utc::now();
        let stamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        let document = json!({
            "name": submission.name,
            "email": submission.email,
            "subject": submission.subject,
            "message": submission.message,
            "status": "new",
            "created_at": stamp,
            "updated_at": stamp,
        });

        match store.add_document(CONTACT_COLLECTION, &document).await {
            Ok(id) => {
                info!("contact: stored message {id} in document store");
                Ok(ContactMessage::from_submission(id, submission, now))
            }
            Err(fallback) => {
                error!("contact: document store write failed too: {fallback}");
                Err(primary)
            }
        }
    }

    fn project_sink(&self) -> Result<ProjectSink<'_>, SourceError> {
        match (&self.store, &self.backend) {
            (Some(store), _) => Ok(ProjectSink::Store(store)),
            (None, Some(backend)) => Ok(ProjectSink::Backend(backend)),
            (None, None) => Err(SourceError::NotConfigured("project sink")),
        }
    }

    /// Writes projects to the store (ids assigned there) or posts them to the backend.
    pub async fn create_projects_bulk(
        &self,
        projects: Vec<Project>,
    ) -> Result<Vec<Project>, SourceError> {
        match self.project_sink()? {
            ProjectSink::Store(store) => {
                let mut created = Vec::with_capacity(projects.len());
                for mut project in projects {
                    let mut document = serde_json::to_value(&project)?;
                    if let Value::Object(fields) = &mut document {
                        fields.remove("id");
                    }
                    let id = store.add_document(PROJECTS_COLLECTION, &document).await?;
                    project.id = Some(id);
                    created.push(project);
                }
                info!("projects: created {} in document store", created.len());
                Ok(created)
            }
            ProjectSink::Backend(backend) => backend.create_projects_bulk(&projects).await,
        }
    }

    /// Imports the selected GitHub repositories as projects, ordered after the
    /// existing ones.
    pub async fn import_github_projects(
        &self,
        repo_ids: &[u64],
    ) -> Result<Vec<Project>, SourceError> {
        let source = self
            .github
            .as_ref()
            .ok_or(SourceError::NotConfigured("github"))?;

        let all = CategoryFilter::All;
        let existing = match self.project_sink()? {
            ProjectSink::Store(store) => store.query_projects(&all, false).await?,
            ProjectSink::Backend(backend) => backend.projects(&all, false).await?,
        };
        let next_order = existing.iter().map(|p| p.order).max().unwrap_or(0) + 1;

        let repos = source.client.list_repos(&source.username).await?;
        let selected: Vec<Project> = repos
            .iter()
            .filter(|repo| repo_ids.contains(&repo.id))
            .enumerate()
            .map(|(idx, repo)| {
                let order = next_order + idx as i64;
                let mut project =
                    synthesize_project(repo, order, &source.username, &self.thumbnails);
                project.id = None;
                project
            })
            .collect();

        if selected.len() < repo_ids.len() {
            warn!(
                "import: {} of {} repositories not found for {}",
                repo_ids.len() - selected.len(),
                repo_ids.len(),
                source.username
            );
        }
        if selected.is_empty() {
            return Ok(Vec::new());
        }
        self.create_projects_bulk(selected).await
    }
}
