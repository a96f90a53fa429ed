//! Document store: a Firestore project reached over its REST API.
//!
//! Optional source for projects and optional sink for contact messages. The
//! process-wide handle is created once by [`init`] and only when the full
//! credential bundle is present.

pub mod value;

use std::sync::OnceLock;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{debug, info};

use crate::backend_client::send_json;
use crate::errors::SourceError;
use crate::models::contact::ContactMessage;
use crate::models::project::{CategoryFilter, Project};

pub const PROJECTS_COLLECTION: &str = "projects";
pub const CONTACT_COLLECTION: &str = "contact_messages";

/// Credentials for the document store. All four parts are required together.
#[derive(Debug, Clone)]
pub struct DocumentStoreConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub app_id: String,
    pub endpoint: String,
}

impl DocumentStoreConfig {
    /// Returns `None` when any credential is missing; the store then counts as unconfigured.
    pub fn from_parts(
        api_key: Option<&str>,
        auth_domain: Option<&str>,
        project_id: Option<&str>,
        app_id: Option<&str>,
        endpoint: &str,
    ) -> Option<Self> {
        match (api_key, auth_domain, project_id, app_id) {
            (Some(api_key), Some(auth_domain), Some(project_id), Some(app_id)) => Some(Self {
                api_key: api_key.to_string(),
                auth_domain: auth_domain.to_string(),
                project_id: project_id.to_string(),
                app_id: app_id.to_string(),
                endpoint: endpoint.trim_end_matches('/').to_string(),
            }),
            _ => None,
        }
    }
}

static STORE: OnceLock<DocumentStore> = OnceLock::new();

/// Initializes the shared handle. The first configured call wins; later calls
/// return the existing handle untouched.
pub fn init(client: Client, config: Option<DocumentStoreConfig>) -> Option<&'static DocumentStore> {
    let Some(config) = config else {
        if cfg!(debug_assertions) {
            debug!("Document store credentials incomplete; store disabled");
        }
        return STORE.get();
    };
    Some(STORE.get_or_init(|| {
        info!(
            "Document store initialized (project: {}, domain: {})",
            config.project_id, config.auth_domain
        );
        DocumentStore::new(client, config)
    }))
}

/// The shared handle, if [`init`] configured one.
pub fn handle() -> Option<&'static DocumentStore> {
    STORE.get()
}

#[derive(Clone)]
pub struct DocumentStore {
    client: Client,
    config: DocumentStoreConfig,
}

#[derive(Debug, Deserialize)]
struct Document {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

impl Document {
    /// Last path segment of the resource name.
    fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or_default()
    }

    /// Plain JSON with the document id folded in as `id`.
    fn into_json(self) -> Result<Value, SourceError> {
        let id = self.id().to_string();
        let mut plain = value::decode_fields(&self.fields)?;
        if let Value::Object(map) = &mut plain {
            map.insert("id".to_string(), Value::String(id));
        }
        Ok(plain)
    }
}

#[derive(Debug, Deserialize)]
struct RunQueryRow {
    document: Option<Document>,
}

impl DocumentStore {
    pub fn new(client: Client, config: DocumentStoreConfig) -> Self {
        Self { client, config }
    }

    pub fn project_id(&self) -> &str {
        &self.config.project_id
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents",
            self.config.endpoint, self.config.project_id
        )
    }

    fn post(&self, url: String) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .query(&[("key", self.config.api_key.as_str())])
            .header("x-firebase-gmpid", &self.config.app_id)
    }

    /// Creates a document with a generated id and returns that id.
    pub async fn add_document(&self, collection: &str, data: &Value) -> Result<String, SourceError> {
        let body = json!({ "fields": value::encode_fields(data)? });
        let url = format!("{}/{}", self.documents_url(), collection);
        let created: Document = send_json(self.post(url).json(&body)).await?;
        debug!("Created document {}", created.name);
        Ok(created.id().to_string())
    }

    async fn run_query(&self, structured_query: Value) -> Result<Vec<Value>, SourceError> {
        let url = format!("{}:runQuery", self.documents_url());
        let body = json!({ "structuredQuery": structured_query });
        let rows: Vec<RunQueryRow> = send_json(self.post(url).json(&body)).await?;
        rows.into_iter()
            .filter_map(|row| row.document)
            .map(Document::into_json)
            .collect()
    }

    /// Projects filtered by category and featured flag, ordered by `order` ascending.
    pub async fn query_projects(
        &self,
        filter: &CategoryFilter,
        featured_only: bool,
    ) -> Result<Vec<Project>, SourceError> {
        let mut filters = Vec::new();
        if let Some(category) = filter.category() {
            filters.push(equality_filter("category", json!(category.as_str())));
        }
        if featured_only {
            filters.push(equality_filter("featured", json!(true)));
        }

        let mut query = json!({
            "from": [{ "collectionId": PROJECTS_COLLECTION }],
            "orderBy": [{ "field": { "fieldPath": "order" }, "direction": "ASCENDING" }]
        });
        if let Some(clause) = where_clause(filters) {
            query["where"] = clause;
        }

        self.run_query(query)
            .await?
            .into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(SourceError::from))
            .collect()
    }

    pub async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, SourceError> {
        let query = json!({
            "from": [{ "collectionId": CONTACT_COLLECTION }],
            "orderBy": [{ "field": { "fieldPath": "created_at" }, "direction": "DESCENDING" }]
        });
        self.run_query(query)
            .await?
            .into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(SourceError::from))
            .collect()
    }
}

fn equality_filter(field: &str, expected: Value) -> Value {
    json!({
        "fieldFilter": {
            "field": { "fieldPath": field },
            "op": "EQUAL",
            "value": value::encode_value(&expected)
        }
    })
}

/// A single filter stands alone; several are AND-ed in a composite filter.
fn where_clause(mut filters: Vec<Value>) -> Option<Value> {
    match filters.len() {
        0 => None,
        1 => filters.pop(),
        _ => Some(json!({
            "compositeFilter": { "op": "AND", "filters": filters }
        })),
    }
}
