use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// What a visitor types into the contact form. Absent fields read as blank so
/// presence checks report them like empty ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Names of the fields left blank. The form only checks presence.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
}

/// A stored contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub status: ContactStatus,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Accepts RFC 3339 timestamps and the offset-less ISO form the backend emits (read as UTC).
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}

impl ContactMessage {
    /// Stamps a fresh submission as `new`, created and updated at `now`.
    pub fn from_submission(id: String, submission: ContactSubmission, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: submission.name,
            email: submission.email,
            subject: submission.subject,
            message: submission.message,
            status: ContactStatus::New,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            subject: "Hello".to_string(),
            message: "Let's talk".to_string(),
        }
    }

    #[test]
    fn test_complete_submission_has_no_missing_fields() {
        assert!(submission("Ada", "ada@example.com").missing_fields().is_empty());
    }

    #[test]
    fn test_blank_fields_are_reported() {
        assert_eq!(submission("  ", "").missing_fields(), vec!["name", "email"]);
    }

    #[test]
    fn test_backend_message_without_status_defaults_to_new() {
        let msg: ContactMessage = serde_json::from_value(serde_json::json!({
            "id": "m1",
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Hi",
            "message": "Hello",
            "created_at": "2025-03-01T10:00:00Z",
            "updated_at": "2025-03-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(msg.status, ContactStatus::New);
    }

    #[test]
    fn test_offsetless_backend_timestamp_is_read_as_utc() {
        let msg: ContactMessage = serde_json::from_value(serde_json::json!({
            "id": "m2",
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Hi",
            "message": "Hello",
            "status": "read",
            "created_at": "2025-03-01T10:00:00.123456",
            "updated_at": "2025-03-01T10:00:00"
        }))
        .unwrap();
        assert_eq!(msg.status, ContactStatus::Read);
        assert_eq!(msg.updated_at.to_rfc3339(), "2025-03-01T10:00:00+00:00");
    }
}
