use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonalInfo {
    pub name: String,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EducationKind {
    Masters,
    Bachelors,
    Phd,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EducationEntry {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub period: String,
    pub gpa: String,
    #[serde(rename = "type")]
    pub kind: EducationKind,
}

/// Accent used by the timeline; carries no meaning beyond presentation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccentColor {
    #[default]
    Blue,
    Purple,
    Cyan,
    Green,
    Red,
    Orange,
}

/// A role on the experience timeline.
///
/// The backend names some fields differently (`period`, `achievements`, `tech`);
/// the aliases let both shapes deserialize into the same record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    #[serde(alias = "role")]
    pub title: String,
    pub location: String,
    #[serde(alias = "period")]
    pub dates: String,
    #[serde(default, alias = "blurb")]
    pub summary: String,
    #[serde(default, alias = "achievements")]
    pub bullets: Vec<String>,
    #[serde(default, alias = "tech")]
    pub stack: Vec<String>,
    #[serde(default)]
    pub color: AccentColor,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_experience_accepts_backend_field_names() {
        let entry: ExperienceEntry = serde_json::from_value(json!({
            "id": "abc",
            "company": "Colgate-Palmolive",
            "title": "Intern",
            "location": "Remote",
            "period": "Jan 2024 – Jun 2024",
            "type": "Internship",
            "color": "cyan",
            "achievements": ["Automated ~70% of queries."],
            "tech": ["Python"],
            "order": 3
        }))
        .unwrap();
        assert_eq!(entry.dates, "Jan 2024 – Jun 2024");
        assert_eq!(entry.bullets, vec!["Automated ~70% of queries."]);
        assert_eq!(entry.stack, vec!["Python"]);
        assert_eq!(entry.color, AccentColor::Cyan);
        assert!(entry.summary.is_empty());
    }

    #[test]
    fn test_education_kind_uses_type_key() {
        let entry: EducationEntry = serde_json::from_value(json!({
            "id": "1",
            "degree": "M.S.",
            "institution": "Virginia Tech",
            "location": "Blacksburg",
            "period": "2024 – 2026",
            "gpa": "3.71/4.0",
            "type": "masters"
        }))
        .unwrap();
        assert_eq!(entry.kind, EducationKind::Masters);
    }
}
