/// Curated card images for repositories whose social preview is not good enough.
///
/// Lookup order: exact key, case-insensitive key, then the first key contained
/// (case-insensitively) in the repository name. Table order decides ties.
#[derive(Debug, Clone)]
pub struct ThumbnailOverrides {
    entries: Vec<(String, String)>,
}

const PREVIEW_BASE: &str = "https://opengraph.githubassets.com/1";

impl ThumbnailOverrides {
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn resolve(&self, repo_name: &str) -> Option<&str> {
        if repo_name.is_empty() {
            return None;
        }
        if let Some((_, url)) = self.entries.iter().find(|(key, _)| key == repo_name) {
            return Some(url);
        }
        let lower = repo_name.to_lowercase();
        if let Some((_, url)) = self
            .entries
            .iter()
            .find(|(key, _)| key.to_lowercase() == lower)
        {
            return Some(url);
        }
        self.entries
            .iter()
            .find(|(key, _)| lower.contains(&key.to_lowercase()))
            .map(|(_, url)| url.as_str())
    }

    /// The override if one matches, else GitHub's generated social preview.
    pub fn image_for(&self, owner: &str, repo_name: &str) -> String {
        match self.resolve(repo_name) {
            Some(url) => url.to_string(),
            None => format!("{PREVIEW_BASE}/{owner}/{repo_name}"),
        }
    }
}

impl Default for ThumbnailOverrides {
    fn default() -> Self {
        Self::new([
            ("sentimint", "/images/projects/sentimint.jpeg"),
            ("sentmint", "/images/projects/sentimint.jpeg"),
            ("Sentimint-AI-Stock-Analyser", "/images/projects/sentimint.jpeg"),
            ("Sentimint-AI-Stock-Analyzer", "/images/projects/sentimint.jpeg"),
            ("trust-drive", "/images/projects/blockchain.jpg"),
            ("TrustDrive", "/images/projects/blockchain.jpg"),
            ("Suspicious-Baggage-Detection-System", "/images/projects/baggage.jpeg"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ThumbnailOverrides {
        ThumbnailOverrides::new([
            ("sentimint", "/img/substring.jpeg"),
            ("sentimint-ai-stock-analyser", "/img/case-insensitive.jpeg"),
            ("TrustDrive", "/img/exact.jpg"),
        ])
    }

    #[test]
    fn test_exact_key_wins() {
        assert_eq!(table().resolve("TrustDrive"), Some("/img/exact.jpg"));
    }

    #[test]
    fn test_case_insensitive_exact_before_substring() {
        assert_eq!(
            table().resolve("Sentimint-AI-Stock-Analyser"),
            Some("/img/case-insensitive.jpeg")
        );
    }

    #[test]
    fn test_substring_match_is_last_resort() {
        assert_eq!(
            table().resolve("sentimint-v2"),
            Some("/img/substring.jpeg")
        );
    }

    #[test]
    fn test_unknown_repo_gets_social_preview() {
        let overrides = table();
        assert_eq!(overrides.resolve("CareRoute"), None);
        assert_eq!(
            overrides.image_for("octocat", "CareRoute"),
            "https://opengraph.githubassets.com/1/octocat/CareRoute"
        );
    }

    #[test]
    fn test_empty_name_resolves_nothing() {
        assert_eq!(ThumbnailOverrides::default().resolve(""), None);
    }

    #[test]
    fn test_default_table_covers_name_variants() {
        let overrides = ThumbnailOverrides::default();
        assert_eq!(
            overrides.resolve("sentimint-ai-stock-analyzer"),
            Some("/images/projects/sentimint.jpeg")
        );
        assert_eq!(
            overrides.resolve("trustdrive"),
            Some("/images/projects/blockchain.jpg")
        );
    }
}
