use anyhow::anyhow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_filter: String,
    pub log_format: LogFormat,
    /// Origin prepended to image paths, without a trailing slash.
    pub site_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let log_filter = lookup("BLOG_LOG").unwrap_or_else(|| "warn".into());
        let log_format = match lookup("BLOG_LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => return Err(anyhow!("invalid BLOG_LOG_FORMAT: {}", other)),
        };
        let site_url = lookup("BLOG_SITE_URL")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            log_filter,
            log_format,
            site_url,
        })
    }
}
