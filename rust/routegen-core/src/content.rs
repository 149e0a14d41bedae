use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::ContentRoute;

/// Route lists owned by content configuration. The engine never interprets them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub static_routes: Vec<ContentRoute>,
    pub landing_routes: Vec<ContentRoute>,
    pub keyword_routes: Vec<ContentRoute>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            static_routes: vec![
                ContentRoute::new("/", 1.0),
                ContentRoute::new("/tours", 0.9),
                ContentRoute::new("/traslado", 0.9),
                ContentRoute::new("/punta-cana/premium-transfer-services", 0.85),
                ContentRoute::new("/contact", 0.7),
            ],
            landing_routes: Vec::new(),
            keyword_routes: Vec::new(),
        }
    }
}

impl ContentConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let cfg: Self = serde_json::from_str(&raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Landing pages followed by keyword pages.
    pub fn landing_and_keyword(&self) -> impl Iterator<Item = &ContentRoute> {
        self.landing_routes.iter().chain(&self.keyword_routes)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = self.static_routes.iter().chain(self.landing_and_keyword());
        for r in all {
            if !r.path.starts_with('/') {
                return Err(ConfigError::invalid("content.path", format!("{:?} must start with '/'", r.path)));
            }
            if !(0.0..=1.0).contains(&r.priority) {
                return Err(ConfigError::invalid("content.priority", format!("{} for {:?}", r.priority, r.path)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_has_home_first() {
        let c = ContentConfig::default();
        assert_eq!(c.static_routes[0], ContentRoute::new("/", 1.0));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_default_static_routes() {
        let c: ContentConfig = serde_json::from_value(json!({
            "landing_routes": [{ "path": "/transfer/puj-to-bavaro", "priority": 0.7 }],
            "keyword_routes": [{ "path": "/excursiones/saona", "priority": 0.7 }]
        }))
        .unwrap();
        assert_eq!(c.static_routes.len(), 5);
        let paths: Vec<&str> = c.landing_and_keyword().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/transfer/puj-to-bavaro", "/excursiones/saona"]);
    }

    #[test]
    fn rejects_relative_paths() {
        let c = ContentConfig { static_routes: vec![ContentRoute::new("tours", 0.5)], ..Default::default() };
        assert!(c.validate().is_err());
    }
}
