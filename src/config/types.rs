//! Configuration Types
//!
//! All configuration structures with defaults matching the standard
//! `src/{Client,Server,Shared,Network}` project layout.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::types::{DocError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Input and output locations
    pub project: ProjectConfig,

    /// Feature assigned when no rule matches
    pub default_feature: DefaultFeature,

    /// Ordered feature rules; the first match wins
    pub features: Vec<FeatureRule>,

    /// API reference scopes, rendered in declared order
    pub scopes: Vec<ScopeRule>,

    /// Changelog updater settings
    pub changelog: ChangelogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            project: ProjectConfig::default(),
            default_feature: DefaultFeature::default(),
            features: default_features(),
            scopes: default_scopes(),
            changelog: ChangelogConfig::default(),
        }
    }
}

impl Config {
    /// Validate rule sets and locations.
    /// Returns `DocError::Config` or `DocError::Pattern` on failure.
    pub fn validate(&self) -> Result<()> {
        if self.project.extension.trim().is_empty() {
            return Err(DocError::Config(
                "project.extension must not be empty".to_string(),
            ));
        }

        if self.default_feature.key.trim().is_empty() {
            return Err(DocError::Config(
                "default_feature.key must not be empty".to_string(),
            ));
        }

        let mut feature_keys = HashSet::new();
        for rule in &self.features {
            if rule.key.trim().is_empty() {
                return Err(DocError::Config("Feature key must not be empty".to_string()));
            }
            if !feature_keys.insert(rule.key.as_str()) {
                return Err(DocError::Config(format!(
                    "Duplicate feature key: {}",
                    rule.key
                )));
            }
            if rule.pattern.is_none() && rule.prefix.is_none() {
                return Err(DocError::Config(format!(
                    "Feature '{}' needs a pattern or a prefix",
                    rule.key
                )));
            }
            if let Some(pattern) = &rule.pattern {
                regex::RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| DocError::pattern(pattern, e))?;
            }
        }

        let mut scope_keys = HashSet::new();
        for scope in &self.scopes {
            if scope.key.trim().is_empty() {
                return Err(DocError::Config("Scope key must not be empty".to_string()));
            }
            if !scope_keys.insert(scope.key.as_str()) {
                return Err(DocError::Config(format!("Duplicate scope key: {}", scope.key)));
            }
            glob::Pattern::new(&scope.glob).map_err(|e| DocError::pattern(&scope.glob, e))?;
        }

        Ok(())
    }
}

// =============================================================================
// Project Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Analysis root; relative paths on every page are taken from here
    pub root: PathBuf,

    /// Directory under the root that holds the layer directories
    pub source_dir: String,

    /// Source file extension, without the dot
    pub extension: String,

    /// Generated pages directory, relative to the root unless absolute
    pub output_dir: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            source_dir: "src".to_string(),
            extension: "luau".to_string(),
            output_dir: PathBuf::from("docs/content/generated"),
        }
    }
}

// =============================================================================
// Classification Rules
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefaultFeature {
    pub key: String,
    pub description: String,
}

impl Default for DefaultFeature {
    fn default() -> Self {
        Self {
            key: "Utilities".to_string(),
            description: "Cross-cutting helpers used by multiple systems.".to_string(),
        }
    }
}

/// A feature area rule. A path matches when it starts with `prefix`
/// or contains a case-insensitive match of `pattern`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureRule {
    pub key: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl FeatureRule {
    pub fn with_pattern(key: &str, description: &str, pattern: &str) -> Self {
        Self {
            key: key.to_string(),
            description: description.to_string(),
            pattern: Some(pattern.to_string()),
            prefix: None,
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }
}

/// A glob-selected subset of files that gets its own API reference page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScopeRule {
    pub key: String,
    pub title: String,
    pub glob: String,
}

impl ScopeRule {
    pub fn new(key: &str, title: &str, glob: &str) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            glob: glob.to_string(),
        }
    }
}

fn default_features() -> Vec<FeatureRule> {
    vec![
        FeatureRule::with_pattern(
            "TenantSystem",
            "Tenant lifecycle, offers, leases, rent, and resident interactions.",
            "(Tenant|Resident|Lease|Mailbox|Review|Tips|TenantHelp)",
        ),
        FeatureRule::with_pattern(
            "PlotSystem",
            "Plot ownership, build/placement, room state, and world placement.",
            "(Plot|Build|Placement|Room|Grid|Floor|Wall|Roof)",
        ),
        FeatureRule::with_pattern(
            "Network",
            "Replication packets and client/server transport contracts.",
            "Packets",
        )
        .with_prefix("src/Network/"),
        FeatureRule::with_pattern(
            "Utilities",
            "Cross-cutting helpers used by multiple systems.",
            "(Utilities|Helpers|Formatter|Timer|RateLimiter|Debounce)",
        ),
    ]
}

fn default_scopes() -> Vec<ScopeRule> {
    vec![
        ScopeRule::new(
            "server-services",
            "Server Services",
            "src/Server/Services/**/*.luau",
        ),
        ScopeRule::new(
            "shared-utilities",
            "Shared Utilities",
            "src/Shared/Utilities/**/*.luau",
        ),
        ScopeRule::new(
            "client-modules",
            "Client Modules",
            "src/Client/Modules/**/*.luau",
        ),
    ]
}

// =============================================================================
// Changelog Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog document, relative to the project root unless absolute
    pub path: PathBuf,

    /// Environment variable holding the path of the pull-request event payload
    pub event_path_env: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("CHANGELOG.md"),
            event_path_env: "GITHUB_EVENT_PATH".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.features.len(), 4);
        assert_eq!(config.scopes.len(), 3);
        assert_eq!(config.default_feature.key, "Utilities");
    }

    #[test]
    fn test_duplicate_scope_key_rejected() {
        let mut config = Config::default();
        config
            .scopes
            .push(ScopeRule::new("server-services", "Again", "src/**/*.luau"));
        assert!(matches!(config.validate(), Err(DocError::Config(_))));
    }

    #[test]
    fn test_invalid_feature_pattern_rejected() {
        let mut config = Config::default();
        config.features[0].pattern = Some("(unclosed".to_string());
        assert!(matches!(config.validate(), Err(DocError::Pattern { .. })));
    }

    #[test]
    fn test_rule_without_predicate_rejected() {
        let mut config = Config::default();
        config.features.push(FeatureRule {
            key: "Empty".to_string(),
            description: String::new(),
            pattern: None,
            prefix: None,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_scope_glob_rejected() {
        let mut config = Config::default();
        config.scopes[0].glob = "src/[".to_string();
        assert!(matches!(config.validate(), Err(DocError::Pattern { .. })));
    }
}
