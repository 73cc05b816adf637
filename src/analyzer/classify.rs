//! Path-based classification
//!
//! Both classifiers are pure functions of the relative path.

use regex::{Regex, RegexBuilder};

use crate::config::{Config, DefaultFeature, FeatureRule};
use crate::types::{DocError, Layer, Result};

/// Layer of a `/`-separated path relative to the project root.
///
/// The layer is the segment right after the source directory
/// (`src/Server/...` → `Server`); anything else is `Unclassified`.
pub fn resolve_layer(relative_path: &str) -> Layer {
    relative_path
        .split('/')
        .nth(1)
        .and_then(Layer::from_segment)
        .unwrap_or(Layer::Unclassified)
}

/// Compiled path predicate of one feature rule
#[derive(Debug, Clone)]
pub struct FeatureMatcher {
    pattern: Option<Regex>,
    prefix: Option<String>,
}

impl FeatureMatcher {
    pub fn compile(rule: &FeatureRule) -> Result<Self> {
        let pattern = rule
            .pattern
            .as_deref()
            .map(|p| {
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| DocError::pattern(p, e))
            })
            .transpose()?;
        Ok(Self {
            pattern,
            prefix: rule.prefix.clone(),
        })
    }

    pub fn matches(&self, relative_path: &str) -> bool {
        self.prefix
            .as_deref()
            .is_some_and(|prefix| relative_path.starts_with(prefix))
            || self
                .pattern
                .as_ref()
                .is_some_and(|re| re.is_match(relative_path))
    }
}

/// A feature area as rendered on its page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub key: String,
    pub description: String,
}

/// Ordered first-match-wins classifier with an explicit default arm.
#[derive(Debug, Clone)]
pub struct FeatureClassifier {
    rules: Vec<(FeatureMatcher, Feature)>,
    default: Feature,
}

impl FeatureClassifier {
    pub fn new(rules: &[FeatureRule], default: &DefaultFeature) -> Result<Self> {
        let rules = rules
            .iter()
            .map(|rule| -> Result<(FeatureMatcher, Feature)> {
                Ok((
                    FeatureMatcher::compile(rule)?,
                    Feature {
                        key: rule.key.clone(),
                        description: rule.description.clone(),
                    },
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rules,
            default: Feature {
                key: default.key.clone(),
                description: default.description.clone(),
            },
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.features, &config.default_feature)
    }

    /// Key of the first rule matching the path, or the default key.
    pub fn classify(&self, relative_path: &str) -> &str {
        self.rules
            .iter()
            .find(|(matcher, _)| matcher.matches(relative_path))
            .map(|(_, feature)| feature.key.as_str())
            .unwrap_or(self.default.key.as_str())
    }

    /// Every feature that gets a page: declared rules in order, then the
    /// default when it is not itself a declared rule.
    pub fn features(&self) -> Vec<&Feature> {
        let mut features: Vec<&Feature> = self.rules.iter().map(|(_, f)| f).collect();
        if !features.iter().any(|f| f.key == self.default.key) {
            features.push(&self.default);
        }
        features
    }
}
