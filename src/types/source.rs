//! Source file and layer definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Execution domain a file belongs to, inferred from the path segment after the source root.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Client,
    Server,
    Shared,
    Network,
    /// Second path segment is not one of the four recognized layer directories
    Unclassified,
}

impl Layer {
    /// The four recognized layers, in inventory order
    pub const RECOGNIZED: [Layer; 4] = [Layer::Client, Layer::Server, Layer::Shared, Layer::Network];

    /// Section order used on feature pages
    pub const FEATURE_PAGE_ORDER: [Layer; 4] =
        [Layer::Server, Layer::Client, Layer::Shared, Layer::Network];

    /// Exact, case-sensitive match of a directory name against a recognized layer key.
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "Client" => Some(Self::Client),
            "Server" => Some(Self::Server),
            "Shared" => Some(Self::Shared),
            "Network" => Some(Self::Network),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Server => "Server",
            Self::Shared => "Shared",
            Self::Network => "Network",
            Self::Unclassified => "Unclassified",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A collected source file. Immutable once collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub absolute_path: PathBuf,
    /// `/`-separated path relative to the project root, e.g. `src/Server/Services/Foo.luau`
    pub relative_path: String,
    pub layer: Layer,
    pub feature: String,
}

impl SourceFile {
    /// File name without its extension
    pub fn stem(&self) -> &str {
        let name = self
            .relative_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.relative_path);
        match name.rfind('.') {
            Some(idx) if idx > 0 => &name[..idx],
            _ => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_from_segment_is_case_sensitive() {
        assert_eq!(Layer::from_segment("Server"), Some(Layer::Server));
        assert_eq!(Layer::from_segment("server"), None);
        assert_eq!(Layer::from_segment("Unclassified"), None);
    }

    #[test]
    fn test_source_file_stem() {
        let file = SourceFile {
            absolute_path: PathBuf::from("/repo/src/Shared/my-module.luau"),
            relative_path: "src/Shared/my-module.luau".to_string(),
            layer: Layer::Shared,
            feature: "Utilities".to_string(),
        };
        assert_eq!(file.stem(), "my-module");
    }
}
