//! Documentation Build
//!
//! Full-rebuild pipeline over an explicit [`BuildContext`]:
//!
//! 1. Wipe the output tree
//! 2. Collect and classify every source file
//! 3. Architecture page, one page per feature
//! 4. One API page per scope (module docs built file by file)
//! 5. API index
//!
//! Everything runs sequentially. Pages are written as soon as they are
//! rendered, so a failure mid-run leaves the pages written so far.

use glob::{MatchOptions, Pattern};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use super::pages::{
    LayerCounts, render_api_index, render_architecture, render_feature, render_scope,
};
use crate::analyzer::{FeatureClassifier, FileCollector, ModuleAnalyzer};
use crate::config::{Config, ScopeRule};
use crate::storage::{SharedStorage, Storage};
use crate::types::{DocError, ModuleDoc, Result, SourceFile};

const SCOPE_MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Everything a build needs, passed by parameter
#[derive(Clone)]
pub struct BuildContext {
    pub config: Config,
    pub storage: SharedStorage,
}

impl BuildContext {
    pub fn new(config: Config, storage: SharedStorage) -> Self {
        Self { config, storage }
    }

    pub fn with_storage<S: Storage + 'static>(config: Config, storage: S) -> Self {
        Self::new(config, Arc::new(storage))
    }

    pub fn output_root(&self) -> PathBuf {
        self.config.output_root()
    }
}

/// Summary of a finished build
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub files_collected: usize,
    pub modules_documented: usize,
    pub modules_with_parse_errors: usize,
    /// Every page written, in emission order
    pub pages: Vec<PathBuf>,
}

/// A scope rule with its glob compiled
struct CompiledScope<'a> {
    rule: &'a ScopeRule,
    pattern: Pattern,
}

impl CompiledScope<'_> {
    fn matches(&self, file: &SourceFile) -> bool {
        self.pattern
            .matches_with(&file.relative_path, SCOPE_MATCH_OPTIONS)
    }
}

pub struct DocBuilder<'a> {
    ctx: &'a BuildContext,
    output_root: PathBuf,
    report: BuildReport,
}

impl<'a> DocBuilder<'a> {
    pub fn new(ctx: &'a BuildContext) -> Self {
        Self {
            ctx,
            output_root: ctx.output_root(),
            report: BuildReport::default(),
        }
    }

    pub async fn run(mut self) -> Result<BuildReport> {
        let ctx = self.ctx;
        let config = &ctx.config;

        // Everything that can fail on configuration is prepared before the wipe
        let classifier = FeatureClassifier::from_config(config)?;
        let scopes = config
            .scopes
            .iter()
            .map(|rule| {
                Pattern::new(&rule.glob)
                    .map(|pattern| CompiledScope { rule, pattern })
                    .map_err(|e| DocError::pattern(&rule.glob, e))
            })
            .collect::<Result<Vec<_>>>()?;
        let mut analyzer = ModuleAnalyzer::new()?;

        debug!(
            "Clearing {} via {} storage",
            self.output_root.display(),
            ctx.storage.name()
        );
        ctx.storage.remove_tree(&self.output_root).await?;

        let files = FileCollector::new(config.project_root(), &classifier)
            .with_source_dir(config.project.source_dir.as_str())
            .with_extension(config.project.extension.as_str())
            .collect(ctx.storage.as_ref())
            .await?;
        self.report.files_collected = files.len();
        info!("Collected {} source files", files.len());

        self.write_architecture(&files).await?;
        self.write_features(&classifier, &files).await?;

        for scope in &scopes {
            self.write_scope(scope, &files, &mut analyzer).await?;
        }

        let index = render_api_index(&config.scopes);
        self.write_page(Path::new("api/index.md"), &index).await?;

        info!(
            "Documentation build complete: {} pages, {} modules",
            self.report.pages.len(),
            self.report.modules_documented
        );
        Ok(self.report)
    }

    async fn write_architecture(&mut self, files: &[SourceFile]) -> Result<()> {
        let mut counts = LayerCounts::new();
        for file in files {
            *counts.entry(file.layer).or_insert(0) += 1;
        }
        let page = render_architecture(&counts, &self.ctx.config.project.source_dir);
        self.write_page(Path::new("architecture/overview.md"), &page)
            .await
    }

    async fn write_features(
        &mut self,
        classifier: &FeatureClassifier,
        files: &[SourceFile],
    ) -> Result<()> {
        let mut buckets: HashMap<&str, Vec<&SourceFile>> = HashMap::new();
        for file in files {
            buckets.entry(file.feature.as_str()).or_default().push(file);
        }

        for feature in classifier.features() {
            let feature_files = buckets.remove(feature.key.as_str()).unwrap_or_default();
            let page = render_feature(feature, &feature_files);
            let path = PathBuf::from("features").join(format!("{}.md", feature.key.to_lowercase()));
            self.write_page(&path, &page).await?;
        }
        Ok(())
    }

    async fn write_scope(
        &mut self,
        scope: &CompiledScope<'_>,
        files: &[SourceFile],
        analyzer: &mut ModuleAnalyzer,
    ) -> Result<()> {
        let mut modules: Vec<ModuleDoc> = Vec::new();
        for file in files.iter().filter(|f| scope.matches(f)) {
            let content = self
                .ctx
                .storage
                .read_to_string(&file.absolute_path)
                .await?;
            let module = analyzer.analyze(file, &content);
            if module.has_parse_errors {
                self.report.modules_with_parse_errors += 1;
            }
            modules.push(module);
        }

        info!(
            "Scope '{}': {} modules",
            scope.rule.key,
            modules.len()
        );
        self.report.modules_documented += modules.len();

        let page = render_scope(scope.rule, &modules);
        let path = PathBuf::from("api").join(format!("{}.md", scope.rule.key));
        self.write_page(&path, &page).await
    }

    async fn write_page(&mut self, relative: &Path, content: &str) -> Result<()> {
        let path = self.output_root.join(relative);
        self.ctx.storage.write(&path, content).await?;
        debug!("Wrote page {}", path.display());
        self.report.pages.push(path);
        Ok(())
    }
}

/// Run a full documentation build
pub async fn build_docs(ctx: &BuildContext) -> Result<BuildReport> {
    DocBuilder::new(ctx).run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FsStorage, MemoryStorage};
    use tempfile::TempDir;

    fn memory_config() -> Config {
        let mut config = Config::default();
        config.project.root = PathBuf::from("/repo");
        config
    }

    const LEASE_SERVICE: &str = "local LeaseService = {}\n\n-- Signs a lease for a tenant.\nfunction LeaseService.Sign(tenant: string): boolean\n\treturn true\nend\n\nfunction Helpers.Other()\nend\n\nreturn LeaseService\n";

    async fn read(storage: &MemoryStorage, path: &str) -> String {
        storage.read_to_string(Path::new(path)).await.unwrap()
    }

    #[tokio::test]
    async fn test_end_to_end_single_server_file() {
        let storage = Arc::new(MemoryStorage::new());
        storage.insert("/repo/src/Server/Services/LeaseService.luau", LEASE_SERVICE);
        let ctx = BuildContext::new(memory_config(), storage.clone());

        let report = build_docs(&ctx).await.unwrap();
        assert_eq!(report.files_collected, 1);
        assert_eq!(report.modules_documented, 1);

        let overview = read(&storage, "/repo/docs/content/generated/architecture/overview.md").await;
        assert!(overview.contains("- **Server**: 1 Luau files\n"));
        assert!(overview.contains("- **Client**: 0 Luau files\n"));

        let tenant = read(&storage, "/repo/docs/content/generated/features/tenantsystem.md").await;
        assert!(tenant.contains("Total files: **1**"));
        assert!(tenant.contains("## Server\n\n- `src/Server/Services/LeaseService.luau`\n"));

        let services = read(&storage, "/repo/docs/content/generated/api/server-services.md").await;
        assert!(services.contains("Generated modules: **1**"));
        assert!(services.contains("## LeaseService\n"));
        assert!(services.contains("- Feature area: `TenantSystem`"));
        assert_eq!(services.matches("#### ").count(), 1);
        assert!(services.contains("```text\nSigns a lease for a tenant.\n```"));
        assert!(!services.contains("Other"));

        let shared = read(&storage, "/repo/docs/content/generated/api/shared-utilities.md").await;
        assert!(shared.contains("Generated modules: **0**"));

        let index = read(&storage, "/repo/docs/content/generated/api/index.md").await;
        assert!(index.contains(
            "- [Server Services](./server-services)\n- [Shared Utilities](./shared-utilities)\n- [Client Modules](./client-modules)\n"
        ));
    }

    #[tokio::test]
    async fn test_page_emission_order_and_count() {
        let storage = Arc::new(MemoryStorage::new());
        let ctx = BuildContext::new(memory_config(), storage.clone());

        let report = build_docs(&ctx).await.unwrap();
        let out = PathBuf::from("/repo/docs/content/generated");
        let expected: Vec<PathBuf> = [
            "architecture/overview.md",
            "features/tenantsystem.md",
            "features/plotsystem.md",
            "features/network.md",
            "features/utilities.md",
            "api/server-services.md",
            "api/shared-utilities.md",
            "api/client-modules.md",
            "api/index.md",
        ]
        .iter()
        .map(|p| out.join(p))
        .collect();
        assert_eq!(report.pages, expected);
    }

    #[tokio::test]
    async fn test_rebuild_drops_removed_files() {
        let storage = Arc::new(MemoryStorage::new());
        storage.insert("/repo/src/Server/Services/LeaseService.luau", LEASE_SERVICE);
        storage.insert(
            "/repo/src/Server/Services/PlotService.luau",
            "local PlotService = {}\nfunction PlotService.Claim()\nend\nreturn PlotService\n",
        );
        // stale page from an older layout
        storage.insert("/repo/docs/content/generated/legacy/old.md", "LeaseService.luau");
        let ctx = BuildContext::new(memory_config(), storage.clone());

        build_docs(&ctx).await.unwrap();
        assert!(storage.remove(Path::new("/repo/src/Server/Services/LeaseService.luau")));
        build_docs(&ctx).await.unwrap();

        let pages = storage.paths_under(Path::new("/repo/docs/content/generated"));
        assert!(!pages.iter().any(|p| p.ends_with("legacy/old.md")));
        for page in pages {
            let content = storage.get(&page).unwrap();
            assert!(
                !content.contains("LeaseService"),
                "{} still references the removed file",
                page.display()
            );
        }
    }

    #[tokio::test]
    async fn test_rebuild_is_deterministic() {
        let storage = Arc::new(MemoryStorage::new());
        storage.insert("/repo/src/Shared/Utilities/Timer.luau", "local Timer = {}\nfunction Timer.Start()\nend\nreturn Timer\n");
        storage.insert("/repo/src/Client/Modules/PlotView.luau", "return nil\n");
        storage.insert("/repo/src/Network/Packets.luau", "return {}\n");
        let ctx = BuildContext::new(memory_config(), storage.clone());

        build_docs(&ctx).await.unwrap();
        let out = Path::new("/repo/docs/content/generated");
        let first: Vec<(PathBuf, String)> = storage
            .paths_under(out)
            .into_iter()
            .map(|p| {
                let c = storage.get(&p).unwrap();
                (p, c)
            })
            .collect();

        build_docs(&ctx).await.unwrap();
        let second: Vec<(PathBuf, String)> = storage
            .paths_under(out)
            .into_iter()
            .map(|p| {
                let c = storage.get(&p).unwrap();
                (p, c)
            })
            .collect();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_scope_modules_sorted_with_parse_status() {
        let storage = Arc::new(MemoryStorage::new());
        storage.insert("/repo/src/Server/Services/Zeta.luau", "local Zeta = {}\nreturn Zeta\n");
        storage.insert("/repo/src/Server/Services/Nested/Alpha.luau", "local Alpha = {\nreturn Alpha\n");
        let ctx = BuildContext::new(memory_config(), storage.clone());

        let report = build_docs(&ctx).await.unwrap();
        assert_eq!(report.modules_with_parse_errors, 1);

        let page = read(&storage, "/repo/docs/content/generated/api/server-services.md").await;
        let alpha = page.find("## Alpha").unwrap();
        let zeta = page.find("## Zeta").unwrap();
        assert!(alpha < zeta);
        assert!(page.contains("- Parse status: `tree-sitter parse has recoverable errors`"));
    }

    #[tokio::test]
    async fn test_scope_lists_file_before_same_named_directory() {
        let storage = Arc::new(MemoryStorage::new());
        storage.insert("/repo/src/Server/Services/Plot/Zeta.luau", "local Zeta = {}\nreturn Zeta\n");
        storage.insert("/repo/src/Server/Services/Plot.luau", "local Plot = {}\nreturn Plot\n");
        let ctx = BuildContext::new(memory_config(), storage.clone());

        build_docs(&ctx).await.unwrap();

        let page = read(&storage, "/repo/docs/content/generated/api/server-services.md").await;
        let plot = page.find("## Plot\n").unwrap();
        let zeta = page.find("## Zeta\n").unwrap();
        assert!(plot < zeta);
    }

    #[tokio::test]
    async fn test_invalid_scope_glob_fails_before_wipe() {
        let storage = Arc::new(MemoryStorage::new());
        storage.insert("/repo/docs/content/generated/api/index.md", "previous");
        let mut config = memory_config();
        config.scopes[0].glob = "src/[".to_string();
        let ctx = BuildContext::new(config, storage.clone());

        assert!(build_docs(&ctx).await.is_err());
        assert_eq!(
            storage.get(Path::new("/repo/docs/content/generated/api/index.md")).as_deref(),
            Some("previous")
        );
    }

    #[tokio::test]
    async fn test_filesystem_build() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir_all(root.join("src/Client/Modules")).unwrap();
        std::fs::write(
            root.join("src/Client/Modules/CameraController.luau"),
            "local CameraController = {}\n--[[\n  Focuses the camera.\n]]\nfunction CameraController:Focus(target: Instance)\nend\nreturn CameraController\n",
        )
        .unwrap();

        let mut config = Config::default();
        config.project.root = root.to_path_buf();
        let ctx = BuildContext::with_storage(config, FsStorage::new());
        build_docs(&ctx).await.unwrap();

        let out = root.join("docs/content/generated");
        let page = std::fs::read_to_string(out.join("api/client-modules.md")).unwrap();
        assert!(page.contains("function CameraController:Focus(target: Instance)"));
        assert!(page.contains("```text\nFocuses the camera.\n```"));
        assert!(out.join("features/utilities.md").exists());
        assert!(out.join("api/index.md").exists());
    }

    #[tokio::test]
    async fn test_filesystem_missing_source_root_fails() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.project.root = temp_dir.path().to_path_buf();
        let ctx = BuildContext::with_storage(config, FsStorage::new());

        let err = build_docs(&ctx).await.unwrap_err();
        assert!(matches!(err, DocError::Io(_)));
    }
}
