//! Generate Command
//!
//! Full rebuild of the generated documentation tree.
//!
//! Usage:
//!   luaudoc [generate] [--config luaudoc.toml]

use std::path::Path;

use crate::cli::ui::Output;
use crate::config::ConfigLoader;
use crate::storage::FsStorage;
use crate::types::Result;
use crate::wiki::{BuildContext, build_docs};

pub async fn run(config_path: &Path, output: &Output) -> Result<()> {
    let config = ConfigLoader::load(config_path)?;
    let ctx = BuildContext::with_storage(config, FsStorage::new());

    let report = build_docs(&ctx).await?;

    output.info(&format!(
        "{} source files, {} documented modules, {} pages",
        report.files_collected,
        report.modules_documented,
        report.pages.len()
    ));
    if report.modules_with_parse_errors > 0 {
        output.warning(&format!(
            "{} modules have recoverable parse errors",
            report.modules_with_parse_errors
        ));
    }
    output.success(&format!(
        "Generated docs in {}",
        ctx.output_root().display()
    ));
    Ok(())
}
