//! Markdown Page Rendering
//!
//! Pure functions from collected facts to page text. Every page opens with a
//! front-matter block carrying `title`; diagrams are mermaid blocks and
//! signatures are `luau` blocks.

use std::collections::BTreeMap;

use crate::analyzer::Feature;
use crate::config::ScopeRule;
use crate::types::{Layer, ModuleDoc, SourceFile};

/// Files per layer, as shown in the architecture inventory
pub type LayerCounts = BTreeMap<Layer, usize>;

const NO_FILES_PLACEHOLDER: &str = "_No files currently mapped._";
const NO_FUNCTIONS_PLACEHOLDER: &str = "_No module-scoped public functions detected._";

fn front_matter(lines: &mut Vec<String>, title: &str) {
    lines.push("---".to_string());
    lines.push(format!("title: {}", title));
    lines.push("---".to_string());
    lines.push(String::new());
}

fn finish(lines: Vec<String>) -> String {
    format!("{}\n", lines.join("\n"))
}

fn push_fenced(lines: &mut Vec<String>, lang: &str, body: &str) {
    lines.push(format!("```{}", lang));
    lines.push(body.to_string());
    lines.push("```".to_string());
}

// =============================================================================
// Architecture
// =============================================================================

pub fn render_architecture(counts: &LayerCounts, source_dir: &str) -> String {
    let mut lines = Vec::new();
    front_matter(&mut lines, "Overview");
    lines.push("# Architecture Overview".to_string());
    lines.push(String::new());
    lines.push(format!("Generated from current `{}/` layout.", source_dir));
    lines.push(String::new());
    lines.push("## Runtime Boundaries".to_string());
    lines.push(String::new());
    push_fenced(
        &mut lines,
        "mermaid",
        concat!(
            "graph TD\n",
            "  Client[Client Runtime] -->|Packets| Network[Network Contracts]\n",
            "  Server[Server Runtime] -->|Packets| Network\n",
            "  Client --> Shared[Shared Modules]\n",
            "  Server --> Shared",
        ),
    );
    lines.push(String::new());
    lines.push("## Layer Inventory".to_string());
    lines.push(String::new());
    for layer in Layer::RECOGNIZED {
        let count = counts.get(&layer).copied().unwrap_or(0);
        lines.push(format!("- **{}**: {} Luau files", layer, count));
    }
    if let Some(&unclassified) = counts.get(&Layer::Unclassified)
        && unclassified > 0
    {
        lines.push(format!("- **{}**: {} Luau files", Layer::Unclassified, unclassified));
    }
    lines.push(String::new());
    lines.push("## Key Roots".to_string());
    lines.push(String::new());
    lines.push(format!(
        "- `{}/Client/` for UI/controllers and local gameplay presentation",
        source_dir
    ));
    lines.push(format!(
        "- `{}/Server/` for simulation state, services, and persistence-facing logic",
        source_dir
    ));
    lines.push(format!(
        "- `{}/Shared/` for common definitions/utilities used by both runtimes",
        source_dir
    ));
    lines.push(format!(
        "- `{}/Network/` for packet contracts that bridge client and server",
        source_dir
    ));
    finish(lines)
}

// =============================================================================
// Feature
// =============================================================================

pub fn render_feature(feature: &Feature, files: &[&SourceFile]) -> String {
    let mut grouped: BTreeMap<Layer, Vec<&str>> = BTreeMap::new();
    for file in files {
        grouped
            .entry(file.layer)
            .or_default()
            .push(file.relative_path.as_str());
    }

    let mut lines = Vec::new();
    front_matter(&mut lines, &feature.key);
    lines.push(format!("# {}", feature.key));
    lines.push(String::new());
    lines.push(feature.description.clone());
    lines.push(String::new());
    lines.push(format!("Total files: **{}**", files.len()));
    lines.push(String::new());
    push_fenced(
        &mut lines,
        "mermaid",
        &format!(
            "graph LR\n  A[{}] --> C[Client]\n  A --> S[Server]\n  A --> SH[Shared]\n  A --> N[Network]",
            feature.key
        ),
    );
    lines.push(String::new());

    let mut sections = Layer::FEATURE_PAGE_ORDER.to_vec();
    if grouped.contains_key(&Layer::Unclassified) {
        sections.push(Layer::Unclassified);
    }

    for layer in sections {
        lines.push(format!("## {}", layer));
        lines.push(String::new());
        let mut paths = grouped.remove(&layer).unwrap_or_default();
        if paths.is_empty() {
            lines.push(NO_FILES_PLACEHOLDER.to_string());
            lines.push(String::new());
            continue;
        }
        paths.sort_unstable();
        for path in paths {
            lines.push(format!("- `{}`", path));
        }
        lines.push(String::new());
    }

    finish(lines)
}

// =============================================================================
// API Scope
// =============================================================================

fn module_section(module: &ModuleDoc) -> String {
    let mut lines = Vec::new();
    lines.push(format!("## {}", module.module_name));
    lines.push(String::new());
    lines.push(format!("- Source: `{}`", module.relative_path));
    lines.push(format!("- Feature area: `{}`", module.feature));
    lines.push(format!("- Parse status: `{}`", module.parse_status()));
    lines.push(String::new());

    if !module.export_types.is_empty() {
        lines.push("### Exported Types".to_string());
        lines.push(String::new());
        for type_doc in &module.export_types {
            lines.push(format!("#### {}", type_doc.name));
            lines.push(String::new());
            push_fenced(&mut lines, "luau", &type_doc.signature);
            lines.push(String::new());
        }
    }

    lines.push("### Public Functions".to_string());
    lines.push(String::new());
    if module.functions.is_empty() {
        lines.push(NO_FUNCTIONS_PLACEHOLDER.to_string());
        lines.push(String::new());
    }
    for function in &module.functions {
        lines.push(format!("#### {}", function.name));
        lines.push(String::new());
        push_fenced(&mut lines, "luau", &function.signature);
        if !function.docs.is_empty() {
            lines.push(String::new());
            push_fenced(&mut lines, "text", &function.docs);
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

pub fn render_scope(scope: &ScopeRule, modules: &[ModuleDoc]) -> String {
    let mut lines = Vec::new();
    front_matter(&mut lines, &scope.title);
    lines.push(format!("# {}", scope.title));
    lines.push(String::new());
    lines.push(format!("Generated modules: **{}**", modules.len()));
    lines.push(String::new());
    lines.extend(modules.iter().map(module_section));
    finish(lines)
}

// =============================================================================
// API Index
// =============================================================================

pub fn render_api_index(scopes: &[ScopeRule]) -> String {
    let mut lines = Vec::new();
    front_matter(&mut lines, "API Index");
    lines.push("# API Index".to_string());
    lines.push(String::new());
    lines.push("The following pages are generated from public Luau module APIs.".to_string());
    lines.push(String::new());
    for scope in scopes {
        lines.push(format!("- [{}](./{})", scope.title, scope.key));
    }
    finish(lines)
}
