use super::Invocation;
use crate::output::print_json;
use serde::Serialize;
use speckit_core::SpecError;
use std::path::Path;

#[derive(Serialize)]
struct CheckOutput<'a> {
    feature_dir: &'a Path,
    available_docs: Vec<&'static str>,
}

fn dir_has_files(dir: &Path) -> bool {
    dir.is_dir()
        && std::fs::read_dir(dir)
            .map(|mut entries| entries.next().is_some())
            .unwrap_or(false)
}

pub fn run(ctx: &Invocation, require_tasks: bool) -> anyhow::Result<()> {
    let feature = ctx.feature()?;
    let l = &feature.layout;

    if !l.feature_dir.is_dir() {
        return Err(SpecError::FeatureDirNotFound(format!(
            "{} (run 'speckit new' first)",
            l.feature_dir.display()
        ))
        .into());
    }
    if !l.plan_file.is_file() {
        return Err(SpecError::MissingArtifact {
            artifact: "plan.md".to_string(),
            remedy: "run 'speckit plan' first".to_string(),
        }
        .into());
    }
    if require_tasks && !l.tasks_file.is_file() {
        return Err(SpecError::MissingArtifact {
            artifact: "tasks.md".to_string(),
            remedy: "run 'speckit tasks' first".to_string(),
        }
        .into());
    }

    // Optional design documents: report whatever exists, never fail.
    let optional: [(&str, bool); 4] = [
        ("research.md", l.research_file.is_file()),
        ("data-model.md", l.data_model_file.is_file()),
        ("contracts/", dir_has_files(&l.contracts_dir)),
        ("quickstart.md", l.quickstart_file.is_file()),
    ];

    if ctx.json {
        print_json(&CheckOutput {
            feature_dir: &l.feature_dir,
            available_docs: optional
                .iter()
                .filter(|(_, present)| *present)
                .map(|(name, _)| *name)
                .collect(),
        })?;
    } else {
        println!("FEATURE_DIR: {}", l.feature_dir.display());
        println!("AVAILABLE_DOCS:");
        for (name, present) in optional {
            let mark = if present { '✓' } else { '✗' };
            println!("  {mark} {name}");
        }
    }
    Ok(())
}
