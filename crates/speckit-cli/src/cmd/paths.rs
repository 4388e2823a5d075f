use super::Invocation;
use crate::output::{print_json, print_kv};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct PathsOutput<'a> {
    repo_root: &'a Path,
    branch: &'a str,
    feature_dir: &'a Path,
    spec_file: &'a Path,
    plan_file: &'a Path,
    tasks_file: &'a Path,
    research_file: &'a Path,
    data_model_file: &'a Path,
    quickstart_file: &'a Path,
    contracts_dir: &'a Path,
}

pub fn run(ctx: &Invocation) -> anyhow::Result<()> {
    let feature = ctx.feature()?;
    let layout = &feature.layout;

    if ctx.json {
        print_json(&PathsOutput {
            repo_root: &layout.repo_root,
            branch: &feature.branch,
            feature_dir: &layout.feature_dir,
            spec_file: &layout.spec_file,
            plan_file: &layout.plan_file,
            tasks_file: &layout.tasks_file,
            research_file: &layout.research_file,
            data_model_file: &layout.data_model_file,
            quickstart_file: &layout.quickstart_file,
            contracts_dir: &layout.contracts_dir,
        })?;
    } else {
        print_kv(&[
            ("REPO_ROOT", layout.repo_root.display().to_string()),
            ("BRANCH", feature.branch.clone()),
            ("FEATURE_DIR", layout.feature_dir.display().to_string()),
            ("FEATURE_SPEC", layout.spec_file.display().to_string()),
            ("IMPL_PLAN", layout.plan_file.display().to_string()),
            ("TASKS", layout.tasks_file.display().to_string()),
        ]);
    }
    Ok(())
}
