use super::Invocation;
use crate::output::{print_json, print_kv};
use anyhow::Context;
use serde::Serialize;
use speckit_core::config::Config;
use speckit_core::{git, identity, io, layout};
use std::path::Path;

#[derive(Serialize)]
struct NewOutput<'a> {
    branch_name: &'a str,
    spec_file: &'a Path,
    feature_num: &'a str,
}

pub fn run(ctx: &Invocation, description: &str) -> anyhow::Result<()> {
    let repo = ctx.repo()?;
    let config = Config::load(&repo.root).context("failed to load .specify/config.json")?;

    // Same probe order as path resolution: an existing spec root wins over
    // the configured first candidate.
    let specs_root = layout::resolve_specs_root(&repo.root, &config.layout_options())?;

    let feature_num = identity::next_feature_number(&specs_root)?;
    let slug = identity::branch_name_from_description(description)?;
    let branch_name = format!("{feature_num}-{slug}");

    if repo.has_version_control {
        git::create_branch(&repo.root, &branch_name)
            .with_context(|| format!("failed to create branch '{branch_name}'"))?;
    } else {
        tracing::warn!("no version control detected, skipping branch creation");
    }

    let feature_dir = specs_root.join(&branch_name);
    io::ensure_dir(&feature_dir)?;

    let template = layout::template_path(&repo.root, "spec-template.md");
    let spec_file = feature_dir.join(layout::SPEC_MD);
    io::copy_template(&template, &spec_file)?;

    if ctx.json {
        print_json(&NewOutput {
            branch_name: &branch_name,
            spec_file: &spec_file,
            feature_num: &feature_num,
        })?;
    } else {
        print_kv(&[
            ("BRANCH_NAME", branch_name.clone()),
            ("SPEC_FILE", spec_file.display().to_string()),
            ("FEATURE_NUM", feature_num.clone()),
        ]);
    }
    Ok(())
}
