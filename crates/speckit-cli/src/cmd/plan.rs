use super::Invocation;
use crate::output::{print_json, print_kv};
use serde::Serialize;
use speckit_core::{io, layout};
use std::path::Path;

#[derive(Serialize)]
struct PlanOutput<'a> {
    feature_spec: &'a Path,
    impl_plan: &'a Path,
    specs_dir: &'a Path,
    branch: &'a str,
}

pub fn run(ctx: &Invocation) -> anyhow::Result<()> {
    let feature = ctx.feature()?;
    let l = &feature.layout;

    io::ensure_dir(&l.feature_dir)?;
    let template = layout::template_path(&l.repo_root, "plan-template.md");
    io::copy_template(&template, &l.plan_file)?;

    if ctx.json {
        print_json(&PlanOutput {
            feature_spec: &l.spec_file,
            impl_plan: &l.plan_file,
            specs_dir: &l.feature_dir,
            branch: &feature.branch,
        })?;
    } else {
        print_kv(&[
            ("FEATURE_SPEC", l.spec_file.display().to_string()),
            ("IMPL_PLAN", l.plan_file.display().to_string()),
            ("SPECS_DIR", l.feature_dir.display().to_string()),
            ("BRANCH", feature.branch.clone()),
        ]);
    }
    Ok(())
}
