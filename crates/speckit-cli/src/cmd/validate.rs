use super::Invocation;
use crate::output::print_json;
use clap::ValueEnum;
use speckit_core::layout::constitution_path;
use speckit_core::validate::{self, DocKind, ValidationReport};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValidateMode {
    Spec,
    Plan,
    Tasks,
    Constitution,
    All,
}

impl std::fmt::Display for ValidateMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ValidateMode::Spec => "spec",
            ValidateMode::Plan => "plan",
            ValidateMode::Tasks => "tasks",
            ValidateMode::Constitution => "constitution",
            ValidateMode::All => "all",
        };
        f.write_str(s)
    }
}

fn print_report(name: &str, report: &ValidationReport) {
    let mark = if report.complete { '✓' } else { '✗' };
    println!("{mark} {name}");
    for issue in &report.issues {
        println!("    {issue}");
    }
}

fn run_single(ctx: &Invocation, path: &Path, kind: DocKind) -> anyhow::Result<()> {
    let report = validate::validate(path, kind);
    if ctx.json {
        print_json(&report)?;
    } else {
        print_report(kind.as_str(), &report);
    }
    Ok(())
}

pub fn run(ctx: &Invocation, mode: ValidateMode) -> anyhow::Result<()> {
    // Constitution lives at the repo root and needs no feature branch.
    if mode == ValidateMode::Constitution {
        let repo = ctx.repo()?;
        return run_single(ctx, &constitution_path(&repo.root), DocKind::Constitution);
    }

    let feature = ctx.feature()?;
    let l = &feature.layout;

    match mode {
        ValidateMode::Spec => run_single(ctx, &l.spec_file, DocKind::Spec),
        ValidateMode::Plan => run_single(ctx, &l.plan_file, DocKind::Plan),
        ValidateMode::Tasks => run_single(ctx, &l.tasks_file, DocKind::Tasks),
        ValidateMode::All => {
            let aggregate = validate::validate_feature(
                &feature.identity.dir_name(),
                &l.spec_file,
                &l.plan_file,
                &l.tasks_file,
            );
            if ctx.json {
                print_json(&aggregate)?;
            } else {
                println!("Feature: {}", aggregate.feature_name);
                print_report("spec.md", &aggregate.spec);
                print_report("plan.md", &aggregate.plan);
                print_report("tasks.md", &aggregate.tasks);
                println!("Status: {}", aggregate.status);
            }
            Ok(())
        }
        ValidateMode::Constitution => unreachable!("handled above"),
    }
}
