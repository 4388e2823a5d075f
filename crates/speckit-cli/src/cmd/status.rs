use super::Invocation;
use crate::output::print_json;
use speckit_core::classifier::{self, StatusContext};
use speckit_core::layout::constitution_path;
use speckit_core::{checklist, config::Config, identity, layout};

pub fn run(ctx: &Invocation) -> anyhow::Result<()> {
    let repo = ctx.repo()?;
    let constitution_exists = constitution_path(&repo.root).is_file();

    // Status must work off a feature branch too: an unparseable branch
    // simply means no feature is in progress.
    let feature_layout = ctx
        .branch(&repo)
        .ok()
        .and_then(|branch| identity::parse(&branch).ok())
        .map(|id| -> anyhow::Result<_> {
            let config = Config::load(&repo.root)?;
            Ok(layout::resolve(&repo.root, &id, &config.layout_options())?)
        })
        .transpose()?;

    let status_ctx = match &feature_layout {
        Some(l) => {
            let completion = match std::fs::read_to_string(&l.tasks_file) {
                Ok(content) => checklist::count(&content).percentage(),
                Err(_) => 0,
            };
            StatusContext {
                constitution_exists,
                feature_dir_exists: l.feature_dir.is_dir(),
                spec_exists: l.spec_file.is_file(),
                plan_exists: l.plan_file.is_file(),
                tasks_exists: l.tasks_file.is_file(),
                completion,
            }
        }
        None => StatusContext {
            constitution_exists,
            feature_dir_exists: false,
            spec_exists: false,
            plan_exists: false,
            tasks_exists: false,
            completion: 0,
        },
    };

    let report = classifier::classify(&status_ctx);

    if ctx.json {
        print_json(&report)?;
    } else {
        println!("Phase:      {}", report.phase);
        println!("Completion: {}%", report.completion_percentage);
        println!("Next:       {}", report.next_command);
        println!("{}", report.explanation);
    }
    Ok(())
}
