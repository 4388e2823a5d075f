use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// WorkflowPhase
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowPhase {
    Setup,
    ReadyForFeature,
    SpecComplete,
    PlanComplete,
    ReadyForImplementation,
    ImplementationInProgress,
    ImplementationComplete,
}

impl WorkflowPhase {
    pub fn all() -> &'static [WorkflowPhase] {
        &[
            WorkflowPhase::Setup,
            WorkflowPhase::ReadyForFeature,
            WorkflowPhase::SpecComplete,
            WorkflowPhase::PlanComplete,
            WorkflowPhase::ReadyForImplementation,
            WorkflowPhase::ImplementationInProgress,
            WorkflowPhase::ImplementationComplete,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WorkflowPhase::Setup => "setup",
            WorkflowPhase::ReadyForFeature => "ready_for_feature",
            WorkflowPhase::SpecComplete => "spec_complete",
            WorkflowPhase::PlanComplete => "plan_complete",
            WorkflowPhase::ReadyForImplementation => "ready_for_implementation",
            WorkflowPhase::ImplementationInProgress => "implementation_in_progress",
            WorkflowPhase::ImplementationComplete => "implementation_complete",
        }
    }
}

impl fmt::Display for WorkflowPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StatusContext
// ---------------------------------------------------------------------------

/// Filesystem facts the classifier runs on. Recomputed fresh each
/// invocation; no state is persisted between runs.
#[derive(Debug, Clone, Copy)]
pub struct StatusContext {
    pub constitution_exists: bool,
    pub feature_dir_exists: bool,
    pub spec_exists: bool,
    pub plan_exists: bool,
    pub tasks_exists: bool,
    /// Task checklist completion, 0..=100.
    pub completion: u8,
}

// ---------------------------------------------------------------------------
// PhaseReport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct PhaseReport {
    pub phase: WorkflowPhase,
    pub completion_percentage: u8,
    pub next_command: String,
    pub explanation: String,
}

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// A fn-pointer rule — zero-cost, no heap allocation. Rules are evaluated
/// top-to-bottom; first match wins.
struct Rule {
    phase: WorkflowPhase,
    condition: fn(&StatusContext) -> bool,
    next_command: &'static str,
    explanation: fn(&StatusContext) -> String,
}

const RULES: &[Rule] = &[
    Rule {
        phase: WorkflowPhase::Setup,
        condition: |ctx| !ctx.constitution_exists,
        next_command: "speckit constitution",
        explanation: |_| "No project constitution found. Establish principles first.".to_string(),
    },
    Rule {
        phase: WorkflowPhase::ReadyForFeature,
        condition: |ctx| !ctx.feature_dir_exists || !ctx.spec_exists,
        next_command: "speckit new <description>",
        explanation: |_| "No feature in progress. Create a feature spec to begin.".to_string(),
    },
    Rule {
        phase: WorkflowPhase::SpecComplete,
        condition: |ctx| !ctx.plan_exists,
        next_command: "speckit plan",
        explanation: |_| "Spec written. Create the implementation plan.".to_string(),
    },
    Rule {
        phase: WorkflowPhase::PlanComplete,
        condition: |ctx| !ctx.tasks_exists,
        next_command: "speckit tasks",
        explanation: |_| "Plan written. Break it down into tasks.".to_string(),
    },
    Rule {
        phase: WorkflowPhase::ReadyForImplementation,
        condition: |ctx| ctx.completion == 0,
        next_command: "speckit implement",
        explanation: |_| "Task list ready. Start implementation.".to_string(),
    },
    Rule {
        phase: WorkflowPhase::ImplementationInProgress,
        condition: |ctx| ctx.completion < 100,
        next_command: "speckit implement",
        explanation: |ctx| format!("Implementation {}% complete.", ctx.completion),
    },
    Rule {
        phase: WorkflowPhase::ImplementationComplete,
        condition: |_| true,
        next_command: "speckit validate all",
        explanation: |_| "All tasks complete. Validate and ship.".to_string(),
    },
];

/// Classify the workflow into a phase from current file existence and task
/// completion. The rule table is exhaustive: the final rule always matches.
pub fn classify(ctx: &StatusContext) -> PhaseReport {
    for rule in RULES {
        if (rule.condition)(ctx) {
            return PhaseReport {
                phase: rule.phase,
                completion_percentage: ctx.completion,
                next_command: rule.next_command.to_string(),
                explanation: (rule.explanation)(ctx),
            };
        }
    }
    unreachable!("final classifier rule is a catch-all")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
