use crate::checklist;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

// ---------------------------------------------------------------------------
// DocKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocKind {
    Spec,
    Plan,
    Tasks,
    Constitution,
}

impl DocKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DocKind::Spec => "spec",
            DocKind::Plan => "plan",
            DocKind::Tasks => "tasks",
            DocKind::Constitution => "constitution",
        }
    }
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Document schema (data, not control flow)
// ---------------------------------------------------------------------------

/// Structural contract for one document kind. Each entry in `sections` is a
/// group of acceptable alternative headings; a group is satisfied when any
/// alternative appears in the content (case-sensitive).
struct DocSchema {
    min_bytes: usize,
    sections: &'static [&'static [&'static str]],
    min_checklist_items: Option<usize>,
    flag_placeholders: bool,
}

const PLACEHOLDER_MARKERS: &[&str] = &["TODO", "TBD", "FIXME", "XXX"];

fn schema(kind: DocKind) -> DocSchema {
    match kind {
        DocKind::Spec => DocSchema {
            min_bytes: 500,
            sections: &[&["User Scenarios"], &["Functional Requirements"]],
            min_checklist_items: None,
            flag_placeholders: true,
        },
        DocKind::Plan => DocSchema {
            min_bytes: 300,
            sections: &[&["Technology Stack", "Tech Stack"], &["Project Structure"]],
            min_checklist_items: None,
            flag_placeholders: false,
        },
        DocKind::Tasks => DocSchema {
            min_bytes: 200,
            sections: &[],
            min_checklist_items: Some(5),
            flag_placeholders: false,
        },
        DocKind::Constitution => DocSchema {
            min_bytes: 300,
            sections: &[&["Principles"]],
            min_checklist_items: None,
            flag_placeholders: false,
        },
    }
}

// ---------------------------------------------------------------------------
// ValidationReport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub exists: bool,
    pub complete: bool,
    pub issues: Vec<String>,
}

impl ValidationReport {
    fn missing() -> Self {
        Self {
            exists: false,
            complete: false,
            issues: vec!["File not found".to_string()],
        }
    }
}

/// Validate one artifact file against its kind's structural contract.
///
/// Issues accumulate; nothing short-circuits after the existence check, and
/// validation never errors on content — a broken document is a report, not
/// a failure.
pub fn validate(path: &Path, kind: DocKind) -> ValidationReport {
    let Ok(content) = std::fs::read_to_string(path) else {
        return ValidationReport::missing();
    };
    let schema = schema(kind);
    let mut issues = Vec::new();

    let size = content.len();
    if size < schema.min_bytes {
        issues.push(format!(
            "File too small ({size} bytes, minimum {})",
            schema.min_bytes
        ));
    }

    for group in schema.sections {
        if !group.iter().any(|heading| content.contains(heading)) {
            issues.push(format!("Missing section: {}", group[0]));
        }
    }

    if let Some(min) = schema.min_checklist_items {
        let found = checklist::count(&content).total;
        if found < min {
            issues.push(format!("Only {found} tasks found (minimum {min} recommended)"));
        }
    }

    if schema.flag_placeholders {
        for marker in PLACEHOLDER_MARKERS {
            if content.contains(marker) {
                issues.push(format!("Unresolved placeholder: {marker}"));
            }
        }
    }

    ValidationReport {
        exists: true,
        complete: issues.is_empty(),
        issues,
    }
}

// ---------------------------------------------------------------------------
// FeatureValidation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    Success,
    Warning,
    Error,
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ValidationStatus::Success => "success",
            ValidationStatus::Warning => "warning",
            ValidationStatus::Error => "error",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureValidation {
    pub feature_name: String,
    pub spec: ValidationReport,
    pub plan: ValidationReport,
    pub tasks: ValidationReport,
    pub status: ValidationStatus,
}

/// Validate the three core artifacts of a feature directory and derive an
/// aggregate status: an incomplete spec is an error, an incomplete plan or
/// task list only a warning.
pub fn validate_feature(
    feature_name: &str,
    spec_file: &Path,
    plan_file: &Path,
    tasks_file: &Path,
) -> FeatureValidation {
    let spec = validate(spec_file, DocKind::Spec);
    let plan = validate(plan_file, DocKind::Plan);
    let tasks = validate(tasks_file, DocKind::Tasks);

    let status = if !spec.complete {
        ValidationStatus::Error
    } else if !plan.complete || !tasks.complete {
        ValidationStatus::Warning
    } else {
        ValidationStatus::Success
    };

    FeatureValidation {
        feature_name: feature_name.to_string(),
        spec,
        plan,
        tasks,
        status,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn filler(n: usize) -> String {
        "x".repeat(n)
    }

    #[test]
    fn absent_file_reports_not_found() {
        let dir = TempDir::new().unwrap();
        let report = validate(&dir.path().join("spec.md"), DocKind::Spec);
        assert!(!report.exists);
        assert!(!report.complete);
        assert_eq!(report.issues, vec!["File not found"]);
    }

    #[test]
    fn complete_spec_passes() {
        let dir = TempDir::new().unwrap();
        let content = format!(
            "## User Scenarios\n{}\n## Functional Requirements\n{}\n",
            filler(300),
            filler(300)
        );
        let path = write(&dir, "spec.md", &content);
        let report = validate(&path, DocKind::Spec);
        assert!(report.complete, "issues: {:?}", report.issues);
    }

    #[test]
    fn small_spec_still_gets_section_checks() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "spec.md", "tiny");
        let report = validate(&path, DocKind::Spec);
        // Size issue does not short-circuit: both sections reported too.
        assert_eq!(report.issues.len(), 3);
        assert!(report.issues[0].starts_with("File too small"));
        assert!(report.issues.iter().any(|i| i.contains("User Scenarios")));
        assert!(report
            .issues
            .iter()
            .any(|i| i.contains("Functional Requirements")));
    }

    #[test]
    fn spec_flags_placeholders() {
        let dir = TempDir::new().unwrap();
        let content = format!(
            "## User Scenarios\n## Functional Requirements\nTODO: finish\n{}",
            filler(500)
        );
        let path = write(&dir, "spec.md", &content);
        let report = validate(&path, DocKind::Spec);
        assert!(!report.complete);
        assert_eq!(report.issues, vec!["Unresolved placeholder: TODO"]);
    }

    #[test]
    fn plan_accepts_tech_stack_alias() {
        let dir = TempDir::new().unwrap();
        let content = format!("## Tech Stack\n## Project Structure\n{}", filler(300));
        let path = write(&dir, "plan.md", &content);
        assert!(validate(&path, DocKind::Plan).complete);
    }

    #[test]
    fn constitution_requires_principles() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "constitution.md", &filler(400));
        let report = validate(&path, DocKind::Constitution);
        assert_eq!(report.issues, vec!["Missing section: Principles"]);
    }

    #[test]
    fn tasks_with_four_items_incomplete() {
        let dir = TempDir::new().unwrap();
        let content = format!("- [ ] a\n- [ ] b\n- [x] c\n- [ ] d\n{}", filler(250));
        let path = write(&dir, "tasks.md", &content);
        let report = validate(&path, DocKind::Tasks);
        assert!(!report.complete);
        assert_eq!(
            report.issues,
            vec!["Only 4 tasks found (minimum 5 recommended)"]
        );
    }

    #[test]
    fn tasks_with_five_items_complete() {
        let dir = TempDir::new().unwrap();
        let content = format!(
            "- [ ] a\n- [ ] b\n- [x] c\n- [ ] d\n  - [X] e\n{}",
            filler(250)
        );
        let path = write(&dir, "tasks.md", &content);
        assert!(validate(&path, DocKind::Tasks).complete);
    }

    #[test]
    fn aggregate_status_derivation() {
        let dir = TempDir::new().unwrap();
        let spec = write(
            &dir,
            "spec.md",
            &format!(
                "## User Scenarios\n## Functional Requirements\n{}",
                filler(500)
            ),
        );
        let plan = write(&dir, "plan.md", "stub");
        let tasks = dir.path().join("tasks.md");

        // Spec complete, plan incomplete -> warning.
        let v = validate_feature("001-auth", &spec, &plan, &tasks);
        assert_eq!(v.status, ValidationStatus::Warning);

        // Spec incomplete -> error regardless of the rest.
        let bad_spec = write(&dir, "bad-spec.md", "tiny");
        let v = validate_feature("001-auth", &bad_spec, &plan, &tasks);
        assert_eq!(v.status, ValidationStatus::Error);
    }

    #[test]
    fn aggregate_success_when_all_complete() {
        let dir = TempDir::new().unwrap();
        let spec = write(
            &dir,
            "spec.md",
            &format!(
                "## User Scenarios\n## Functional Requirements\n{}",
                filler(500)
            ),
        );
        let plan = write(
            &dir,
            "plan.md",
            &format!("## Technology Stack\n## Project Structure\n{}", filler(300)),
        );
        let tasks = write(
            &dir,
            "tasks.md",
            &format!(
                "- [ ] a\n- [ ] b\n- [ ] c\n- [ ] d\n- [ ] e\n{}",
                filler(250)
            ),
        );
        let v = validate_feature("001-auth", &spec, &plan, &tasks);
        assert_eq!(v.status, ValidationStatus::Success);
    }
}
