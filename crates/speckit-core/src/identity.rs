use crate::error::{Result, SpecError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// FeatureIdentity
// ---------------------------------------------------------------------------

/// Which accepted branch shape the identity was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityShape {
    /// `<ticket-id>.<slug>`, e.g. `proj-1.login`
    Ticket,
    /// `NNN-slug`, e.g. `001-user-auth`
    Numbered,
}

/// Structured identity extracted from a branch name. Immutable after
/// creation; derived once per invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureIdentity {
    pub raw_branch: String,
    /// Ticket id (`proj-1`) or zero-padded feature number (`001`).
    pub number: Option<String>,
    pub slug: String,
    /// Capability suffix in the form `cap-NNN`, when present.
    pub capability: Option<String>,
    pub shape: IdentityShape,
}

static TICKET_RE: OnceLock<Regex> = OnceLock::new();
static NUMBERED_RE: OnceLock<Regex> = OnceLock::new();

fn ticket_re() -> &'static Regex {
    TICKET_RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z][A-Za-z0-9_]*-\d+)\.([a-z0-9][a-z0-9-]*)$").unwrap()
    })
}

fn numbered_re() -> &'static Regex {
    NUMBERED_RE.get_or_init(|| Regex::new(r"^(\d+)-([a-z0-9][a-z0-9-]*)$").unwrap())
}

/// Parse a branch name into a `FeatureIdentity`.
///
/// Rules:
/// - a single leading `owner/` segment is stripped;
/// - the first `-cap-NNN` suffix becomes the capability id;
/// - the remainder must match the ticket shape (`proj-1.login`) or the
///   legacy numbered shape (`001-user-auth`).
///
/// Anything else is `InvalidBranchName`: callers must treat that as "not on
/// a feature branch" and stop, never guess an identity.
pub fn parse(branch: &str) -> Result<FeatureIdentity> {
    let name = match branch.split_once('/') {
        Some((_owner, rest)) => rest,
        None => branch,
    };

    let (feature_id, capability) = match name.split_once("-cap-") {
        Some((left, right)) if !right.is_empty() && right.bytes().all(|b| b.is_ascii_digit()) => {
            (left, Some(format!("cap-{right}")))
        }
        _ => (name, None),
    };

    if let Some(caps) = ticket_re().captures(feature_id) {
        return Ok(FeatureIdentity {
            raw_branch: branch.to_string(),
            number: Some(caps[1].to_string()),
            slug: caps[2].to_string(),
            capability,
            shape: IdentityShape::Ticket,
        });
    }
    if let Some(caps) = numbered_re().captures(feature_id) {
        return Ok(FeatureIdentity {
            raw_branch: branch.to_string(),
            number: Some(caps[1].to_string()),
            slug: caps[2].to_string(),
            capability,
            shape: IdentityShape::Numbered,
        });
    }
    Err(SpecError::InvalidBranchName(branch.to_string()))
}

impl FeatureIdentity {
    /// Directory name of the parent feature under the specs root.
    pub fn dir_name(&self) -> String {
        let number = self.number.as_deref().unwrap_or_default();
        match self.shape {
            IdentityShape::Ticket => format!("{number}.{}", self.slug),
            IdentityShape::Numbered => format!("{number}-{}", self.slug),
        }
    }

    /// The identity without its capability suffix. Identity is its own
    /// parent when no capability is set.
    pub fn parent(&self) -> FeatureIdentity {
        let mut parent = self.clone();
        if let Some(cap) = parent.capability.take() {
            let suffix = format!("-{cap}");
            if let Some(stripped) = parent.raw_branch.strip_suffix(&suffix) {
                parent.raw_branch = stripped.to_string();
            }
        }
        parent
    }
}

// ---------------------------------------------------------------------------
// New-feature naming helpers
// ---------------------------------------------------------------------------

/// Derive a short branch slug from a free-form description: lowercase,
/// non-alphanumerics collapsed to single hyphens, first three words kept.
pub fn branch_name_from_description(description: &str) -> Result<String> {
    static NON_ALNUM_RE: OnceLock<Regex> = OnceLock::new();
    let re = NON_ALNUM_RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap());

    let lowered = description.to_lowercase();
    let cleaned = re.replace_all(&lowered, "-");
    let words: Vec<&str> = cleaned
        .split('-')
        .filter(|w| !w.is_empty())
        .take(3)
        .collect();
    if words.is_empty() {
        return Err(SpecError::EmptyDescription);
    }
    Ok(words.join("-"))
}

/// Next zero-padded feature number: highest existing `NNN-` directory
/// prefix in `specs_dir`, plus one. A missing specs dir yields `001`.
pub fn next_feature_number(specs_dir: &Path) -> Result<String> {
    static PREFIX_RE: OnceLock<Regex> = OnceLock::new();
    let re = PREFIX_RE.get_or_init(|| Regex::new(r"^(\d+)-").unwrap());

    let mut highest = 0u32;
    if specs_dir.is_dir() {
        for entry in std::fs::read_dir(specs_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name();
            if let Some(caps) = re.captures(&name.to_string_lossy()) {
                if let Ok(n) = caps[1].parse::<u32>() {
                    highest = highest.max(n);
                }
            }
        }
    }
    Ok(format!("{:03}", highest + 1))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn ticket_shape_with_owner() {
        let id = parse("alice/proj-1.login").unwrap();
        assert_eq!(id.number.as_deref(), Some("proj-1"));
        assert_eq!(id.slug, "login");
        assert_eq!(id.capability, None);
        assert_eq!(id.shape, IdentityShape::Ticket);
        assert_eq!(id.dir_name(), "proj-1.login");
    }

    #[test]
    fn numbered_legacy_shape() {
        let id = parse("001-user-auth").unwrap();
        assert_eq!(id.number.as_deref(), Some("001"));
        assert_eq!(id.slug, "user-auth");
        assert_eq!(id.shape, IdentityShape::Numbered);
        assert_eq!(id.dir_name(), "001-user-auth");
    }

    #[test]
    fn capability_suffix_extracted() {
        let id = parse("owner/TICKET-1.slug-cap-002").unwrap();
        assert_eq!(id.capability.as_deref(), Some("cap-002"));
        assert_eq!(id.dir_name(), "TICKET-1.slug");
    }

    #[test]
    fn capability_parent_equals_plain_parse() {
        let with_cap = parse("owner/TICKET-1.slug-cap-002").unwrap();
        let plain = parse("owner/TICKET-1.slug").unwrap();
        assert_eq!(with_cap.parent(), plain);
    }

    #[test]
    fn parent_of_plain_identity_is_itself() {
        let id = parse("002-search").unwrap();
        assert_eq!(id.parent(), id);
    }

    #[test]
    fn non_numeric_cap_suffix_is_not_a_capability() {
        // `-cap-` followed by non-digits stays part of the slug.
        let id = parse("001-handle-cap-less").unwrap();
        assert_eq!(id.capability, None);
        assert_eq!(id.slug, "handle-cap-less");
    }

    #[test]
    fn rejected_branch_names() {
        for branch in ["main", "develop", "fix/stuff", "UPPER-case", "1.2.3", ""] {
            assert!(
                matches!(parse(branch), Err(SpecError::InvalidBranchName(_))),
                "expected rejection: {branch}"
            );
        }
    }

    #[test]
    fn branch_name_from_description_keeps_three_words() {
        assert_eq!(
            branch_name_from_description("Add OAuth2 login for users!").unwrap(),
            "add-oauth2-login"
        );
        assert_eq!(branch_name_from_description("Search").unwrap(), "search");
        assert!(branch_name_from_description("!!!").is_err());
    }

    #[test]
    fn next_feature_number_increments_highest() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("001-first")).unwrap();
        std::fs::create_dir_all(dir.path().join("007-later")).unwrap();
        std::fs::create_dir_all(dir.path().join("not-numbered")).unwrap();
        assert_eq!(next_feature_number(dir.path()).unwrap(), "008");
    }

    #[test]
    fn next_feature_number_starts_at_one() {
        let dir = TempDir::new().unwrap();
        assert_eq!(next_feature_number(&dir.path().join("missing")).unwrap(), "001");
    }
}
