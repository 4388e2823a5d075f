use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("repository not found: no .git or .specify marker above {0}")]
    RepositoryNotFound(String),

    #[error(
        "not on a feature branch: '{0}'\n\
         expected '<ticket-id>.<slug>' or 'NNN-slug', optionally prefixed \
         with 'owner/' and suffixed with '-cap-NNN'"
    )]
    InvalidBranchName(String),

    #[error("missing required artifact '{artifact}': {remedy}")]
    MissingArtifact { artifact: String, remedy: String },

    #[error("feature directory not found: {0}")]
    FeatureDirNotFound(String),

    #[error("empty feature description")]
    EmptyDescription,

    #[error("git: {0}")]
    Git(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpecError>;
