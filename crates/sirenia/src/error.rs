//! Failure taxonomy of the layout-module boundary.
//!
//! Algorithmic failures and precondition violations are expected, recoverable
//! events; the dispatcher matches on the kind to pick a diagnostic and never
//! lets them terminate the host. Contract violations inside the core are not
//! represented here at all.

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Why a running layout module gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AlgorithmFailure {
    #[error("an illegal parameter was supplied")]
    IllegalParameter,
    #[error("the min-cost flow solver could not find a legal flow")]
    NoFlowSolution,
    #[error("a sequence was not sorted")]
    UnsortedSequence,
    #[error("labelling failed")]
    LabellingFailed,
    #[error("the external face is not correct")]
    BadExternalFace,
    #[error("crossings were forbidden")]
    ForbiddenCrossing,
    #[error("the time limit was exceeded")]
    TimeLimitExceeded,
    #[error("no solution could be found")]
    NoSolutionFound,
    #[error("of an unknown reason")]
    Unknown,
}

/// A structural precondition the input graph failed to meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PreconditionViolation {
    #[error("the graph contains a self-loop")]
    SelfLoop,
    #[error("the graph is not a rooted tree")]
    NotTree,
    #[error("the graph is not a rooted forest")]
    NotForest,
    #[error("the graph is not acyclic")]
    NotAcyclic,
    #[error("the graph does not have a single source")]
    NotSingleSource,
    #[error("the graph is not upward planar")]
    NotUpwardPlanar,
    #[error("the graph is not planar")]
    NotPlanar,
    #[error("the graph is not cluster planar")]
    NotClusterPlanar,
    #[error("the graph is not a copy of its corresponding graph")]
    StaleCopy,
    #[error("the graph is not connected")]
    NotConnected,
    #[error("the graph is not biconnected")]
    NotBiconnected,
    #[error("an unknown precondition failed")]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout algorithm failed because {kind}")]
    Algorithm {
        kind: AlgorithmFailure,
        detail: Option<String>,
    },
    #[error("{kind}, which violates the layout preconditions")]
    Precondition {
        kind: PreconditionViolation,
        detail: Option<String>,
    },
}

impl LayoutError {
    pub fn algorithm(kind: AlgorithmFailure) -> Self {
        Self::Algorithm { kind, detail: None }
    }

    pub fn algorithm_with(kind: AlgorithmFailure, detail: impl Into<String>) -> Self {
        Self::Algorithm {
            kind,
            detail: Some(detail.into()),
        }
    }

    pub fn precondition(kind: PreconditionViolation) -> Self {
        Self::Precondition { kind, detail: None }
    }

    pub fn precondition_with(kind: PreconditionViolation, detail: impl Into<String>) -> Self {
        Self::Precondition {
            kind,
            detail: Some(detail.into()),
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Algorithm { detail, .. } | Self::Precondition { detail, .. } => detail.as_deref(),
        }
    }
}
