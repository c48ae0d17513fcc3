use std::fmt;

/// Error type returned by collaborators (plugins, link generation, events, templates).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Rejections raised while building a [`crate::printer::PrinterRegistry`].
///
/// These are start-up failures: a renderer with the wrong shape is caught when it
/// is registered, never when a request first hits it.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegisterError {
    #[error("renderer {renderer} takes {found} arguments, expected 3 (context, object, options)")]
    ArgumentCount { renderer: &'static str, found: usize },

    #[error("renderer {renderer} argument {position} is {found}, expected {expected}")]
    ArgumentType {
        renderer: &'static str,
        position: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("renderer {renderer} returns {found} values, expected 2 (component, error)")]
    ReturnCount { renderer: &'static str, found: usize },

    #[error("renderer {renderer} return value {position} is {found}, expected {expected}")]
    ReturnType {
        renderer: &'static str,
        position: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("a renderer for {kind} is already registered")]
    Duplicate { kind: &'static str },
}

/// The collaborator a [`PrintError::Collaborator`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    Plugins,
    Links,
    Events,
    Templates,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Collaborator::Plugins => "plugin manager",
            Collaborator::Links => "link generator",
            Collaborator::Events => "event source",
            Collaborator::Templates => "template renderer",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    #[error("{0} is nil")]
    NilInput(&'static str),

    #[error("unable to derive object identity: {0}")]
    MissingIdentity(String),

    #[error("{collaborator}: {source}")]
    Collaborator {
        collaborator: Collaborator,
        #[source]
        source: BoxError,
    },

    #[error("layout item {item} in section {section}: {source}")]
    Fragment {
        section: usize,
        item: usize,
        #[source]
        source: BoxError,
    },

    #[error("renderer argument is not a {expected}")]
    ArgumentMismatch { expected: &'static str },

    #[error("render request cancelled")]
    Cancelled,

    #[error("serialize object: {0}")]
    Serialize(#[from] k8s_openapi::serde_json::Error),

    #[error("json path: {0}")]
    JsonPath(#[from] serde_json_path::ParseError),
}

impl PrintError {
    pub(crate) fn collaborator(collaborator: Collaborator) -> impl FnOnce(BoxError) -> Self {
        move |source| PrintError::Collaborator {
            collaborator,
            source,
        }
    }
}
