use crate::ast::NodeRef;
use crate::loc::SourcePosition;
use thiserror::Error;

/// A single validation finding: a message plus the document nodes it is
/// about.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct ValidationError<'a> {
    message: String,
    nodes: Vec<NodeRef<'a>>,
    previous: Vec<ValidationError<'a>>,
}
impl<'a> ValidationError<'a> {
    pub fn new(message: impl Into<String>, nodes: Vec<NodeRef<'a>>) -> Self {
        Self {
            message: message.into(),
            nodes,
            previous: vec![],
        }
    }

    /// Attach errors that this one follows from.
    pub fn with_previous(mut self, previous: Vec<ValidationError<'a>>) -> Self {
        self.previous = previous;
        self
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub fn nodes(&self) -> &[NodeRef<'a>] {
        &self.nodes
    }

    pub fn previous(&self) -> &[ValidationError<'a>] {
        &self.previous
    }

    /// The source positions of [`Self::nodes`], in the same order.
    ///
    /// Arguments, values and object fields carry the position of their
    /// enclosing field, directive or definition.
    pub fn locations(&self) -> Vec<SourcePosition> {
        self.nodes.iter().map(|node| node.position()).collect()
    }
}
