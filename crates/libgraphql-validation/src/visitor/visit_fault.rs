use crate::ast::NodeKind;
use crate::loc::SourcePosition;
use crate::visitor::CallbackError;
use thiserror::Error;

/// An abnormal termination of a traversal.
#[derive(Debug, Error)]
pub enum VisitFault {
    #[error("visitor `{visitor_name}` failed on a {node_kind} node: {source}")]
    CallbackFailed {
        visitor_name: String,
        node_kind: NodeKind,
        #[source]
        source: CallbackError,
    },

    #[error("malformed document at {position}: {message}")]
    MalformedDocument {
        position: SourcePosition,
        message: String,
    },
}
