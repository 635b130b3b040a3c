/// What a visitor callback asks the traversal to do next.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum VisitAction {
    /// Keep going: descend into the node's children (on enter) or move on
    /// to the next node (on leave).
    #[default]
    Continue,

    /// Do not descend into this node's children. Returned from a leave
    /// callback this is the same as `Continue`.
    Skip,

    /// Stop the traversal entirely. No further callbacks of any kind run.
    Break,
}

pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// The return type of every visitor callback.
///
/// `Err` is reserved for faults in the callback itself (a broken invariant,
/// an internal bug), never for findings about the document being visited.
pub type CallbackResult = std::result::Result<VisitAction, CallbackError>;
