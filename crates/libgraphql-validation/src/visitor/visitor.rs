use crate::ast::NodeKind;
use crate::ast::NodeRef;
use crate::visitor::CallbackResult;
use crate::visitor::VisitAction;
use crate::visitor::VisitFault;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, VisitFault>;

/// A boxed visitor callback.
pub type VisitFn<'a, C> =
    Box<dyn FnMut(&mut C, NodeRef<'a>) -> CallbackResult + 'a>;

/// Anything [`walk`](crate::visitor::walk) can drive.
pub trait Visit<'a, C> {
    fn enter(&mut self, ctx: &mut C, node: NodeRef<'a>) -> Result<VisitAction>;
    fn leave(&mut self, ctx: &mut C, node: NodeRef<'a>) -> Result<VisitAction>;
}

/// A named table of enter/leave callbacks keyed by [`NodeKind`].
///
/// Node kinds without a registered callback are no-ops. Registering a second
/// callback for the same kind and phase replaces the first.
///
/// ```
/// use libgraphql_validation::ast::NodeKind;
/// use libgraphql_validation::visitor::VisitAction;
/// use libgraphql_validation::visitor::Visitor;
///
/// let visitor = Visitor::<Vec<String>>::new("FieldNames")
///     .on_enter(NodeKind::Field, |names, node| {
///         if let Some(field) = node.as_field() {
///             names.push(field.name.clone());
///         }
///         Ok(VisitAction::Continue)
///     });
/// assert!(visitor.handles_enter(NodeKind::Field));
/// ```
pub struct Visitor<'a, C> {
    enter_fns: HashMap<NodeKind, VisitFn<'a, C>>,
    leave_fns: HashMap<NodeKind, VisitFn<'a, C>>,
    name: String,
}
impl<'a, C> Visitor<'a, C> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            enter_fns: HashMap::new(),
            leave_fns: HashMap::new(),
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn on_enter<F>(mut self, kind: NodeKind, callback: F) -> Self
    where
        F: FnMut(&mut C, NodeRef<'a>) -> CallbackResult + 'a,
    {
        self.enter_fns.insert(kind, Box::new(callback));
        self
    }

    pub fn on_leave<F>(mut self, kind: NodeKind, callback: F) -> Self
    where
        F: FnMut(&mut C, NodeRef<'a>) -> CallbackResult + 'a,
    {
        self.leave_fns.insert(kind, Box::new(callback));
        self
    }

    /// Register an enter callback that always returns [`VisitAction::Skip`],
    /// hiding every node of `kind` (and its subtree) from this visitor.
    pub fn skip(self, kind: NodeKind) -> Self {
        self.on_enter(kind, |_, _| Ok(VisitAction::Skip))
    }

    pub fn handles_enter(&self, kind: NodeKind) -> bool {
        self.enter_fns.contains_key(&kind)
    }

    pub fn handles_leave(&self, kind: NodeKind) -> bool {
        self.leave_fns.contains_key(&kind)
    }

    pub(crate) fn entered_kinds(&self) -> impl Iterator<Item = NodeKind> + '_ {
        self.enter_fns.keys().copied()
    }

    pub(crate) fn left_kinds(&self) -> impl Iterator<Item = NodeKind> + '_ {
        self.leave_fns.keys().copied()
    }

    fn dispatch(
        fns: &mut HashMap<NodeKind, VisitFn<'a, C>>,
        name: &str,
        ctx: &mut C,
        node: NodeRef<'a>,
    ) -> Result<VisitAction> {
        let node_kind = node.kind();
        match fns.get_mut(&node_kind) {
            Some(callback) => callback(ctx, node).map_err(|source| {
                VisitFault::CallbackFailed {
                    visitor_name: name.to_string(),
                    node_kind,
                    source,
                }
            }),
            None => Ok(VisitAction::Continue),
        }
    }
}
impl<'a, C> Visit<'a, C> for Visitor<'a, C> {
    fn enter(&mut self, ctx: &mut C, node: NodeRef<'a>) -> Result<VisitAction> {
        Self::dispatch(&mut self.enter_fns, &self.name, ctx, node)
    }

    fn leave(&mut self, ctx: &mut C, node: NodeRef<'a>) -> Result<VisitAction> {
        Self::dispatch(&mut self.leave_fns, &self.name, ctx, node)
    }
}
impl<C> std::fmt::Debug for Visitor<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut enter_kinds: Vec<_> = self.enter_fns.keys().collect();
        let mut leave_kinds: Vec<_> = self.leave_fns.keys().collect();
        enter_kinds.sort();
        leave_kinds.sort();
        f.debug_struct("Visitor")
            .field("name", &self.name)
            .field("enter", &enter_kinds)
            .field("leave", &leave_kinds)
            .finish()
    }
}
