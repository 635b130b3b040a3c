use crate::ast::NodeKind;
use crate::ast::NodeRef;
use crate::visitor::Visit;
use crate::visitor::VisitAction;
use crate::visitor::VisitFault;
use crate::visitor::Visitor;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, VisitFault>;

/// Combines several [`Visitor`]s so that one traversal drives all of them.
///
/// For every node, enter callbacks run in registration order, and so do
/// leave callbacks. The combined dispatch table is computed once up front,
/// so a node kind no visitor cares about costs a single map lookup.
///
/// Skipping is per-visitor: when one visitor's enter callback returns
/// [`VisitAction::Skip`], that visitor receives no further callbacks until
/// the traversal has left the skipped node (its leave callback for that node
/// is suppressed too). Every other visitor still sees the whole subtree.
///
/// [`VisitAction::Break`] from any visitor stops the entire traversal.
pub struct ParallelVisitor<'a, C> {
    depth: usize,
    enter_table: HashMap<NodeKind, Vec<usize>>,
    leave_table: HashMap<NodeKind, Vec<usize>>,
    /// For each visitor, the depth of the node it is currently skipping.
    skipping: Vec<Option<usize>>,
    skipping_count: usize,
    visitors: Vec<Visitor<'a, C>>,
}
impl<'a, C> ParallelVisitor<'a, C> {
    pub fn new(visitors: Vec<Visitor<'a, C>>) -> Self {
        let mut enter_table: HashMap<NodeKind, Vec<usize>> = HashMap::new();
        let mut leave_table: HashMap<NodeKind, Vec<usize>> = HashMap::new();
        for (idx, visitor) in visitors.iter().enumerate() {
            for kind in visitor.entered_kinds() {
                enter_table.entry(kind).or_default().push(idx);
            }
            for kind in visitor.left_kinds() {
                leave_table.entry(kind).or_default().push(idx);
            }
        }

        // Keys were collected from hash maps; restore registration order.
        for indices in enter_table.values_mut().chain(leave_table.values_mut()) {
            indices.sort_unstable();
        }

        Self {
            depth: 0,
            enter_table,
            leave_table,
            skipping: vec![None; visitors.len()],
            skipping_count: 0,
            visitors,
        }
    }

    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }

    /// The names of the combined visitors, in registration order.
    pub fn visitor_names(&self) -> Vec<&str> {
        self.visitors.iter().map(|v| v.name()).collect()
    }
}
impl<'a, C> Visit<'a, C> for ParallelVisitor<'a, C> {
    fn enter(&mut self, ctx: &mut C, node: NodeRef<'a>) -> Result<VisitAction> {
        self.depth += 1;
        let Some(indices) = self.enter_table.get(&node.kind()) else {
            return Ok(VisitAction::Continue);
        };

        for &idx in indices {
            if self.skipping[idx].is_some() {
                continue;
            }
            match self.visitors[idx].enter(ctx, node)? {
                VisitAction::Continue => (),
                VisitAction::Skip => {
                    self.skipping[idx] = Some(self.depth);
                    self.skipping_count += 1;
                },
                VisitAction::Break => return Ok(VisitAction::Break),
            }
        }

        // Children are still needed by visitors that did not skip.
        Ok(VisitAction::Continue)
    }

    fn leave(&mut self, ctx: &mut C, node: NodeRef<'a>) -> Result<VisitAction> {
        if let Some(indices) = self.leave_table.get(&node.kind()) {
            for &idx in indices {
                if self.skipping[idx].is_some() {
                    continue;
                }
                if self.visitors[idx].leave(ctx, node)? == VisitAction::Break {
                    return Ok(VisitAction::Break);
                }
            }
        }

        if self.skipping_count > 0 {
            let depth = self.depth;
            for skip_depth in self.skipping.iter_mut() {
                if *skip_depth == Some(depth) {
                    *skip_depth = None;
                    self.skipping_count -= 1;
                }
            }
        }
        self.depth -= 1;

        Ok(VisitAction::Continue)
    }
}
impl<C> std::fmt::Debug for ParallelVisitor<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallelVisitor")
            .field("visitors", &self.visitors)
            .field("depth", &self.depth)
            .field("skipping", &self.skipping)
            .finish()
    }
}
