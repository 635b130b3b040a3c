use crate::ast::NodeRef;
use crate::ast::Type;
use crate::visitor::Visit;
use crate::visitor::VisitAction;
use crate::visitor::VisitFault;
use std::ops::ControlFlow;

type Result<T> = std::result::Result<T, VisitFault>;

/// Walk the tree rooted at `root` depth-first, calling `visitor`'s enter
/// callback on the way down and its leave callback on the way up.
///
/// Returns `ControlFlow::Break(())` when a callback asked to stop, and
/// `ControlFlow::Continue(())` when the whole tree was visited.
///
/// Two structural problems are reported as
/// [`VisitFault::MalformedDocument`] when they are reached: a document with
/// no definitions, and a non-null type that directly wraps another non-null
/// type.
pub fn walk<'a, C, V>(
    root: NodeRef<'a>,
    visitor: &mut V,
    ctx: &mut C,
) -> Result<ControlFlow<()>>
where
    V: Visit<'a, C> + ?Sized,
{
    check_structure(root)?;

    match visitor.enter(ctx, root)? {
        VisitAction::Break => return Ok(ControlFlow::Break(())),
        VisitAction::Skip => return Ok(ControlFlow::Continue(())),
        VisitAction::Continue => (),
    }

    for child in root.children() {
        if walk(child, visitor, ctx)?.is_break() {
            return Ok(ControlFlow::Break(()));
        }
    }

    Ok(match visitor.leave(ctx, root)? {
        VisitAction::Break => ControlFlow::Break(()),
        VisitAction::Continue | VisitAction::Skip => ControlFlow::Continue(()),
    })
}

fn check_structure(node: NodeRef<'_>) -> Result<()> {
    match node {
        NodeRef::Document(doc) if doc.definitions.is_empty() =>
            Err(VisitFault::MalformedDocument {
                position: node.position(),
                message: "a document must contain at least one definition"
                    .to_string(),
            }),

        NodeRef::NonNullType(non_null)
            if matches!(*non_null.type_, Type::NonNull(_)) =>
            Err(VisitFault::MalformedDocument {
                position: node.position(),
                message: "a non-null type cannot wrap another non-null type"
                    .to_string(),
            }),

        _ => Ok(()),
    }
}
