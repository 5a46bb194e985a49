//! Pruned pre-order traversal protocol.
//!
//! A [`NodePredicate`] decides, before descending, whether a subtree is
//! worth visiting at all. A [`Visitor`] reacts to the node kinds it cares
//! about; both default callbacks do nothing.

use std::convert::Infallible;

use super::{Leaf, Node, NormalNode};

/// Traversal filter. Returning false from [`NodePredicate::test`] skips the
/// node and everything beneath it.
pub trait NodePredicate {
    fn test(&mut self, node: &Node) -> bool;

    /// Called before descending into a child
    fn before_child(&mut self) {}

    /// Called after returning from a child
    fn after_child(&mut self) {}
}

/// Traversal callback, one method per node kind
pub trait Visitor {
    type Error;

    fn visit_normal(&mut self, _node: &NormalNode) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_leaf(&mut self, _leaf: &Leaf) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Identity predicate: descends everywhere
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

impl NodePredicate for AcceptAll {
    fn test(&mut self, _node: &Node) -> bool {
        true
    }
}

impl<P: NodePredicate + ?Sized> NodePredicate for &mut P {
    fn test(&mut self, node: &Node) -> bool {
        (**self).test(node)
    }

    fn before_child(&mut self) {
        (**self).before_child()
    }

    fn after_child(&mut self) {
        (**self).after_child()
    }
}

/// Decorator that counts decisions and tracks the current path depth
#[derive(Debug, Default)]
pub struct CountingPredicate<P> {
    inner: P,
    pub tested: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub depth: usize,
    pub max_depth: usize,
}

impl<P: NodePredicate> CountingPredicate<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            tested: 0,
            accepted: 0,
            rejected: 0,
            depth: 0,
            max_depth: 0,
        }
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: NodePredicate> NodePredicate for CountingPredicate<P> {
    fn test(&mut self, node: &Node) -> bool {
        self.tested += 1;
        let accepted = self.inner.test(node);
        if accepted {
            self.accepted += 1;
        } else {
            self.rejected += 1;
        }
        accepted
    }

    fn before_child(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.inner.before_child();
    }

    fn after_child(&mut self) {
        self.depth -= 1;
        self.inner.after_child();
    }
}

/// Decorator that trace-logs every decision, indented by depth
#[derive(Debug, Default)]
pub struct LoggingPredicate<P> {
    inner: P,
    depth: usize,
}

impl<P: NodePredicate> LoggingPredicate<P> {
    pub fn new(inner: P) -> Self {
        Self { inner, depth: 0 }
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: NodePredicate> NodePredicate for LoggingPredicate<P> {
    fn test(&mut self, node: &Node) -> bool {
        let accepted = self.inner.test(node);
        log::trace!(
            "[LoggingPredicate::test] {:indent$}{} at {} side {} -> {}",
            "",
            if node.is_leaf() { "leaf" } else { "node" },
            node.origin(),
            node.side(),
            if accepted { "descend" } else { "skip" },
            indent = self.depth * 2
        );
        accepted
    }

    fn before_child(&mut self) {
        self.depth += 1;
        self.inner.before_child();
    }

    fn after_child(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.inner.after_child();
    }
}

/// Adapts a closure over leaves into a [`Visitor`]
pub struct LeafVisitor<F>(pub F);

impl<F: FnMut(&Leaf)> Visitor for LeafVisitor<F> {
    type Error = Infallible;

    fn visit_leaf(&mut self, leaf: &Leaf) -> Result<(), Infallible> {
        (self.0)(leaf);
        Ok(())
    }
}

/// Pre-order walk of `node`. The predicate is consulted before anything
/// else happens at a node. A visitor error aborts the walk; every
/// `before_child` still gets its matching `after_child` on the way out.
pub fn walk<P, V>(node: &Node, predicate: &mut P, visitor: &mut V) -> Result<(), V::Error>
where
    P: NodePredicate + ?Sized,
    V: Visitor + ?Sized,
{
    if !predicate.test(node) {
        return Ok(());
    }
    match node {
        Node::Leaf(leaf) => visitor.visit_leaf(leaf),
        Node::Normal(normal) => {
            visitor.visit_normal(normal)?;
            for (_, child) in normal.children() {
                predicate.before_child();
                let result = walk(child, predicate, visitor);
                // Unwind the predicate's path state even when aborting
                predicate.after_child();
                result?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{DefaultNodeFactory, VoxelPos};

    fn sample_tree() -> Node {
        let factory = DefaultNodeFactory::new(1);
        let mut root = Node::Normal(NormalNode::new(VoxelPos::ORIGIN, 3));
        root.put(VoxelPos::new(0, 0, 0), 1, &factory);
        root.put(VoxelPos::new(7, 7, 7), 2, &factory);
        root
    }

    struct Recorder {
        normals: usize,
        leaves: Vec<VoxelPos>,
    }

    impl Visitor for Recorder {
        type Error = Infallible;

        fn visit_normal(&mut self, _node: &NormalNode) -> Result<(), Infallible> {
            self.normals += 1;
            Ok(())
        }

        fn visit_leaf(&mut self, leaf: &Leaf) -> Result<(), Infallible> {
            self.leaves.push(leaf.origin());
            Ok(())
        }
    }

    #[test]
    fn test_walk_visits_every_node_pre_order() {
        let root = sample_tree();
        let mut recorder = Recorder {
            normals: 0,
            leaves: Vec::new(),
        };
        let mut predicate = CountingPredicate::new(AcceptAll);
        let _ = walk(&root, &mut predicate, &mut recorder);

        // root + two level-2 nodes, then one leaf under each
        assert_eq!(recorder.normals, 3);
        assert_eq!(recorder.leaves, vec![VoxelPos::new(0, 0, 0), VoxelPos::new(6, 6, 6)]);
        assert_eq!(predicate.tested, 5);
        assert_eq!(predicate.max_depth, 2);
        assert_eq!(predicate.depth, 0);
    }

    struct RejectUpperHalf;

    impl NodePredicate for RejectUpperHalf {
        fn test(&mut self, node: &Node) -> bool {
            node.origin().x < 4
        }
    }

    #[test]
    fn test_rejected_subtree_is_not_descended() {
        let root = sample_tree();
        let mut leaves = Vec::new();
        let mut predicate = CountingPredicate::new(RejectUpperHalf);
        let _ = walk(&root, &mut predicate, &mut LeafVisitor(|leaf: &Leaf| {
            leaves.push(leaf.origin())
        }));

        assert_eq!(leaves, vec![VoxelPos::ORIGIN]);
        assert_eq!(predicate.rejected, 1);
        // root, lower node, its leaf, rejected upper node
        assert_eq!(predicate.tested, 4);
    }

    struct FailOnSecondLeaf {
        seen: usize,
    }

    impl Visitor for FailOnSecondLeaf {
        type Error = String;

        fn visit_leaf(&mut self, leaf: &Leaf) -> Result<(), String> {
            self.seen += 1;
            if self.seen == 2 {
                return Err(format!("stop at {}", leaf.origin()));
            }
            Ok(())
        }
    }

    #[test]
    fn test_visitor_error_propagates() {
        let root = sample_tree();
        let mut visitor = FailOnSecondLeaf { seen: 0 };
        let result = walk(&root, &mut AcceptAll, &mut visitor);
        assert_eq!(result, Err("stop at (6, 6, 6)".to_string()));
    }

    #[test]
    fn test_depth_restored_after_visitor_error() {
        let root = sample_tree();
        let mut predicate = CountingPredicate::new(AcceptAll);
        let result = walk(&root, &mut predicate, &mut FailOnSecondLeaf { seen: 0 });

        assert!(result.is_err());
        assert_eq!(predicate.max_depth, 2);
        assert_eq!(predicate.depth, 0);
    }

    #[test]
    fn test_logging_predicate_is_transparent() {
        let root = sample_tree();
        let mut count = 0;
        let mut predicate = LoggingPredicate::new(AcceptAll);
        let _ = walk(&root, &mut predicate, &mut LeafVisitor(|_: &Leaf| count += 1));
        assert_eq!(count, 2);
    }
}
