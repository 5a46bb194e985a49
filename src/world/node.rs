use super::{Leaf, NodeFactory, NormalNode, VoxelPos};

/// The two node kinds of the octree
#[derive(Debug)]
pub enum Node {
    Normal(NormalNode),
    Leaf(Leaf),
}

impl Node {
    pub fn origin(&self) -> VoxelPos {
        match self {
            Node::Normal(node) => node.origin(),
            Node::Leaf(leaf) => leaf.origin(),
        }
    }

    pub fn shift(&self) -> u8 {
        match self {
            Node::Normal(node) => node.shift(),
            Node::Leaf(leaf) => leaf.shift(),
        }
    }

    pub fn side(&self) -> i32 {
        1 << self.shift()
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            Node::Normal(_) => None,
        }
    }

    pub fn as_normal(&self) -> Option<&NormalNode> {
        match self {
            Node::Normal(node) => Some(node),
            Node::Leaf(_) => None,
        }
    }

    pub fn get(&self, pos: VoxelPos) -> u8 {
        match self {
            Node::Normal(node) => node.get(pos),
            Node::Leaf(leaf) => leaf.get(pos),
        }
    }

    pub fn put<F: NodeFactory + ?Sized>(&mut self, pos: VoxelPos, value: u8, factory: &F) {
        match self {
            Node::Normal(node) => node.put(pos, value, factory),
            Node::Leaf(leaf) => leaf.set(pos, value),
        }
    }

    /// Walk the addressing path to the leaf owning `pos`, stopping at the
    /// first absent node
    pub fn find_leaf(&self, pos: VoxelPos) -> Option<&Leaf> {
        let mut node = self;
        loop {
            match node {
                Node::Leaf(leaf) => return Some(leaf),
                Node::Normal(normal) => node = normal.child(normal.octant_of(pos))?,
            }
        }
    }

    pub fn find_leaf_mut(&mut self, pos: VoxelPos) -> Option<&mut Leaf> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            Node::Normal(normal) => {
                let octant = normal.octant_of(pos);
                normal.child_mut(octant)?.find_leaf_mut(pos)
            }
        }
    }

    /// Walk the addressing path to the leaf owning `pos`, creating every
    /// missing node on the way
    pub fn leaf_or_create<F: NodeFactory + ?Sized>(
        &mut self,
        pos: VoxelPos,
        factory: &F,
    ) -> &mut Leaf {
        match self {
            Node::Leaf(leaf) => leaf,
            Node::Normal(normal) => normal.child_or_create(pos, factory).leaf_or_create(pos, factory),
        }
    }
}
