/// Arena index of a node; `None` is the end of a chain.
pub(crate) type Link = Option<usize>;

/// A single entry in the map.
///
/// Nodes live in the map's arena and refer to each other by arena
/// index, never by pointer. `forward[i]` is the next node at level `i`
/// in ascending key order. The array is sized once at creation
/// (`node_level + 1` slots) and never grows or shrinks; only the links
/// stored in it are rewritten as neighbors are spliced in and out.
#[derive(Debug)]
pub(crate) struct Node<V> {
    pub(crate) key: i64,
    pub(crate) value: V,
    pub(crate) forward: Box<[Link]>,
}

impl<V> Node<V> {
    pub(crate) fn new(key: i64, value: V, level: usize) -> Self {
        Node {
            key,
            value,
            forward: vec![None; level + 1].into_boxed_slice(),
        }
    }

    /// Highest level this node participates in.
    pub(crate) fn level(&self) -> usize {
        self.forward.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_array_sized_by_level() {
        let node = Node::new(10, "ten", 3);

        assert_eq!(node.key, 10);
        assert_eq!(node.value, "ten");
        assert_eq!(node.forward.len(), 4);
        assert_eq!(node.level(), 3);
        assert!(node.forward.iter().all(Option::is_none));
    }

    #[test]
    fn level_zero_node_has_one_slot() {
        let node = Node::new(-5, (), 0);

        assert_eq!(node.forward.len(), 1);
        assert_eq!(node.level(), 0);
    }
}
