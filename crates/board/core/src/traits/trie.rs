//! Persistent hash trie keyed by [`CoordHash`].
//!
//! Keys are split into 4-bit slots, most significant first, so every key sits
//! at the same fixed depth and in-order traversal yields ascending keys. An
//! update copies the branch nodes along one root-to-leaf path and shares every
//! other node with the previous version.

use std::fmt;
use std::sync::Arc;

use crate::coord::CoordHash;

const SLOT_BITS: u32 = 4;
const FANOUT: usize = 1 << SLOT_BITS;
const DEPTH: u32 = u64::BITS / SLOT_BITS;

type Children<V> = [Option<Arc<Node<V>>>; FANOUT];

enum Node<V> {
    Branch(Children<V>),
    Leaf(Arc<V>),
}

fn slot(key: u64, level: u32) -> usize {
    let shift = u64::BITS - SLOT_BITS * (level + 1);
    ((key >> shift) as usize) & (FANOUT - 1)
}

pub(crate) struct HashTrie<V> {
    root: Option<Arc<Node<V>>>,
    len: usize,
}

impl<V> HashTrie<V> {
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn get(&self, key: CoordHash) -> Option<&Arc<V>> {
        let mut node = self.root.as_deref()?;
        for level in 0..DEPTH {
            let Node::Branch(children) = node else {
                return None;
            };
            node = children[slot(key.value(), level)].as_deref()?;
        }
        match node {
            Node::Leaf(value) => Some(value),
            Node::Branch(_) => None,
        }
    }

    /// Returns a trie that maps `key` to `value`, replacing any previous entry.
    pub(crate) fn insert(&self, key: CoordHash, value: Arc<V>) -> Self {
        let (root, replaced) = put(self.root.as_ref(), key.value(), 0, Some(value));
        Self {
            root,
            len: if replaced { self.len } else { self.len + 1 },
        }
    }

    /// Returns a trie without `key`. Removing an absent key shares the whole trie.
    pub(crate) fn remove(&self, key: CoordHash) -> Self {
        if self.get(key).is_none() {
            return self.clone();
        }
        let (root, _) = put(self.root.as_ref(), key.value(), 0, None);
        Self {
            root,
            len: self.len - 1,
        }
    }

    /// Iterates entries in ascending key order.
    pub(crate) fn iter(&self) -> Iter<'_, V> {
        let mut stack = Vec::with_capacity(DEPTH as usize);
        if let Some(Node::Branch(children)) = self.root.as_deref() {
            stack.push(Frame {
                children,
                cursor: 0,
                prefix: 0,
            });
        }
        Iter { stack }
    }
}

/// Rebuilds the path to `key`, returning the new subtree and whether a leaf
/// already existed there. Branches left without children are pruned.
fn put<V>(
    node: Option<&Arc<Node<V>>>,
    key: u64,
    level: u32,
    value: Option<Arc<V>>,
) -> (Option<Arc<Node<V>>>, bool) {
    if level == DEPTH {
        let existed = matches!(node.map(Arc::as_ref), Some(Node::Leaf(_)));
        return (value.map(|value| Arc::new(Node::Leaf(value))), existed);
    }

    let mut children: Children<V> = match node.map(Arc::as_ref) {
        Some(Node::Branch(children)) => children.clone(),
        _ => Default::default(),
    };
    let index = slot(key, level);
    let (child, existed) = put(children[index].as_ref(), key, level + 1, value);
    children[index] = child;

    let branch = children
        .iter()
        .any(Option::is_some)
        .then(|| Arc::new(Node::Branch(children)));
    (branch, existed)
}

struct Frame<'a, V> {
    children: &'a Children<V>,
    cursor: usize,
    prefix: u64,
}

pub(crate) struct Iter<'a, V> {
    stack: Vec<Frame<'a, V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (CoordHash, &'a Arc<V>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let children = frame.children;
            let Some(index) = (frame.cursor..FANOUT).find(|&index| children[index].is_some())
            else {
                self.stack.pop();
                continue;
            };
            frame.cursor = index + 1;
            let key = (frame.prefix << SLOT_BITS) | index as u64;

            match children[index].as_deref() {
                Some(Node::Branch(grandchildren)) => self.stack.push(Frame {
                    children: grandchildren,
                    cursor: 0,
                    prefix: key,
                }),
                Some(Node::Leaf(value)) => return Some((CoordHash(key), value)),
                None => {}
            }
        }
    }
}

impl<V> Clone for HashTrie<V> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<V> Default for HashTrie<V> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<V: PartialEq> PartialEq for HashTrie<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<V: Eq> Eq for HashTrie<V> {}

impl<V: fmt::Debug> fmt::Debug for HashTrie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> FromIterator<(CoordHash, Arc<V>)> for HashTrie<V> {
    fn from_iter<I: IntoIterator<Item = (CoordHash, Arc<V>)>>(entries: I) -> Self {
        entries
            .into_iter()
            .fold(Self::default(), |trie, (key, value)| trie.insert(key, value))
    }
}
