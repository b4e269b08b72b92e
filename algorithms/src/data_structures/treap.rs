//! Treap: a binary search tree on keys that is also a max-heap on random
//! priorities.
//!
//! Variables:
//!   key(n), prio(n)  = search key and random priority of node n
//!   size(n)          = number of nodes in the subtree rooted at n
//!
//! Invariants:
//!   key(left)  < key(n) < key(right)
//!   prio(child) <= prio(n)
//!   size(n) = 1 + size(left) + size(right)
//!
//! Equations:
//!   rank(k) = |{ keys < k }|, summed from size(left) along the search path
//!   expected depth = O(log n) for priorities drawn independently of keys

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    priority: u64,
    size: usize,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V, priority: u64) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            priority,
            size: 1,
            left: None,
            right: None,
        })
    }

    fn update(&mut self) {
        self.size = 1 + size(&self.left) + size(&self.right);
    }
}

fn size<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |n| n.size)
}

fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut left) = node.left.take() else {
        return node;
    };
    node.left = left.right.take();
    node.update();
    left.right = Some(node);
    left.update();
    left
}

fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut right) = node.right.take() else {
        return node;
    };
    node.right = right.left.take();
    node.update();
    right.left = Some(node);
    right.update();
    right
}

fn insert<K: Ord, V>(
    link: Link<K, V>,
    key: K,
    value: V,
    priority: u64,
    replaced: &mut Option<V>,
) -> Box<Node<K, V>> {
    let Some(mut node) = link else {
        return Node::new(key, value, priority);
    };
    match key.cmp(&node.key) {
        Ordering::Equal => {
            *replaced = Some(std::mem::replace(&mut node.value, value));
            return node;
        }
        Ordering::Less => {
            let child = insert(node.left.take(), key, value, priority, replaced);
            let lift = child.priority > node.priority;
            node.left = Some(child);
            if lift {
                return rotate_right(node);
            }
        }
        Ordering::Greater => {
            let child = insert(node.right.take(), key, value, priority, replaced);
            let lift = child.priority > node.priority;
            node.right = Some(child);
            if lift {
                return rotate_left(node);
            }
        }
    }
    node.update();
    node
}

fn remove<K: Ord, V>(link: Link<K, V>, key: &K, removed: &mut Option<V>) -> Link<K, V> {
    let mut node = link?;
    match key.cmp(&node.key) {
        Ordering::Less => node.left = remove(node.left.take(), key, removed),
        Ordering::Greater => node.right = remove(node.right.take(), key, removed),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, only) | (only, None) => {
                let Node { value, .. } = *node;
                *removed = Some(value);
                return only;
            }
            (Some(left), Some(right)) => {
                // lift the higher-priority child, then chase the key downwards
                let left_wins = left.priority > right.priority;
                node.left = Some(left);
                node.right = Some(right);
                if left_wins {
                    node = rotate_right(node);
                    node.right = remove(node.right.take(), key, removed);
                } else {
                    node = rotate_left(node);
                    node.left = remove(node.left.take(), key, removed);
                }
            }
        },
    }
    node.update();
    Some(node)
}

fn collect_range<'a, K: Ord, V>(link: &'a Link<K, V>, lo: &K, hi: &K, out: &mut Vec<(&'a K, &'a V)>) {
    let Some(n) = link else { return };
    if lo < &n.key {
        collect_range(&n.left, lo, hi, out);
    }
    if lo <= &n.key && &n.key <= hi {
        out.push((&n.key, &n.value));
    }
    if &n.key < hi {
        collect_range(&n.right, lo, hi, out);
    }
}

fn check<K: Ord, V>(link: &Link<K, V>, lo: Option<&K>, hi: Option<&K>, ceiling: u64) -> Option<usize> {
    let Some(n) = link else { return Some(0) };
    if lo.is_some_and(|lo| &n.key <= lo) || hi.is_some_and(|hi| &n.key >= hi) || n.priority > ceiling {
        return None;
    }
    let l = check(&n.left, lo, Some(&n.key), n.priority)?;
    let r = check(&n.right, Some(&n.key), hi, n.priority)?;
    (n.size == l + r + 1).then_some(n.size)
}

/// Ordered map with expected O(log n) insert, remove, lookup and rank.
#[derive(Debug)]
pub struct Treap<K, V> {
    root: Link<K, V>,
    rng: StdRng,
}

impl<K: Ord, V> Treap<K, V> {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Reproducible priorities, same shape for the same operation sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self { root: None, rng }
    }

    pub fn len(&self) -> usize {
        size(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert or overwrite; returns the previous value for `key`.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let priority = self.rng.gen();
        let mut replaced = None;
        self.root = Some(insert(self.root.take(), key, value, priority, &mut replaced));
        replaced
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let mut removed = None;
        self.root = remove(self.root.take(), key, &mut removed);
        removed
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let mut cur = self.root.as_deref();
        while let Some(n) = cur {
            cur = match key.cmp(&n.key) {
                Ordering::Equal => return Some(&n.value),
                Ordering::Less => n.left.as_deref(),
                Ordering::Greater => n.right.as_deref(),
            };
        }
        None
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Number of stored keys strictly less than `key`.
    pub fn rank(&self, key: &K) -> usize {
        let mut rank = 0;
        let mut cur = self.root.as_deref();
        while let Some(n) = cur {
            match key.cmp(&n.key) {
                Ordering::Equal => return rank + size(&n.left),
                Ordering::Less => cur = n.left.as_deref(),
                Ordering::Greater => {
                    rank += size(&n.left) + 1;
                    cur = n.right.as_deref();
                }
            }
        }
        rank
    }

    /// Entries with `lo <= key <= hi`, ascending.
    pub fn range(&self, lo: &K, hi: &K) -> Vec<(&K, &V)> {
        let mut out = Vec::new();
        collect_range(&self.root, lo, hi, &mut out);
        out
    }

    /// Checks key order, heap order on priorities and every subtree size.
    pub fn is_valid(&self) -> bool {
        check(&self.root, None, None, u64::MAX).is_some()
    }
}

impl<K: Ord, V> Default for Treap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
