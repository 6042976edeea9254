
use std::{fmt::Debug, iter::FromIterator, rc::Rc};

struct Node<A> {
    item: A,
    rest: Option<Rc<Node<A>>>,
}

/**
An immutable singly-linked list with structural sharing.

`cons`, `head`, and `tail` are O(1); `tail` shares its spine with the
original list. `conj` appends at the end by rebuilding the spine, so it is
O(n) but preserves creation order as observed by the caller.
*/
pub struct List<A> {
    node: Option<Rc<Node<A>>>,
    len: usize,
}

impl<A> List<A> {
    pub fn new() -> Self {
        List { node: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Prepend `item`, sharing the existing spine.
    pub fn cons(&self, item: A) -> List<A> {
        List {
            node: Some(Rc::new(Node {
                item,
                rest: self.node.clone(),
            })),
            len: self.len + 1,
        }
    }

    pub fn head(&self) -> Option<&A> {
        self.node.as_ref().map(|node| &node.item)
    }

    /// Everything after the head. The tail of an empty list is empty.
    pub fn tail(&self) -> List<A> {
        match &self.node {
            None => List::new(),
            Some(node) => List {
                node: node.rest.clone(),
                len: self.len - 1,
            },
        }
    }

    pub fn nth(&self, ix: usize) -> Option<&A> {
        self.iter().nth(ix)
    }

    /// Remove and return the head when this list is its head node's only
    /// owner. Returns `None` for an empty list or a shared head.
    ///
    /// Element types that themselves own lists use this to tear a spine
    /// down iteratively instead of through per-element drop glue.
    pub fn pop_unique(&mut self) -> Option<A> {
        let node = self.node.take()?;
        match Rc::try_unwrap(node) {
            Ok(mut inner) => {
                self.node = inner.rest.take();
                self.len -= 1;
                Some(inner.item)
            }
            Err(node) => {
                self.node = Some(node);
                None
            }
        }
    }

    pub fn iter(&self) -> Iter<'_, A> {
        Iter {
            node: self.node.as_deref(),
        }
    }
}

impl<A: Clone> List<A> {
    /// Append `item` at the end, preserving the order of existing elements.
    pub fn conj(&self, item: A) -> List<A> {
        self.iter()
            .cloned()
            .chain(std::iter::once(item))
            .collect()
    }

    /// Flatten zero or more lists into one, preserving the relative order
    /// of all elements across inputs in sequence.
    pub fn concat<'a, I>(lists: I) -> List<A>
    where
        A: 'a,
        I: IntoIterator<Item = &'a List<A>>,
    {
        lists.into_iter().flat_map(List::iter).cloned().collect()
    }
}

impl<A> Default for List<A> {
    fn default() -> Self {
        List::new()
    }
}

impl<A> Clone for List<A> {
    fn clone(&self) -> Self {
        List {
            node: self.node.clone(),
            len: self.len,
        }
    }
}

impl<A: PartialEq> PartialEq for List<A> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<A: Eq> Eq for List<A> {}

impl<A: Debug> Debug for List<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<A> FromIterator<A> for List<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        let items: Vec<A> = iter.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(List::new(), |acc, item| acc.cons(item))
    }
}

impl<'a, A> IntoIterator for &'a List<A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A> Drop for List<A> {
    // Unwind the spine with a loop so that dropping a long list doesn't
    // recurse once per node.
    fn drop(&mut self) {
        let mut node = self.node.take();
        while let Some(rc) = node {
            match Rc::try_unwrap(rc) {
                Ok(mut inner) => node = inner.rest.take(),
                // Still shared; the rest of the spine stays alive.
                Err(_) => break,
            }
        }
    }
}

pub struct Iter<'a, A> {
    node: Option<&'a Node<A>>,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.rest.as_deref();
        Some(&node.item)
    }
}
