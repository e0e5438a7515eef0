//! A double-ended, doubly linked list of vertex indices.
//!
//! [`VertexList`] is the frontier of the traversals in [`crate::algorithms`].
//! It holds [`VertexIndex`] values only, so it never owns or frees a vertex and
//! can not dangle. Nodes live in an index arena; removed slots go onto a free
//! list and are reused by later inserts.
//!
//! The list is used with two disciplines:
//!
//! - stack: [`VertexList::push`] (insert at head) and [`VertexList::pop`]
//!   (remove from head);
//! - queue: [`VertexList::enqueue`] (insert at head) and
//!   [`VertexList::dequeue`] (remove from tail).

use std::fmt::Display;

use crate::graph::{Graph, GraphError, VertexIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Occupied {
        vertex: VertexIndex,
        prev: Option<usize>,
        next: Option<usize>,
    },
    /// Next free slot.
    Free(Option<usize>),
}

#[derive(Debug, Clone, Default)]
pub struct VertexList {
    slots: Vec<Slot>,
    head: Option<usize>,
    tail: Option<usize>,
    free_head: Option<usize>,
    len: usize,
}

impl VertexList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn alloc(&mut self, vertex: VertexIndex) -> Result<usize, GraphError> {
        let slot = Slot::Occupied {
            vertex,
            prev: None,
            next: None,
        };
        match self.free_head {
            Some(idx) => {
                let Slot::Free(next_free) = self.slots[idx] else {
                    unreachable!("free list points at an occupied slot")
                };
                self.free_head = next_free;
                self.slots[idx] = slot;
                Ok(idx)
            }
            None => {
                self.slots.try_reserve(1)?;
                self.slots.push(slot);
                Ok(self.slots.len() - 1)
            }
        }
    }

    fn free(&mut self, idx: usize) {
        self.slots[idx] = Slot::Free(self.free_head);
        self.free_head = Some(idx);
    }

    fn links(&self, idx: usize) -> (VertexIndex, Option<usize>, Option<usize>) {
        match self.slots[idx] {
            Slot::Occupied { vertex, prev, next } => (vertex, prev, next),
            Slot::Free(_) => unreachable!("list link points at a free slot"),
        }
    }

    fn set_prev(&mut self, idx: usize, new_prev: Option<usize>) {
        if let Slot::Occupied { prev, .. } = &mut self.slots[idx] {
            *prev = new_prev;
        }
    }

    fn set_next(&mut self, idx: usize, new_next: Option<usize>) {
        if let Slot::Occupied { next, .. } = &mut self.slots[idx] {
            *next = new_next;
        }
    }

    pub fn insert_head(&mut self, vertex: VertexIndex) -> Result<(), GraphError> {
        let idx = self.alloc(vertex)?;
        match self.head {
            Some(old) => self.set_prev(old, Some(idx)),
            None => self.tail = Some(idx),
        }
        self.set_next(idx, self.head);
        self.head = Some(idx);
        self.len += 1;
        Ok(())
    }

    pub fn insert_tail(&mut self, vertex: VertexIndex) -> Result<(), GraphError> {
        let idx = self.alloc(vertex)?;
        match self.tail {
            Some(old) => self.set_next(old, Some(idx)),
            None => self.head = Some(idx),
        }
        self.set_prev(idx, self.tail);
        self.tail = Some(idx);
        self.len += 1;
        Ok(())
    }

    pub fn remove_head(&mut self) -> Result<VertexIndex, GraphError> {
        let idx = self.head.ok_or(GraphError::Empty)?;
        let (vertex, _, next) = self.links(idx);

        self.head = next;
        match next {
            Some(n) => self.set_prev(n, None),
            None => self.tail = None,
        }
        self.free(idx);
        self.len -= 1;
        Ok(vertex)
    }

    pub fn remove_tail(&mut self) -> Result<VertexIndex, GraphError> {
        let idx = self.tail.ok_or(GraphError::Empty)?;
        let (vertex, prev, _) = self.links(idx);

        self.tail = prev;
        match prev {
            Some(p) => self.set_next(p, None),
            None => self.head = None,
        }
        self.free(idx);
        self.len -= 1;
        Ok(vertex)
    }

    pub fn peek_head(&self) -> Result<VertexIndex, GraphError> {
        let idx = self.head.ok_or(GraphError::Empty)?;
        Ok(self.links(idx).0)
    }

    pub fn peek_tail(&self) -> Result<VertexIndex, GraphError> {
        let idx = self.tail.ok_or(GraphError::Empty)?;
        Ok(self.links(idx).0)
    }

    /* queue discipline */
    pub fn enqueue(&mut self, vertex: VertexIndex) -> Result<(), GraphError> {
        self.insert_head(vertex)
    }

    pub fn dequeue(&mut self) -> Result<VertexIndex, GraphError> {
        self.remove_tail()
    }

    /* stack discipline */
    pub fn push(&mut self, vertex: VertexIndex) -> Result<(), GraphError> {
        self.insert_head(vertex)
    }

    pub fn pop(&mut self) -> Result<VertexIndex, GraphError> {
        self.remove_head()
    }

    /// Iterates from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    pub fn to_vec(&self) -> Vec<VertexIndex> {
        self.iter().collect()
    }

    /// Shows the labels of the listed vertices, head to tail.
    pub fn display<'a>(&'a self, graph: &'a Graph) -> VertexListDisplay<'a> {
        VertexListDisplay { list: self, graph }
    }
}

pub struct Iter<'a> {
    list: &'a VertexList,
    current: Option<usize>,
}

impl Iterator for Iter<'_> {
    type Item = VertexIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let (vertex, _, next) = self.list.links(self.current?);
        self.current = next;
        Some(vertex)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.current.is_none() {
            (0, Some(0))
        } else {
            (1, Some(self.list.len))
        }
    }
}

impl<'a> IntoIterator for &'a VertexList {
    type Item = VertexIndex;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct VertexListDisplay<'a> {
    list: &'a VertexList,
    graph: &'a Graph,
}

impl Display for VertexListDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.list.is_empty() {
            return write!(f, "EMPTY LIST");
        }
        for (i, v) in self.list.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            let label = self.graph.vertex(v).ok().and_then(|v| v.vertex().label());
            write!(f, "{}", label.unwrap_or("NO LABEL"))?;
        }
        Ok(())
    }
}
