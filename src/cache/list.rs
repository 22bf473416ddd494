//! Recency List Module
//!
//! Doubly-linked ordering of cache entries, backed by an arena of
//! index-addressed slots so every splice is safe code and O(1).

// == Node ==
/// A single entry in the recency ordering.
///
/// Neighbor links are arena slot indices rather than pointers; a slot index
/// stays valid until the entry is removed and the slot recycled.
#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

// == Recency List ==
/// Tracks access order for LRU eviction.
///
/// Entries are linked through a slot arena where:
/// - Head = most recently used
/// - Tail = least recently used
///
/// Vacated slots are recycled through a free list, so the arena never grows
/// past the largest number of entries held at once.
#[derive(Debug)]
pub struct RecencyList<K, V> {
    /// Slot arena; `None` marks a vacant slot awaiting reuse
    slots: Vec<Option<Node<K, V>>>,
    /// Vacant slot indices available for reuse
    free: Vec<usize>,
    /// Most recently used entry
    head: Option<usize>,
    /// Least recently used entry
    tail: Option<usize>,
    /// Number of occupied slots
    len: usize,
}

impl<K, V> RecencyList<K, V> {
    // == Constructor ==
    /// Creates an empty list with arena space reserved for `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Push Front ==
    /// Links a new entry at the most-recently-used end.
    ///
    /// Returns the slot index addressing the entry, for the caller to keep
    /// in its lookup index.
    pub fn push_front(&mut self, key: K, value: V) -> usize {
        let index = self.alloc(Node {
            key,
            value,
            prev: None,
            next: self.head,
        });

        if let Some(old_head) = self.head {
            if let Some(node) = self.slots[old_head].as_mut() {
                node.prev = Some(index);
            }
        }

        self.head = Some(index);
        if self.tail.is_none() {
            self.tail = Some(index);
        }
        self.len += 1;
        index
    }

    // == Move To Front ==
    /// Re-splices an existing entry to the most-recently-used end.
    ///
    /// Touches at most two neighbor links plus the head; never walks the
    /// list.
    pub fn move_to_front(&mut self, index: usize) {
        if self.head == Some(index) {
            return; // already the most recent
        }
        if self.slots[index].is_none() {
            return; // vacant slot
        }

        self.unlink(index);

        if let Some(node) = self.slots[index].as_mut() {
            node.prev = None;
            node.next = self.head;
        }
        if let Some(old_head) = self.head {
            if let Some(node) = self.slots[old_head].as_mut() {
                node.prev = Some(index);
            }
        }
        self.head = Some(index);
    }

    // == Remove ==
    /// Unlinks an entry and vacates its slot, returning the stored pair.
    ///
    /// Returns `None` if the slot is already vacant.
    pub fn remove(&mut self, index: usize) -> Option<(K, V)> {
        // Unlink while the node is still in the arena; the neighbor links
        // are read from the slot itself.
        self.unlink(index);

        let node = self.slots[index].take()?;
        self.free.push(index);
        self.len -= 1;
        Some((node.key, node.value))
    }

    // == Pop Back ==
    /// Removes and returns the least-recently-used entry.
    ///
    /// Returns `None` if the list is empty.
    pub fn pop_back(&mut self) -> Option<(K, V)> {
        let tail = self.tail?;
        self.remove(tail)
    }

    // == Front ==
    /// Returns the most-recently-used entry without altering the order.
    pub fn front(&self) -> Option<(&K, &V)> {
        let index = self.head?;
        self.slots[index].as_ref().map(|node| (&node.key, &node.value))
    }

    // == Back ==
    /// Returns the least-recently-used entry without altering the order.
    pub fn back(&self) -> Option<(&K, &V)> {
        let index = self.tail?;
        self.slots[index].as_ref().map(|node| (&node.key, &node.value))
    }

    // == Slot Access ==
    /// Returns the value stored at `index`, if the slot is occupied.
    pub fn value(&self, index: usize) -> Option<&V> {
        self.slots[index].as_ref().map(|node| &node.value)
    }

    /// Mutable access to the value stored at `index`.
    pub fn value_mut(&mut self, index: usize) -> Option<&mut V> {
        self.slots[index].as_mut().map(|node| &mut node.value)
    }

    // == Length ==
    /// Returns the number of linked entries.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Clear ==
    /// Drops every entry and vacates the arena; reserved space is kept.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Unlink ==
    /// Detaches an entry from its neighbors, patching head/tail as needed.
    ///
    /// The slot stays occupied; callers either re-splice it
    /// (`move_to_front`) or vacate it (`remove`).
    fn unlink(&mut self, index: usize) {
        let (prev, next) = match self.slots[index].as_ref() {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev_index) => {
                if let Some(node) = self.slots[prev_index].as_mut() {
                    node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next_index) => {
                if let Some(node) = self.slots[next_index].as_mut() {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    // == Slot Allocation ==
    /// Claims a slot for a new node, reusing vacated slots before growing
    /// the arena.
    fn alloc(&mut self, node: Node<K, V>) -> usize {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                index
            }
            None => {
                let index = self.slots.len();
                self.slots.push(Some(node));
                index
            }
        }
    }

    // == Test Support ==
    /// Walks head to tail collecting keys, panicking on any broken link.
    #[cfg(test)]
    pub fn keys_front_to_back(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        let mut prev = None;
        let mut cursor = self.head;

        while let Some(index) = cursor {
            let node = self.slots[index]
                .as_ref()
                .expect("linked slot must be occupied");
            assert_eq!(node.prev, prev, "asymmetric prev link at slot {}", index);
            assert!(keys.len() < self.len, "cycle in recency links");
            keys.push(&node.key);
            prev = cursor;
            cursor = node.next;
        }

        assert_eq!(self.tail, prev, "tail does not terminate the chain");
        assert_eq!(keys.len(), self.len, "link walk missed entries");
        keys
    }

    /// Returns the key stored at a slot, if occupied.
    #[cfg(test)]
    pub fn key_at(&self, index: usize) -> Option<&K> {
        self.slots[index].as_ref().map(|node| &node.key)
    }

    /// Arena size including vacant slots.
    #[cfg(test)]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_new_is_empty() {
        let list: RecencyList<u32, &str> = RecencyList::with_capacity(10);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn test_list_push_front_orders_entries() {
        let mut list = RecencyList::with_capacity(10);

        list.push_front("a", 1);
        list.push_front("b", 2);
        list.push_front("c", 3);

        assert_eq!(list.len(), 3);
        // Last pushed is most recent, first pushed is least recent
        assert_eq!(list.front(), Some((&"c", &3)));
        assert_eq!(list.back(), Some((&"a", &1)));
        assert_eq!(list.keys_front_to_back(), vec![&"c", &"b", &"a"]);
    }

    #[test]
    fn test_list_move_to_front_from_back() {
        let mut list = RecencyList::with_capacity(10);

        let a = list.push_front("a", 1);
        list.push_front("b", 2);
        list.push_front("c", 3);

        list.move_to_front(a);

        assert_eq!(list.front(), Some((&"a", &1)));
        assert_eq!(list.back(), Some((&"b", &2)));
        assert_eq!(list.keys_front_to_back(), vec![&"a", &"c", &"b"]);
    }

    #[test]
    fn test_list_move_to_front_from_middle() {
        let mut list = RecencyList::with_capacity(10);

        list.push_front("a", 1);
        let b = list.push_front("b", 2);
        list.push_front("c", 3);

        list.move_to_front(b);

        assert_eq!(list.keys_front_to_back(), vec![&"b", &"c", &"a"]);
        assert_eq!(list.back(), Some((&"a", &1)));
    }

    #[test]
    fn test_list_move_to_front_of_head_is_noop() {
        let mut list = RecencyList::with_capacity(10);

        list.push_front("a", 1);
        let b = list.push_front("b", 2);

        list.move_to_front(b);
        list.move_to_front(b);

        assert_eq!(list.keys_front_to_back(), vec![&"b", &"a"]);
    }

    #[test]
    fn test_list_pop_back_drains_in_lru_order() {
        let mut list = RecencyList::with_capacity(10);

        list.push_front("a", 1);
        list.push_front("b", 2);
        list.push_front("c", 3);

        assert_eq!(list.pop_back(), Some(("a", 1)));
        assert_eq!(list.pop_back(), Some(("b", 2)));
        assert_eq!(list.pop_back(), Some(("c", 3)));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_list_remove_middle_keeps_neighbors_linked() {
        let mut list = RecencyList::with_capacity(10);

        list.push_front("a", 1);
        let b = list.push_front("b", 2);
        list.push_front("c", 3);

        assert_eq!(list.remove(b), Some(("b", 2)));
        assert_eq!(list.len(), 2);
        assert_eq!(list.keys_front_to_back(), vec![&"c", &"a"]);
    }

    #[test]
    fn test_list_remove_only_entry_resets_endpoints() {
        let mut list = RecencyList::with_capacity(10);

        let a = list.push_front("a", 1);
        assert_eq!(list.remove(a), Some(("a", 1)));

        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn test_list_remove_vacant_slot_is_noop() {
        let mut list = RecencyList::with_capacity(10);

        let a = list.push_front("a", 1);
        assert_eq!(list.remove(a), Some(("a", 1)));
        assert_eq!(list.remove(a), None);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_list_pop_back_after_tail_promotion() {
        let mut list = RecencyList::with_capacity(10);

        let a = list.push_front("a", 1);
        list.push_front("b", 2);

        // Promote the tail, then the old head must be evicted first
        list.move_to_front(a);
        assert_eq!(list.pop_back(), Some(("b", 2)));
        assert_eq!(list.pop_back(), Some(("a", 1)));
    }

    #[test]
    fn test_list_slot_reuse() {
        let mut list = RecencyList::with_capacity(10);

        list.push_front("a", 1);
        list.push_front("b", 2);
        list.push_front("c", 3);
        assert_eq!(list.slot_count(), 3);

        list.pop_back();
        list.push_front("d", 4);

        // The vacated slot is recycled instead of growing the arena
        assert_eq!(list.slot_count(), 3);
        assert_eq!(list.keys_front_to_back(), vec![&"d", &"c", &"b"]);
    }

    #[test]
    fn test_list_value_accessors() {
        let mut list = RecencyList::with_capacity(10);

        let a = list.push_front("a", 1);
        assert_eq!(list.value(a), Some(&1));

        if let Some(value) = list.value_mut(a) {
            *value = 9;
        }
        assert_eq!(list.value(a), Some(&9));
        assert_eq!(list.key_at(a), Some(&"a"));
    }

    #[test]
    fn test_list_clear_then_reuse() {
        let mut list = RecencyList::with_capacity(10);

        list.push_front("a", 1);
        list.push_front("b", 2);
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.front(), None);

        list.push_front("c", 3);
        assert_eq!(list.front(), Some((&"c", &3)));
        assert_eq!(list.back(), Some((&"c", &3)));
        assert_eq!(list.len(), 1);
    }
}
