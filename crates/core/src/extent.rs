//! Class extent: the ordered in-memory collection of every validly
//! constructed instance of one entity type.
//!
//! Extents are plain owned values held by whatever top-level context
//! constructs entities (see `cinema-app`'s registry), never hidden statics.
//! Single-threaded by design; callers wanting shared access wrap the extent
//! in their own lock.

/// Ordered collection of all live instances of `T`, in construction order.
#[derive(Debug, Clone, PartialEq)]
pub struct Extent<T> {
    items: Vec<T>,
}

impl<T> Extent<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Read-only ordered view of the extent.
    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Empty the extent. Saved files are unaffected.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Append a validated instance and return a handle to it.
    ///
    /// Entity constructors call this after every check has passed; nothing
    /// else should. Insertion order is construction order.
    pub fn push(&mut self, item: T) -> &mut T {
        let index = self.items.len();
        self.items.push(item);
        &mut self.items[index]
    }

    /// Replace the whole extent. Used by the load path.
    pub(crate) fn replace(&mut self, items: Vec<T>) {
        self.items = items;
    }
}

impl<T> Default for Extent<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Extent<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
