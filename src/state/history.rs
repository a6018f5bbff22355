//! Navigation history: the address bar and its back/forward stack.
//!
//! The router only talks to the [`History`] trait, so it can run against the
//! in-memory history used by the desktop shell or a test fixture.

/// Handle returned when registering a pop-state listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Callback invoked with the new current path after a back/forward move
pub type PopListener = Box<dyn FnMut(&str)>;

/// Session history in the style of a browser's `window.history`.
pub trait History {
    /// Path of the current entry
    fn current_path(&self) -> &str;

    /// Push a new entry and make it current.
    /// Entries after the current one are discarded. No listener is notified.
    fn push_state(&mut self, path: &str);

    /// Move `delta` entries through the stack.
    ///
    /// Returns `false` without notifying anyone when the target is out of range.
    /// On success every pop listener receives the new current path.
    fn go(&mut self, delta: isize) -> bool;

    fn can_go_back(&self) -> bool;

    fn can_go_forward(&self) -> bool;

    /// Register a listener for back/forward moves
    fn add_pop_listener(&mut self, listener: PopListener) -> ListenerId;

    /// Unregister a listener. Returns `false` if the id is unknown.
    fn remove_pop_listener(&mut self, id: ListenerId) -> bool;

    fn back(&mut self) -> bool {
        self.go(-1)
    }

    fn forward(&mut self) -> bool {
        self.go(1)
    }
}

impl<H: History + ?Sized> History for &mut H {
    fn current_path(&self) -> &str {
        (**self).current_path()
    }

    fn push_state(&mut self, path: &str) {
        (**self).push_state(path)
    }

    fn go(&mut self, delta: isize) -> bool {
        (**self).go(delta)
    }

    fn can_go_back(&self) -> bool {
        (**self).can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        (**self).can_go_forward()
    }

    fn add_pop_listener(&mut self, listener: PopListener) -> ListenerId {
        (**self).add_pop_listener(listener)
    }

    fn remove_pop_listener(&mut self, id: ListenerId) -> bool {
        (**self).remove_pop_listener(id)
    }
}

/// History kept entirely in memory
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
    listeners: Vec<(ListenerId, PopListener)>,
    next_listener: u64,
}

impl MemoryHistory {
    /// Create a history with a single entry, as if the window was opened at `initial_path`
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            entries: vec![initial_path.into()],
            index: 0,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Number of entries in the stack
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn current_path(&self) -> &str {
        &self.entries[self.index]
    }

    fn push_state(&mut self, path: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(path.to_string());
        self.index = self.entries.len() - 1;
    }

    fn go(&mut self, delta: isize) -> bool {
        if delta == 0 {
            return false;
        }

        let Some(target) = self.index.checked_add_signed(delta) else {
            return false;
        };
        if target >= self.entries.len() {
            return false;
        }

        self.index = target;
        let path = self.entries[self.index].clone();
        for (_, listener) in self.listeners.iter_mut() {
            listener(&path);
        }
        true
    }

    fn can_go_back(&self) -> bool {
        self.index > 0
    }

    fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    fn add_pop_listener(&mut self, listener: PopListener) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, listener));
        id
    }

    fn remove_pop_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }
}

impl std::fmt::Debug for MemoryHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryHistory")
            .field("entries", &self.entries)
            .field("index", &self.index)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_listener(history: &mut MemoryHistory) -> Rc<RefCell<Vec<String>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        history.add_pop_listener(Box::new(move |path: &str| {
            sink.borrow_mut().push(path.to_string())
        }));
        seen
    }

    #[test]
    fn test_push_makes_entry_current() {
        let mut history = MemoryHistory::new("/");
        history.push_state("/about");
        assert_eq!(history.current_path(), "/about");
        assert_eq!(history.len(), 2);
        assert!(history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_push_does_not_notify() {
        let mut history = MemoryHistory::new("/");
        let seen = recording_listener(&mut history);
        history.push_state("/color");
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_back_and_forward_notify_with_new_path() {
        let mut history = MemoryHistory::new("/");
        let seen = recording_listener(&mut history);
        history.push_state("/about");
        history.push_state("/color");

        assert!(history.back());
        assert!(history.forward());
        assert_eq!(*seen.borrow(), vec!["/about".to_string(), "/color".to_string()]);
    }

    #[test]
    fn test_out_of_range_moves_are_silent() {
        let mut history = MemoryHistory::new("/");
        let seen = recording_listener(&mut history);

        assert!(!history.back());
        assert!(!history.forward());
        assert!(!history.go(5));
        assert!(!history.go(0));
        assert_eq!(history.current_path(), "/");
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_push_after_back_drops_forward_entries() {
        let mut history = MemoryHistory::new("/");
        history.push_state("/about");
        history.push_state("/color");
        history.back();
        history.back();
        history.push_state("/black-and-white");

        assert_eq!(history.len(), 2);
        assert!(!history.can_go_forward());
        assert!(history.back());
        assert_eq!(history.current_path(), "/");
    }

    #[test]
    fn test_go_multiple_steps() {
        let mut history = MemoryHistory::new("/");
        history.push_state("/about");
        history.push_state("/color");
        assert!(history.go(-2));
        assert_eq!(history.current_path(), "/");
        assert!(history.go(2));
        assert_eq!(history.current_path(), "/color");
    }

    #[test]
    fn test_remove_listener() {
        let mut history = MemoryHistory::new("/");
        let id = history.add_pop_listener(Box::new(|_: &str| {}));
        assert_eq!(history.listener_count(), 1);
        assert!(history.remove_pop_listener(id));
        assert!(!history.remove_pop_listener(id));
        assert_eq!(history.listener_count(), 0);
    }
}
