//! Page-state controller.
//!
//! Keeps the current page in step with the navigation history in both
//! directions: explicit navigation pushes a history entry, and back/forward
//! moves in the history re-derive the page from the new path.

use std::cell::Cell;
use std::rc::Rc;

use super::history::{History, ListenerId};
use super::page::Page;

pub struct Router<H: History> {
    history: H,
    current: Rc<Cell<Page>>,
    listener: ListenerId,
}

impl<H: History> Router<H> {
    /// Start routing from whatever path the history currently holds.
    ///
    /// Registers one pop-state listener; it is removed again when the router is dropped.
    pub fn new(mut history: H) -> Self {
        let path = history.current_path();
        let page = Page::from_path(path);
        if page.path() != path {
            tracing::info!(path, "Unrecognized path, showing home page");
        }

        let current = Rc::new(Cell::new(page));
        let sink = Rc::clone(&current);
        let listener = history.add_pop_listener(Box::new(move |path: &str| {
            let page = Page::from_path(path);
            tracing::debug!(path, ?page, "History moved");
            sink.set(page);
        }));

        Router {
            history,
            current,
            listener,
        }
    }

    /// Push the page's path onto the history and make it current
    pub fn navigate_to(&mut self, page: Page) {
        tracing::debug!(from = ?self.current.get(), to = ?page, "Navigating");
        self.history.push_state(page.path());
        self.current.set(page);
    }

    pub fn current_page(&self) -> Page {
        self.current.get()
    }

    /// Path shown in the address bar. May be a path outside the page table.
    pub fn current_path(&self) -> &str {
        self.history.current_path()
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Mutable access for the shell's back/forward controls
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }
}

impl<H: History> Drop for Router<H> {
    fn drop(&mut self) {
        self.history.remove_pop_listener(self.listener);
    }
}

impl<H: History> std::fmt::Debug for Router<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("current", &self.current.get())
            .field("path", &self.history.current_path())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::history::MemoryHistory;
    use rstest::rstest;

    #[rstest]
    #[case("/", Page::Home)]
    #[case("/about", Page::About)]
    #[case("/color", Page::ColorGallery)]
    #[case("/black-and-white", Page::BwGallery)]
    #[case("/nonexistent", Page::Home)]
    fn test_initial_page_from_path(#[case] path: &str, #[case] expected: Page) {
        let router = Router::new(MemoryHistory::new(path));
        assert_eq!(router.current_page(), expected);
    }

    #[test]
    fn test_unknown_path_is_not_rewritten() {
        let router = Router::new(MemoryHistory::new("/nonexistent"));
        assert_eq!(router.current_page(), Page::Home);
        assert_eq!(router.current_path(), "/nonexistent");
        assert_eq!(router.history().len(), 1);
    }

    #[test]
    fn test_navigate_updates_path_and_page() {
        for page in Page::ALL {
            let mut router = Router::new(MemoryHistory::new("/"));
            router.navigate_to(page);
            assert_eq!(router.current_path(), page.path());
            assert_eq!(router.current_page(), page);
        }
    }

    #[test]
    fn test_navigate_to_current_page_still_pushes() {
        let mut router = Router::new(MemoryHistory::new("/about"));
        router.navigate_to(Page::About);
        assert_eq!(router.history().len(), 2);
    }

    #[test]
    fn test_back_restores_previous_page() {
        let mut router = Router::new(MemoryHistory::new("/"));
        router.navigate_to(Page::About);
        router.navigate_to(Page::ColorGallery);

        assert!(router.history_mut().back());
        assert_eq!(router.current_page(), Page::About);
        assert_eq!(router.current_path(), "/about");

        assert!(router.history_mut().back());
        assert_eq!(router.current_page(), Page::Home);

        assert!(router.history_mut().forward());
        assert!(router.history_mut().forward());
        assert_eq!(router.current_page(), Page::ColorGallery);
    }

    #[test]
    fn test_back_to_unknown_path_falls_back_to_home() {
        let mut router = Router::new(MemoryHistory::new("/old-page"));
        router.navigate_to(Page::BwGallery);

        assert!(router.history_mut().back());
        assert_eq!(router.current_page(), Page::Home);
        assert_eq!(router.current_path(), "/old-page");
    }

    #[test]
    fn test_failed_back_keeps_page() {
        let mut router = Router::new(MemoryHistory::new("/about"));
        assert!(!router.history_mut().back());
        assert_eq!(router.current_page(), Page::About);
    }

    #[test]
    fn test_drop_removes_listener() {
        let mut history = MemoryHistory::new("/");
        {
            let mut router = Router::new(&mut history);
            router.navigate_to(Page::About);
            assert_eq!(router.history().listener_count(), 1);
        }
        assert_eq!(history.listener_count(), 0);
        assert_eq!(history.current_path(), "/about");
    }

    #[test]
    fn test_recreated_router_registers_single_listener() {
        let mut history = MemoryHistory::new("/");
        drop(Router::new(&mut history));
        let router = Router::new(&mut history);
        assert_eq!(router.history().listener_count(), 1);
    }
}
