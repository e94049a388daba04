use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use pager::{ListenerId, PanelContainer};

/// Panel titles plus the index a title bar is currently showing.
///
/// Once attached, the displayed index follows the pending panel as soon as a transition starts
/// and the committed panel when it ends. Title bars show the neighbors of the displayed panel;
/// there are no wrapped neighbors at either end.
#[derive(Clone, Debug, Default)]
pub struct TitleStrip {
    titles: Vec<String>,
    displayed: Arc<AtomicUsize>,
}

impl TitleStrip {
    pub fn new<S: Into<String>>(titles: impl IntoIterator<Item = S>) -> Self {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            displayed: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn title(&self, index: usize) -> Option<&str> {
        self.titles.get(index).map(String::as_str)
    }

    pub fn set_titles<S: Into<String>>(&mut self, titles: impl IntoIterator<Item = S>) {
        self.titles = titles.into_iter().map(Into::into).collect();
    }

    pub fn displayed(&self) -> usize {
        self.displayed.load(Ordering::Relaxed)
    }

    pub fn displayed_title(&self) -> Option<&str> {
        self.title(self.displayed())
    }

    /// Titles of the panels before and after `index`.
    pub fn neighbors(&self, index: usize) -> (Option<&str>, Option<&str>) {
        let prev = index.checked_sub(1).and_then(|i| self.title(i));
        let next = index.checked_add(1).and_then(|i| self.title(i));
        (prev, next)
    }

    /// Neighbors of the displayed panel.
    pub fn displayed_neighbors(&self) -> (Option<&str>, Option<&str>) {
        self.neighbors(self.displayed())
    }

    /// Follows `container` from now on, starting at its current panel.
    pub fn attach<K>(&self, container: &mut PanelContainer<K>) -> ListenerId {
        self.displayed
            .store(container.current_panel(), Ordering::Relaxed);
        let pending = Arc::clone(&self.displayed);
        let changed = Arc::clone(&self.displayed);
        container.add_listener(
            move |i| pending.store(i, Ordering::Relaxed),
            move |i| changed.store(i, Ordering::Relaxed),
        )
    }
}
