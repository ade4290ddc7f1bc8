use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{ChartError, ChartResult};

/// Ordered id → listener map shared by series and renderer notifications.
///
/// Notification order is registration order. Removing a listener keeps the
/// relative order of the others.
pub(crate) struct ListenerRegistry<L: ?Sized> {
    entries: IndexMap<String, Box<L>>,
}

impl<L: ?Sized> Default for ListenerRegistry<L> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<L: ?Sized> fmt::Debug for ListenerRegistry<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}

impl<L: ?Sized> ListenerRegistry<L> {
    pub(crate) fn add(&mut self, id: &str, listener: Box<L>) -> ChartResult<()> {
        if id.is_empty() {
            return Err(ChartError::InvalidInput(
                "listener id must not be empty".to_owned(),
            ));
        }
        if self.entries.contains_key(id) {
            return Err(ChartError::InvalidInput(format!(
                "listener with id `{id}` is already registered"
            )));
        }
        self.entries.insert(id.to_owned(), listener);
        debug!(listener_id = id, count = self.entries.len(), "listener added");
        Ok(())
    }

    pub(crate) fn remove(&mut self, id: &str) -> bool {
        let removed = self.entries.shift_remove(id).is_some();
        if removed {
            debug!(listener_id = id, count = self.entries.len(), "listener removed");
        }
        removed
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub(crate) fn for_each_mut(&mut self, mut notify: impl FnMut(&mut L)) {
        for listener in self.entries.values_mut() {
            notify(listener.as_mut());
        }
    }
}
