use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use super::{FileDialog, KeyValueStore, PickCallback, PickedFile};
use crate::error::PageError;

// Counts writes per key so a repeated identical write is distinguishable from none.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: RefCell<HashMap<String, usize>>,
    reject_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn write_count(&self, key: &str) -> usize {
        self.writes.borrow().get(key).copied().unwrap_or(0)
    }

    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PageError> {
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        if self.reject_writes.get() {
            return Err(PageError::StorageWrite {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            });
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut().entry(key.to_string()).or_insert(0) += 1;
        Ok(())
    }
}

// Empty queue answers like a cancelled dialog.
#[derive(Default)]
pub struct ScriptedDialog {
    outcomes: RefCell<VecDeque<Option<PickedFile>>>,
    opened_with: RefCell<Vec<String>>,
}

impl ScriptedDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pick(&self, name: &str) {
        self.outcomes
            .borrow_mut()
            .push_back(Some(PickedFile::named(name)));
    }

    pub fn cancel(&self) {
        self.outcomes.borrow_mut().push_back(None);
    }

    pub fn opened_with(&self) -> Vec<String> {
        self.opened_with.borrow().clone()
    }
}

impl FileDialog for ScriptedDialog {
    fn open(&self, accept: &str, on_pick: PickCallback) -> Result<(), PageError> {
        self.opened_with.borrow_mut().push(accept.to_string());
        let outcome = self.outcomes.borrow_mut().pop_front().flatten();
        on_pick(outcome);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_overwrites_and_counts() {
        let store = MemoryStore::new();
        store.set("k", "a").unwrap();
        store.set("k", "b").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("b"));
        assert_eq!(store.write_count("k"), 2);
        assert_eq!(store.write_count("other"), 0);
    }

    #[test]
    fn rejected_write_keeps_old_value() {
        let store = MemoryStore::new().with_entry("k", "old");
        store.reject_writes(true);
        assert!(matches!(
            store.set("k", "new"),
            Err(PageError::StorageWrite { .. })
        ));
        assert_eq!(store.value("k").as_deref(), Some("old"));
        assert_eq!(store.write_count("k"), 0);
    }

    #[test]
    fn dialog_replays_outcomes_in_order() {
        let dialog = ScriptedDialog::new();
        dialog.pick("a.pdf");
        dialog.cancel();
        let seen = std::rc::Rc::new(RefCell::new(Vec::new()));
        for _ in 0..3 {
            let seen = seen.clone();
            dialog
                .open(".pdf", Box::new(move |p| seen.borrow_mut().push(p)))
                .unwrap();
        }
        assert_eq!(
            *seen.borrow(),
            vec![Some(PickedFile::named("a.pdf")), None, None]
        );
        assert_eq!(dialog.opened_with().len(), 3);
    }
}
