//! Process-wide dialog store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::dialog::Dialog;
use crate::domain::foundation::ChatId;
use crate::ports::DialogStore;

/// In-memory [`DialogStore`]. Pending dialogs are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryDialogStore {
    dialogs: Mutex<HashMap<ChatId, Dialog>>,
}

impl InMemoryDialogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of chats with a pending dialog.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<ChatId, Dialog>> {
        self.dialogs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DialogStore for InMemoryDialogStore {
    fn get(&self, chat: ChatId) -> Option<Dialog> {
        self.lock().get(&chat).copied()
    }

    fn set(&self, chat: ChatId, dialog: Dialog) {
        self.lock().insert(chat, dialog);
    }

    fn clear(&self, chat: ChatId) {
        self.lock().remove(&chat);
    }
}
