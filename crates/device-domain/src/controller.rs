//! Add-Device Page Controller
//!
//! Owns the item store and the dialog state machine:
//!
//! ```text
//! Closed --open_dialog(t)--> Open(t)
//! Open(t) --submit, name set--> Closed      (item added, success toast)
//! Open(t) --submit, name empty--> Open(t)   (error toast)
//! Open(t) --cancel--> Closed
//! any --request_delete(id), confirmed--> same state (item removed)
//! ```

use tracing::{debug, info, warn};

use crate::clock::{format_timestamp, Clock, SystemClock};
use crate::domain::{DeviceItem, DomainError, DomainResult, Draft, IdGenerator, ItemId, ItemType};
use crate::notify::{ConfirmationPrompt, Notification, NotificationSink};
use crate::store::ItemStore;

pub const NAME_REQUIRED: &str = "Name is required";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this item?";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open(ItemType),
}

impl DialogState {
    pub fn open_type(&self) -> Option<ItemType> {
        match self {
            DialogState::Closed => None,
            DialogState::Open(t) => Some(*t),
        }
    }

    pub fn is_open_for(&self, item_type: ItemType) -> bool {
        *self == DialogState::Open(item_type)
    }
}

/// Result of handing a draft to [`PageController::submit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(ItemId),
    /// Failed validation; the dialog stays open
    Rejected,
    /// Unexpected error, reported to the operator
    Failed,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Added(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// No item had that id; the operator was not asked
    NotFound,
    Declined,
}

pub struct PageController<N, P, C = SystemClock> {
    store: ItemStore,
    dialog: DialogState,
    ids: IdGenerator,
    notifier: N,
    prompt: P,
    clock: C,
}

impl<N, P> PageController<N, P, SystemClock>
where
    N: NotificationSink,
    P: ConfirmationPrompt,
{
    pub fn new(notifier: N, prompt: P) -> Self {
        Self::with_clock(notifier, prompt, SystemClock)
    }
}

impl<N, P, C> PageController<N, P, C>
where
    N: NotificationSink,
    P: ConfirmationPrompt,
    C: Clock,
{
    pub fn with_clock(notifier: N, prompt: P, clock: C) -> Self {
        Self {
            store: ItemStore::new(),
            dialog: DialogState::Closed,
            ids: IdGenerator::new(),
            notifier,
            prompt,
            clock,
        }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    /// Open the dialog for `item_type`, replacing any dialog already open
    pub fn open_dialog(&mut self, item_type: ItemType) {
        debug!("opening {} dialog (was {:?})", item_type, self.dialog);
        self.dialog = DialogState::Open(item_type);
    }

    /// Close the dialog without saving
    pub fn cancel(&mut self) {
        if let DialogState::Open(t) = self.dialog {
            debug!("{} dialog dismissed", t);
        }
        self.dialog = DialogState::Closed;
    }

    /// Validate `draft`, append the new item and close the dialog.
    /// Every outcome is reported through the notification sink.
    pub fn submit(&mut self, draft: &Draft) -> SubmitOutcome {
        match self.try_add(draft) {
            Ok(item) => {
                info!("added {} #{} ({})", item.item_type, item.id, item.name);
                let (id, item_type) = (item.id, item.item_type);
                self.store.add(item);
                self.dialog = DialogState::Closed;
                self.notifier
                    .notify(Notification::success(format!("{} added successfully", item_type)));
                SubmitOutcome::Added(id)
            }
            Err(DomainError::Validation(msg)) => {
                warn!("rejected submit in {:?}: {}", self.dialog, msg);
                self.notifier.notify(Notification::error(msg));
                SubmitOutcome::Rejected
            }
            Err(err) => {
                warn!("submit failed: {}", err);
                self.notifier.notify(Notification::error(err.message()));
                SubmitOutcome::Failed
            }
        }
    }

    fn try_add(&mut self, draft: &Draft) -> DomainResult<DeviceItem> {
        if !draft.has_name() {
            return Err(DomainError::Validation(NAME_REQUIRED.to_string()));
        }
        let item_type = self
            .dialog
            .open_type()
            .ok_or_else(|| DomainError::InvalidState("no add dialog is open".to_string()))?;

        let created_at = format_timestamp(self.clock.now());
        let item = DeviceItem::new(self.ids.next_id(), item_type, draft.name.clone(), created_at)
            .with_value(draft.value.clone())
            .with_description(draft.description.clone());
        Ok(item)
    }

    /// Ask for confirmation, then remove the item with `id`.
    /// Unknown ids are ignored without prompting.
    pub fn request_delete(&mut self, id: ItemId) -> DeleteOutcome {
        if self.store.get(id).is_none() {
            warn!("delete of #{} ignored: no such item", id);
            return DeleteOutcome::NotFound;
        }
        if !self.prompt.confirm(CONFIRM_DELETE) {
            debug!("delete of #{} declined", id);
            return DeleteOutcome::Declined;
        }
        if let Some(item) = self.store.remove(id) {
            info!("deleted {} #{} ({})", item.item_type, item.id, item.name);
        }
        self.notifier.notify(Notification::success("Item deleted successfully"));
        DeleteOutcome::Deleted
    }
}
