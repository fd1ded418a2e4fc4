//! Item Store
//!
//! In-memory ordered collection of food items plus the dialog draft.
//!
//! Dialog lifecycle: Closed -> (begin_add | begin_edit) -> Open -> (save | cancel) -> Closed.
//! The mode chosen when opening stays fixed until the dialog closes.

use crate::id::IdStrategy;
use crate::model::{DraftField, FoodItem};
use crate::price::coerce_price;

/// What the open dialog is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Add,
    Edit,
}

/// Result of a `save()` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Draft appended with this id
    Added(u32),
    /// Every entry with this id replaced in place
    Replaced(u32),
    /// Edit save found no entry with this id; collection unchanged
    NoMatch(u32),
    /// Dialog was not open
    NotOpen,
}

/// The catalog state container
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<FoodItem>,
    draft: FoodItem,
    mode: Option<DialogMode>,
    id_strategy: IdStrategy,
    /// Highest id ever present, for `IdStrategy::Monotonic`
    highest_seen: u32,
}

impl ItemStore {
    pub fn new(id_strategy: IdStrategy) -> Self {
        Self {
            id_strategy,
            ..Default::default()
        }
    }

    /// Build a store already seeded with `seed`
    pub fn with_seed(seed: Vec<FoodItem>, id_strategy: IdStrategy) -> Self {
        let mut store = Self::new(id_strategy);
        store.initialize(seed);
        store
    }

    // ========================
    // Intents
    // ========================

    /// Replace the collection with `seed`, keeping its order
    pub fn initialize(&mut self, seed: Vec<FoodItem>) {
        self.highest_seen = seed.iter().map(|item| item.id).max().unwrap_or(0);
        self.items = seed;
        self.close();
        log::info!("catalog initialized with {} items", self.items.len());
    }

    /// Open the dialog on a blank draft with a freshly synthesized id
    pub fn begin_add(&mut self) {
        let id = self.id_strategy.next_id(self.items.len(), self.highest_seen);
        self.draft = FoodItem::blank(id);
        self.mode = Some(DialogMode::Add);
        log::debug!("begin add, draft id {}", id);
        if self.get(id).is_some() {
            log::warn!("new draft id {} already belongs to an existing item", id);
        }
    }

    /// Open the dialog on a copy of `item`
    pub fn begin_edit(&mut self, item: &FoodItem) {
        self.draft = item.clone();
        self.mode = Some(DialogMode::Edit);
        log::debug!("begin edit, item {}", item.id);
    }

    /// Replace one draft field. Price text is coerced, never rejected.
    ///
    /// Ignored while the dialog is closed.
    pub fn update_draft_field(&mut self, field: DraftField, value: &str) {
        if self.mode.is_none() {
            log::debug!("ignoring {} update, dialog closed", field.as_str());
            return;
        }
        match field {
            DraftField::Name => self.draft.name = value.to_string(),
            DraftField::Description => self.draft.description = value.to_string(),
            DraftField::Price => self.draft.price = coerce_price(value),
            DraftField::Img => self.draft.img = value.to_string(),
        }
    }

    /// Commit the draft and close the dialog
    pub fn save(&mut self) -> SaveOutcome {
        let Some(mode) = self.mode else {
            return SaveOutcome::NotOpen;
        };
        let draft = std::mem::take(&mut self.draft);
        let id = draft.id;
        let outcome = match mode {
            DialogMode::Edit => {
                // Every entry carrying the id is replaced; ids can repeat under LengthPlusOne
                let mut matched = false;
                for slot in self.items.iter_mut().filter(|item| item.id == id) {
                    *slot = draft.clone();
                    matched = true;
                }
                if matched {
                    SaveOutcome::Replaced(id)
                } else {
                    SaveOutcome::NoMatch(id)
                }
            }
            DialogMode::Add => {
                self.items.push(draft);
                self.highest_seen = self.highest_seen.max(id);
                SaveOutcome::Added(id)
            }
        };
        self.close();

        match outcome {
            SaveOutcome::NoMatch(id) => log::warn!("edit save: no item with id {}", id),
            other => log::debug!("save: {:?}", other),
        }
        if self.has_duplicate_ids() {
            log::warn!("catalog now holds duplicate ids");
        }
        outcome
    }

    /// Close the dialog and drop the draft
    pub fn cancel(&mut self) {
        if self.mode.is_some() {
            log::debug!("cancel, draft {} discarded", self.draft.id);
        }
        self.close();
    }

    /// Remove the item with `id`. Returns whether anything was removed.
    pub fn delete_item(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        log::debug!("delete {}: {}", id, if removed { "removed" } else { "not found" });
        removed
    }

    fn close(&mut self) {
        self.mode = None;
        self.draft = FoodItem::default();
    }

    // ========================
    // Accessors
    // ========================

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn draft(&self) -> &FoodItem {
        &self.draft
    }

    pub fn mode(&self) -> Option<DialogMode> {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    pub fn is_edit_mode(&self) -> bool {
        self.mode == Some(DialogMode::Edit)
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.id_strategy
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&FoodItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// True if two entries share an id (possible with `LengthPlusOne`)
    pub fn has_duplicate_ids(&self) -> bool {
        let mut ids: Vec<u32> = self.items.iter().map(|item| item.id).collect();
        ids.sort_unstable();
        ids.windows(2).any(|pair| pair[0] == pair[1])
    }
}
