//! In-memory inventory: the authoritative item list, the id counter and the
//! active panel. All mutations are synchronous.

use chrono::NaiveDate;
use contracts::domain::a001_inventory_item::aggregate::{
    EditInput, InventoryItem, ItemForm, ItemId, ValidationError,
};
use contracts::domain::common::AggregateId;

use crate::shared::dialogs::Confirmation;
use crate::shared::number_format::{format_money, format_quantity};

/// Which top-level panel is shown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewTab {
    #[default]
    Form,
    List,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InventoryState {
    items: Vec<InventoryItem>,
    next_id: ItemId,
    tab: ViewTab,
}

impl Default for InventoryState {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: ItemId(1),
            tab: ViewTab::default(),
        }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn tab(&self) -> ViewTab {
        self.tab
    }

    pub fn find(&self, id: ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn navigate(&mut self, tab: ViewTab) {
        self.tab = tab;
    }

    /// Validate and append a new item, then switch to the list.
    ///
    /// The counter only advances on success.
    pub fn create(&mut self, form: &ItemForm, today: NaiveDate) -> Result<ItemId, ValidationError> {
        let item = InventoryItem::new(self.next_id, form, today)?;
        let id = item.id;

        self.items.push(item);
        self.next_id = self.next_id.next();
        self.tab = ViewTab::List;

        log::debug!("Item {} created", id);
        Ok(id)
    }

    /// Remove the item whose id matches `raw_id` numerically.
    ///
    /// Returns whether an item was removed. Declined confirmations, unparsable
    /// ids and unknown ids leave the list unchanged.
    pub fn delete(&mut self, raw_id: &str, confirmation: Confirmation<()>) -> bool {
        if !confirmation.is_confirmed() {
            return false;
        }
        let Ok(id) = ItemId::from_string(raw_id) else {
            return false;
        };

        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            log::debug!("Item {} deleted", id);
        }
        removed
    }

    /// Replace name, quantity and price of the item with `id`.
    ///
    /// `Ok(false)` when cancelled or no item matches; validation errors leave
    /// the list unchanged.
    pub fn edit(
        &mut self,
        id: ItemId,
        confirmation: Confirmation<EditInput>,
    ) -> Result<bool, ValidationError> {
        let Some(input) = confirmation.into_option() else {
            return Ok(false);
        };
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return Ok(false);
        };

        item.apply_edit(&input)?;
        log::debug!("Item {} edited", id);
        Ok(true)
    }
}

/// Display strings for one list row
#[derive(Clone, Debug, PartialEq)]
pub struct ItemRow {
    pub id: ItemId,
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub category: String,
    pub date: String,
}

impl From<&InventoryItem> for ItemRow {
    fn from(item: &InventoryItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            quantity: format_quantity(item.quantity),
            price: format_money(item.price),
            category: item.category.clone(),
            date: item.date.clone(),
        }
    }
}

/// What a render pass paints
#[derive(Clone, Debug, PartialEq)]
pub enum RenderPlan {
    Form,
    List(Vec<ItemRow>),
}

impl RenderPlan {
    pub fn from_state(state: &InventoryState) -> Self {
        match state.tab() {
            ViewTab::Form => RenderPlan::Form,
            ViewTab::List => RenderPlan::List(state.items().iter().map(ItemRow::from).collect()),
        }
    }

    pub fn tab(&self) -> ViewTab {
        match self {
            RenderPlan::Form => ViewTab::Form,
            RenderPlan::List(_) => ViewTab::List,
        }
    }
}
