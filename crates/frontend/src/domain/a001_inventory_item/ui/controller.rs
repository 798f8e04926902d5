use contracts::domain::a001_inventory_item::aggregate::{ItemForm, ItemId};
use leptos::prelude::*;

use crate::domain::a001_inventory_item::state::{InventoryState, RenderPlan, ViewTab};
use crate::shared::api_utils::AppConfig;
use crate::shared::date_utils::today;
use crate::shared::dialogs::{request_delete_confirmation, request_edit, Dialogs};

/// Owns the inventory and drives render passes after every mutation
#[derive(Clone, Copy)]
pub struct InventoryController {
    state: RwSignal<InventoryState>,
    /// Last painted snapshot; `None` until the first render completes
    pub painted: RwSignal<Option<RenderPlan>>,
    pending_renders: RwSignal<u32>,
    pub error: RwSignal<Option<String>>,
    render_delay_ms: u32,
}

impl InventoryController {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: RwSignal::new(InventoryState::new()),
            painted: RwSignal::new(None),
            pending_renders: RwSignal::new(0),
            error: RwSignal::new(None),
            render_delay_ms: config.render_delay_ms,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending_renders.get() > 0
    }

    /// Panel to show right now; nothing while a render is pending, so the
    /// spinner never shares the content area with a stale panel.
    pub fn visible_plan(&self) -> Option<RenderPlan> {
        if self.is_loading() {
            None
        } else {
            self.painted.get()
        }
    }

    /// Active tab (reactive)
    pub fn tab(&self) -> ViewTab {
        self.state.with(|s| s.tab())
    }

    pub fn snapshot(&self) -> InventoryState {
        self.state.get_untracked()
    }

    /// Register a new item. Returns `true` when the form was accepted.
    pub fn create(&self, form: ItemForm) -> bool {
        let date = today();
        let result = self.state.try_update(|s| s.create(&form, date));

        match result {
            Some(Ok(_)) => {
                self.render();
                true
            }
            Some(Err(e)) => {
                log::debug!("Create rejected: {}", e);
                self.error.set(Some(e.create_message().to_string()));
                false
            }
            None => false,
        }
    }

    /// Ask for confirmation, then remove the item with `raw_id`
    pub fn delete(&self, raw_id: &str, dialogs: &dyn Dialogs) {
        let confirmation = request_delete_confirmation(dialogs);
        if !confirmation.is_confirmed() {
            return;
        }

        self.state.update(|s| {
            s.delete(raw_id, confirmation);
        });
        self.render();
    }

    /// Prompt for new name/quantity/price and apply them to `id`
    pub fn edit(&self, id: ItemId, dialogs: &dyn Dialogs) {
        let Some(item) = self.state.with_untracked(|s| s.find(id).cloned()) else {
            return;
        };
        let confirmation = request_edit(dialogs, &item);
        if !confirmation.is_confirmed() {
            return;
        }

        match self.state.try_update(|s| s.edit(id, confirmation)) {
            Some(Ok(_)) => self.render(),
            Some(Err(e)) => {
                log::debug!("Edit of {} rejected: {}", id, e);
                self.error.set(Some(e.edit_message().to_string()));
            }
            None => {}
        }
    }

    pub fn navigate(&self, tab: ViewTab) {
        self.state.update(|s| s.navigate(tab));
        self.render();
    }

    /// Full render pass: loading indicator, fixed delay, then paint.
    pub fn render(&self) {
        let this = *self;
        this.pending_renders.update(|n| *n += 1);

        if this.render_delay_ms == 0 {
            this.paint();
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(this.render_delay_ms).await;
            this.paint();
        });
    }

    fn paint(&self) {
        let plan = self.state.with_untracked(RenderPlan::from_state);
        log::debug!("Painting {:?} panel", plan.tab());

        self.error.set(None);
        self.painted.set(Some(plan));
        self.pending_renders.update(|n| *n = n.saturating_sub(1));
    }
}
