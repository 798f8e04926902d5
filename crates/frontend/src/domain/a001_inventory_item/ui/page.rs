use leptos::prelude::*;
use thaw::Spinner;

use super::controller::InventoryController;
use super::form::ItemFormView;
use super::list::ItemListView;
use crate::domain::a001_inventory_item::state::RenderPlan;
use crate::layout::header::Header;
use crate::shared::api_utils::AppConfig;

/// Inventory screen: navigation, inline errors and the active panel
#[component]
pub fn InventoryPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let controller = InventoryController::new(&config);

    // Initial load
    controller.render();

    view! {
        <div class="page inventory-page">
            <Header controller=controller />

            {move || controller.error.get().map(|e| view! {
                <div class="alert alert-danger" role="alert">{e}</div>
            })}

            <Show when=move || controller.is_loading()>
                <div class="loading">
                    <Spinner />
                </div>
            </Show>

            <div class="page__content">
                {move || match controller.visible_plan() {
                    Some(RenderPlan::Form) => view! { <ItemFormView controller=controller /> }.into_any(),
                    Some(RenderPlan::List(rows)) => {
                        view! { <ItemListView controller=controller rows=rows /> }.into_any()
                    }
                    None => ().into_any(),
                }}
            </div>
        </div>
    }
}
