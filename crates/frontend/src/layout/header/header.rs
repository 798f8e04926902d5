use leptos::prelude::*;

use crate::domain::a001_inventory_item::state::ViewTab;
use crate::domain::a001_inventory_item::ui::InventoryController;
use crate::shared::theme::ThemeToggle;

fn nav_class(active: bool) -> &'static str {
    if active {
        "nav-link active"
    } else {
        "nav-link"
    }
}

#[component]
pub fn Header(controller: InventoryController) -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Inventario"</span>
                <nav class="nav nav-tabs">
                    <button
                        id="btnRegistrar"
                        class=move || nav_class(controller.tab() == ViewTab::Form)
                        on:click=move |_| controller.navigate(ViewTab::Form)
                    >
                        {"Registrar"}
                    </button>
                    <button
                        id="btnProductos"
                        class=move || nav_class(controller.tab() == ViewTab::List)
                        on:click=move |_| controller.navigate(ViewTab::List)
                    >
                        {"Productos"}
                    </button>
                </nav>
            </div>
            <div class="header__actions">
                <ThemeToggle />
            </div>
        </header>
    }
}
