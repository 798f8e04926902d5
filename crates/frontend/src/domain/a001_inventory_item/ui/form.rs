use contracts::domain::a001_inventory_item::aggregate::{ItemForm, DEFAULT_CATEGORY};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Input};

use super::controller::InventoryController;

/// Registration form
#[component]
pub fn ItemFormView(controller: InventoryController) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());

    let submit = move || {
        let form = ItemForm {
            name: name.get_untracked(),
            quantity: quantity.get_untracked(),
            price: price.get_untracked(),
            category: category.get_untracked(),
        };
        if controller.create(form) {
            name.set(String::new());
            quantity.set(String::new());
            price.set(String::new());
            category.set(String::new());
        }
    };

    view! {
        <div class="item-form">
            <div class="form-group">
                <label>{"Nombre"}</label>
                <Input value=name placeholder="Nombre del producto" />
            </div>
            <div class="form-group">
                <label>{"Cantidad"}</label>
                <Input value=quantity placeholder="0" />
            </div>
            <div class="form-group">
                <label>{"Precio"}</label>
                <Input value=price placeholder="0.00" />
            </div>
            <div class="form-group">
                <label>{"Categoría"}</label>
                <Input value=category placeholder=DEFAULT_CATEGORY />
            </div>
            <div class="form-actions">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| submit()>
                    {"Registrar"}
                </Button>
            </div>
        </div>
    }
}
