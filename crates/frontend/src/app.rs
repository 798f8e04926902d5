use crate::domain::a001_inventory_item::ui::InventoryPage;
use crate::shared::api_utils::AppConfig;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::info!("Inventory client using API base {}", config.api_base);
    provide_context(config);

    view! {
        <ConfigProvider>
            <ThemeProvider>
                <InventoryPage />
            </ThemeProvider>
        </ConfigProvider>
    }
}
