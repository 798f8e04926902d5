//! Theme management module for the application.
//!
//! Light/dark preference persisted in localStorage and applied as a
//! `data-theme` attribute on the document element.

use leptos::prelude::*;
use web_sys::window;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Returns the theme name as a string (used for the attribute and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse a stored value. Anything other than `"light"` is dark.
    pub fn parse(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Toggle label: names the mode the switch leads away from.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Modo Oscuro",
            Theme::Dark => "Modo Claro",
        }
    }

    /// Switch position: checked means light.
    pub fn is_checked(&self) -> bool {
        *self == Theme::Light
    }
}

pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Durable key-value storage for the preference
pub trait ThemeStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Where the active theme is applied
pub trait ThemeSurface {
    fn set_attribute(&self, name: &str, value: &str);
}

/// Browser localStorage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl ThemeStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = get_local_storage() {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("Could not persist {}: {:?}", key, e);
            }
        }
    }
}

/// `<html>` element of the current document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSurface;

impl ThemeSurface for DocumentSurface {
    fn set_attribute(&self, name: &str, value: &str) {
        let root = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let _ = root.set_attribute(name, value);
        }
    }
}

/// Reads, applies and persists the theme preference.
pub struct ThemeController<S, D> {
    store: S,
    surface: D,
    current: Theme,
}

impl<S: ThemeStore, D: ThemeSurface> ThemeController<S, D> {
    /// Load the saved preference (dark when unset) and apply it.
    pub fn init(store: S, surface: D) -> Self {
        let current = store
            .get(THEME_STORAGE_KEY)
            .map(|s| Theme::parse(&s))
            .unwrap_or_default();
        surface.set_attribute(THEME_ATTRIBUTE, current.as_str());

        Self {
            store,
            surface,
            current,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip, apply and persist. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled())
    }

    pub fn set(&mut self, theme: Theme) -> Theme {
        self.current = theme;
        self.surface.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        self.store.set(THEME_STORAGE_KEY, theme.as_str());
        log::debug!("Theme set to {}", theme.as_str());
        theme
    }
}

type BrowserThemeController = ThemeController<LocalStorageStore, DocumentSurface>;

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
    controller: StoredValue<BrowserThemeController, LocalStorage>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        let next = self.controller.try_update_value(|c| c.toggle());
        if let Some(next) = next {
            self.theme.set(next);
        }
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let controller = ThemeController::init(LocalStorageStore, DocumentSurface);
    let theme = RwSignal::new(controller.current());

    provide_context(ThemeContext {
        theme,
        controller: StoredValue::new_local(controller),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> Option<ThemeContext> {
    use_context::<ThemeContext>()
}

/// Light/dark switch with its label.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let Some(ctx) = use_theme() else {
        log::error!("ThemeToggle rendered outside ThemeProvider");
        return ().into_any();
    };

    view! {
        <div class="form-check form-switch theme-toggle">
            <input
                class="form-check-input"
                type="checkbox"
                id="themeSwitch"
                prop:checked=move || ctx.theme.get().is_checked()
                on:change=move |_| ctx.toggle()
            />
            <label class="form-check-label" for="themeSwitch">
                {move || ctx.theme.get().label()}
            </label>
        </div>
    }
    .into_any()
}
