//! Interactive confirmations and prompts, returned to callers as values.

use contracts::domain::a001_inventory_item::aggregate::{EditInput, InventoryItem};

pub const DELETE_CONFIRM_MESSAGE: &str = "¿Deseas eliminar este producto?";
pub const EDIT_NAME_PROMPT: &str = "Nuevo nombre:";
pub const EDIT_QUANTITY_PROMPT: &str = "Nueva cantidad:";
pub const EDIT_PRICE_PROMPT: &str = "Nuevo precio:";

/// Outcome of a user interaction
#[derive(Debug, Clone, PartialEq)]
pub enum Confirmation<T> {
    Confirmed(T),
    Cancelled,
}

impl<T> Confirmation<T> {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Confirmation::Confirmed(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Confirmation::Confirmed(value) => Some(value),
            Confirmation::Cancelled => None,
        }
    }
}

/// Blocking dialog primitives
pub trait Dialogs {
    fn confirm(&self, message: &str) -> bool;

    /// `None` when the user cancels
    fn prompt(&self, message: &str, default: &str) -> Option<String>;
}

/// `window.confirm` / `window.prompt`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        web_sys::window()?
            .prompt_with_message_and_default(message, default)
            .ok()
            .flatten()
    }
}

pub fn request_delete_confirmation(dialogs: &dyn Dialogs) -> Confirmation<()> {
    if dialogs.confirm(DELETE_CONFIRM_MESSAGE) {
        Confirmation::Confirmed(())
    } else {
        Confirmation::Cancelled
    }
}

/// Ask for replacement name, quantity and price, pre-filled with current values.
///
/// Cancelling the name prompt cancels the edit. A cancelled numeric prompt
/// comes back as empty text, which coerces to 0.
pub fn request_edit(dialogs: &dyn Dialogs, item: &InventoryItem) -> Confirmation<EditInput> {
    let Some(name) = dialogs.prompt(EDIT_NAME_PROMPT, &item.name) else {
        return Confirmation::Cancelled;
    };
    let quantity = dialogs
        .prompt(EDIT_QUANTITY_PROMPT, &item.quantity.to_string())
        .unwrap_or_default();
    let price = dialogs
        .prompt(EDIT_PRICE_PROMPT, &item.price.to_string())
        .unwrap_or_default();

    Confirmation::Confirmed(EditInput {
        name,
        quantity,
        price,
    })
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedDialogs;
    use super::*;
    use contracts::domain::a001_inventory_item::aggregate::{ItemForm, ItemId};

    fn item() -> InventoryItem {
        let form = ItemForm {
            name: "Tornillo".into(),
            quantity: "10".into(),
            price: "2.5".into(),
            category: String::new(),
        };
        InventoryItem::new(ItemId(1), &form, chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .unwrap()
    }

    #[test]
    fn test_delete_confirmation() {
        assert_eq!(
            request_delete_confirmation(&ScriptedDialogs::confirming(true)),
            Confirmation::Confirmed(())
        );
        let declined = ScriptedDialogs::confirming(false);
        assert_eq!(request_delete_confirmation(&declined), Confirmation::Cancelled);
        assert_eq!(declined.asked.borrow()[0].0, DELETE_CONFIRM_MESSAGE);
    }

    #[test]
    fn test_edit_prompts_are_prefilled() {
        let dialogs = ScriptedDialogs::prompting(&[Some("Clavo"), Some("3"), Some("1.25")]);
        let result = request_edit(&dialogs, &item());

        assert_eq!(
            result,
            Confirmation::Confirmed(EditInput {
                name: "Clavo".into(),
                quantity: "3".into(),
                price: "1.25".into(),
            })
        );
        let asked = dialogs.asked.borrow();
        assert_eq!(asked[0], (EDIT_NAME_PROMPT.to_string(), "Tornillo".to_string()));
        assert_eq!(asked[1], (EDIT_QUANTITY_PROMPT.to_string(), "10".to_string()));
        assert_eq!(asked[2], (EDIT_PRICE_PROMPT.to_string(), "2.5".to_string()));
    }

    #[test]
    fn test_cancelled_name_aborts_without_further_prompts() {
        let dialogs = ScriptedDialogs::prompting(&[None]);
        assert_eq!(request_edit(&dialogs, &item()), Confirmation::Cancelled);
        assert_eq!(dialogs.asked.borrow().len(), 1);
    }

    #[test]
    fn test_cancelled_quantity_edits_to_zero() {
        let dialogs = ScriptedDialogs::prompting(&[Some("Clavo"), None, Some("1")]);
        let input = request_edit(&dialogs, &item()).into_option().unwrap();
        assert_eq!(input.quantity, "");

        let mut edited = item();
        edited.apply_edit(&input).unwrap();
        assert_eq!(edited.quantity, 0.0);
        assert_eq!(edited.price, 1.0);
    }
}
