use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::common::AggregateId;

/// Category assigned when the form leaves it blank
pub const DEFAULT_CATEGORY: &str = "Otros";

/// Creation date format: day-month-year, zero padded
pub const DATE_FORMAT: &str = "%d-%m-%Y";

// ============================================================================
// ID Type
// ============================================================================

/// Session-local item identifier, handed out by a counter starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl ItemId {
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl AggregateId for ItemId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    /// Numeric coercion: `"3"`, `" 3 "` and `"3.0"` all resolve to the same id.
    fn from_string(s: &str) -> Result<Self, String> {
        let number = parse_number(s).ok_or_else(|| format!("Invalid item id: {:?}", s))?;
        if !number.is_finite() || number < 0.0 || number.fract() != 0.0 || number > u64::MAX as f64 {
            return Err(format!("Invalid item id: {:?}", s));
        }
        Ok(Self(number as u64))
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Validation
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is empty")]
    EmptyName,

    #[error("quantity is not a number")]
    InvalidQuantity,

    #[error("price is not a number")]
    InvalidPrice,
}

impl ValidationError {
    /// Inline message shown by the registration form
    pub fn create_message(&self) -> &'static str {
        "Por favor, completa todos los campos correctamente."
    }

    /// Inline message shown after a rejected edit
    pub fn edit_message(&self) -> &'static str {
        "Cantidad o precio inválido"
    }
}

/// Coerce user-typed numeric text the way a browser form does.
///
/// Blank input is 0; `Infinity` is accepted; anything that does not parse,
/// or parses to NaN, is `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Name, quantity and price after trimming and numeric coercion
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedFields {
    pub name: String,
    pub quantity: f64,
    pub price: f64,
}

impl ValidatedFields {
    pub fn parse(name: &str, quantity: &str, price: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let quantity = parse_number(quantity).ok_or(ValidationError::InvalidQuantity)?;
        let price = parse_number(price).ok_or(ValidationError::InvalidPrice)?;

        Ok(Self {
            name: name.to_string(),
            quantity,
            price,
        })
    }
}

// ============================================================================
// Input payloads
// ============================================================================

/// Registration form contents, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemForm {
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub category: String,
}

/// Replacement values collected by the edit dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditInput {
    pub name: String,
    pub quantity: String,
    pub price: String,
}

/// Partial update body for `PUT /items/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "qty", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ItemUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.quantity.is_none()
            && self.price.is_none()
            && self.category.is_none()
    }
}

impl From<&InventoryItem> for ItemUpdate {
    fn from(item: &InventoryItem) -> Self {
        Self {
            name: Some(item.name.clone()),
            quantity: Some(item.quantity),
            price: Some(item.price),
            category: Some(item.category.clone()),
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// One inventory entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(rename = "_id")]
    pub id: ItemId,

    pub name: String,

    #[serde(rename = "qty")]
    pub quantity: f64,

    pub price: f64,

    pub category: String,

    /// Creation date, `DD-MM-YYYY`. Never recomputed.
    pub date: String,
}

impl InventoryItem {
    /// Validate the form and build a new item stamped with `today`
    pub fn new(id: ItemId, form: &ItemForm, today: NaiveDate) -> Result<Self, ValidationError> {
        let fields = ValidatedFields::parse(&form.name, &form.quantity, &form.price)?;

        Ok(Self {
            id,
            name: fields.name,
            quantity: fields.quantity,
            price: fields.price,
            category: normalize_category(&form.category),
            date: format_item_date(today),
        })
    }

    /// Replace name, quantity and price. Identifier, category and date are kept.
    pub fn apply_edit(&mut self, input: &EditInput) -> Result<(), ValidationError> {
        let fields = ValidatedFields::parse(&input.name, &input.quantity, &input.price)?;
        self.name = fields.name;
        self.quantity = fields.quantity;
        self.price = fields.price;
        Ok(())
    }
}

pub fn normalize_category(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn format_item_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, quantity: &str, price: &str, category: &str) -> ItemForm {
        ItemForm {
            name: name.into(),
            quantity: quantity.into(),
            price: price.into(),
            category: category.into(),
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn test_new_item_trims_and_coerces() {
        let item = InventoryItem::new(ItemId(1), &form("  Tornillo ", "12", "0.5", "Ferretería"), day())
            .unwrap();
        assert_eq!(item.id, ItemId(1));
        assert_eq!(item.name, "Tornillo");
        assert_eq!(item.quantity, 12.0);
        assert_eq!(item.price, 0.5);
        assert_eq!(item.category, "Ferretería");
        assert_eq!(item.date, "05-03-2024");
    }

    #[test]
    fn test_blank_category_defaults() {
        let item = InventoryItem::new(ItemId(1), &form("Clavo", "1", "1", "   "), day()).unwrap();
        assert_eq!(item.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(
            InventoryItem::new(ItemId(1), &form("   ", "1", "1", ""), day()),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            InventoryItem::new(ItemId(1), &form("a", "abc", "1", ""), day()),
            Err(ValidationError::InvalidQuantity)
        );
        assert_eq!(
            InventoryItem::new(ItemId(1), &form("a", "1", "1,5", ""), day()),
            Err(ValidationError::InvalidPrice)
        );
        assert_eq!(
            InventoryItem::new(ItemId(1), &form("a", "NaN", "1", ""), day()),
            Err(ValidationError::InvalidQuantity)
        );
    }

    #[test]
    fn test_numbers_coerce_like_form_input() {
        let blank = InventoryItem::new(ItemId(1), &form("a", "", "  ", ""), day()).unwrap();
        assert_eq!(blank.quantity, 0.0);
        assert_eq!(blank.price, 0.0);

        let infinite = InventoryItem::new(ItemId(1), &form("a", "Infinity", "-Infinity", ""), day()).unwrap();
        assert_eq!(infinite.quantity, f64::INFINITY);
        assert_eq!(infinite.price, f64::NEG_INFINITY);

        assert_eq!(parse_number(" 1e3 "), Some(1000.0));
        assert_eq!(parse_number("doce"), None);
    }

    #[test]
    fn test_blank_edit_quantity_is_zero() {
        let mut item = InventoryItem::new(ItemId(2), &form("Clavo", "5", "2", ""), day()).unwrap();
        item.apply_edit(&EditInput {
            name: "Clavo".into(),
            quantity: "".into(),
            price: "2".into(),
        })
        .unwrap();
        assert_eq!(item.quantity, 0.0);
    }

    #[test]
    fn test_apply_edit_keeps_identity_fields() {
        let mut item = InventoryItem::new(ItemId(4), &form("Clavo", "1", "2", "Obra"), day()).unwrap();
        item.apply_edit(&EditInput {
            name: " Clavo largo ".into(),
            quantity: "30".into(),
            price: "2.25".into(),
        })
        .unwrap();

        assert_eq!(item.id, ItemId(4));
        assert_eq!(item.name, "Clavo largo");
        assert_eq!(item.quantity, 30.0);
        assert_eq!(item.price, 2.25);
        assert_eq!(item.category, "Obra");
        assert_eq!(item.date, "05-03-2024");
    }

    #[test]
    fn test_rejected_edit_leaves_item_untouched() {
        let mut item = InventoryItem::new(ItemId(4), &form("Clavo", "1", "2", ""), day()).unwrap();
        let before = item.clone();
        let result = item.apply_edit(&EditInput {
            name: "Otro".into(),
            quantity: "1".into(),
            price: "caro".into(),
        });
        assert_eq!(result, Err(ValidationError::InvalidPrice));
        assert_eq!(item, before);
    }

    #[test]
    fn test_item_id_coercion() {
        assert_eq!(ItemId::from_string("3"), Ok(ItemId(3)));
        assert_eq!(ItemId::from_string(" 3 "), Ok(ItemId(3)));
        assert_eq!(ItemId::from_string("3.0"), Ok(ItemId(3)));
        assert!(ItemId::from_string("3.5").is_err());
        assert!(ItemId::from_string("-1").is_err());
        assert!(ItemId::from_string("abc").is_err());
        assert!(ItemId::from_string("Infinity").is_err());
        assert_eq!(ItemId(9).as_string(), "9");
    }

    #[test]
    fn test_wire_field_names() {
        let item = InventoryItem::new(ItemId(2), &form("Clavo", "3", "1.5", ""), day()).unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["_id"], 2);
        assert_eq!(json["qty"], 3.0);
        assert_eq!(json["date"], "05-03-2024");

        let update = ItemUpdate {
            price: Some(9.0),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"price":9.0}"#);
        assert!(ItemUpdate::default().is_empty());
        assert!(!ItemUpdate::from(&item).is_empty());
    }
}
