//! REST client for the `/items` resource.
//!
//! Not called by the local-state controller; kept as the backend contract.

use contracts::domain::a001_inventory_item::aggregate::{InventoryItem, ItemUpdate};
use contracts::domain::a001_inventory_item::record::ItemRecord;
use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, RequestBuilder};
use serde_json::Value;
use web_sys::RequestCredentials;

use crate::shared::api_utils::{api_base, handle_response, HttpReply};

const ACTION_LIST: &str = "obtener los productos";
const ACTION_CREATE: &str = "crear el producto";
const ACTION_UPDATE: &str = "actualizar el producto";
const ACTION_DELETE: &str = "eliminar el producto";

pub fn items_url(base: &str) -> String {
    format!("{}/items", base)
}

pub fn item_url(base: &str, id: &str) -> String {
    format!("{}/items/{}", base, urlencoding::encode(id))
}

fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder.credentials(RequestCredentials::Include)
}

fn network_error(action: &str, e: gloo_net::Error) -> ApiError {
    ApiError::Network {
        action: action.to_string(),
        message: e.to_string(),
    }
}

fn serialize_error(action: &str, e: gloo_net::Error) -> ApiError {
    ApiError::Serialize {
        action: action.to_string(),
        message: e.to_string(),
    }
}

/// Fetch all items
pub async fn fetch_items() -> Result<Vec<ItemRecord>, ApiError> {
    request_items()
        .await
        .inspect_err(|e| log::error!("fetch_items: {}", e))
}

/// Create an item; returns the normalized record the server echoed back
pub async fn create_item(item: &InventoryItem) -> Result<Option<ItemRecord>, ApiError> {
    request_create(item)
        .await
        .inspect_err(|e| log::error!("create_item: {}", e))
}

/// Apply a partial update to item `id`
pub async fn update_item(id: &str, updates: &ItemUpdate) -> Result<Option<ItemRecord>, ApiError> {
    request_update(id, updates)
        .await
        .inspect_err(|e| log::error!("update_item: {}", e))
}

/// Delete item `id`; `None` when the server answers 204
pub async fn delete_item(id: &str) -> Result<Option<Value>, ApiError> {
    request_delete(id)
        .await
        .inspect_err(|e| log::error!("delete_item: {}", e))
}

async fn request_items() -> Result<Vec<ItemRecord>, ApiError> {
    let response = with_credentials(Request::get(&items_url(&api_base())))
        .send()
        .await
        .map_err(|e| network_error(ACTION_LIST, e))?;

    read_item_list(response).await
}

/// Normalized records of a list response; a body that is not an array is empty
async fn read_item_list<R: HttpReply>(response: R) -> Result<Vec<ItemRecord>, ApiError> {
    let data = handle_response(response, ACTION_LIST).await?;
    Ok(ItemRecord::list_from_value(data))
}

async fn request_create(item: &InventoryItem) -> Result<Option<ItemRecord>, ApiError> {
    let request = with_credentials(Request::post(&items_url(&api_base())))
        .json(item)
        .map_err(|e| serialize_error(ACTION_CREATE, e))?;

    let response = request
        .send()
        .await
        .map_err(|e| network_error(ACTION_CREATE, e))?;

    let data = handle_response(response, ACTION_CREATE).await?;
    Ok(data.and_then(ItemRecord::from_value))
}

async fn request_update(id: &str, updates: &ItemUpdate) -> Result<Option<ItemRecord>, ApiError> {
    let request = with_credentials(Request::put(&item_url(&api_base(), id)))
        .json(updates)
        .map_err(|e| serialize_error(ACTION_UPDATE, e))?;

    let response = request
        .send()
        .await
        .map_err(|e| network_error(ACTION_UPDATE, e))?;

    let data = handle_response(response, ACTION_UPDATE).await?;
    Ok(data.and_then(ItemRecord::from_value))
}

async fn request_delete(id: &str) -> Result<Option<Value>, ApiError> {
    let response = with_credentials(Request::delete(&item_url(&api_base(), id)))
        .send()
        .await
        .map_err(|e| network_error(ACTION_DELETE, e))?;

    handle_response(response, ACTION_DELETE).await
}
