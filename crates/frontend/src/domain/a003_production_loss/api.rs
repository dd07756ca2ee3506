use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_production::aggregate::Production;
use contracts::domain::a003_production_loss::{ProductionLoss, ProductionLossDto};
use contracts::shared::api_error::ApiErrorResponse;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::shared::api_utils::{api_item_url, api_url};

const PRODUCTS_PATH: &str = "/api/products";
const PRODUCTIONS_PATH: &str = "/api/productions";
const LOSSES_PATH: &str = "/api/lost";

/// Сообщение сервера из тела ошибки, иначе просто HTTP статус
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ApiErrorResponse>().await {
        Ok(body) if !body.error.is_empty() => body.error,
        _ => format!("HTTP {}", status),
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(error_message(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

async fn fetch_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, String> {
    let url = api_url(path);
    leptos::logging::log!("GET {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    parse_json(response).await
}

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    fetch_list(PRODUCTS_PATH).await
}

pub async fn fetch_productions() -> Result<Vec<Production>, String> {
    fetch_list(PRODUCTIONS_PATH).await
}

pub async fn fetch_losses() -> Result<Vec<ProductionLoss>, String> {
    fetch_list(LOSSES_PATH).await
}

pub async fn create_loss(dto: &ProductionLossDto) -> Result<ProductionLoss, String> {
    let response = Request::post(&api_url(LOSSES_PATH))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    parse_json(response).await
}

pub async fn update_loss(id: &str, dto: &ProductionLossDto) -> Result<ProductionLoss, String> {
    let response = Request::put(&api_item_url(LOSSES_PATH, id))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    parse_json(response).await
}

pub async fn delete_loss(id: &str) -> Result<(), String> {
    let response = Request::delete(&api_item_url(LOSSES_PATH, id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}
