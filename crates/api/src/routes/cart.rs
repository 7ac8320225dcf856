//! Shopping cart route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use vandari_core::{CartLineId, UserId};

use crate::error::Result;
use crate::extract::{JsonBody, Path, Query};
use crate::models::{AddToCart, CartItem};
use crate::services::cart;
use crate::state::AppState;

use super::MessageResponse;

#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub carrito: Vec<CartItem>,
}

/// Query parameters for quantity updates.
#[derive(Debug, Deserialize)]
pub struct QuantityQuery {
    pub cantidad: i32,
}

/// `GET /api/carrito/{usuario_id}`
pub async fn show(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<CartResponse>> {
    let mut conn = state.acquire().await?;
    let carrito = cart::items(&mut conn, user_id).await?;

    Ok(Json(CartResponse { carrito }))
}

/// `POST /api/carrito`
pub async fn add(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AddToCart>,
) -> Result<Json<MessageResponse>> {
    let mut conn = state.acquire().await?;
    cart::add(&mut conn, &request).await?;

    Ok(Json(MessageResponse::new(
        "Producto agregado al carrito correctamente",
    )))
}

/// `PUT /api/carrito/{id}?cantidad=`
pub async fn update_quantity(
    State(state): State<AppState>,
    Path(id): Path<CartLineId>,
    Query(query): Query<QuantityQuery>,
) -> Result<Json<MessageResponse>> {
    let mut conn = state.acquire().await?;
    cart::set_quantity(&mut conn, id, query.cantidad).await?;

    Ok(Json(MessageResponse::new("Cantidad actualizada correctamente")))
}

/// `DELETE /api/carrito/{id}`
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<CartLineId>,
) -> Result<Json<MessageResponse>> {
    let mut conn = state.acquire().await?;
    cart::remove(&mut conn, id).await?;

    Ok(Json(MessageResponse::new(
        "Producto eliminado del carrito correctamente",
    )))
}

/// `DELETE /api/carrito/usuario/{usuario_id}`
pub async fn clear(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<MessageResponse>> {
    let mut conn = state.acquire().await?;
    cart::clear(&mut conn, user_id).await?;

    Ok(Json(MessageResponse::new("Carrito vaciado correctamente")))
}
