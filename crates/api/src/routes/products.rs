//! Product catalog route handlers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use vandari_core::{ProductId, ProductSort};

use crate::error::{AppError, Result};
use crate::extract::{JsonBody, Path, Query};
use crate::models::{NewProduct, Product, ProductFilter, ProductUpdate};
use crate::services::catalog;
use crate::state::AppState;

use super::MessageResponse;

/// Query parameters for product listings.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub categoria: Option<String>,
    pub destacado: Option<String>,
    pub orden: Option<String>,
}

impl TryFrom<ListQuery> for ProductFilter {
    type Error = AppError;

    fn try_from(query: ListQuery) -> Result<Self> {
        Ok(Self {
            category: query.categoria.filter(|c| !c.is_empty()),
            featured: parse_flag(query.destacado.as_deref())?,
            sort: ProductSort::from_key(query.orden.as_deref()),
        })
    }
}

/// Parse an optional boolean query flag. An empty value means "not set".
fn parse_flag(value: Option<&str>) -> Result<Option<bool>> {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(AppError::BadRequest(format!(
            "Valor de destacado no válido: {value}"
        ))),
    }
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub productos: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub producto: Product,
}

#[derive(Debug, Serialize)]
pub struct ProductMessageResponse {
    pub mensaje: &'static str,
    pub producto: Product,
}

/// `GET /api/productos`
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ProductListResponse>> {
    let filter = ProductFilter::try_from(query)?;
    let mut conn = state.acquire().await?;
    let productos = catalog::list(&mut conn, &filter).await?;

    Ok(Json(ProductListResponse { productos }))
}

/// `GET /api/productos/{id}`
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ProductResponse>> {
    let mut conn = state.acquire().await?;
    let producto = catalog::get(&mut conn, id).await?;

    Ok(Json(ProductResponse { producto }))
}

/// `POST /api/productos`
pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewProduct>,
) -> Result<(StatusCode, Json<ProductMessageResponse>)> {
    let mut conn = state.acquire().await?;
    let producto = catalog::create(&mut conn, &payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProductMessageResponse {
            mensaje: "Producto creado correctamente",
            producto,
        }),
    ))
}

/// `PUT /api/productos/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    JsonBody(changes): JsonBody<ProductUpdate>,
) -> Result<Json<ProductMessageResponse>> {
    let mut conn = state.acquire().await?;
    let producto = catalog::update(&mut conn, id, &changes).await?;

    Ok(Json(ProductMessageResponse {
        mensaje: "Producto actualizado correctamente",
        producto,
    }))
}

/// `DELETE /api/productos/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<MessageResponse>> {
    let mut conn = state.acquire().await?;
    catalog::delete(&mut conn, id).await?;

    Ok(Json(MessageResponse::new("Producto eliminado correctamente")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(categoria: Option<&str>, destacado: Option<&str>, orden: Option<&str>) -> ListQuery {
        ListQuery {
            categoria: categoria.map(String::from),
            destacado: destacado.map(String::from),
            orden: orden.map(String::from),
        }
    }

    #[test]
    fn test_empty_query_is_unfiltered() {
        let filter = ProductFilter::try_from(ListQuery::default()).expect("filter");
        assert_eq!(filter, ProductFilter::default());
    }

    #[test]
    fn test_empty_category_means_no_filter() {
        let filter = ProductFilter::try_from(query(Some(""), Some(""), None)).expect("filter");
        assert!(filter.category.is_none());
        assert!(filter.featured.is_none());
    }

    #[test]
    fn test_full_query() {
        let filter = ProductFilter::try_from(query(Some("ropa"), Some("true"), Some("precio-alto")))
            .expect("filter");
        assert_eq!(filter.category.as_deref(), Some("ropa"));
        assert_eq!(filter.featured, Some(true));
        assert_eq!(filter.sort, ProductSort::PriceDesc);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag(Some("1")).expect("flag"), Some(true));
        assert_eq!(parse_flag(Some("False")).expect("flag"), Some(false));
        assert_eq!(parse_flag(None).expect("flag"), None);
        assert!(matches!(parse_flag(Some("quizas")), Err(AppError::BadRequest(_))));
    }
}
