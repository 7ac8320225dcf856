//! Page route handlers.
//!
//! Pages are server-rendered shells. Product listings, the cart and the
//! chatbot are driven by the scripts under `/static/js`, which read the
//! catalog API URL from the `data-api-url` attribute on `<body>`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

use vandari_core::{INVENTORY, InventoryItem};

use crate::chat::prompt::{STORE_ADDRESS, STORE_PHONE};
use crate::state::AppState;

/// Product highlight shown on the home page before the API answers.
pub struct Highlight {
    pub name: &'static str,
    pub price: String,
    pub image: &'static str,
}

impl From<&InventoryItem> for Highlight {
    fn from(item: &InventoryItem) -> Self {
        Self {
            name: item.name,
            price: item.price().display(),
            image: item.image,
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/index.html")]
pub struct IndexTemplate {
    pub api_url: String,
    pub highlights: Vec<Highlight>,
    pub address: &'static str,
    pub phone: &'static str,
}

/// Shop page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/tienda.html")]
pub struct ShopTemplate {
    pub api_url: String,
}

/// Camera page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/camara.html")]
pub struct CameraTemplate {
    pub api_url: String,
}

/// GPS page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/gps.html")]
pub struct GpsTemplate {
    pub api_url: String,
    pub address: &'static str,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/login.html")]
pub struct LoginTemplate {
    pub api_url: String,
}

/// Registration page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/registro.html")]
pub struct RegisterTemplate {
    pub api_url: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/carrito.html")]
pub struct CartTemplate {
    pub api_url: String,
}

/// Chatbot page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/chatbot.html")]
pub struct ChatbotTemplate {
    pub api_url: String,
}

/// Not found page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub api_url: String,
}

fn api_url(state: &AppState) -> String {
    state.config().api_url().to_string()
}

/// `GET /` and `GET /index.html`
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate {
        api_url: api_url(&state),
        highlights: INVENTORY
            .iter()
            .filter(|item| item.featured)
            .map(Highlight::from)
            .collect(),
        address: STORE_ADDRESS,
        phone: STORE_PHONE,
    }
}

/// `GET /tienda.html`
pub async fn shop(State(state): State<AppState>) -> impl IntoResponse {
    ShopTemplate {
        api_url: api_url(&state),
    }
}

/// `GET /camara.html`
pub async fn camera(State(state): State<AppState>) -> impl IntoResponse {
    CameraTemplate {
        api_url: api_url(&state),
    }
}

/// `GET /gps.html`
pub async fn gps(State(state): State<AppState>) -> impl IntoResponse {
    GpsTemplate {
        api_url: api_url(&state),
        address: STORE_ADDRESS,
    }
}

/// `GET /login.html`
pub async fn login(State(state): State<AppState>) -> impl IntoResponse {
    LoginTemplate {
        api_url: api_url(&state),
    }
}

/// `GET /registro.html`
pub async fn register(State(state): State<AppState>) -> impl IntoResponse {
    RegisterTemplate {
        api_url: api_url(&state),
    }
}

/// `GET /carrito.html`
pub async fn cart(State(state): State<AppState>) -> impl IntoResponse {
    CartTemplate {
        api_url: api_url(&state),
    }
}

/// `GET /chatbot.html`
pub async fn chatbot(State(state): State<AppState>) -> impl IntoResponse {
    ChatbotTemplate {
        api_url: api_url(&state),
    }
}

/// Fallback for unknown paths.
pub async fn not_found(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            api_url: api_url(&state),
        },
    )
}
