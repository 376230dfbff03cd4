// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use pahana_shop::{
    OrderCommand, OrderDraft, TransitionResult, apply, generate_invoice_id, generate_order_id,
};
use pahana_shop_api::{
    ApiError, BillingCommandRequest, CompletedOrderInfo, DraftInfo, ItemInfo, LoginRequest,
    LoginResponse, ProfileUpdateRequest, RegisterUserRequest, SaveCustomerRequest, SaveItemRequest,
    StartSessionResponse, UpdateCustomerRequest, UpdateItemRequest, WishlistToggleRequest,
    completed_order_info, dashboard_stats, delete_customer, delete_item, draft_info, item_info,
    list_customers, list_items, login, register_operator, resolve_billing_command, save_customer,
    save_item, translate_core_error, update_customer, update_item,
};
use pahana_shop_domain::{CompletedOrder, StorefrontPage};
use pahana_shop_persistence::Persistence;
use pahana_shop_receipt::{render_printable, render_text};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::info;

mod session;

use session::SessionRegistry;

/// Pahana Shop Server - HTTP server for the Pahana Bookshop
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses an
    /// in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 8080)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The store holds the persistent catalog/directory/operator tables; the
/// session registry holds all volatile order state.
#[derive(Clone)]
struct AppState {
    /// The storage layer.
    store: Arc<Mutex<Persistence>>,
    /// The in-memory billing/cart sessions and the completed-order
    /// ledger.
    sessions: Arc<Mutex<SessionRegistry>>,
}

impl AppState {
    fn new(store: Persistence) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            sessions: Arc::new(Mutex::new(SessionRegistry::new())),
        }
    }
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// API response for write operations without a body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WriteResponse {
    /// Success indicator.
    success: bool,
    /// Optional message.
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Request to navigate a storefront session to a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct NavigateRequest {
    /// The page name ("home", "cart", "wishlist", "profile", "orders").
    page: String,
}

/// Response carrying the storefront session's current page.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PageResponse {
    /// The current page name.
    page: String,
}

/// Query parameters for receipt endpoints.
#[derive(Debug, Deserialize)]
struct ReceiptQuery {
    /// The output format: "text" (default) or "html".
    format: Option<String>,
}

/// Query parameters for list endpoints.
#[derive(Debug, Deserialize)]
struct SearchQuery {
    /// Case-insensitive substring filter.
    search: Option<String>,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl HttpError {
    fn unknown_session(token: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: format!("Unknown session: {token}"),
        }
    }

    fn internal(message: String) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } | ApiError::PasswordPolicyViolation { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

// ============================================================================
// Customer directory
// ============================================================================

/// Handler for GET `/api/v1/customer/get-all-customers`.
async fn handle_get_all_customers(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<pahana_shop_api::CustomerInfo>>, HttpError> {
    info!("Handling get_all_customers request");

    let store = state.store.lock().await;
    let customers = list_customers(&store, query.search.as_deref())?;
    drop(store);

    Ok(Json(customers))
}

/// Handler for POST `/api/v1/customer/save`.
async fn handle_save_customer(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<SaveCustomerRequest>,
) -> Result<Json<pahana_shop_api::CustomerInfo>, HttpError> {
    info!(name = %req.customer_name, "Handling save_customer request");

    let mut store = state.store.lock().await;
    let saved = save_customer(&mut store, req)?;
    drop(store);

    info!(
        customer_id = saved.customer_id,
        account = %saved.account_number,
        "Saved customer"
    );
    Ok(Json(saved))
}

/// Handler for PUT `/api/v1/customer/update`.
async fn handle_update_customer(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<UpdateCustomerRequest>,
) -> Result<Json<pahana_shop_api::CustomerInfo>, HttpError> {
    info!(customer_id = req.customer_id, "Handling update_customer request");

    let mut store = state.store.lock().await;
    let updated = update_customer(&mut store, req)?;
    drop(store);

    Ok(Json(updated))
}

/// Handler for DELETE `/api/v1/customer/delete-customer/{id}`.
async fn handle_delete_customer(
    AxumState(state): AxumState<AppState>,
    Path(customer_id): Path<i64>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(customer_id = customer_id, "Handling delete_customer request");

    let mut store = state.store.lock().await;
    delete_customer(&mut store, customer_id)?;
    drop(store);

    Ok(Json(WriteResponse {
        success: true,
        message: Some(format!("Deleted customer {customer_id}")),
    }))
}

// ============================================================================
// Item catalog
// ============================================================================

/// Handler for GET `/api/v1/item/get-all-items`.
async fn handle_get_all_items(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<ItemInfo>>, HttpError> {
    info!("Handling get_all_items request");

    let store = state.store.lock().await;
    let items = list_items(&store, query.search.as_deref())?;
    drop(store);

    Ok(Json(items))
}

/// Handler for POST `/api/v1/item/save`.
async fn handle_save_item(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<SaveItemRequest>,
) -> Result<Json<ItemInfo>, HttpError> {
    info!(item_code = %req.item_code, "Handling save_item request");

    let mut store = state.store.lock().await;
    let saved = save_item(&mut store, req)?;
    drop(store);

    info!(item_id = saved.item_id, code = %saved.item_code, "Saved item");
    Ok(Json(saved))
}

/// Handler for PUT `/api/v1/item/update`.
async fn handle_update_item(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Json<ItemInfo>, HttpError> {
    info!(item_id = req.item_id, "Handling update_item request");

    let mut store = state.store.lock().await;
    let updated = update_item(&mut store, req)?;
    drop(store);

    Ok(Json(updated))
}

/// Handler for DELETE `/api/v1/item/delete-item/{id}`.
async fn handle_delete_item(
    AxumState(state): AxumState<AppState>,
    Path(item_id): Path<i64>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(item_id = item_id, "Handling delete_item request");

    let mut store = state.store.lock().await;
    delete_item(&mut store, item_id)?;
    drop(store);

    Ok(Json(WriteResponse {
        success: true,
        message: Some(format!("Deleted item {item_id}")),
    }))
}

// ============================================================================
// Operators
// ============================================================================

/// Handler for POST `/api/v1/user/regiter`.
///
/// The route path and the literal `saved` response body are the API
/// contract the registration screen expects.
async fn handle_register(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<RegisterUserRequest>,
) -> Result<String, HttpError> {
    info!(email = %req.user_email, "Handling register request");

    let mut store = state.store.lock().await;
    let body: &'static str = register_operator(&mut store, req)?;
    drop(store);

    Ok(body.to_string())
}

/// Handler for POST `/api/v1/user/login`.
async fn handle_login(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(email = %req.email, "Handling login request");

    let store = state.store.lock().await;
    let response = login(&store, &req)?;
    drop(store);

    Ok(Json(response))
}

// ============================================================================
// Dashboard
// ============================================================================

/// Handler for GET `/api/v1/dashboard/stats`.
async fn handle_dashboard_stats(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<pahana_shop_api::DashboardStatsResponse>, HttpError> {
    info!("Handling dashboard_stats request");

    let sessions = state.sessions.lock().await;
    let orders: usize = sessions.ledger().len();
    let revenue = sessions.ledger().revenue();
    drop(sessions);

    let store = state.store.lock().await;
    let stats = dashboard_stats(&store, orders, revenue)?;
    drop(store);

    Ok(Json(stats))
}

// ============================================================================
// Admin billing wizard
// ============================================================================

/// Handler for POST `/api/v1/billing/start`.
async fn handle_billing_start(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<StartSessionResponse>, HttpError> {
    let mut sessions = state.sessions.lock().await;
    let session_id: String = sessions.start_billing();
    drop(sessions);

    info!(session = %session_id, "Started billing session");
    Ok(Json(StartSessionResponse { session_id }))
}

/// Handler for GET `/api/v1/billing/{session}`.
async fn handle_billing_get(
    AxumState(state): AxumState<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<DraftInfo>, HttpError> {
    let sessions = state.sessions.lock().await;
    let draft: &OrderDraft = sessions
        .billing(&session_id)
        .ok_or_else(|| HttpError::unknown_session(&session_id))?;
    let info: DraftInfo = draft_info(draft);
    drop(sessions);

    Ok(Json(info))
}

/// Handler for POST `/api/v1/billing/{session}/command`.
///
/// Resolves the wire command against the store, applies it to the
/// session's draft, and returns the new draft with recomputed totals. A
/// refused command changes nothing.
async fn handle_billing_command(
    AxumState(state): AxumState<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<BillingCommandRequest>,
) -> Result<Json<DraftInfo>, HttpError> {
    info!(session = %session_id, command = ?req, "Handling billing command");

    let store = state.store.lock().await;
    let command: OrderCommand = resolve_billing_command(&store, req)?;
    drop(store);

    let mut sessions = state.sessions.lock().await;
    let draft: &mut OrderDraft = sessions
        .billing_mut(&session_id)
        .ok_or_else(|| HttpError::unknown_session(&session_id))?;
    let result: TransitionResult =
        apply(draft, command).map_err(|e| HttpError::from(translate_core_error(e)))?;
    *draft = result.new_draft;
    let info: DraftInfo = draft_info(draft);
    drop(sessions);

    Ok(Json(info))
}

/// Handler for POST `/api/v1/billing/{session}/complete`.
///
/// Snapshots the bill, records it on the ledger, and resets the draft.
async fn handle_billing_complete(
    AxumState(state): AxumState<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<CompletedOrderInfo>, HttpError> {
    info!(session = %session_id, "Handling billing complete");

    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let mut sessions = state.sessions.lock().await;
    let draft: &mut OrderDraft = sessions
        .billing_mut(&session_id)
        .ok_or_else(|| HttpError::unknown_session(&session_id))?;
    let result: TransitionResult = apply(
        draft,
        OrderCommand::Complete {
            order_id: generate_invoice_id(now),
            completed_at: now,
            contact: None,
        },
    )
    .map_err(|e| HttpError::from(translate_core_error(e)))?;
    *draft = result.new_draft;
    let Some(completed) = result.completed else {
        return Err(HttpError::internal(String::from(
            "Complete produced no snapshot",
        )));
    };
    sessions.record_completed(completed.clone());
    drop(sessions);

    info!(order_id = %completed.order_id, "Generated bill");
    Ok(Json(completed_order_info(&completed)))
}

/// Handler for GET `/api/v1/billing/{session}/preview`.
///
/// Renders the in-progress bill without completing it.
async fn handle_billing_preview(
    AxumState(state): AxumState<AppState>,
    Path(session_id): Path<String>,
    Query(query): Query<ReceiptQuery>,
) -> Result<Response, HttpError> {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let sessions = state.sessions.lock().await;
    let draft: &OrderDraft = sessions
        .billing(&session_id)
        .ok_or_else(|| HttpError::unknown_session(&session_id))?;
    let snapshot: CompletedOrder = preview_snapshot(draft, now)?;
    drop(sessions);

    Ok(render_receipt(&snapshot, query.format.as_deref()))
}

/// Builds a pre-completion snapshot of a billing draft for preview
/// rendering.
fn preview_snapshot(
    draft: &OrderDraft,
    at: OffsetDateTime,
) -> Result<CompletedOrder, HttpError> {
    let Some(customer) = &draft.customer else {
        return Err(HttpError {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: String::from("A customer must be selected before previewing the bill"),
        });
    };
    Ok(CompletedOrder {
        order_id: generate_invoice_id(at),
        completed_at: at,
        customer: customer.contact_snapshot(),
        line_items: draft.line_items.clone(),
        totals: draft.totals(),
        notes: draft.notes.clone(),
    })
}

/// Renders a receipt in the requested format.
fn render_receipt(order: &CompletedOrder, format: Option<&str>) -> Response {
    if format == Some("html") {
        Html(render_printable(order)).into_response()
    } else {
        render_text(order).into_response()
    }
}

// ============================================================================
// Storefront
// ============================================================================

/// Handler for GET `/api/v1/shop/books`.
///
/// The storefront lists the catalog entries that have an author (the
/// books); billable service items are admin-only.
async fn handle_shop_books(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<Vec<ItemInfo>>, HttpError> {
    let store = state.store.lock().await;
    let books: Vec<ItemInfo> = store
        .list_items()
        .map_err(|e| HttpError::from(pahana_shop_api::translate_persistence_error(e)))?
        .iter()
        .filter(|book| !book.author.is_empty())
        .map(item_info)
        .collect();
    drop(store);

    Ok(Json(books))
}

/// Handler for POST `/api/v1/shop/cart/start`.
async fn handle_cart_start(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<StartSessionResponse>, HttpError> {
    let mut sessions = state.sessions.lock().await;
    let session_id: String = sessions.start_shop();
    drop(sessions);

    info!(session = %session_id, "Started storefront session");
    Ok(Json(StartSessionResponse { session_id }))
}

/// Handler for GET `/api/v1/shop/cart/{session}`.
async fn handle_cart_get(
    AxumState(state): AxumState<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<DraftInfo>, HttpError> {
    let sessions = state.sessions.lock().await;
    let shop = sessions
        .shop(&session_id)
        .ok_or_else(|| HttpError::unknown_session(&session_id))?;
    let info: DraftInfo = draft_info(&shop.cart);
    drop(sessions);

    Ok(Json(info))
}

/// Handler for POST `/api/v1/shop/cart/{session}/command`.
async fn handle_cart_command(
    AxumState(state): AxumState<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<BillingCommandRequest>,
) -> Result<Json<DraftInfo>, HttpError> {
    info!(session = %session_id, command = ?req, "Handling cart command");

    let store = state.store.lock().await;
    let command: OrderCommand = resolve_billing_command(&store, req)?;
    drop(store);

    let mut sessions = state.sessions.lock().await;
    let shop = sessions
        .shop_mut(&session_id)
        .ok_or_else(|| HttpError::unknown_session(&session_id))?;
    let result: TransitionResult =
        apply(&shop.cart, command).map_err(|e| HttpError::from(translate_core_error(e)))?;
    shop.cart = result.new_draft;
    let info: DraftInfo = draft_info(&shop.cart);
    drop(sessions);

    Ok(Json(info))
}

/// Handler for POST `/api/v1/shop/cart/{session}/checkout`.
///
/// Completes the cart against the shopper profile, records the order in
/// the session history and the server ledger, and navigates the session
/// to the orders page.
async fn handle_checkout(
    AxumState(state): AxumState<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<CompletedOrderInfo>, HttpError> {
    info!(session = %session_id, "Handling checkout");

    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let mut sessions = state.sessions.lock().await;
    let shop = sessions
        .shop_mut(&session_id)
        .ok_or_else(|| HttpError::unknown_session(&session_id))?;
    let result: TransitionResult = apply(
        &shop.cart,
        OrderCommand::Complete {
            order_id: generate_order_id(now),
            completed_at: now,
            contact: Some(shop.profile.clone()),
        },
    )
    .map_err(|e| HttpError::from(translate_core_error(e)))?;
    shop.cart = result.new_draft;
    let Some(completed) = result.completed else {
        return Err(HttpError::internal(String::from(
            "Checkout produced no snapshot",
        )));
    };
    shop.history.record(completed.clone());
    shop.page = StorefrontPage::Orders;
    sessions.record_completed(completed.clone());
    drop(sessions);

    info!(order_id = %completed.order_id, "Completed storefront order");
    Ok(Json(completed_order_info(&completed)))
}

/// Handler for GET `/api/v1/shop/wishlist/{session}`.
async fn handle_wishlist_get(
    AxumState(state): AxumState<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Vec<ItemInfo>>, HttpError> {
    let sessions = state.sessions.lock().await;
    let shop = sessions
        .shop(&session_id)
        .ok_or_else(|| HttpError::unknown_session(&session_id))?;
    let items: Vec<ItemInfo> = shop.wishlist.books().iter().map(item_info).collect();
    drop(sessions);

    Ok(Json(items))
}

/// Handler for POST `/api/v1/shop/wishlist/{session}/toggle`.
async fn handle_wishlist_toggle(
    AxumState(state): AxumState<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<WishlistToggleRequest>,
) -> Result<Json<Vec<ItemInfo>>, HttpError> {
    let store = state.store.lock().await;
    let book = store
        .get_item(req.item_id)
        .map_err(|e| HttpError::from(pahana_shop_api::translate_persistence_error(e)))?;
    drop(store);

    let mut sessions = state.sessions.lock().await;
    let shop = sessions
        .shop_mut(&session_id)
        .ok_or_else(|| HttpError::unknown_session(&session_id))?;
    let added: bool = shop.wishlist.toggle(book);
    let items: Vec<ItemInfo> = shop.wishlist.books().iter().map(item_info).collect();
    drop(sessions);

    info!(
        session = %session_id,
        item_id = req.item_id,
        added = added,
        "Toggled wishlist entry"
    );
    Ok(Json(items))
}

/// Handler for PUT `/api/v1/shop/profile/{session}`.
async fn handle_profile_update(
    AxumState(state): AxumState<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<ProfileUpdateRequest>,
) -> Result<Json<pahana_shop_api::ContactInfo>, HttpError> {
    let mut sessions = state.sessions.lock().await;
    let shop = sessions
        .shop_mut(&session_id)
        .ok_or_else(|| HttpError::unknown_session(&session_id))?;
    shop.profile.name = req.name;
    shop.profile.email = req.email;
    shop.profile.phone = req.phone;
    shop.profile.address = req.address;
    let info = pahana_shop_api::contact_info(&shop.profile);
    drop(sessions);

    Ok(Json(info))
}

/// Handler for POST `/api/v1/shop/navigate/{session}`.
///
/// Page names resolve through the `StorefrontPage` enum; an unknown name
/// is a 400, never a silent fall-through.
async fn handle_navigate(
    AxumState(state): AxumState<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<NavigateRequest>,
) -> Result<Json<PageResponse>, HttpError> {
    let page: StorefrontPage = StorefrontPage::from_str(&req.page)
        .map_err(|e| HttpError::from(pahana_shop_api::translate_domain_error(e)))?;

    let mut sessions = state.sessions.lock().await;
    let shop = sessions
        .shop_mut(&session_id)
        .ok_or_else(|| HttpError::unknown_session(&session_id))?;
    shop.page = page;
    drop(sessions);

    Ok(Json(PageResponse {
        page: page.to_string(),
    }))
}

/// Handler for GET `/api/v1/shop/orders/{session}`.
async fn handle_orders_get(
    AxumState(state): AxumState<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Vec<CompletedOrderInfo>>, HttpError> {
    let sessions = state.sessions.lock().await;
    let shop = sessions
        .shop(&session_id)
        .ok_or_else(|| HttpError::unknown_session(&session_id))?;
    let orders: Vec<CompletedOrderInfo> = shop
        .history
        .orders()
        .iter()
        .map(completed_order_info)
        .collect();
    drop(sessions);

    Ok(Json(orders))
}

/// Handler for GET `/api/v1/shop/orders/{session}/{order_id}/receipt`.
async fn handle_order_receipt(
    AxumState(state): AxumState<AppState>,
    Path((session_id, order_id)): Path<(String, String)>,
    Query(query): Query<ReceiptQuery>,
) -> Result<Response, HttpError> {
    let sessions = state.sessions.lock().await;
    let shop = sessions
        .shop(&session_id)
        .ok_or_else(|| HttpError::unknown_session(&session_id))?;
    let Some(order) = shop.history.find(&order_id) else {
        return Err(HttpError {
            status: StatusCode::NOT_FOUND,
            message: format!("No order {order_id} in this session"),
        });
    };
    let response: Response = render_receipt(order, query.format.as_deref());
    drop(sessions);

    Ok(response)
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/v1/customer/get-all-customers",
            get(handle_get_all_customers),
        )
        .route("/api/v1/customer/save", post(handle_save_customer))
        .route("/api/v1/customer/update", put(handle_update_customer))
        .route(
            "/api/v1/customer/delete-customer/{id}",
            delete(handle_delete_customer),
        )
        .route("/api/v1/item/get-all-items", get(handle_get_all_items))
        .route("/api/v1/item/save", post(handle_save_item))
        .route("/api/v1/item/update", put(handle_update_item))
        .route("/api/v1/item/delete-item/{id}", delete(handle_delete_item))
        .route("/api/v1/user/regiter", post(handle_register))
        .route("/api/v1/user/login", post(handle_login))
        .route("/api/v1/dashboard/stats", get(handle_dashboard_stats))
        .route("/api/v1/billing/start", post(handle_billing_start))
        .route("/api/v1/billing/{session}", get(handle_billing_get))
        .route(
            "/api/v1/billing/{session}/command",
            post(handle_billing_command),
        )
        .route(
            "/api/v1/billing/{session}/complete",
            post(handle_billing_complete),
        )
        .route(
            "/api/v1/billing/{session}/preview",
            get(handle_billing_preview),
        )
        .route("/api/v1/shop/books", get(handle_shop_books))
        .route("/api/v1/shop/cart/start", post(handle_cart_start))
        .route("/api/v1/shop/cart/{session}", get(handle_cart_get))
        .route(
            "/api/v1/shop/cart/{session}/command",
            post(handle_cart_command),
        )
        .route(
            "/api/v1/shop/cart/{session}/checkout",
            post(handle_checkout),
        )
        .route(
            "/api/v1/shop/wishlist/{session}",
            get(handle_wishlist_get),
        )
        .route(
            "/api/v1/shop/wishlist/{session}/toggle",
            post(handle_wishlist_toggle),
        )
        .route("/api/v1/shop/profile/{session}", put(handle_profile_update))
        .route("/api/v1/shop/navigate/{session}", post(handle_navigate))
        .route("/api/v1/shop/orders/{session}", get(handle_orders_get))
        .route(
            "/api/v1/shop/orders/{session}/{order_id}/receipt",
            get(handle_order_receipt),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Pahana Shop Server");

    // Initialize storage (in-memory or file-based based on CLI argument)
    let store: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState::new(store);

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;

    /// Helper to create test app state with an in-memory store.
    fn create_test_app_state() -> AppState {
        let store: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory store");
        AppState::new(store)
    }

    async fn send_json(
        app: &Router,
        method: &str,
        uri: &str,
        body: serde_json::Value,
    ) -> axum::response::Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn send_empty(app: &Router, method: &str, uri: &str) -> axum::response::Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn start_session(app: &Router, uri: &str) -> String {
        let response = send_empty(app, "POST", uri).await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let bytes = body_bytes(response).await;
        let started: StartSessionResponse = serde_json::from_slice(&bytes).unwrap();
        started.session_id
    }

    #[tokio::test]
    async fn test_get_all_customers_returns_seeded_directory() {
        let app: Router = build_router(create_test_app_state());

        let response = send_empty(&app, "GET", "/api/v1/customer/get-all-customers").await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let bytes = body_bytes(response).await;
        let customers: Vec<pahana_shop_api::CustomerInfo> =
            serde_json::from_slice(&bytes).unwrap();
        assert_eq!(customers.len(), 5);
        assert_eq!(customers[0].account_number, "PAH1001");
    }

    #[tokio::test]
    async fn test_list_endpoints_apply_search_filter() {
        let app: Router = build_router(create_test_app_state());

        let response = send_empty(
            &app,
            "GET",
            "/api/v1/customer/get-all-customers?search=jane",
        )
        .await;
        let customers: Vec<pahana_shop_api::CustomerInfo> =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].customer_name, "Jane Smith");

        let response = send_empty(&app, "GET", "/api/v1/item/get-all-items?search=hobbit").await;
        let items: Vec<ItemInfo> = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_name, "The Hobbit");
    }

    #[tokio::test]
    async fn test_item_crud_over_http() {
        let app: Router = build_router(create_test_app_state());

        let response = send_json(
            &app,
            "POST",
            "/api/v1/item/save",
            json!({
                "itemCode": "BK-9001",
                "itemName": "Brave New World",
                "author": "Aldous Huxley",
                "description": "A dystopian vision of the future.",
                "category": "Dystopian",
                "itemPrice": 11.50,
                "quantity": 9
            }),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let saved: ItemInfo = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(saved.item_code, "BK-9001");

        let response = send_empty(&app, "GET", "/api/v1/item/get-all-items").await;
        let items: Vec<ItemInfo> = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(items.iter().any(|i| i.item_name == "Brave New World"));

        let response = send_empty(
            &app,
            "DELETE",
            &format!("/api/v1/item/delete-item/{}", saved.item_id),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        // Deleting again reports not found.
        let response = send_empty(
            &app,
            "DELETE",
            &format!("/api/v1/item/delete-item/{}", saved.item_id),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_register_returns_saved_text() {
        let app: Router = build_router(create_test_app_state());

        let response = send_json(
            &app,
            "POST",
            "/api/v1/user/regiter",
            json!({
                "userName": "Nimal Perera",
                "userPassword": "letmein7",
                "role": "admin",
                "userEmail": "nimal@example.com"
            }),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        let bytes = body_bytes(response).await;
        assert_eq!(String::from_utf8(bytes).unwrap(), "saved");
    }

    #[tokio::test]
    async fn test_register_duplicate_email_is_rejected() {
        let app: Router = build_router(create_test_app_state());
        let request = json!({
            "userName": "Nimal Perera",
            "userPassword": "letmein7",
            "role": "admin",
            "userEmail": "nimal@example.com"
        });

        let first = send_json(&app, "POST", "/api/v1/user/regiter", request.clone()).await;
        assert_eq!(first.status(), HttpStatusCode::OK);

        let second = send_json(&app, "POST", "/api/v1/user/regiter", request).await;
        assert_eq!(second.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_login_success_and_failure() {
        let app: Router = build_router(create_test_app_state());

        let response = send_json(
            &app,
            "POST",
            "/api/v1/user/login",
            json!({"email": "admin@pahana.com", "password": "admin123"}),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let login: LoginResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(login.role, "admin");

        let response = send_json(
            &app,
            "POST",
            "/api/v1/user/login",
            json!({"email": "admin@pahana.com", "password": "wrong"}),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_billing_wizard_full_flow() {
        let app: Router = build_router(create_test_app_state());
        let session: String = start_session(&app, "/api/v1/billing/start").await;
        let base: String = format!("/api/v1/billing/{session}");

        // Step 1: pick the first seeded customer and advance.
        let response = send_json(
            &app,
            "POST",
            &format!("{base}/command"),
            json!({"action": "select-customer", "customerId": 1}),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response = send_json(&app, "POST", &format!("{base}/command"), json!({"action": "advance"})).await;
        let draft: DraftInfo = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(draft.step, "AddItems");

        // Step 2: two units of the first seeded book ($12.99).
        for _ in 0..2 {
            let response = send_json(
                &app,
                "POST",
                &format!("{base}/command"),
                json!({"action": "add-item", "itemId": 1}),
            )
            .await;
            assert_eq!(response.status(), HttpStatusCode::OK);
        }

        let response = send_json(&app, "POST", &format!("{base}/command"), json!({"action": "advance"})).await;
        let draft: DraftInfo = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(draft.step, "GenerateBill");
        assert!((draft.totals.subtotal - 25.98).abs() < 1e-9);
        assert!((draft.totals.tax - 2.60).abs() < 1e-9);
        assert_eq!(draft.totals.shipping, None);

        // Step 3: complete and verify the ledger feeds the dashboard.
        let response = send_empty(&app, "POST", &format!("{base}/complete")).await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let completed: CompletedOrderInfo =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(completed.order_id.starts_with("INV-"));
        assert_eq!(completed.customer.account_number.as_deref(), Some("PAH1001"));

        let response = send_empty(&app, "GET", &base).await;
        let draft: DraftInfo = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(draft.step, "SelectCustomer");
        assert!(draft.line_items.is_empty());

        let response = send_empty(&app, "GET", "/api/v1/dashboard/stats").await;
        let stats: pahana_shop_api::DashboardStatsResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(stats.orders, 1);
        assert!((stats.revenue - 28.58).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_billing_advance_without_customer_is_refused() {
        let app: Router = build_router(create_test_app_state());
        let session: String = start_session(&app, "/api/v1/billing/start").await;

        let response = send_json(
            &app,
            "POST",
            &format!("/api/v1/billing/{session}/command"),
            json!({"action": "advance"}),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);

        // The refusal changed nothing.
        let response = send_empty(&app, "GET", &format!("/api/v1/billing/{session}")).await;
        let draft: DraftInfo = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(draft.step, "SelectCustomer");
    }

    #[tokio::test]
    async fn test_cart_checkout_and_receipt() {
        let app: Router = build_router(create_test_app_state());
        let session: String = start_session(&app, "/api/v1/shop/cart/start").await;
        let base: String = format!("/api/v1/shop/cart/{session}");

        let response = send_json(
            &app,
            "POST",
            &format!("{base}/command"),
            json!({"action": "add-item", "itemId": 1}),
        )
        .await;
        let draft: DraftInfo = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(draft.totals.tax_rate, "8%");
        assert_eq!(draft.totals.shipping, Some(5.99));

        let response = send_empty(&app, "POST", &format!("{base}/checkout")).await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let completed: CompletedOrderInfo =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(completed.order_id.starts_with("ORD"));

        let response = send_empty(&app, "GET", &format!("/api/v1/shop/orders/{session}")).await;
        let orders: Vec<CompletedOrderInfo> =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(orders.len(), 1);

        let response = send_empty(
            &app,
            "GET",
            &format!(
                "/api/v1/shop/orders/{session}/{}/receipt",
                completed.order_id
            ),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let text: String = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(text.contains("ORDER RECEIPT"));
        assert!(text.contains("Tax (8%)"));

        // The cart is empty again after checkout.
        let response = send_empty(&app, "GET", &base).await;
        let draft: DraftInfo = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(draft.line_items.is_empty());
    }

    #[tokio::test]
    async fn test_checkout_empty_cart_is_refused() {
        let app: Router = build_router(create_test_app_state());
        let session: String = start_session(&app, "/api/v1/shop/cart/start").await;

        let response = send_empty(
            &app,
            "POST",
            &format!("/api/v1/shop/cart/{session}/checkout"),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_wishlist_toggle_round_trip() {
        let app: Router = build_router(create_test_app_state());
        let session: String = start_session(&app, "/api/v1/shop/cart/start").await;
        let uri: String = format!("/api/v1/shop/wishlist/{session}/toggle");

        let response = send_json(&app, "POST", &uri, json!({"itemId": 1})).await;
        let items: Vec<ItemInfo> = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(items.len(), 1);

        let response = send_json(&app, "POST", &uri, json!({"itemId": 1})).await;
        let items: Vec<ItemInfo> = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_navigate_accepts_only_known_pages() {
        let app: Router = build_router(create_test_app_state());
        let session: String = start_session(&app, "/api/v1/shop/cart/start").await;
        let uri: String = format!("/api/v1/shop/navigate/{session}");

        let response = send_json(&app, "POST", &uri, json!({"page": "orders"})).await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response = send_json(&app, "POST", &uri, json!({"page": "checkout"})).await;
        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let app: Router = build_router(create_test_app_state());

        let response = send_empty(&app, "GET", "/api/v1/billing/session_missing").await;
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);

        let response = send_empty(&app, "GET", "/api/v1/shop/cart/session_missing").await;
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_billing_preview_renders_html() {
        let app: Router = build_router(create_test_app_state());
        let session: String = start_session(&app, "/api/v1/billing/start").await;
        let base: String = format!("/api/v1/billing/{session}");

        // Preview before selecting a customer is refused.
        let response = send_empty(&app, "GET", &format!("{base}/preview")).await;
        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);

        let _ = send_json(
            &app,
            "POST",
            &format!("{base}/command"),
            json!({"action": "select-customer", "customerId": 1}),
        )
        .await;
        let _ = send_json(
            &app,
            "POST",
            &format!("{base}/command"),
            json!({"action": "add-item", "itemId": 1}),
        )
        .await;

        let response = send_empty(&app, "GET", &format!("{base}/preview?format=html")).await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let html: String = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("The Great Gatsby"));
    }
}
