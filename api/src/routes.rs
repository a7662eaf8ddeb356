use axum::{
    routing::{get, post},
    Router,
};

use crate::admin_handlers::{
    confirm_payment, create_campaign, get_campaign_stats, set_campaign_status,
};
use crate::campaign_handlers::{
    get_availability, get_campaign, health_check, list_campaigns, quote_reservation,
};
use crate::reservation_handlers::{create_reservation, list_investor_reservations};
use crate::ApiState;

/// Create routes for the campaign and reservation endpoints
pub fn create_routes() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health_check))
        // Public campaign endpoints
        .route("/campaigns", get(list_campaigns))
        .route("/campaigns/{id}", get(get_campaign))
        .route("/campaigns/{id}/availability", get(get_availability))
        .route("/campaigns/{id}/quote", post(quote_reservation))
        // Investor endpoints
        .route("/campaigns/{id}/reservations", post(create_reservation))
        .route("/investors/{id}/reservations", get(list_investor_reservations))
        // Admin endpoints
        .route("/admin/campaigns", post(create_campaign))
        .route("/admin/campaigns/{id}/status", post(set_campaign_status))
        .route("/admin/campaigns/{id}/stats", get(get_campaign_stats))
        .route(
            "/admin/reservations/{id}/confirm-payment",
            post(confirm_payment),
        )
}
