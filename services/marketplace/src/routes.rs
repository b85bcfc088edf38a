//! Marketplace routes

use axum::{
    Extension, Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use axum_extra::extract::WithRejection;
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    guide::GUIDE,
    middleware::{CurrentUser, SessionToken, auth_middleware},
    models::{
        AddToWishlistRequest, BrowseResponse, CatalogOptions, HomeResponse, ListingDetailResponse,
        LoginRequest, NewListing, PriceAlertRequest, ProfileResponse, RegisterRequest,
        UpdateListing, WishlistEntry, WishlistStatus, wishlist::suggested_price_alert,
    },
    query::{self, BrowseQuery},
    seed::PHONE_BRANDS,
    validation,
};

const FEATURED_COUNT: usize = 4;
const TOP_BRAND_COUNT: usize = 6;
const SIMILAR_COUNT: usize = 4;

fn listing_not_found() -> ApiError {
    ApiError::NotFound("Listing not found".to_string())
}

/// Create the router for the marketplace service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
        .route("/profile", get(profile))
        .route("/sell", post(create_listing))
        .route("/sell/:id", put(update_listing).delete(delete_listing))
        .route("/wishlist", get(get_wishlist).post(add_to_wishlist))
        .route(
            "/wishlist/:listing_id",
            get(wishlist_status).delete(remove_from_wishlist),
        )
        .route("/wishlist/:listing_id/alert", put(set_price_alert))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/browse", get(browse))
        .route("/listings", get(get_listings))
        .route("/listings/:id", get(get_listing))
        .route("/catalog/options", get(catalog_options))
        .route("/how-it-works", get(how_it_works))
        .merge(protected_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let healthy = state.store.health_check().await.unwrap_or_else(|e| {
        tracing::error!("Store health check failed: {}", e);
        false
    });
    let (status, label) = if healthy {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status,
        Json(json!({
            "status": label,
            "service": "marketplace",
            "store": state.store.backend_name(),
        })),
    )
}

async fn not_found() -> impl IntoResponse {
    ApiError::NotFound("Not found".to_string())
}

/// Landing page: featured listings and popular brands
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    Json(HomeResponse {
        featured: state.listings.featured(FEATURED_COUNT).await,
        top_brands: PHONE_BRANDS[..TOP_BRAND_COUNT].to_vec(),
    })
}

/// Static buyer and seller walkthrough
pub async fn how_it_works() -> impl IntoResponse {
    Json(GUIDE)
}

/// Values for the browse page filter controls
pub async fn catalog_options() -> impl IntoResponse {
    Json(CatalogOptions::new(&PHONE_BRANDS))
}

/// Log in with any non-empty credentials
pub async fn login(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<LoginRequest>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let auth = state
        .sessions
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(auth))
}

/// Register a new user and log them in
pub async fn register(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<RegisterRequest>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    validation::validate_registration(&payload).map_err(ApiError::Validation)?;

    let auth = state.sessions.register(payload).await?;

    Ok((StatusCode::CREATED, Json(auth)))
}

/// End the current session
pub async fn logout(
    State(state): State<AppState>,
    Extension(SessionToken(token)): Extension<SessionToken>,
) -> ApiResult<impl IntoResponse> {
    if let Some(token) = token {
        state.sessions.logout(&token).await?;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// The authenticated user
pub async fn me(Extension(CurrentUser(user)): Extension<CurrentUser>) -> impl IntoResponse {
    Json(user)
}

/// Filtered, sorted listing search
pub async fn browse(
    State(state): State<AppState>,
    WithRejection(Query(params), _): WithRejection<Query<BrowseQuery>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let (filters, sort) = params.parse().map_err(ApiError::BadRequest)?;

    let results = state.listings.query(&filters, sort).await;
    tracing::debug!("Browse matched {} listings", results.len());

    Ok(Json(BrowseResponse {
        total: results.len(),
        results,
        filters_active: filters.is_active(),
        query: query::to_query_string(&filters, sort),
        filters,
        sort,
    }))
}

/// Full catalog in catalog order
pub async fn get_listings(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.listings.all().await)
}

/// Listing detail with its seller and similar phones
pub async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let listing = state
        .listings
        .find_by_id(&id)
        .await
        .ok_or_else(listing_not_found)?;

    let seller = state.users.find_by_id(&listing.seller_id).await;
    let similar = state.listings.similar(&listing, SIMILAR_COUNT).await;

    Ok(Json(ListingDetailResponse {
        discount_percent: listing.discount_percent(),
        listing,
        seller,
        similar,
    }))
}

/// Post a new listing as the current user
pub async fn create_listing(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    WithRejection(Json(payload), _): WithRejection<Json<NewListing>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    validation::validate_new_listing(&payload).map_err(ApiError::Validation)?;

    let listing = state
        .listings
        .create(&user.id, payload)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create listing: {}", e);
            ApiError::InternalServerError
        })?;

    Ok((StatusCode::CREATED, Json(listing)))
}

/// Fail unless `user_id` posted listing `id`
async fn require_seller(state: &AppState, id: &str, user_id: &str) -> ApiResult<()> {
    let listing = state
        .listings
        .find_by_id(id)
        .await
        .ok_or_else(listing_not_found)?;

    if listing.seller_id != user_id {
        tracing::warn!("User {} tried to modify listing {}", user_id, id);
        return Err(ApiError::Forbidden);
    }
    Ok(())
}

/// Edit one of the current user's listings
pub async fn update_listing(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateListing>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    require_seller(&state, &id, &user.id).await?;
    validation::validate_update_listing(&payload).map_err(ApiError::Validation)?;

    let listing = state
        .listings
        .update(&id, payload)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update listing: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(listing_not_found)?;

    Ok(Json(listing))
}

/// Withdraw one of the current user's listings
pub async fn delete_listing(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    require_seller(&state, &id, &user.id).await?;

    let deleted = state.listings.delete(&id).await.map_err(|e| {
        tracing::error!("Failed to delete listing: {}", e);
        ApiError::InternalServerError
    })?;

    if !deleted {
        return Err(listing_not_found());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Wishlist items joined with their listings; items whose listing is gone
/// are skipped
async fn wishlist_entries(state: &AppState, user_id: &str) -> ApiResult<Vec<WishlistEntry>> {
    let items = state.wishlists.items(user_id).await.map_err(|e| {
        tracing::error!("Failed to load wishlist: {}", e);
        ApiError::InternalServerError
    })?;

    let listings = state.listings.all().await;
    Ok(items
        .into_iter()
        .filter_map(|item| {
            let listing = listings.iter().find(|l| l.id == item.listing_id)?.clone();
            Some(WishlistEntry { item, listing })
        })
        .collect())
}

/// Profile page: the user, their listings and their wishlist
pub async fn profile(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<impl IntoResponse> {
    let listings = state.listings.by_seller(&user.id).await;
    let wishlist = wishlist_entries(&state, &user.id).await?;

    Ok(Json(ProfileResponse {
        user,
        listings,
        wishlist,
    }))
}

/// The current user's wishlist
pub async fn get_wishlist(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(wishlist_entries(&state, &user.id).await?))
}

/// Save a listing; answers 201 when added and 200 when already saved
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    WithRejection(Json(payload), _): WithRejection<Json<AddToWishlistRequest>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    if state.listings.find_by_id(&payload.listing_id).await.is_none() {
        return Err(listing_not_found());
    }

    let (item, created) = state
        .wishlists
        .add(&user.id, &payload.listing_id, payload.price_alert)
        .await
        .map_err(|e| {
            tracing::error!("Failed to add to wishlist: {}", e);
            ApiError::InternalServerError
        })?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(item)))
}

/// Whether a listing is in the current user's wishlist
pub async fn wishlist_status(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(listing_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let wishlist = state.wishlists.get(&user.id).await.map_err(|e| {
        tracing::error!("Failed to load wishlist: {}", e);
        ApiError::InternalServerError
    })?;

    let item = wishlist.get(&listing_id).cloned();
    Ok(Json(WishlistStatus {
        in_wishlist: item.is_some(),
        listing_id,
        item,
    }))
}

/// Remove a listing from the current user's wishlist
pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(listing_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let removed = state
        .wishlists
        .remove(&user.id, &listing_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to remove from wishlist: {}", e);
            ApiError::InternalServerError
        })?;

    if !removed {
        return Err(ApiError::NotFound("Item not in wishlist".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Set a price alert; without a price, 10% below the current price
pub async fn set_price_alert(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(listing_id): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<PriceAlertRequest>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let price = match payload.price_alert {
        Some(price) => price,
        None => {
            let listing = state
                .listings
                .find_by_id(&listing_id)
                .await
                .ok_or_else(listing_not_found)?;
            suggested_price_alert(listing.price)
        }
    };

    let item = state
        .wishlists
        .set_price_alert(&user.id, &listing_id, price)
        .await
        .map_err(|e| {
            tracing::error!("Failed to set price alert: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Item not in wishlist".to_string()))?;

    Ok(Json(item))
}
