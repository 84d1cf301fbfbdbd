use std::sync::Arc;

use crate::auth::{IdentityProvider, JwtService};
use crate::cart::CartStore;
use crate::catalog::{CatalogStore, seed_menu_items, seed_promotions};
use crate::core::Config;
use crate::orders::OrderLedger;
use crate::reviews::ReviewBoard;

/// Server state - holds shared references to every store and service
///
/// `ServerState` is the application root: it owns the process-wide
/// collections (catalog, order ledger, review board), the per-session
/// cart map, and the auth services. Cloning is cheap (everything is
/// behind an `Arc`), which is how axum shares it across handlers.
///
/// # Components
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | Configuration (immutable) |
/// | catalog | CatalogStore | Menu items and promotions |
/// | carts | CartStore | Per-session carts |
/// | orders | OrderLedger | Submitted orders |
/// | reviews | ReviewBoard | Customer reviews |
/// | identity | IdentityProvider | External identity contract |
/// | jwt_service | Arc<JwtService> | Session tokens |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Menu items and promotions
    pub catalog: CatalogStore,
    /// Per-session carts
    pub carts: CartStore,
    /// Submitted orders
    pub orders: OrderLedger,
    /// Customer reviews
    pub reviews: ReviewBoard,
    /// Identity provider (hardcoded administrator)
    pub identity: IdentityProvider,
    /// JWT session service
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Initialize the server state
    ///
    /// Seeds the catalog and review board from fixed initial data; the
    /// collections live only in memory for the process lifetime.
    pub fn initialize(config: &Config) -> Self {
        let catalog = CatalogStore::with_initial(seed_menu_items(), seed_promotions());
        let reviews = ReviewBoard::seeded();
        let identity = IdentityProvider::new(
            config.admin_email.clone(),
            config.admin_password.clone(),
            config.admin_name.clone(),
        );
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        let state = Self {
            config: config.clone(),
            catalog,
            carts: CartStore::new(),
            orders: OrderLedger::new(),
            reviews,
            identity,
            jwt_service,
        };

        tracing::info!(
            menu_items = state.catalog.menu_items().len(),
            promotions = state.catalog.promotions().len(),
            reviews = state.reviews.list().len(),
            "Server state initialized with seed data"
        );

        state
    }

    /// Get the JWT service
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
