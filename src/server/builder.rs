//! ServerBuilder for fluent API to build HTTP servers

use super::entity_registry::EntityRegistry;
use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::config::CorsConfig;
use crate::core::module::Module;
use crate::core::service::MarketService;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for creating HTTP servers with auto-registered routes
///
/// # Example
///
/// ```ignore
/// let service = MarketService::new(Arc::new(InMemoryMarketStore::new()));
/// let app = ServerBuilder::new()
///     .with_service(service)
///     .register_module(MarketplaceModule)?
///     .build()?;
/// ```
pub struct ServerBuilder {
    service: Option<MarketService>,
    modules: Vec<Arc<dyn Module>>,
    custom_routes: Vec<Router>,
    cors: CorsConfig,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            service: None,
            modules: Vec::new(),
            custom_routes: Vec::new(),
            cors: CorsConfig::default(),
        }
    }

    /// Set the market service (required)
    ///
    /// The service carries the store handle every handler shares. The store
    /// is closed when [`serve`](Self::serve) shuts down.
    pub fn with_service(mut self, service: MarketService) -> Self {
        self.service = Some(service);
        self
    }

    /// Set the cross-origin policy (permissive by default)
    pub fn with_cors(mut self, cors: CorsConfig) -> Self {
        self.cors = cors;
        self
    }

    /// Add custom routes to the server
    ///
    /// Custom routes are merged at the root, outside the `/api` prefix.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Register a module
    ///
    /// Its resources are registered when the host is built, once the service
    /// is known. Module names must be unique.
    pub fn register_module(mut self, module: impl Module + 'static) -> Result<Self> {
        if self.modules.iter().any(|m| m.name() == module.name()) {
            anyhow::bail!("module '{}' is already registered", module.name());
        }
        self.modules.push(Arc::new(module));
        Ok(self)
    }

    /// Build the transport-agnostic host
    pub fn build_host(mut self) -> Result<ServerHost> {
        let service = self
            .service
            .take()
            .ok_or_else(|| anyhow::anyhow!("MarketService is required. Call .with_service()"))?;

        let mut entity_registry = EntityRegistry::new();
        for module in &self.modules {
            module.register_entities(&mut entity_registry, &service);
            tracing::debug!(
                module = module.name(),
                version = module.version(),
                entities = ?module.entity_types(),
                "module registered"
            );
        }

        Ok(ServerHost::from_builder_components(
            service,
            entity_registry,
            self.cors,
        ))
    }

    /// Build the final REST router
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host, custom_routes)
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    /// - Close the store once in-flight requests have finished
    ///
    /// # Example
    ///
    /// ```ignore
    /// ServerBuilder::new()
    ///     .with_service(service)
    ///     .register_module(MarketplaceModule)?
    ///     .serve("127.0.0.1:5000").await?;
    /// ```
    pub async fn serve(mut self, addr: &str) -> Result<()> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);
        let service = host.service.clone();
        let app = RestExposure::build_router(host, custom_routes)?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        service.store().close().await;
        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
