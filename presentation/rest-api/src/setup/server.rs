use poem::{
    EndpointExt, Route, Server as PoemServer,
    listener::TcpListener,
    middleware::{CatchPanic, Tracing},
};
use poem_openapi::OpenApiService;

use crate::{
    api::error::panic_response, config::app_config::AppConfig,
    setup::dependency_injection::DependencyContainer,
};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service = OpenApiService::new(
            (container.health_api, container.product_api),
            "Product Catalog API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(config.server.public_url());
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(config.cors)
            .with(CatchPanic::new().with_handler(panic_response))
            .with(Tracing);
        tracing::info!(address = %addr, "server listening");
        tracing::info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
