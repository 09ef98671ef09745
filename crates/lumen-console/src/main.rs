#![allow(non_snake_case)]

#[cfg(feature = "ssr")]
mod config;

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use lumen_ui::{shell, App};
    use tower::ServiceBuilder;
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    // Initialize tracing
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let configPath = config::path_from_args(&args).unwrap_or_else(|| "config.example.toml".into());
    let appConfig = config::load(&configPath);
    tracing::info!(
        "loaded config from {configPath}: issues_path={}",
        appConfig.data.issues_path
    );

    // Loaded once; server functions read it through context
    let issueStore = lumen_providers::collect(&appConfig.data.issues_path).await;

    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let mut leptosOptions = conf.leptos_options;
    if let Some(server) = &appConfig.server {
        match server.socket_addr() {
            Some(addr) => leptosOptions.site_addr = addr,
            None => tracing::warn!(
                "invalid server address {}:{}, keeping {}",
                server.bind,
                server.port,
                leptosOptions.site_addr
            ),
        }
    }
    let addr = leptosOptions.site_addr;

    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptosOptions,
            routes,
            {
                let issueStore = issueStore.clone();
                move || {
                    leptos::prelude::provide_context(issueStore.clone());
                }
            },
            {
                let leptosOptions = leptosOptions.clone();
                move || shell(leptosOptions.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    tracing::info!("serving {} issues on {addr}", issueStore.len());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
