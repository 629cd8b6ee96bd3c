//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use planned_production::Trace;
#[cfg(debug_assertions)]
use planned_production::doc::ApiDoc;
use planned_production::inbound::http::health::{HealthState, live, ready};
use planned_production::inbound::http::planned_production::get_planned_production;
use planned_production::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use state_builders::{build_diagnostics, build_http_state, build_lookup};

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(get_planned_production)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Return the configured Prometheus middleware or build the default one.
///
/// # Errors
/// Returns [`std::io::Error`] when the middleware cannot be built.
#[cfg(feature = "metrics")]
pub(crate) fn resolve_metrics(
    prometheus: Option<PrometheusMetrics>,
) -> std::io::Result<PrometheusMetrics> {
    match prometheus {
        Some(prometheus) => Ok(prometheus),
        None => PrometheusMetricsBuilder::new("planned_production")
            .endpoint("/metrics")
            .build()
            .map_err(|e| std::io::Error::other(format!("configure Prometheus metrics: {e}"))),
    }
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is initialised.
/// - `config`: pre-built [`ServerConfig`] containing the bind address, lookup
///   adapter, and optional metrics middleware.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket, registering metrics,
/// or starting the server fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let lookup = build_lookup(&config);

    #[cfg(feature = "metrics")]
    let prometheus = resolve_metrics(config.prometheus)?;
    #[cfg(feature = "metrics")]
    let diagnostics = build_diagnostics(&prometheus.registry)?;
    #[cfg(not(feature = "metrics"))]
    let diagnostics = build_diagnostics();

    let http_state = build_http_state(lookup, diagnostics);

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        app
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
