use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::{with_site_routes, AppServices};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use focus_recruitment::catalog::Catalog;
use focus_recruitment::config::AppConfig;
use focus_recruitment::error::AppError;
use focus_recruitment::site::SiteContent;
use focus_recruitment::telemetry;
use focus_recruitment::workflows::apply::{
    ApplicationPolicy, ApplicationService, TracingApplicationLog,
};
use focus_recruitment::workflows::contact::EmailJsDispatcher;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = Arc::new(Catalog::embedded()?);
    for gap in catalog.unreachable_by_category() {
        warn!(
            category = %gap.category,
            listings = gap.listings.len(),
            "listings have no category chip and only appear under All"
        );
    }
    let content = Arc::new(SiteContent::embedded()?);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let applications = Arc::new(ApplicationService::new(
        catalog.clone(),
        Arc::new(TracingApplicationLog),
        ApplicationPolicy::default(),
    ));
    let dispatcher = Arc::new(EmailJsDispatcher::new(config.email.clone()));

    let app = with_site_routes(AppServices {
        catalog: catalog.clone(),
        content,
        page_size: config.board.page_size,
        applications,
        dispatcher,
    })
    .layer(Extension(app_state))
    .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        listings = catalog.len(),
        page_size = config.board.page_size,
        "focus recruitment site ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
