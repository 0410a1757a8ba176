#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), portfolio_site::error::SiteError> {
    use axum::{extract::Request, response::Redirect, routing::get, Router, ServiceExt};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio_site::{app::*, config::BASE_PATH, content, error::SiteError, logging};
    use tower::Layer;
    use tower_http::normalize_path::NormalizePathLayer;

    logging::init();

    if let Err(err) = content::validate_content() {
        tracing::error!(%err, "refusing to serve invalid content");
        return Err(err.into());
    }

    let conf = get_configuration(None).map_err(|e| SiteError::Config(e.to_string()))?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Single page, so this is just "/"
    let routes = generate_route_list(App);

    let site = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let app = Router::new()
        .route("/", get(|| async { Redirect::permanent(BASE_PATH) }))
        .nest(BASE_PATH, site);
    // "/react-portfolio/" and "/react-portfolio" are the same page
    let app = NormalizePathLayer::trim_trailing_slash().layer(app);

    tracing::info!(%addr, base = BASE_PATH, "serving portfolio");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
