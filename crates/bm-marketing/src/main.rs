//! BrowserMind Marketing Site
//!
//! A Leptos SSR landing page.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use bm_marketing::app::App;
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};

    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).await.unwrap();
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, App)
        .fallback(fallback::file_and_error_handler)
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Landing site listening on http://{}", addr);
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(feature = "ssr")]
mod fallback {
    use axum::body::Body;
    use axum::extract::State;
    use axum::http::{Request, StatusCode, Uri};
    use axum::response::{IntoResponse, Response};
    use bm_marketing::app::App;
    use leptos::LeptosOptions;
    use tower::ServiceExt;
    use tower_http::services::ServeDir;

    /// Serve a static file from the site root, falling back to SSR.
    pub async fn file_and_error_handler(
        uri: Uri,
        State(options): State<LeptosOptions>,
        req: Request<Body>,
    ) -> Response {
        let root = options.site_root.clone();
        let res = get_static_file(uri, &root).await;

        match res {
            Ok(res) if res.status() == StatusCode::OK => res.into_response(),
            _ => {
                let handler = leptos_axum::render_app_to_stream(options.to_owned(), App);
                handler(req).await.into_response()
            }
        }
    }

    async fn get_static_file(uri: Uri, root: &str) -> Result<Response, (StatusCode, String)> {
        let req = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
        match ServeDir::new(root).oneshot(req).await {
            Ok(res) => Ok(res.into_response()),
            Err(err) => Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error serving files: {err}"),
            )),
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The wasm entry point is `bm_marketing::hydrate`.
}
