//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use dioxus::server::axum;

        Ok(dioxus::server::router(App)
            .route("/api/products", axum::routing::get(backend::server_extra::list_products_handler))
            .route("/api/facets", axum::routing::get(backend::server_extra::facets_handler))
            // we can apply a layer to the entire router using axum's `.layer` method
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    dioxus::logger::tracing::info!("Request: {} {}", request.method(), request.uri());
                    let res = next.run(request).await;
                    dioxus::logger::tracing::info!("Response: {}", res.status());
                    res
                },
            )))
    });
}
