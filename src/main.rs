#[cfg(not(feature = "ssr"))]
pub fn main() {
    use leptos::*;
    use teefusion_rules::app::App;

    _ = console_log::init_with_level(log::Level::Info);
    console_error_panic_hook::set_once();
    mount_to_body(|| {
        view! { <App/> }
    });
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::{get_configuration, view};
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use teefusion_rules::app::App;
    use teefusion_rules::fileserv::file_and_error_handler;

    // setup logging

    dotenv::dotenv().ok();
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .env()
        .init()
        .expect("couldn't initialize logging");

    // configure leptos

    let conf = get_configuration(None)
        .await
        .expect("couldn't read leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(|| view! { <App/> });

    // compose axum router

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, || view! { <App/> })
        .fallback(file_and_error_handler)
        .with_state(leptos_options);

    // serve

    log::info!("listening on http://{}", &addr);
    if let Err(err) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        log::error!("server stopped: {}", err);
    }
}
