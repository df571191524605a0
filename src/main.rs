//
// Copyright (c) 2025 Nathan Fiedler
//

//! The main application binary that renders the site on the server and serves
//! the compiled WASM bundle used to hydrate it in the browser.

#[cfg(feature = "ssr")]
use actix_files::{Files, NamedFile};
#[cfg(feature = "ssr")]
use actix_web::{web, HttpRequest};
#[cfg(feature = "ssr")]
use leptos::config::LeptosOptions;
#[cfg(feature = "ssr")]
use std::path::PathBuf;

// Serve the favicon from the site root rather than through the router, which
// would render the not-found page.
#[cfg(feature = "ssr")]
async fn favicon(
    leptos_options: web::Data<LeptosOptions>,
    _req: HttpRequest,
) -> actix_web::Result<NamedFile> {
    let mut path = PathBuf::from(leptos_options.site_root.as_ref());
    path.push("favicon.ico");
    let file = NamedFile::open(path)?;
    Ok(file.use_last_modified(true))
}

// Apply the HOST and PORT environment variables, if any, to the address given
// in the Leptos configuration.
#[cfg(feature = "ssr")]
fn resolve_addr(configured: std::net::SocketAddr) -> String {
    let host = std::env::var("HOST").unwrap_or_else(|_| configured.ip().to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| configured.port().to_string());
    format!("{}:{}", host, port)
}

#[cfg(feature = "ssr")]
#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    use actix_web::{middleware, App, HttpServer};
    use freshfold::preso::leptos::{shell, App as SiteApp};
    use leptos::config::get_configuration;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use log::info;

    dotenvy::dotenv().ok();
    env_logger::init();
    let conf = get_configuration(None)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string()))?;
    let addr = resolve_addr(conf.leptos_options.site_addr);
    info!("listening on http://{}/...", addr);
    HttpServer::new(move || {
        let routes = generate_route_list(SiteApp);
        let leptos_options = &conf.leptos_options;
        let site_root = leptos_options.site_root.to_string();
        App::new()
            .wrap(middleware::Logger::default())
            .service(Files::new("/pkg", format!("{}/pkg", site_root)))
            .service(Files::new("/assets", &site_root))
            .route("/favicon.ico", web::get().to(favicon))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function unless we want this to work with, e.g.,
    // Trunk for pure client-side testing; see lib.rs for hydration function
}
