#![allow(non_snake_case)]

#[cfg(feature = "ssr")]
mod config {
    use deck_providers::DeckSource;
    use serde::Deserialize;

    #[derive(Deserialize, Clone, Debug, Default, PartialEq)]
    pub struct Config {
        #[serde(default)]
        pub server: ServerConfig,
        #[serde(default)]
        pub deck: DeckConfig,
    }

    #[derive(Deserialize, Clone, Debug, PartialEq)]
    pub struct ServerConfig {
        pub bind: String,
        pub port: u16,
    }

    /// Where the cards come from. Without `source` the sample deck is served.
    #[derive(Deserialize, Clone, Debug, Default, PartialEq)]
    pub struct DeckConfig {
        #[serde(default)]
        pub source: DeckSource,
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                bind: "0.0.0.0".into(),
                port: 3000,
            }
        }
    }

    pub fn load(path: &str) -> Config {
        match std::fs::read_to_string(path) {
            Ok(contents) => parse(path, &contents),
            Err(e) => {
                tracing::warn!("failed to read config {path}: {e}, using defaults");
                Config::default()
            }
        }
    }

    fn parse(path: &str, contents: &str) -> Config {
        match toml::from_str(contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("failed to parse config {path}: {e}, using defaults");
                Config::default()
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::path::PathBuf;

        #[test]
        fn test_full_config() {
            let config = parse(
                "test.toml",
                r#"
                [server]
                bind = "127.0.0.1"
                port = 8080

                [deck]
                source = "decks/spring.json"
                "#,
            );

            assert_eq!(config.server.bind, "127.0.0.1");
            assert_eq!(config.server.port, 8080);
            assert_eq!(
                config.deck.source,
                DeckSource::File(PathBuf::from("decks/spring.json"))
            );
        }

        #[test]
        fn test_deck_section_is_optional() {
            let config = parse("test.toml", "[server]\nbind = \"0.0.0.0\"\nport = 3000\n");
            assert_eq!(config.deck.source, DeckSource::Fixture);
        }

        #[test]
        fn test_invalid_config_uses_defaults() {
            let config = parse("test.toml", "[server\nport = ");
            assert_eq!(config, Config::default());
        }
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use deck_api::AppState;
    use deck_ui::{shell, App};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let configPath = if let Some(idx) = args.iter().position(|a| a == "--config") {
        args.get(idx + 1)
            .cloned()
            .unwrap_or_else(|| "config.example.toml".into())
    } else {
        "config.example.toml".into()
    };

    let appConfig = config::load(&configPath);
    let deckSource = appConfig.deck.source.clone();
    tracing::info!(
        "loaded config from {configPath}: bind={}:{}, deck={:?}",
        appConfig.server.bind,
        appConfig.server.port,
        deckSource
    );

    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let leptosOptions = conf.leptos_options;
    let addr = format!("{}:{}", appConfig.server.bind, appConfig.server.port)
        .parse::<std::net::SocketAddr>()
        .unwrap_or_else(|e| {
            tracing::warn!("invalid server address in config: {e}, using site address");
            leptosOptions.site_addr
        });

    let routes = generate_route_list(App);

    let apiRouter = deck_api::api_router(AppState {
        source: deckSource.clone(),
    });

    // Server functions resolve the deck source from context.
    let app = Router::new()
        .leptos_routes_with_context(
            &leptosOptions,
            routes,
            {
                let deckSource = deckSource.clone();
                move || {
                    leptos::prelude::provide_context(deckSource.clone());
                }
            },
            {
                let leptosOptions = leptosOptions.clone();
                move || shell(leptosOptions.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .merge(apiRouter)
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
