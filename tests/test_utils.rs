use actix_web::{App, HttpServer, middleware::NormalizePath, web};
use portfolio_site::{AppState, client::PortfolioApi, routes::configure_routes};
use reqwest::Client;
use std::{net::TcpListener, sync::Arc, time::Duration};

/// A portfolio server bound to an ephemeral port, backed by the seeded
/// in-memory store. The data-access layer in remote mode points at it.
#[derive(Clone)]
pub struct TestApp {
    pub state: Arc<AppState>,
    pub address: String,
    pub client: Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind ephemeral port");
        let port = listener.local_addr().expect("Failed to read local addr").port();
        let address = format!("http://127.0.0.1:{}", port);

        let state = Arc::new(AppState::new());
        let state_clone = state.clone();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::from(state_clone.clone()))
                .wrap(NormalizePath::trim())
                .configure(configure_routes)
        })
        .listen(listener)
        .expect("Failed to listen on test port")
        .workers(1)
        .run();

        tokio::spawn(server);

        let client = Client::new();
        while client.get(format!("{}/api", address)).send().await.is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        Self {
            state,
            address,
            client,
        }
    }

    /// The data-access facade in remote mode, pointed at this server.
    pub fn api(&self) -> PortfolioApi {
        PortfolioApi::remote(&self.address).expect("Test server address should be a valid URL")
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}
