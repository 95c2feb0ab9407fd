use std::{io::Result, net::SocketAddr, sync::Arc};

use actix_web::{
    App, HttpRequest, HttpServer, ResponseError,
    dev::ServiceRequest,
    middleware::Logger,
    web::{self, Data, ServiceConfig},
};
use syncwatch_api_types::error::ApiError;
use tracing::info;

/// Access log format. Query strings carry credentials, so only the path is logged.
pub const ACCESS_LOG_FORMAT: &str = r#"%a "%{request}xi" %s %b "%{User-Agent}i" %T"#;

/// A type alias for a function that configures the actix-web ServiceConfig.
type Configurator = dyn Fn(&mut ServiceConfig) + Send + Sync;

/// A builder for configuring and starting an RPC server.
pub struct RpcServerBuilder {
    http_socket_address: SocketAddr,
    configurators: Vec<Arc<Configurator>>,
}

impl RpcServerBuilder {
    /// Create a new RpcServerBuilder with the given configuration.
    pub fn new(http_socket_address: SocketAddr) -> Self {
        Self {
            http_socket_address,
            configurators: Vec::new(),
        }
    }

    /// Configure actix-web App by providing a closure that takes a mutable ref ServiceConfig.
    pub fn configure<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut ServiceConfig) + Send + Sync + 'static,
    {
        self.configurators.push(Arc::new(f));
        self
    }

    /// Add app data to the ServiceConfig.
    pub fn with_data<T>(mut self, value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        self.configurators
            .push(Arc::new(move |config: &mut ServiceConfig| {
                config.app_data(Data::new(value.clone()));
            }));
        self
    }

    /// Start the RPC server by applying all configurations.
    pub async fn start(self) -> Result<()> {
        let configurators = self.configurators.clone();
        let configure_all = move |config: &mut ServiceConfig| {
            for configurator in &configurators {
                configurator(config);
            }
        };

        info!("starting HTTP server on {:?}", self.http_socket_address);

        let server = HttpServer::new(move || {
            App::new()
                .wrap(request_logger())
                .configure(configure_all.clone())
                .default_service(web::to(not_found))
        })
        .bind(self.http_socket_address)?
        .run();

        server.await
    }
}

/// Request logger that records the method and path of each request but never its query.
pub fn request_logger() -> Logger {
    Logger::new(ACCESS_LOG_FORMAT).custom_request_replace("request", request_line)
}

fn request_line(request: &ServiceRequest) -> String {
    format!("{} {}", request.method(), request.path())
}

/// Fallback for paths no registered route matches.
pub async fn not_found(request: HttpRequest) -> actix_web::HttpResponse {
    ApiError::NotFound(request.path().to_string()).error_response()
}
