use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{middleware, web, App, HttpResponse, HttpServer, ResponseError};
use paperrank_core::{Error, RankingService, SimilarityRequest};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// A ranking failure on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        ApiError(e)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            Error::NotFound | Error::ScoreUnavailable => StatusCode::NOT_FOUND,
            Error::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            detail: self.0.to_string(),
        })
    }
}

pub struct RestApi;

impl RestApi {
    pub async fn start(
        service: Arc<RankingService>,
        host: &str,
        port: u16,
    ) -> std::io::Result<()> {
        let service = web::Data::from(service);

        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .wrap(middleware::Logger::default())
                .app_data(service.clone())
                .configure(configure)
        })
        .bind((host, port))?
        .run()
        .await
    }
}

/// Register routes and body handling. Expects a `web::Data<RankingService>`
/// in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health))
        .route("/similarity/", web::post().to(rank_similarity))
        .route("/similarity", web::post().to(rank_similarity));
}

/// Body rejections (bad JSON, missing fields, unknown enum values) answer
/// 422 with a `detail` message like every other error.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        warn!("Rejected request body: {}", detail);
        InternalError::from_response(
            err,
            HttpResponse::UnprocessableEntity().json(ErrorBody { detail }),
        )
        .into()
    })
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn rank_similarity(
    service: web::Data<RankingService>,
    req: web::Json<SimilarityRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = req.into_inner();

    let ranked = service.rank(&request).await.map_err(|e| {
        if e.is_not_found() {
            info!("Similarity request for {:?}: {}", request.query, e);
        } else {
            error!("Similarity request for {:?} failed: {}", request.query, e);
        }
        ApiError(e)
    })?;

    Ok(HttpResponse::Ok().json(ranked))
}
