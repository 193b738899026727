//! HTTP transport for [`CryptoService`]
//!
//! Every failure answers `400` with `{ "error": "..." }`; the server itself
//! keeps running.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, StringRejection},
        State,
    },
    http::StatusCode,
    response::{IntoResponse, Response as HttpResponse},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::lwe::{BitCiphertext, PublicKey, SecretKey};
use crate::service::{CryptoService, Request, Response};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParamsResponse {
    pub dim: usize,
    pub modulus: u64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptBody {
    pub public_key: PublicKey,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecryptBody {
    pub secret_key: SecretKey,
    pub ciphertexts: Vec<BitCiphertext>,
}

/// Build the router for a service instance
pub fn router(service: CryptoService) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/params", get(get_params))
        .route("/keys", post(generate_keys))
        .route("/encrypt", post(encrypt))
        .route("/decrypt", post(decrypt))
        .route("/rpc", post(rpc))
        .with_state(Arc::new(service))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn get_params(State(service): State<Arc<CryptoService>>) -> Json<ParamsResponse> {
    Json(ParamsResponse {
        dim: service.params().dim,
        modulus: service.params().q,
    })
}

async fn generate_keys(State(service): State<Arc<CryptoService>>) -> HttpResponse {
    reply(service.handle(Request::GenerateKeys))
}

async fn encrypt(
    State(service): State<Arc<CryptoService>>,
    body: Result<Json<EncryptBody>, JsonRejection>,
) -> HttpResponse {
    match body {
        Ok(Json(body)) => reply(service.handle(Request::Encrypt {
            public_key: body.public_key,
            message: body.message,
        })),
        Err(rejection) => reply(Response::error(rejection.body_text())),
    }
}

async fn decrypt(
    State(service): State<Arc<CryptoService>>,
    body: Result<Json<DecryptBody>, JsonRejection>,
) -> HttpResponse {
    match body {
        Ok(Json(body)) => reply(service.handle(Request::Decrypt {
            secret_key: body.secret_key,
            ciphertexts: body.ciphertexts,
        })),
        Err(rejection) => reply(Response::error(rejection.body_text())),
    }
}

async fn rpc(
    State(service): State<Arc<CryptoService>>,
    body: Result<String, StringRejection>,
) -> HttpResponse {
    match body {
        Ok(body) => reply(service.handle_raw(&body)),
        Err(rejection) => reply(Response::error(rejection.body_text())),
    }
}

fn reply(response: Response) -> HttpResponse {
    let status = if response.is_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };
    (status, Json(response)).into_response()
}
