use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{Method, StatusCode};
use axum::{extract::State, routing::get, routing::post, Json, Router};
use clap::{command, Parser};
use eyre::Result;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinSet;
use tower_http::cors::{Any, CorsLayer};

use claim_engine::{ClaimEngine, ClaimRecord, EngineError};
use rewards_core::{PolicyVector, RewardsProofBytes};
use rewards_sdk::DatabaseLocation;

#[derive(Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct ServerConfig {
    /// The port to listen on
    #[arg(long, default_value = "8201")]
    pub port: u16,

    /// The location of the claims database
    #[arg(long, value_parser)]
    pub database_location: DatabaseLocation,

    /// JSON file holding the reward policy weights; when absent the ledger
    /// stays uninitialized until POST /initialize commits a policy
    #[arg(long)]
    pub policy_file: Option<String>,
}

impl ServerConfig {
    /// Policy committed at startup when the ledger has no genesis yet.
    pub fn startup_policy(&self) -> Result<Option<PolicyVector>> {
        match &self.policy_file {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                let weights: Vec<u64> = serde_json::from_str(&raw)?;
                Ok(Some(PolicyVector::new(weights)?))
            }
            None => Ok(None),
        }
    }
}

/// VerifierServer holds the claim engine, starting the Axum server in the
/// background. It provides a getter method for easy access to the inner
/// engine.
pub struct VerifierServer {
    engine: Arc<ClaimEngine>,
}

impl VerifierServer {
    /// Spawns an Axum server that serves the API endpoints.
    fn spawn_server(
        engine: Arc<ClaimEngine>,
        port: u16,
        join_set: &mut JoinSet<eyre::Result<()>>,
    ) -> Result<()> {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE, CONTENT_LENGTH])
            .allow_origin(Any);

        let app = Router::new()
            .route("/initialize", post(initialize))
            .route("/verify", post(verify_rewards_proof))
            .route("/claims", get(get_claims_for_author))
            .route("/policy", get(get_policy))
            .route("/health", get(health))
            .layer(cors)
            .with_state(engine);

        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        tracing::info!("Listening on {}", addr);

        join_set.spawn(async move {
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Server error: {:?}", e);
            }
            Ok(())
        });
        Ok(())
    }

    /// Asynchronously creates a new VerifierServer.
    ///
    /// Seeds the claim engine from the configured database, commits the
    /// policy file if one was given and the ledger has no genesis, and
    /// starts the HTTP server on the specified port in a background task.
    pub async fn start(config: ServerConfig, join_set: &mut JoinSet<eyre::Result<()>>) -> Result<Self> {
        let engine = Arc::new(ClaimEngine::seed(&config.database_location).await?);

        if !engine.is_initialized() {
            match config.startup_policy()? {
                Some(policy) => {
                    let signature = engine.initialize(policy).await?;
                    tracing::info!("Committed startup policy, genesis signature {signature}");
                }
                None => {
                    tracing::info!("Ledger not initialized, waiting for POST /initialize");
                }
            }
        }

        Self::spawn_server(engine.clone(), config.port, join_set)?;
        Ok(Self { engine })
    }

    /// Creates a new VerifierServer from an existing `Arc<ClaimEngine>` and
    /// the provided port, without touching the ledger genesis.
    pub async fn from_engine(
        engine: Arc<ClaimEngine>,
        port: u16,
        join_set: &mut JoinSet<eyre::Result<()>>,
    ) -> Result<Self> {
        Self::spawn_server(engine.clone(), port, join_set)?;
        Ok(Self { engine })
    }

    /// Returns a clone of the inner `Arc<ClaimEngine>`.
    pub fn engine(&self) -> Arc<ClaimEngine> {
        self.engine.clone()
    }
}

/// Starts the server and runs until one of its tasks exits.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let mut join_set = JoinSet::new();
    let _server = VerifierServer::start(config, &mut join_set).await?;

    while let Some(result) = join_set.join_next().await {
        result??;
    }
    Ok(())
}

fn engine_error_response(e: EngineError) -> (StatusCode, String) {
    match e {
        EngineError::Storage(_) | EngineError::VerifierTask(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, format!("{e}"))
        }
        _ => (StatusCode::BAD_REQUEST, format!("{e}")),
    }
}

#[derive(Deserialize, Serialize)]
pub struct InitializeRequest {
    pub policy: Vec<u64>,
}

#[derive(Deserialize, Serialize)]
pub struct InitializeResponse {
    pub signature: String,
}

/// Commits the reward policy as the ledger genesis. Returns 400 once a
/// genesis exists; the policy is committed exactly once per database.
#[axum::debug_handler]
async fn initialize(
    State(engine): State<Arc<ClaimEngine>>,
    Json(request): Json<InitializeRequest>,
) -> Result<Json<InitializeResponse>, (StatusCode, String)> {
    let policy = PolicyVector::new(request.policy)
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Invalid policy: {e}")))?;
    let signature = engine
        .initialize(policy)
        .await
        .map_err(engine_error_response)?;
    Ok(Json(InitializeResponse { signature }))
}

#[derive(Deserialize, Serialize)]
pub struct VerifyRequest {
    pub author: String,
    pub proof: RewardsProofBytes,
}

#[axum::debug_handler]
async fn verify_rewards_proof(
    State(engine): State<Arc<ClaimEngine>>,
    Json(request): Json<VerifyRequest>,
) -> Result<Json<ClaimRecord>, (StatusCode, String)> {
    let record = engine
        .verify_rewards_proof(&request.author, request.proof)
        .await
        .map_err(engine_error_response)?;
    Ok(Json(record))
}

#[derive(Deserialize, Serialize)]
struct ClaimsQuery {
    author: String,
    page: Option<u32>,
}

#[axum::debug_handler]
async fn get_claims_for_author(
    State(engine): State<Arc<ClaimEngine>>,
    axum::extract::Query(query): axum::extract::Query<ClaimsQuery>,
) -> Result<Json<Vec<ClaimRecord>>, (StatusCode, String)> {
    let claims = engine
        .get_claims_for_author(&query.author, query.page.unwrap_or(0), None)
        .await
        .map_err(engine_error_response)?;
    Ok(Json(claims))
}

#[axum::debug_handler]
async fn get_policy(
    State(engine): State<Arc<ClaimEngine>>,
) -> Result<Json<Vec<u64>>, (StatusCode, String)> {
    let policy = engine.policy().await.map_err(engine_error_response)?;
    Ok(Json(policy.weights().to_vec()))
}

#[axum::debug_handler]
async fn health() -> Result<Json<String>, (StatusCode, String)> {
    Ok(Json("OK".to_string()))
}
