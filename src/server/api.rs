use crate::agent::ChatAgent;
use crate::config::{ creator, VERSION };
use crate::error::ApiError;
use crate::models::api::{
    AnalyzeCodeRequest,
    AnalyzeCodeResponse,
    ChatRequest,
    ResetResponse,
    SolveMathRequest,
    SolveMathResponse,
    StatusResponse,
};
use std::sync::Arc;
use axum::{
    body::Body,
    extract::{ rejection::JsonRejection, State },
    http::{ header, Response, StatusCode },
    response::IntoResponse,
    routing::{ get, post },
    Json,
    Router,
};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{ Any, CorsLayer };
use log::{ debug, error, info, warn };

#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<ChatAgent>,
}

impl AppState {
    pub fn new(agent: ChatAgent) -> Self {
        Self { agent: Arc::new(agent) }
    }
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        .route("/chat", post(chat_handler))
        .route("/analyze-code", post(analyze_code_handler))
        .route("/solve-math", post(solve_math_handler))
        .route("/config", get(config_handler))
        .route("/status", get(status_handler))
        .route("/reset", post(reset_handler))
        .route("/creator", get(creator_handler))
        .method_not_allowed_fallback(method_not_allowed_handler);

    Router::new()
        .nest("/ai", routes)
        .fallback(not_found_handler)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .with_state(state)
}

fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection.body_text());
            Err(ApiError::InvalidBody(rejection.body_text()))
        }
    }
}

async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>
) -> Result<impl IntoResponse, ApiError> {
    let req = parse_body(payload)?;
    let message = req.message.unwrap_or_default();
    if message.is_empty() {
        warn!("Chat request without a message");
        return Err(ApiError::MissingField("message"));
    }

    let history = req.history.unwrap_or_default();
    let outcome = state.agent.process_message(&message, history);
    Ok(Json(outcome))
}

async fn analyze_code_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeCodeRequest>, JsonRejection>
) -> Result<impl IntoResponse, ApiError> {
    let req = parse_body(payload)?;
    let language = req.language.unwrap_or_else(|| "unknown".to_string());
    debug!(
        "Code analysis requested for '{}' ({} bytes of code)",
        language,
        req.code.as_deref().map(str::len).unwrap_or(0)
    );

    let analysis = state.agent.analyze_code(&language).map_err(|e| {
        error!("Code analysis failed: {}", e);
        ApiError::Internal
    })?;

    Ok(Json(AnalyzeCodeResponse {
        success: true,
        analysis,
        language,
    }))
}

async fn solve_math_handler(
    State(state): State<AppState>,
    payload: Result<Json<SolveMathRequest>, JsonRejection>
) -> Result<impl IntoResponse, ApiError> {
    let req = parse_body(payload)?;
    let problem = req.problem.unwrap_or_default();

    let solution = state.agent.solve_math(&problem).map_err(|e| {
        error!("Math solving failed: {}", e);
        ApiError::Internal
    })?;

    Ok(Json(SolveMathResponse {
        success: true,
        solution,
    }))
}

async fn config_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.agent.config().clone())
}

async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    let config = state.agent.config();
    Json(StatusResponse {
        status: "online",
        model: config.model_name().to_string(),
        version: VERSION,
        capabilities: config.capability_names(),
    })
}

async fn reset_handler() -> impl IntoResponse {
    // History lives with the caller; there is nothing server-side to drop.
    info!("Conversation reset requested");
    Json(ResetResponse {
        success: true,
        message: "Conversation history cleared".into(),
    })
}

async fn creator_handler() -> impl IntoResponse {
    Json(creator())
}

async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": ApiError::NotFound.to_string() })))
}

async fn method_not_allowed_handler() -> impl IntoResponse {
    ApiError::MethodNotAllowed
}

fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("Request handler panicked: {}", detail);

    let body = json!({ "error": ApiError::Internal.to_string() }).to_string();
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::empty()))
}
