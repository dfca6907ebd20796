//! HTTP API surface.
//!
//! Thin JSON adapters over the core engine; all state lives in the request,
//! so any instance can answer any call.

use anyhow::Context;
use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{catalog, tutor};
use ruffini_core::{CalcError, calculate, parse};

#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    pub polynomial: String,
    pub root: f64,
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub polynomial: String,
}

#[derive(Debug, Deserialize)]
pub struct TutorRequest {
    pub question: String,
}

pub async fn handle_calculate(Json(req): Json<CalculateRequest>) -> Json<Value> {
    match calculate(&req.polynomial, req.root) {
        Ok(calc) => {
            let explanation = tutor::explain_calculation(&calc);
            Json(json!({
                "success": true,
                "polynomial": calc.polynomial,
                "root": calc.root,
                "coefficients": calc.coefficients,
                "quotient_coefficients": calc.quotient_coefficients,
                "quotient": calc.quotient,
                "remainder": calc.remainder,
                "steps": calc.steps,
                "explanation": explanation,
            }))
        }
        Err(error) => {
            tracing::error!(%error, polynomial = %req.polynomial, "calculation failed");
            Json(json!({
                "success": false,
                "error": error.to_string(),
                "help": tutor::error_help(&error, &req.polynomial),
            }))
        }
    }
}

pub async fn handle_validate(Json(req): Json<ValidateRequest>) -> Json<Value> {
    match parse(&req.polynomial) {
        Ok(poly) => {
            let analysis = tutor::describe(&poly);
            Json(json!({
                "valid": true,
                "polynomial": req.polynomial,
                "coefficients": poly.coefficients(),
                "degree": poly.degree(),
                "formatted": poly.to_string(),
                "analysis": analysis,
            }))
        }
        Err(error) => {
            let error = CalcError::from(error);
            Json(json!({
                "valid": false,
                "error": error.to_string(),
                "suggestions": tutor::suggestions(&req.polynomial, &error),
            }))
        }
    }
}

pub async fn handle_examples() -> Json<Value> {
    let examples: Vec<Value> = catalog::EXAMPLES
        .iter()
        .map(|e| {
            json!({
                "title": e.title,
                "polynomial": e.polynomial,
                "root": e.root,
                "description": e.description,
                "difficulty": e.difficulty,
            })
        })
        .collect();
    Json(json!(examples))
}

pub async fn handle_tutor(Json(req): Json<TutorRequest>) -> Json<Value> {
    Json(json!({
        "success": true,
        "response": tutor::reply(&req.question),
    }))
}

pub fn router() -> Router {
    Router::new()
        .route("/calculate", post(handle_calculate))
        .route("/validate", post(handle_validate))
        .route("/examples", get(handle_examples))
        .route("/tutor", post(handle_tutor))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind and serve until ctrl-c.
pub async fn serve(bind: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("cannot bind {bind}"))?;
    tracing::info!("listening on http://{bind}");
    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "cannot install ctrl-c handler");
    }
}
