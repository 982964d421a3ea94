//! HTTP route handlers for Axum.

use askama::Template;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Form, Json,
};
use tracing::warn;

use crate::{
    api::types::{AnalysisDto, AnalyzeForm, AnalyzeRequest, EntityDto, ModelDto},
    nlp::{
        self,
        ner::Span,
        registry::ModelId,
        NerError,
    },
    render::{
        chart::{self, LabelCount},
        export, highlight,
        table::{self, TableRow},
    },
};

use super::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;
type PageResult = Result<Html<String>, (StatusCode, String)>;

const SAMPLE_TEXT: &str = "Apple Inc. is planning to open a new office in New York City \
next January. CEO Tim Cook announced this during his visit to Boston last week.";

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    models: Vec<ModelOption>,
    sample_text: &'static str,
}

struct ModelOption {
    id: String,
    description: String,
    available: bool,
    selected: bool,
}

#[derive(Template)]
#[template(path = "results.html")]
struct ResultsTemplate {
    model: String,
    text: String,
    error: Option<String>,
    highlight_html: String,
    rows: Vec<TableRow>,
    counts: Vec<LabelCount>,
}

pub async fn index(State(state): State<AppState>) -> PageResult {
    let models = ModelId::ALL
        .iter()
        .map(|id| ModelOption {
            id: id.to_string(),
            description: id.description().to_string(),
            available: state.registry.is_available(*id),
            selected: *id == state.settings.default_model,
        })
        .collect();
    render_page(IndexTemplate {
        models,
        sample_text: SAMPLE_TEXT,
    })
}

pub async fn analyze_page(
    State(state): State<AppState>,
    Form(form): Form<AnalyzeForm>,
) -> PageResult {
    let (model, outcome) = run_analysis(&state, &form.model, &form.text);
    let (error, spans) = match outcome {
        Ok(spans) => (None, spans),
        Err(err) => {
            warn!(%err, "analysis failed");
            (Some(user_message(&err)), Vec::new())
        }
    };
    render_page(ResultsTemplate {
        model,
        highlight_html: highlight::render(&form.text, &spans),
        rows: table::rows(&spans),
        counts: chart::label_counts(&spans),
        text: form.text,
        error,
    })
}

pub async fn export_csv(
    State(state): State<AppState>,
    Form(form): Form<AnalyzeForm>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let (_, outcome) = run_analysis(&state, &form.model, &form.text);
    let spans = outcome.map_err(reject)?;
    let bytes =
        export::to_csv(&spans).map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"entities.csv\"",
            ),
        ],
        bytes,
    ))
}

pub async fn list_models(State(state): State<AppState>) -> ApiResult<Vec<ModelDto>> {
    let models = ModelId::ALL
        .iter()
        .map(|id| ModelDto {
            id: id.to_string(),
            description: id.description().to_string(),
            available: state.registry.is_available(*id),
        })
        .collect();
    Ok(Json(models))
}

pub async fn analyze_json(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<AnalysisDto> {
    let model_raw = request
        .model
        .unwrap_or_else(|| state.settings.default_model.to_string());
    let (model, outcome) = run_analysis(&state, &model_raw, &request.text);
    let spans = outcome.map_err(reject)?;
    let entities = spans
        .iter()
        .map(|span| EntityDto {
            text: span.text.clone(),
            label: span.label.clone(),
            start: span.start,
            end: span.end,
        })
        .collect();
    Ok(Json(AnalysisDto {
        model,
        entity_count: spans.len(),
        entities,
        label_counts: chart::label_counts(&spans),
    }))
}

fn run_analysis(
    state: &AppState,
    model_raw: &str,
    text: &str,
) -> (String, Result<Vec<Span>, NerError>) {
    match model_raw.parse::<ModelId>() {
        Ok(model) => (model.to_string(), nlp::analyze(&state.registry, model, text)),
        Err(err) => (model_raw.to_string(), Err(err)),
    }
}

/// Message shown inline on the results page.
fn user_message(err: &NerError) -> String {
    match err {
        NerError::ModelUnavailable(_)
        | NerError::UnknownModel(_)
        | NerError::EmptyInput
        | NerError::InputTooLong(_) => err.to_string(),
        _ => "Analysis failed. Check the server logs for details.".to_string(),
    }
}

fn reject(err: NerError) -> (StatusCode, String) {
    match err {
        NerError::ModelUnavailable(_) | NerError::UnknownModel(_) => {
            (StatusCode::NOT_FOUND, err.to_string())
        }
        NerError::EmptyInput | NerError::InputTooLong(_) => {
            (StatusCode::BAD_REQUEST, err.to_string())
        }
        other => {
            warn!(%other, "analysis failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "analysis failed".to_string())
        }
    }
}

fn render_page<T: Template>(page: T) -> PageResult {
    page.render()
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}
