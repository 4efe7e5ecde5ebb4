//! Controller skeleton.

/// Skeleton for `src/controllers/<entity>.rs` in the target project: list
/// with pagination and filtering, plus show/new/create/edit/update/delete
/// and bulk delete depending on the configured toggles.
pub const CONTROLLER: &str = r##"//! {{title}} handlers generated by crudgen.

use askama::Template;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
{{#if route_annotation}}
use axum::routing::{get{{#if with_write}}, post{{/if}}};
use axum::Router;
{{/if}}
{{#if with_write}}
use axum::Form;
use validator::Validate;
{{/if}}
use serde::Deserialize;

{{#if filter_form}}
use crate::filters::{{entity_snake}}::{{entity_name}}Filter;
{{/if}}
{{#if with_write}}
use crate::forms::{{entity_snake}}::{{entity_name}}Form;
{{/if}}
use crate::models::{{entity_snake}}::{{entity_name}};
use crate::state::AppState;

const PAGE_SIZE: i64 = 25;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
{{#if filter_input}}
    pub q: Option<String>,
{{/if}}
{{#if filter_form}}
    #[serde(flatten)]
    pub filter: {{entity_name}}Filter,
{{/if}}
}

#[derive(Template)]
#[template(path = "{{entity_snake}}/index.html")]
struct IndexTemplate {
    items: Vec<{{entity_name}}>,
    page: i64,
    page_count: i64,
}

/// GET /{{route_prefix}}
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let page = params.page.unwrap_or(1).max(1);
    let offset = (page - 1) * PAGE_SIZE;

{{#if filter_form}}
    let items = if params.filter.is_empty() {
        {{entity_name}}::page(&state.db, PAGE_SIZE, offset).await
    } else {
        {{entity_name}}::filtered(&state.db, &params.filter, PAGE_SIZE, offset).await
    }
    .unwrap_or_default();
{{/if}}
{{#if filter_input}}
    let items = match params.q.as_deref().filter(|q| !q.is_empty()) {
        Some(q) => {{entity_name}}::search(&state.db, q, PAGE_SIZE, offset).await,
        None => {{entity_name}}::page(&state.db, PAGE_SIZE, offset).await,
    }
    .unwrap_or_default();
{{/if}}
{{#if filter_none}}
    let items = {{entity_name}}::page(&state.db, PAGE_SIZE, offset)
        .await
        .unwrap_or_default();
{{/if}}

    let total = {{entity_name}}::count(&state.db).await.unwrap_or(0);
    let page_count = ((total + PAGE_SIZE - 1) / PAGE_SIZE).max(1);

    IndexTemplate { items, page, page_count }
}
{{#if with_show}}

#[derive(Template)]
#[template(path = "{{entity_snake}}/show.html")]
struct ShowTemplate {
    item: {{entity_name}},
}

/// GET /{{route_prefix}}/:id
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match {{entity_name}}::find(&state.db, id).await {
        Ok(item) => ShowTemplate { item }.into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}
{{/if}}
{{#if with_write}}

#[derive(Template)]
#[template(path = "{{entity_snake}}/new.html")]
struct NewTemplate {
    form: {{entity_name}}Form,
}

/// GET /{{route_prefix}}/new
pub async fn new() -> impl IntoResponse {
    NewTemplate {
        form: {{entity_name}}Form::default(),
    }
}

/// POST /{{route_prefix}}
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<{{entity_name}}Form>,
) -> Response {
    if let Err(errors) = form.validate() {
        tracing::debug!(?errors, "rejected invalid {{humanize_lc entity_name}} payload");
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }
    match {{entity_name}}::insert(&state.db, &form).await {
{{#if with_show}}
        Ok(id) => Redirect::to(&format!("/{{route_prefix}}/{id}")).into_response(),
{{else}}
        Ok(_) => Redirect::to("/{{route_prefix}}").into_response(),
{{/if}}
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[derive(Template)]
#[template(path = "{{entity_snake}}/edit.html")]
struct EditTemplate {
    item: {{entity_name}},
}

/// GET /{{route_prefix}}/:id/edit
pub async fn edit(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match {{entity_name}}::find(&state.db, id).await {
        Ok(item) => EditTemplate { item }.into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

/// POST /{{route_prefix}}/:id/edit
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<{{entity_name}}Form>,
) -> Response {
    if form.validate().is_err() {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }
    match {{entity_name}}::update(&state.db, id, &form).await {
        Ok(()) => Redirect::to("/{{route_prefix}}").into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

/// POST /{{route_prefix}}/:id/delete
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match {{entity_name}}::delete(&state.db, id).await {
        Ok(()) => Redirect::to("/{{route_prefix}}").into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
{{/if}}
{{#if with_bulk}}

#[derive(Debug, Deserialize)]
pub struct BulkDeleteForm {
    #[serde(default)]
    pub ids: Vec<i64>,
}

/// POST /{{route_prefix}}/bulk-delete
pub async fn bulk_delete(
    State(state): State<AppState>,
    Form(form): Form<BulkDeleteForm>,
) -> Response {
    for id in form.ids {
        if let Err(error) = {{entity_name}}::delete(&state.db, id).await {
            tracing::warn!(%id, %error, "bulk delete failed");
        }
    }
    Redirect::to("/{{route_prefix}}").into_response()
}
{{/if}}
{{#if route_annotation}}

/// Routes for the {{humanize_lc entity_name}} module.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{{route_prefix}}", get(index){{#if with_write}}.post(create){{/if}})
{{#if with_write}}
        .route("/{{route_prefix}}/new", get(new))
{{/if}}
{{#if with_show}}
        .route("/{{route_prefix}}/:id", get(show))
{{/if}}
{{#if with_write}}
        .route("/{{route_prefix}}/:id/edit", get(edit).post(update))
        .route("/{{route_prefix}}/:id/delete", post(delete))
{{/if}}
{{#if with_bulk}}
        .route("/{{route_prefix}}/bulk-delete", post(bulk_delete))
{{/if}}
}
{{/if}}
"##;
