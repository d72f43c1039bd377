/* src/server/adapter/axum/src/handler/page.rs */

use std::sync::Arc;

use axum::extract::rejection::PathRejection;
use axum::extract::{MatchedPath, Path, State};
use axum::response::Html;
use tokio::task::JoinSet;
use waypoint_server::serde_json::{Map, Value};
use waypoint_server::waypoint_content::NOT_FOUND_MESSAGE;
use waypoint_server::{
  Document, PageDef, RouteParams, WaypointError, page_body, page_title, render_document,
};

use super::AppState;
use crate::error::AxumError;

type PageData = Map<String, Value>;

/// Run page loaders concurrently and collect keyed results.
/// The first failure aborts the rest and fails the page.
async fn run_loaders(page: &PageDef, params: &RouteParams) -> Result<PageData, WaypointError> {
  let mut join_set = JoinSet::new();

  for loader in &page.loaders {
    let fut = (loader.loader)(params.clone());
    let data_key = loader.data_key.clone();
    join_set.spawn(async move { fut.await.map(|value| (data_key, value)) });
  }

  let mut data = Map::new();
  while let Some(result) = join_set.join_next().await {
    // JoinError means a loader panicked
    let (key, value) = result.map_err(|e| WaypointError::internal(e.to_string()))??;
    data.insert(key, value);
  }
  Ok(data)
}

type ParamsResult = Result<Path<RouteParams>, PathRejection>;

/// Pages without route params see an empty map. Params that cannot be decoded
/// (e.g. invalid UTF-8) cannot name a record, so they miss like any unknown key.
fn route_params(params: ParamsResult) -> Result<RouteParams, WaypointError> {
  match params {
    Ok(Path(params)) => Ok(params),
    Err(PathRejection::MissingPathParams(_)) => Ok(RouteParams::new()),
    Err(rejection) => {
      tracing::debug!(%rejection, "undecodable route params");
      Err(WaypointError::not_found(NOT_FOUND_MESSAGE))
    }
  }
}

async fn load_page(
  state: &AppState,
  matched: &MatchedPath,
  params: ParamsResult,
) -> Result<(Arc<PageDef>, RouteParams, PageData), WaypointError> {
  let page = state
    .pages
    .get(matched.as_str())
    .cloned()
    .ok_or_else(|| WaypointError::not_found("Page not found"))?;
  let params = route_params(params)?;
  let data = run_loaders(&page, &params).await?;
  Ok((page, params, data))
}

pub(super) async fn handle_page(
  State(state): State<Arc<AppState>>,
  matched: MatchedPath,
  params: ParamsResult,
) -> Result<Html<String>, AxumError> {
  let (page, params, data) = load_page(&state, &matched, params).await?;

  let title = page_title(&data).unwrap_or("Waypoint").to_string();
  let body = page_body(&data).to_string();
  let data = Value::Object(data);
  let html = render_document(&Document {
    lang: params.get("lang").map(String::as_str),
    title: &title,
    body: &body,
    data_id: &page.data_id,
    data: &data,
  });
  Ok(Html(html))
}

pub(super) async fn handle_data(
  State(state): State<Arc<AppState>>,
  matched: MatchedPath,
  params: ParamsResult,
) -> Result<axum::Json<Value>, AxumError> {
  let (_, _, data) = load_page(&state, &matched, params).await?;
  Ok(axum::Json(Value::Object(data)))
}
