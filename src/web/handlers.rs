//! Request handlers.
//!
//! Store calls are synchronous, so each one runs on the blocking pool. A store
//! failure becomes a 500; invalid form input re-renders the page with 422.

use super::html::{self, FormValues, IndexPage};
use super::notice::{Banner, Notice};
use super::AppState;
use crate::libs::operations::TaskOperations;
use crate::libs::task::ALL_CATEGORIES;
use crate::libs::validation::TaskInput;
use axum::extract::{Form, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    sort: Option<String>,
    category: Option<String>,
    notice: Option<String>,
}

impl ListQuery {
    fn sort_by_due_date(&self) -> bool {
        self.sort.as_deref() == Some("true")
    }

    fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(ALL_CATEGORIES)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TaskForm {
    description: String,
    due_date: String,
    category: String,
}

impl TaskForm {
    fn values(&self) -> FormValues {
        FormValues {
            description: self.description.clone(),
            due_date: self.due_date.clone(),
            category: self.category.clone(),
        }
    }
}

/// A storage failure; answered with 500.
#[derive(Debug)]
pub struct WebError(anyhow::Error);

impl From<anyhow::Error> for WebError {
    fn from(error: anyhow::Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

/// Runs a store call on the blocking pool.
async fn run<O, T, F>(tasks: &Arc<O>, f: F) -> Result<T, WebError>
where
    O: TaskOperations + 'static,
    T: Send + 'static,
    F: FnOnce(&O) -> anyhow::Result<T> + Send + 'static,
{
    let tasks = Arc::clone(tasks);
    let result = tokio::task::spawn_blocking(move || f(tasks.as_ref())).await.map_err(anyhow::Error::from)?;
    Ok(result?)
}

async fn render_index<O: TaskOperations + 'static>(state: &AppState<O>, query: &ListQuery, banner: Option<Banner>, form: FormValues) -> Result<String, WebError> {
    let category = query.category().to_string();
    let sort_by_due_date = query.sort_by_due_date();
    let tasks = {
        let category = category.clone();
        run(&state.tasks, move |ops| ops.listing(&category, sort_by_due_date)).await?
    };

    Ok(html::index_page(&IndexPage {
        tasks: &tasks,
        categories: &state.categories,
        category_filter: &category,
        sort_by_due_date,
        banner,
        form,
    }))
}

fn empty_form<O>(state: &AppState<O>) -> FormValues {
    FormValues {
        category: state.categories.first().cloned().unwrap_or_default(),
        ..FormValues::default()
    }
}

pub async fn index<O: TaskOperations + 'static>(State(state): State<AppState<O>>, Query(query): Query<ListQuery>) -> Result<Html<String>, WebError> {
    let banner = query.notice.as_deref().and_then(Notice::from_key).map(|notice| notice.banner());
    let form = empty_form(&state);

    Ok(Html(render_index(&state, &query, banner, form).await?))
}

pub async fn create<O: TaskOperations + 'static>(State(state): State<AppState<O>>, Query(query): Query<ListQuery>, Form(form): Form<TaskForm>) -> Result<Response, WebError> {
    let input = match TaskInput::parse_with_categories(&form.description, &form.due_date, &form.category, &state.categories) {
        Ok(input) => input,
        Err(e) => {
            let page = render_index(&state, &query, Some(Banner::error(e.to_string())), form.values()).await?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response());
        }
    };

    let id = run(&state.tasks, move |ops| ops.add(&input.description, &input.due_date, &input.category)).await?;
    tracing::info!(id, "task added");

    Ok(Redirect::to(&Notice::TaskAdded.redirect_target()).into_response())
}

pub async fn complete<O: TaskOperations + 'static>(State(state): State<AppState<O>>, Path(id): Path<i64>) -> Result<Redirect, WebError> {
    let notice = if run(&state.tasks, move |ops| ops.complete(id)).await? {
        Notice::TaskCompleted
    } else {
        Notice::TaskNotFound
    };

    Ok(Redirect::to(&notice.redirect_target()))
}

pub async fn delete<O: TaskOperations + 'static>(State(state): State<AppState<O>>, Path(id): Path<i64>) -> Result<Redirect, WebError> {
    let notice = if run(&state.tasks, move |ops| ops.delete(id)).await? {
        Notice::TaskDeleted
    } else {
        Notice::TaskNotFound
    };

    Ok(Redirect::to(&notice.redirect_target()))
}

/// First step of an update: the form prefilled with the task's values.
pub async fn edit<O: TaskOperations + 'static>(State(state): State<AppState<O>>, Path(id): Path<i64>) -> Result<Response, WebError> {
    match run(&state.tasks, move |ops| ops.get(id)).await? {
        Some(task) => Ok(Html(html::update_page(id, &FormValues::from(&task), &state.categories, None)).into_response()),
        None => Ok(Redirect::to(&Notice::TaskNotFound.redirect_target()).into_response()),
    }
}

pub async fn update<O: TaskOperations + 'static>(State(state): State<AppState<O>>, Path(id): Path<i64>, Form(form): Form<TaskForm>) -> Result<Response, WebError> {
    if run(&state.tasks, move |ops| ops.get(id)).await?.is_none() {
        return Ok(Redirect::to(&Notice::TaskNotFound.redirect_target()).into_response());
    }

    let input = match TaskInput::parse_with_categories(&form.description, &form.due_date, &form.category, &state.categories) {
        Ok(input) => input,
        Err(e) => {
            let page = html::update_page(id, &form.values(), &state.categories, Some(&Banner::error(e.to_string())));
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response());
        }
    };

    let notice = if run(&state.tasks, move |ops| ops.update(id, &input.description, &input.due_date, &input.category)).await? {
        Notice::TaskUpdated
    } else {
        Notice::TaskNotFound
    };

    Ok(Redirect::to(&notice.redirect_target()).into_response())
}

pub async fn scripts() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], html::SCRIPTS_JS)
}
