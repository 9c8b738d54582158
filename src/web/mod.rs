//! Web front end.
//!
//! An axum router over any [`TaskOperations`] implementation. Pages are
//! server-rendered HTML; every mutating route redirects back to the listing
//! with a notice describing the outcome.
//!
//! | Route                | Purpose                                  |
//! |----------------------|------------------------------------------|
//! | `GET /`              | listing, `?sort=true`, `?category=Work`  |
//! | `POST /`             | add a task                               |
//! | `POST /complete/{id}`| mark completed                           |
//! | `POST /delete/{id}`  | delete                                   |
//! | `GET /update/{id}`   | edit form                                |
//! | `POST /update/{id}`  | save edits                               |

pub mod handlers;
pub mod html;
pub mod notice;

use crate::libs::messages::Message;
use crate::libs::operations::TaskOperations;
use crate::msg_info;
use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub struct AppState<O> {
    pub tasks: Arc<O>,
    pub categories: Arc<Vec<String>>,
}

impl<O> Clone for AppState<O> {
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            categories: Arc::clone(&self.categories),
        }
    }
}

pub fn router<O: TaskOperations + 'static>(tasks: Arc<O>, categories: Vec<String>) -> Router {
    let state = AppState {
        tasks,
        categories: Arc::new(categories),
    };

    Router::new()
        .route("/", get(handlers::index::<O>).post(handlers::create::<O>))
        .route("/complete/{id}", post(handlers::complete::<O>))
        .route("/delete/{id}", post(handlers::delete::<O>))
        .route("/update/{id}", get(handlers::edit::<O>).post(handlers::update::<O>))
        .route("/static/scripts.js", get(handlers::scripts))
        .with_state(state)
}

/// Binds `addr` and serves until the process is stopped.
pub async fn serve<O: TaskOperations + 'static>(addr: &str, tasks: Arc<O>, categories: Vec<String>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!("task web interface listening on http://{local_addr}");
    msg_info!(Message::ServerListening(local_addr.to_string()));
    axum::serve(listener, router(tasks, categories)).await?;

    Ok(())
}
