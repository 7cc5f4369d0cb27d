use serde::de::IgnoredAny;
use url::form_urlencoded;

use crate::{
    errors::ApiError,
    types::{
        BackendTaskList, CreateTaskRequest, ListTasksQuery, Task, TaskList, TaskPayload,
        UpdateTaskRequest,
    },
};

use super::{ApiClient, RequestOptions};

/// Builds the `/tasks` path with its query string.
///
/// A limit or offset of zero is left out, same as an unset one.
pub fn tasks_path(query: &ListTasksQuery) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());
    if let Some(status) = query.status {
        params.append_pair("status", status.as_str());
    }
    if let Some(limit) = query.limit.filter(|l| *l > 0) {
        params.append_pair("limit", &limit.to_string());
    }
    if let Some(offset) = query.offset.filter(|o| *o > 0) {
        params.append_pair("offset", &offset.to_string());
    }

    let query_string = params.finish();
    if query_string.is_empty() {
        "/tasks".to_string()
    } else {
        format!("/tasks?{}", query_string)
    }
}

pub fn task_path(id: &str) -> String {
    format!("/tasks/{}", id)
}

pub fn toggle_path(id: &str) -> String {
    format!("/tasks/{}/toggle-status", id)
}

impl ApiClient {
    pub async fn list_tasks(&self, query: &ListTasksQuery) -> Result<TaskList, ApiError> {
        let list: BackendTaskList = self.request(&tasks_path(query), RequestOptions::get()).await?;
        Ok(list.into())
    }

    pub async fn create_task(&self, task: &CreateTaskRequest) -> Result<Task, ApiError> {
        let payload: TaskPayload = self
            .request("/tasks", RequestOptions::post().json(task)?)
            .await?;
        Ok(payload.task.into())
    }

    pub async fn get_task(&self, id: &str) -> Result<Task, ApiError> {
        let payload: TaskPayload = self.request(&task_path(id), RequestOptions::get()).await?;
        Ok(payload.task.into())
    }

    pub async fn update_task(&self, id: &str, task: &UpdateTaskRequest) -> Result<Task, ApiError> {
        let payload: TaskPayload = self
            .request(&task_path(id), RequestOptions::put().json(task)?)
            .await?;
        Ok(payload.task.into())
    }

    pub async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        self.request::<IgnoredAny>(&task_path(id), RequestOptions::delete())
            .await?;
        Ok(())
    }

    /// Flips the completion flag server-side.
    pub async fn toggle_task_completion(&self, id: &str) -> Result<Task, ApiError> {
        let payload: TaskPayload = self.request(&toggle_path(id), RequestOptions::patch()).await?;
        Ok(payload.task.into())
    }
}
