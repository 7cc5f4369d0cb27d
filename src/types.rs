use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

use crate::{
    errors::{ApiError, GENERIC_ERROR_CODE, REQUEST_FAILED_MESSAGE},
    utils,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task record as the backend sends it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BackendTask {
    pub id: i64,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_completed: bool,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: Priority,
}

/// Task as the rest of the application sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Priority,
}

impl From<BackendTask> for Task {
    fn from(task: BackendTask) -> Self {
        Task {
            id: task.id.to_string(),
            user_id: task.user_id,
            title: task.title,
            description: task.description,
            is_completed: task.is_completed,
            created_at: task.created_at,
            updated_at: task.updated_at,
            due_date: task.due_date,
            priority: task.priority,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendTaskList {
    pub tasks: Vec<BackendTask>,
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskList {
    pub tasks: Vec<Task>,
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
}

impl From<BackendTaskList> for TaskList {
    fn from(list: BackendTaskList) -> Self {
        TaskList {
            tasks: list.tasks.into_iter().map(Task::from).collect(),
            total: list.total,
            limit: list.limit,
            offset: list.offset,
        }
    }
}

/// Single-task payload (`{ "task": ... }`) returned by create, read, update
/// and toggle.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskPayload {
    pub task: BackendTask,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TaskStatusFilter {
    All,
    Active,
    Completed,
}

impl TaskStatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatusFilter::All => "all",
            TaskStatusFilter::Active => "active",
            TaskStatusFilter::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTasksQuery {
    pub status: Option<TaskStatusFilter>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl UpdateTaskRequest {
    pub fn is_empty(&self) -> bool {
        *self == UpdateTaskRequest::default()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// The `{ success, data?, error? }` envelope every backend route answers with.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ErrorBody>,
}

impl<T> ApiResponse<T>
where
    T: for<'de> Deserialize<'de>,
{
    /// Converts the envelope into a `Result`.
    ///
    /// A successful envelope without `data` yields the payload decoded from
    /// `null`, which is what unit payloads (logout, delete) look like.
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.success {
            let error = self.error.unwrap_or_default();
            return Err(ApiError::Application {
                code: if error.code.is_empty() {
                    GENERIC_ERROR_CODE.to_string()
                } else {
                    error.code
                },
                message: if error.message.is_empty() {
                    REQUEST_FAILED_MESSAGE.to_string()
                } else {
                    error.message
                },
            });
        }

        match self.data {
            Some(data) => Ok(data),
            None => Ok(serde_json::from_value(serde_json::Value::Null)?),
        }
    }
}

#[derive(Tabled)]
pub struct TaskTableRow {
    pub id: String,
    pub done: String,
    pub title: String,
    pub priority: String,
    pub due: String,
}

impl From<&Task> for TaskTableRow {
    fn from(task: &Task) -> Self {
        TaskTableRow {
            id: task.id.clone(),
            done: if task.is_completed { "✓" } else { "" }.to_string(),
            title: task.title.clone(),
            priority: task.priority.to_string(),
            due: task
                .due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    utils::parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}

// null and "" both mean "no date"
fn deserialize_optional_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => utils::parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}"))),
        _ => Ok(None),
    }
}
