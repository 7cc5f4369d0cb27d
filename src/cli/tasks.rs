use tabled::Table;

use crate::{
    client::ApiClient,
    error, info, success,
    types::{
        CreateTaskRequest, ListTasksQuery, Priority, Task, TaskStatusFilter, TaskTableRow,
        UpdateTaskRequest,
    },
    utils, warning,
};

pub async fn list_tasks(status: Option<TaskStatusFilter>, limit: Option<u32>, offset: Option<u32>) {
    let client = ApiClient::from_env();
    let query = ListTasksQuery {
        status,
        limit,
        offset,
    };

    let pb = super::spinner("Fetching tasks...");
    let result = client.list_tasks(&query).await;
    pb.finish_and_clear();

    let mut page = match result {
        Ok(page) => page,
        Err(e) => error!("Failed to load tasks. Err: {}", e),
    };

    if page.tasks.is_empty() {
        info!("No tasks found.");
        return;
    }

    let shown = page.tasks.len();
    utils::sort_tasks(&mut page.tasks);
    let rows: Vec<TaskTableRow> = page.tasks.iter().map(TaskTableRow::from).collect();
    println!("{}", Table::new(rows));
    info!(
        "Showing {} of {} tasks (offset {})",
        shown, page.total, page.offset
    );
}

pub async fn add_task(
    title: String,
    description: Option<String>,
    due: Option<String>,
    priority: Option<Priority>,
) {
    let due_date = match due.as_deref().map(utils::parse_due_date).transpose() {
        Ok(d) => d,
        Err(e) => error!("{}", e),
    };

    let request = CreateTaskRequest {
        title,
        description,
        due_date,
        priority,
    };

    match ApiClient::from_env().create_task(&request).await {
        Ok(task) => success!("Created task {} \"{}\"", task.id, task.title),
        Err(e) => error!("Failed to create task. Err: {}", e),
    }
}

pub async fn show_task(id: String) {
    match ApiClient::from_env().get_task(&id).await {
        Ok(task) => print_task(&task),
        Err(e) => error!("Failed to load task {}. Err: {}", id, e),
    }
}

pub async fn update_task(
    id: String,
    title: Option<String>,
    description: Option<String>,
    completed: Option<bool>,
    due: Option<String>,
    priority: Option<Priority>,
) {
    let due_date = match due.as_deref().map(utils::parse_due_date).transpose() {
        Ok(d) => d,
        Err(e) => error!("{}", e),
    };

    let request = UpdateTaskRequest {
        title,
        description,
        is_completed: completed,
        due_date,
        priority,
    };
    if request.is_empty() {
        warning!("Nothing to update, pass at least one field.");
        return;
    }

    match ApiClient::from_env().update_task(&id, &request).await {
        Ok(task) => success!("Updated task {} \"{}\"", task.id, task.title),
        Err(e) => error!("Failed to update task {}. Err: {}", id, e),
    }
}

pub async fn delete_task(id: String) {
    match ApiClient::from_env().delete_task(&id).await {
        Ok(()) => success!("Deleted task {}", id),
        Err(e) => error!("Failed to delete task {}. Err: {}", id, e),
    }
}

pub async fn toggle_task(id: String) {
    match ApiClient::from_env().toggle_task_completion(&id).await {
        Ok(task) if task.is_completed => success!("Task {} marked as done", task.id),
        Ok(task) => success!("Task {} reopened", task.id),
        Err(e) => error!("Failed to toggle task {}. Err: {}", id, e),
    }
}

fn print_task(task: &Task) {
    println!("{} {}", task.id, task.title);
    println!(
        "  status:    {}",
        if task.is_completed { "done" } else { "open" }
    );
    println!("  priority:  {}", task.priority);
    if let Some(due) = task.due_date {
        println!("  due:       {}", due.format("%Y-%m-%d %H:%M UTC"));
    }
    println!("  created:   {}", task.created_at.format("%Y-%m-%d %H:%M UTC"));
    println!("  updated:   {}", task.updated_at.format("%Y-%m-%d %H:%M UTC"));
    if let Some(description) = task.description.as_deref().filter(|d| !d.is_empty()) {
        println!();
        println!("{}", description);
    }
}
