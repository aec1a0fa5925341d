mod common;

use axum::http::Method;
use chrono::NaiveDate;
use common::backend::spawn_backend;
use taskaz::api::{
    ApiError, HttpClient, TaskApi, TaskDraft, TaskId, TaskListApi, TaskListDraft, TaskListId, TaskPriority, TaskStatus,
};

fn list_draft(title: &str) -> TaskListDraft {
    TaskListDraft {
        title: title.to_string(),
        description: None,
    }
}

fn task_draft(title: &str, priority: TaskPriority) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        description: None,
        due_date: None,
        priority,
        status: TaskStatus::Open,
    }
}

#[tokio::test]
async fn test_created_list_appears_with_zero_tasks() {
    let (base_url, _backend) = spawn_backend().await;
    let client = HttpClient::new(&base_url).unwrap();

    let created = client.create_task_list(&list_draft("Groceries")).await.unwrap();
    assert_eq!(created.title, "Groceries");

    let task_lists = client.list_task_lists().await.unwrap();
    let groceries = task_lists
        .iter()
        .find(|task_list| task_list.title == "Groceries")
        .expect("created list is listed");
    assert_eq!(groceries.id, created.id);
    assert_eq!(groceries.task_count(), 0);
    assert_eq!(groceries.progress().percent(), 0);
}

#[tokio::test]
async fn test_empty_list_with_nan_progress_still_loads() {
    let (base_url, _backend) = spawn_backend().await;
    let client = HttpClient::new(&base_url).unwrap();

    let created = client.create_task_list(&list_draft("Someday")).await.unwrap();

    // Without tasks the backend reports progress as "NaN"
    let raw: serde_json::Value = reqwest::get(format!("{}/task-lists/{}", base_url, created.id.0))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(raw["progress"], "NaN");

    let task_lists = client.list_task_lists().await.unwrap();
    assert_eq!(task_lists.len(), 1);
    assert_eq!(task_lists[0].progress, None);

    let fetched = client.get_task_list(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.progress().percent(), 0);

    let renamed = client
        .update_task_list(created.id, &list_draft("Someday maybe"))
        .await
        .unwrap();
    assert_eq!(renamed.title, "Someday maybe");
    assert_eq!(renamed.progress().percent(), 0);
}

#[tokio::test]
async fn test_new_task_starts_open() {
    let (base_url, _backend) = spawn_backend().await;
    let client = HttpClient::new(&base_url).unwrap();

    let task_list = client.create_task_list(&list_draft("Errands")).await.unwrap();
    let draft = TaskDraft {
        status: TaskStatus::Closed,
        ..task_draft("Post office", TaskPriority::High)
    };
    let task = client.create_task(task_list.id, &draft).await.unwrap();
    assert_eq!(task.status, TaskStatus::Open);

    let stored = client.get_task(task_list.id, task.id).await.unwrap().unwrap();
    assert_eq!(stored.status, TaskStatus::Open);
}

#[tokio::test]
async fn test_toggle_keeps_priority() {
    let (base_url, _backend) = spawn_backend().await;
    let client = HttpClient::new(&base_url).unwrap();

    let task_list = client.create_task_list(&list_draft("Chores")).await.unwrap();
    let task = client
        .create_task(task_list.id, &task_draft("Vacuum", TaskPriority::Low))
        .await
        .unwrap();
    assert_eq!(task.status, TaskStatus::Open);
    assert_eq!(task.due_date, None);

    client
        .update_task(task_list.id, task.id, &TaskDraft::toggled(&task))
        .await
        .unwrap();

    let tasks = client.list_tasks(task_list.id).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].status, TaskStatus::Closed);
    assert_eq!(tasks[0].priority, TaskPriority::Low);
    assert_eq!(tasks[0].title, "Vacuum");

    // One of one closed
    let refreshed = client.get_task_list(task_list.id).await.unwrap().unwrap();
    assert_eq!(refreshed.task_count(), 1);
    assert_eq!(refreshed.progress().percent(), 100);
}

#[tokio::test]
async fn test_missing_entities_are_none() {
    let (base_url, _backend) = spawn_backend().await;
    let client = HttpClient::new(&base_url).unwrap();

    assert!(client.get_task_list(TaskListId::new_v4()).await.unwrap().is_none());

    let task_list = client.create_task_list(&list_draft("Empty")).await.unwrap();
    assert!(client
        .get_task(task_list.id, TaskId::new_v4())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_create_omits_id_and_update_sends_it() {
    let (base_url, backend) = spawn_backend().await;
    let client = HttpClient::new(&base_url).unwrap();

    let task_list = client.create_task_list(&list_draft("Work")).await.unwrap();
    let create_body = backend.last_body(Method::POST).unwrap();
    assert!(create_body.get("id").is_none());
    assert_eq!(create_body["title"], "Work");

    let updated = client
        .update_task_list(
            task_list.id,
            &TaskListDraft {
                title: "Work stuff".to_string(),
                description: Some("Office".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Work stuff");
    assert_eq!(updated.description.as_deref(), Some("Office"));

    let update_body = backend.last_body(Method::PUT).unwrap();
    assert_eq!(update_body["id"], task_list.id.to_string());
}

#[tokio::test]
async fn test_due_date_is_sent_with_second_precision() {
    let (base_url, backend) = spawn_backend().await;
    let client = HttpClient::new(&base_url).unwrap();

    let task_list = client.create_task_list(&list_draft("Trips")).await.unwrap();
    let due = NaiveDate::from_ymd_opt(2026, 3, 14)
        .unwrap()
        .and_hms_milli_opt(9, 30, 15, 250)
        .unwrap();
    let draft = TaskDraft {
        due_date: Some(due),
        ..task_draft("Book flights", TaskPriority::High)
    };

    let task = client.create_task(task_list.id, &draft).await.unwrap();

    let body = backend.last_body(Method::POST).unwrap();
    assert_eq!(body["dueDate"], "2026-03-14T09:30:15");
    assert_eq!(body["priority"], "HIGH");
    assert_eq!(body["status"], "OPEN");
    assert_eq!(
        task.due_date,
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap().and_hms_opt(9, 30, 15)
    );
}

#[tokio::test]
async fn test_backend_errors_keep_server_message() {
    let (base_url, _backend) = spawn_backend().await;
    let client = HttpClient::new(&base_url).unwrap();

    // Blank titles are rejected by the backend, not the client
    let err = client.create_task_list(&list_draft("   ")).await.unwrap_err();
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("Task list title must be present!"), "{}", message);
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_removes_list_and_tasks() {
    let (base_url, _backend) = spawn_backend().await;
    let client = HttpClient::new(&base_url).unwrap();

    let task_list = client.create_task_list(&list_draft("Temp")).await.unwrap();
    let task = client
        .create_task(task_list.id, &task_draft("Gone soon", TaskPriority::Medium))
        .await
        .unwrap();

    client.delete_task(task_list.id, task.id).await.unwrap();
    assert!(client.list_tasks(task_list.id).await.unwrap().is_empty());

    client.delete_task_list(task_list.id).await.unwrap();
    assert!(client.get_task_list(task_list.id).await.unwrap().is_none());
    assert!(client.list_task_lists().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpClient::new(&format!("http://{}", addr)).unwrap();
    assert!(matches!(
        client.list_task_lists().await,
        Err(ApiError::Transport(_))
    ));
}
