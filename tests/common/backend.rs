//! In-process stand-in for the Taskaz REST backend.
//!
//! Follows the real service's contract: lists carry a task `count` and a
//! `progress` fraction, unknown ids read as `null`, and
//! validation failures answer 400 with `{status, message, details}`. Create
//! requests must not carry an id; update requests must carry the id of the
//! path.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use uuid::Uuid;

use taskaz::api::{Task, TaskId, TaskList, TaskListId, TaskPriority, TaskStatus};
use taskaz::utils::datetime::parse_wire;

type ApiResponse = Result<Json<Value>, (StatusCode, Json<Value>)>;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Value,
}

#[derive(Default)]
struct Store {
    task_lists: Vec<(Uuid, String, Option<String>)>,
    tasks: HashMap<Uuid, Vec<Task>>,
    requests: Vec<RecordedRequest>,
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    store: Arc<Mutex<Store>>,
}

impl FakeBackend {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.store.lock().unwrap().requests.clone()
    }

    /// Last recorded body sent with `method`
    pub fn last_body(&self, method: Method) -> Option<Value> {
        self.requests()
            .into_iter()
            .rev()
            .find(|request| request.method == method)
            .map(|request| request.body)
    }

    fn record(&self, method: Method, path: String, body: Value) {
        self.store
            .lock()
            .unwrap()
            .requests
            .push(RecordedRequest { method, path, body });
    }
}

/// Start the fake backend on an ephemeral port; returns its base URL
pub async fn spawn_backend() -> (String, FakeBackend) {
    let backend = FakeBackend::default();

    let app = Router::new()
        .route("/task-lists", get(list_task_lists).post(create_task_list))
        .route(
            "/task-lists/{id}",
            get(get_task_list).put(update_task_list).delete(delete_task_list),
        )
        .route("/task-lists/{list_id}/tasks", get(list_tasks).post(create_task))
        .route(
            "/task-lists/{list_id}/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .with_state(backend.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), backend)
}

fn bad_request(message: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "status": 400,
            "message": message,
            "details": "uri=/task-lists",
        })),
    )
}

fn to_json<T: serde::Serialize>(value: T) -> ApiResponse {
    Ok(Json(serde_json::to_value(value).unwrap()))
}

/// `progress` is `closed / count`, so an empty list reads back as `0 / 0`
fn task_list_view(store: &Store, id: Uuid) -> Option<TaskList> {
    let (_, title, description) = store.task_lists.iter().find(|(list_id, _, _)| *list_id == id)?;
    let tasks = store.tasks.get(&id).map(Vec::as_slice).unwrap_or_default();
    let closed = tasks.iter().filter(|task| task.status.is_closed()).count();

    Some(TaskList {
        id: TaskListId(id),
        title: title.clone(),
        description: description.clone(),
        count: Some(tasks.len() as u32),
        progress: Some(closed as f64 / tasks.len() as f64),
    })
}

/// Encode a list the way the service's JSON mapper does: NaN as `"NaN"`
fn task_list_json(view: TaskList) -> Value {
    let nan = view.progress.is_some_and(f64::is_nan);
    let mut value = serde_json::to_value(view).unwrap();
    if nan {
        value["progress"] = json!("NaN");
    }
    value
}

fn task_list_response(view: Option<TaskList>) -> ApiResponse {
    Ok(Json(view.map(task_list_json).unwrap_or(Value::Null)))
}

#[derive(Deserialize)]
struct TaskListBody {
    id: Option<Uuid>,
    title: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskBody {
    id: Option<Uuid>,
    title: Option<String>,
    description: Option<String>,
    due_date: Option<String>,
    priority: Option<TaskPriority>,
    status: Option<TaskStatus>,
}

fn parse<T: serde::de::DeserializeOwned>(body: &Value) -> Result<T, (StatusCode, Json<Value>)> {
    serde_json::from_value(body.clone()).map_err(|_| bad_request("Malformed request body"))
}

fn required_title(title: Option<String>, what: &str) -> Result<String, (StatusCode, Json<Value>)> {
    match title {
        Some(title) if !title.trim().is_empty() => Ok(title),
        _ => Err(bad_request(&format!("{} title must be present!", what))),
    }
}

async fn list_task_lists(State(backend): State<FakeBackend>) -> ApiResponse {
    backend.record(Method::GET, "/task-lists".to_string(), Value::Null);
    let store = backend.store.lock().unwrap();
    let views: Vec<Value> = store
        .task_lists
        .iter()
        .filter_map(|(id, _, _)| task_list_view(&store, *id))
        .map(task_list_json)
        .collect();
    to_json(views)
}

async fn create_task_list(State(backend): State<FakeBackend>, Json(body): Json<Value>) -> ApiResponse {
    backend.record(Method::POST, "/task-lists".to_string(), body.clone());
    let body: TaskListBody = parse(&body)?;
    if body.id.is_some() {
        return Err(bad_request("Task list already has an ID!"));
    }
    let title = required_title(body.title, "Task list")?;

    let id = Uuid::new_v4();
    let mut store = backend.store.lock().unwrap();
    store.task_lists.push((id, title, body.description));
    store.tasks.insert(id, Vec::new());
    // The create response is built before any tasks are attached
    let created = task_list_view(&store, id).map(|view| TaskList { progress: None, ..view });
    task_list_response(created)
}

async fn get_task_list(State(backend): State<FakeBackend>, Path(id): Path<Uuid>) -> ApiResponse {
    backend.record(Method::GET, format!("/task-lists/{}", id), Value::Null);
    let store = backend.store.lock().unwrap();
    task_list_response(task_list_view(&store, id))
}

async fn update_task_list(
    State(backend): State<FakeBackend>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> ApiResponse {
    backend.record(Method::PUT, format!("/task-lists/{}", id), body.clone());
    let body: TaskListBody = parse(&body)?;
    match body.id {
        None => return Err(bad_request("Task list must have an ID!")),
        Some(body_id) if body_id != id => return Err(bad_request("Attempting to change task list ID!")),
        Some(_) => {}
    }
    let title = required_title(body.title, "Task list")?;

    let mut store = backend.store.lock().unwrap();
    let Some(entry) = store.task_lists.iter_mut().find(|(list_id, _, _)| *list_id == id) else {
        return Err(bad_request("Task list not found!"));
    };
    entry.1 = title;
    entry.2 = body.description;
    task_list_response(task_list_view(&store, id))
}

async fn delete_task_list(State(backend): State<FakeBackend>, Path(id): Path<Uuid>) -> StatusCode {
    backend.record(Method::DELETE, format!("/task-lists/{}", id), Value::Null);
    let mut store = backend.store.lock().unwrap();
    store.task_lists.retain(|(list_id, _, _)| *list_id != id);
    store.tasks.remove(&id);
    StatusCode::OK
}

async fn list_tasks(State(backend): State<FakeBackend>, Path(list_id): Path<Uuid>) -> ApiResponse {
    backend.record(Method::GET, format!("/task-lists/{}/tasks", list_id), Value::Null);
    let store = backend.store.lock().unwrap();
    to_json(store.tasks.get(&list_id).cloned().unwrap_or_default())
}

fn task_from_body(id: Uuid, body: TaskBody) -> Result<Task, (StatusCode, Json<Value>)> {
    let title = required_title(body.title, "Task")?;
    let due_date = match body.due_date {
        Some(raw) => Some(parse_wire(&raw).map_err(|_| bad_request("Invalid due date"))?),
        None => None,
    };

    Ok(Task {
        id: TaskId(id),
        title,
        description: body.description,
        due_date,
        priority: body.priority.unwrap_or(TaskPriority::Medium),
        status: body.status.unwrap_or(TaskStatus::Open),
    })
}

async fn create_task(
    State(backend): State<FakeBackend>,
    Path(list_id): Path<Uuid>,
    Json(body): Json<Value>,
) -> ApiResponse {
    backend.record(Method::POST, format!("/task-lists/{}/tasks", list_id), body.clone());
    let body: TaskBody = parse(&body)?;
    if body.id.is_some() {
        return Err(bad_request("Task already has an ID!"));
    }
    // New tasks always start open, whatever the body says
    let task = Task {
        status: TaskStatus::Open,
        ..task_from_body(Uuid::new_v4(), body)?
    };

    let mut store = backend.store.lock().unwrap();
    let Some(tasks) = store.tasks.get_mut(&list_id) else {
        return Err(bad_request("Invalid Task List ID provided!"));
    };
    tasks.push(task.clone());
    to_json(task)
}

async fn get_task(State(backend): State<FakeBackend>, Path((list_id, id)): Path<(Uuid, Uuid)>) -> ApiResponse {
    backend.record(Method::GET, format!("/task-lists/{}/tasks/{}", list_id, id), Value::Null);
    let store = backend.store.lock().unwrap();
    let task = store
        .tasks
        .get(&list_id)
        .and_then(|tasks| tasks.iter().find(|task| task.id == TaskId(id)).cloned());
    to_json(task)
}

async fn update_task(
    State(backend): State<FakeBackend>,
    Path((list_id, id)): Path<(Uuid, Uuid)>,
    Json(body): Json<Value>,
) -> ApiResponse {
    backend.record(Method::PUT, format!("/task-lists/{}/tasks/{}", list_id, id), body.clone());
    let body: TaskBody = parse(&body)?;
    match body.id {
        None => return Err(bad_request("Task must have an ID!")),
        Some(body_id) if body_id != id => return Err(bad_request("Task IDs do not match!")),
        Some(_) => {}
    }
    let updated = task_from_body(id, body)?;

    let mut store = backend.store.lock().unwrap();
    let Some(task) = store
        .tasks
        .get_mut(&list_id)
        .and_then(|tasks| tasks.iter_mut().find(|task| task.id == TaskId(id)))
    else {
        return Err(bad_request("Task not found!"));
    };
    *task = updated.clone();
    to_json(updated)
}

async fn delete_task(State(backend): State<FakeBackend>, Path((list_id, id)): Path<(Uuid, Uuid)>) -> StatusCode {
    backend.record(Method::DELETE, format!("/task-lists/{}/tasks/{}", list_id, id), Value::Null);
    if let Some(tasks) = backend.store.lock().unwrap().tasks.get_mut(&list_id) {
        tasks.retain(|task| task.id != TaskId(id));
    }
    StatusCode::OK
}
