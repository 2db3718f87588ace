use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub created_by: i64,
}

#[derive(Deserialize)]
pub struct CreateStudent {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    #[serde(default)]
    pub created_by: i64,
}

#[derive(Deserialize)]
pub struct UpdateStudent {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub age: Option<u32>,
    pub created_by: Option<i64>,
}

#[derive(Default)]
pub struct Store {
    next_id: i64,
    students: BTreeMap<i64, Student>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock students API listening");
    }
    axum::serve(listener, app()).await
}

/// Ordered by id, which is also insertion order.
async fn list_students(State(db): State<Db>) -> Json<Vec<Student>> {
    let store = db.read().await;
    Json(store.students.values().cloned().collect())
}

async fn create_student(
    State(db): State<Db>,
    Json(input): Json<CreateStudent>,
) -> (StatusCode, Json<Student>) {
    let mut store = db.write().await;
    store.next_id += 1;
    let student = Student {
        id: store.next_id,
        name: input.name,
        email: input.email,
        phone: input.phone,
        age: input.age,
        created_by: input.created_by,
    };
    store.students.insert(student.id, student.clone());
    (StatusCode::CREATED, Json(student))
}

async fn get_student(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, StatusCode> {
    let store = db.read().await;
    store
        .students
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_student(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateStudent>,
) -> Result<Json<Student>, StatusCode> {
    let mut store = db.write().await;
    let student = store.students.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = input.name {
        student.name = name;
    }
    if let Some(email) = input.email {
        student.email = email;
    }
    if let Some(phone) = input.phone {
        student.phone = phone;
    }
    if let Some(age) = input.age {
        student.age = age;
    }
    if let Some(created_by) = input.created_by {
        student.created_by = created_by;
    }
    Ok(Json(student.clone()))
}

async fn delete_student(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .students
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}
