//! Shared test infrastructure: an in-memory stub of the backend REST API.
//!
//! The stub mirrors the real backend's surface — students are read-only,
//! interactions support create/update/delete — so the `ApiClient` and the
//! handler flows can run end to end against an ephemeral local port.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

use undergrad_crm::api::ApiClient;

pub struct StubBackend {
    students: Vec<Value>,
    pub interactions: Mutex<Vec<Value>>,
    next_id: AtomicUsize,
}

impl StubBackend {
    fn assign_id(&self) -> String {
        format!("gen{}", self.next_id.fetch_add(1, Ordering::SeqCst))
    }
}

async fn list_students(state: web::Data<StubBackend>) -> HttpResponse {
    // The real directory endpoint strips the progress sub-object.
    let list: Vec<Value> = state
        .students
        .iter()
        .cloned()
        .map(|mut s| {
            if let Some(obj) = s.as_object_mut() {
                obj.remove("progress");
            }
            s
        })
        .collect();
    HttpResponse::Ok().json(list)
}

async fn get_student(state: web::Data<StubBackend>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    match state.students.iter().find(|s| s["id"] == json!(id)) {
        Some(student) => HttpResponse::Ok().json(student),
        None => HttpResponse::NotFound().json(json!({"error": "Student not found"})),
    }
}

async fn list_interactions(
    state: web::Data<StubBackend>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    let items: Vec<Value> = state
        .interactions
        .lock()
        .unwrap()
        .iter()
        .filter(|i| i["student_id"] == json!(id))
        .cloned()
        .collect();
    HttpResponse::Ok().json(items)
}

async fn create_interaction(
    state: web::Data<StubBackend>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> HttpResponse {
    let student_id = path.into_inner();
    let mut doc = body.into_inner();
    let Some(obj) = doc.as_object_mut() else {
        return HttpResponse::BadRequest().json(json!({"error": "invalid body"}));
    };
    if obj.get("details").is_none() {
        return HttpResponse::BadRequest().json(json!({"error": "Missing required 'details' field."}));
    }
    obj.insert("id".to_string(), json!(state.assign_id()));
    obj.insert("student_id".to_string(), json!(student_id));
    state.interactions.lock().unwrap().push(doc.clone());
    HttpResponse::Created().json(doc)
}

async fn update_note(
    state: web::Data<StubBackend>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> HttpResponse {
    let note_id = path.into_inner();
    let mut store = state.interactions.lock().unwrap();
    match store.iter_mut().find(|i| i["id"] == json!(note_id)) {
        Some(doc) => {
            let obj = doc.as_object_mut().unwrap();
            for key in ["details", "team_member", "last_updated"] {
                if let Some(value) = body.get(key) {
                    obj.insert(key.to_string(), value.clone());
                }
            }
            HttpResponse::Ok().json(json!({"id": note_id, "message": "Note updated successfully"}))
        }
        None => HttpResponse::NotFound().json(json!({"error": "Note not found"})),
    }
}

async fn delete_note(state: web::Data<StubBackend>, path: web::Path<String>) -> HttpResponse {
    let note_id = path.into_inner();
    state
        .interactions
        .lock()
        .unwrap()
        .retain(|i| i["id"] != json!(note_id));
    HttpResponse::Ok().json(json!({"id": note_id, "message": "Note deleted successfully"}))
}

/// Start the stub backend on an ephemeral port. Returns an `ApiClient`
/// pointed at it, shared access to its state, and a handle to stop it.
pub async fn spawn_backend(
    students: Vec<Value>,
    interactions: Vec<Value>,
) -> (ApiClient, web::Data<StubBackend>, ServerHandle) {
    let state = web::Data::new(StubBackend {
        students,
        interactions: Mutex::new(interactions),
        next_id: AtomicUsize::new(1),
    });

    let app_state = state.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .route("/api/students", web::get().to(list_students))
            .route("/api/students/{id}", web::get().to(get_student))
            .route(
                "/api/students/{id}/interactions",
                web::get().to(list_interactions),
            )
            .route(
                "/api/students/{id}/interactions",
                web::post().to(create_interaction),
            )
            .route("/api/notes/{id}", web::put().to(update_note))
            .route("/api/notes/{id}", web::delete().to(delete_note))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind stub backend");

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    (ApiClient::new(format!("http://{addr}")), state, handle)
}

/// A student record the way the backend serves it.
pub fn student_json(id: &str, name: &str, email: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": email,
        "phone": "123-456-7890",
        "country": "USA",
        "grade_level": "Senior",
        "app_status": "Applying",
        "high_intent_score": 80,
        "last_active_timestamp": 1_700_000_000_000_i64,
        "gpa": 3.7,
        "sat_e": 700,
        "sat_m": 720,
        "needs_essay_help": true,
        "progress": {
            "essays_started_count": 1,
            "resume_uploaded": false
        }
    })
}

pub fn interaction_json(id: &str, student_id: &str, kind: &str, ts: i64) -> Value {
    json!({
        "id": id,
        "student_id": student_id,
        "type": kind,
        "subtype": "Seeded",
        "details": format!("seeded {kind} interaction"),
        "timestamp": ts,
        "team_member": "System Bot"
    })
}
