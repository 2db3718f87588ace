//! Stateless HTTP request builder and response parser for the students API.
//!
//! # Design
//! `StudentClient` holds only a `base_url` and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`, keeping the I/O boundary explicit.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Student, StudentId, StudentInput};

const COLLECTION: &str = "students";

/// Synchronous, stateless client for the `/students` collection.
#[derive(Debug, Clone)]
pub struct StudentClient {
    base_url: String,
}

impl StudentClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_students(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_path(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_student(&self, input: &StudentInput) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_path(),
            headers: json_headers(),
            body: Some(to_body(input)?),
        })
    }

    pub fn build_update_student(
        &self,
        id: StudentId,
        input: &StudentInput,
    ) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.member_path(id),
            headers: json_headers(),
            body: Some(to_body(input)?),
        })
    }

    pub fn build_delete_student(&self, id: StudentId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.member_path(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_students(&self, response: HttpResponse) -> Result<Vec<Student>, ApiError> {
        check_status(&response)?;
        from_body(&response.body)
    }

    pub fn parse_create_student(&self, response: HttpResponse) -> Result<Student, ApiError> {
        check_status(&response)?;
        from_body(&response.body)
    }

    pub fn parse_update_student(&self, response: HttpResponse) -> Result<Student, ApiError> {
        check_status(&response)?;
        from_body(&response.body)
    }

    /// The body is ignored; some servers answer 200 with `{}`, others 204.
    pub fn parse_delete_student(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn collection_path(&self) -> String {
        format!("{}/{COLLECTION}", self.base_url)
    }

    fn member_path(&self, id: StudentId) -> String {
        format!("{}/{COLLECTION}/{id}", self.base_url)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_body(input: &StudentInput) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn from_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Any 2xx is success; 404 gets its own variant, everything else is `HttpError`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> StudentClient {
        StudentClient::new("http://localhost:3000")
    }

    fn input() -> StudentInput {
        StudentInput {
            name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            phone: "555".to_string(),
            age: 20,
            created_by: 1,
        }
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_students_produces_correct_request() {
        let req = client().build_list_students();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/students");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_student_sends_numeric_age_and_creator() {
        let req = client().build_create_student(&input()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/students");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Ana");
        assert_eq!(body["age"], 20);
        assert!(body["age"].is_number());
        assert_eq!(body["created_by"], 1);
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_update_student_targets_member_path() {
        let req = client().build_update_student(7, &input()).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/students/7");
        assert!(req.body.is_some());
    }

    #[test]
    fn build_delete_student_has_no_body() {
        let req = client().build_delete_student(7);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/students/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_students_success() {
        let resp = response(
            200,
            r#"[{"id":1,"name":"Ana","email":"a@x.com","phone":"555","age":20}]"#,
        );
        let students = client().parse_list_students(resp).unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].name, "Ana");
        assert_eq!(students[0].created_by, 0);
    }

    #[test]
    fn parse_create_student_accepts_any_2xx() {
        let body = r#"{"id":3,"name":"Ana","email":"a@x.com","phone":"555","age":20,"created_by":1}"#;
        assert_eq!(client().parse_create_student(response(201, body)).unwrap().id, 3);
        assert_eq!(client().parse_create_student(response(200, body)).unwrap().id, 3);
    }

    #[test]
    fn parse_create_student_wrong_status() {
        let err = client()
            .parse_create_student(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_update_student_not_found() {
        let err = client().parse_update_student(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_delete_student_ignores_body() {
        assert!(client().parse_delete_student(response(204, "")).is_ok());
        assert!(client().parse_delete_student(response(200, "{}")).is_ok());
    }

    #[test]
    fn parse_delete_student_not_found() {
        let err = client().parse_delete_student(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = StudentClient::new("http://localhost:3000/");
        assert_eq!(client.build_list_students().path, "http://localhost:3000/students");
    }

    #[test]
    fn parse_list_students_bad_json() {
        let err = client().parse_list_students(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
