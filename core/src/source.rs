//! The data-access seam: four operations, one HTTP call each.

use tracing::debug;

use crate::client::StudentClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{Student, StudentId, StudentInput};

/// Where the screen reads and writes students.
///
/// Implementations must issue exactly one request per call and must not
/// retry; the caller decides how to surface a failure.
pub trait StudentSource {
    fn list(&self) -> Result<Vec<Student>, ApiError>;
    fn create(&self, input: &StudentInput) -> Result<Student, ApiError>;
    fn update(&self, id: StudentId, input: &StudentInput) -> Result<Student, ApiError>;
    fn remove(&self, id: StudentId) -> Result<(), ApiError>;
}

impl<S: StudentSource + ?Sized> StudentSource for &S {
    fn list(&self) -> Result<Vec<Student>, ApiError> {
        (**self).list()
    }

    fn create(&self, input: &StudentInput) -> Result<Student, ApiError> {
        (**self).create(input)
    }

    fn update(&self, id: StudentId, input: &StudentInput) -> Result<Student, ApiError> {
        (**self).update(id, input)
    }

    fn remove(&self, id: StudentId) -> Result<(), ApiError> {
        (**self).remove(id)
    }
}

/// `StudentSource` over HTTP: a `StudentClient` paired with a `Transport`.
#[derive(Debug, Clone)]
pub struct HttpStudentSource<T> {
    client: StudentClient,
    transport: T,
}

impl<T: Transport> HttpStudentSource<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: StudentClient::new(base_url),
            transport,
        }
    }
}

impl<T: Transport> StudentSource for HttpStudentSource<T> {
    fn list(&self) -> Result<Vec<Student>, ApiError> {
        let request = self.client.build_list_students();
        debug!(path = %request.path, "listing students");
        let response = self.transport.execute(request)?;
        self.client.parse_list_students(response)
    }

    fn create(&self, input: &StudentInput) -> Result<Student, ApiError> {
        let request = self.client.build_create_student(input)?;
        debug!(path = %request.path, "creating student");
        let response = self.transport.execute(request)?;
        self.client.parse_create_student(response)
    }

    fn update(&self, id: StudentId, input: &StudentInput) -> Result<Student, ApiError> {
        let request = self.client.build_update_student(id, input)?;
        debug!(path = %request.path, "updating student");
        let response = self.transport.execute(request)?;
        self.client.parse_update_student(response)
    }

    fn remove(&self, id: StudentId) -> Result<(), ApiError> {
        let request = self.client.build_delete_student(id);
        debug!(path = %request.path, "deleting student");
        let response = self.transport.execute(request)?;
        self.client.parse_delete_student(response)
    }
}
