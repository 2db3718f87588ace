//! Editable form state for one student.
//!
//! Every field is kept as typed text while editing; `age` only becomes a
//! number when the form is turned into a `StudentInput` at submit time.

use std::fmt;
use std::str::FromStr;

use crate::error::FormError;
use crate::types::{Student, StudentInput};

/// One of the four editable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Age,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Age];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Age => "age",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Age => "Age",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "phone" => Ok(Field::Phone),
            "age" => Ok(Field::Age),
            other => Err(format!("unknown field: {other}")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
}

impl FormState {
    /// Replace one field, leaving the rest untouched.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Age => &self.age,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Copy the four display fields of `student` verbatim.
    pub fn load_from(&mut self, student: &Student) {
        self.name = student.name.clone();
        self.email = student.email.clone();
        self.phone = student.phone.clone();
        self.age = student.age.to_string();
    }

    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }

    /// Presence check plus age coercion. Whitespace counts as present.
    pub fn to_input(&self, created_by: i64) -> Result<StudentInput, FormError> {
        if let Some(field) = self.first_missing() {
            return Err(FormError::MissingField(field.as_str()));
        }
        let age = self
            .age
            .trim()
            .parse::<u32>()
            .map_err(|_| FormError::InvalidAge(self.age.clone()))?;
        Ok(StudentInput {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            age,
            created_by,
        })
    }

    fn first_missing(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| self.get(*f).is_empty())
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Age => &mut self.age,
        }
    }
}
