//! Record shapes served by the API

use serde::{Deserialize, Serialize};

/// A student record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub grade: u8,
    pub age: u8,
    /// ISO-8601 date
    pub enrollment_date: String,
    pub school_id: String,
    pub village_id: String,
    pub status: String,
    pub gpa: f64,
}

/// A school record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub id: String,
    pub school_id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub email: String,
    pub principal: String,
    pub student_count: u32,
    pub teacher_count: u32,
    pub founded_year: u16,
    pub school_type: String,
    pub village_id: String,
    pub rating: f64,
}

/// Geographic position of a village
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A village record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Village {
    pub id: String,
    pub village_id: String,
    pub name: String,
    pub population: u32,
    pub area_sq_km: f64,
    pub district: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub mayor: String,
    pub established_year: u16,
    pub schools_count: u8,
    pub literacy_rate: f64,
    pub coordinates: Coordinates,
}

/// Any generated record.
///
/// Serializes as the bare record object, without a kind tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Student(Student),
    School(School),
    Village(Village),
}

impl Record {
    /// The stable surrogate key of the record
    pub fn id(&self) -> &str {
        match self {
            Record::Student(s) => &s.id,
            Record::School(s) => &s.id,
            Record::Village(v) => &v.id,
        }
    }
}

impl From<Student> for Record {
    fn from(student: Student) -> Self {
        Record::Student(student)
    }
}

impl From<School> for Record {
    fn from(school: School) -> Self {
        Record::School(school)
    }
}

impl From<Village> for Record {
    fn from(village: Village) -> Self {
        Record::Village(village)
    }
}
