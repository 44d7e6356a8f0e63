//! Seeded record synthesis
//!
//! Each public generator builds its own RNG from the record's seed, so the
//! functions here are pure and safe to call from any number of tasks.

use super::records::{Coordinates, Record, School, Student, Village};
use crate::types::EntityKind;
use chrono::{Days, NaiveDate};
use fake::faker::address::raw::{BuildingNumber, CityName, StateAbbr, StateName, StreetName, ZipCode};
use fake::faker::name::raw::{FirstName, LastName, Name};
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::EN;
use fake::Fake;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

/// Number of hex characters kept from the id digest
pub const STABLE_ID_LEN: usize = 12;

/// Size of the school pool students are assigned to
pub const SCHOOL_POOL: u64 = 50;

/// Size of the village pool students and schools are assigned to
pub const VILLAGE_POOL: u64 = 20;

/// Anchor for generated dates; enrollment dates fall in the three years before it
pub const REFERENCE_DATE: (i32, u32, u32) = (2025, 1, 1);

const ENROLLMENT_WINDOW_DAYS: u64 = 3 * 365;

const STUDENT_STATUSES: [&str; 3] = ["active", "inactive", "graduated"];

const SCHOOL_TYPES: [&str; 4] = ["Elementary", "Middle", "High", "K-12"];

/// Generate the record at 1-based `index` for `kind`
pub fn generate(kind: EntityKind, index: u64) -> Record {
    match kind {
        EntityKind::Student => generate_student(index).into(),
        EntityKind::School => generate_school(index).into(),
        EntityKind::Village => generate_village(index).into(),
    }
}

/// Stable opaque id for a record: truncated SHA-256 of `"{kind}_{index}"`
pub fn stable_id(kind: EntityKind, index: u64) -> String {
    let digest = Sha256::digest(format!("{kind}_{index}").as_bytes());
    let mut id = hex::encode(digest);
    id.truncate(STABLE_ID_LEN);
    id
}

/// Index of the school a record at `index` belongs to
pub fn school_ref(index: u64) -> u64 {
    index.saturating_sub(1) % SCHOOL_POOL + 1
}

/// Index of the village a record at `index` belongs to
pub fn village_ref(index: u64) -> u64 {
    index.saturating_sub(1) % VILLAGE_POOL + 1
}

/// Generate a student record
pub fn generate_student(index: u64) -> Student {
    let mut rng = seeded(EntityKind::Student, index);

    let first_name: String = FirstName(EN).fake_with_rng(&mut rng);
    let last_name: String = LastName(EN).fake_with_rng(&mut rng);
    let grade = rng.random_range(1..=12u8);
    let age = rng.random_range(6..=18u8);
    let enrollment_date = enrollment_date(&mut rng).format("%Y-%m-%d").to_string();
    let status = pick(&mut rng, &STUDENT_STATUSES).to_string();
    let gpa = round_to(rng.random_range(2.0..=4.0), 2);

    Student {
        id: stable_id(EntityKind::Student, index),
        student_id: format!("STU{index:06}"),
        first_name,
        last_name,
        email: format!("student{index}@school.edu"),
        grade,
        age,
        enrollment_date,
        school_id: stable_id(EntityKind::School, school_ref(index)),
        village_id: stable_id(EntityKind::Village, village_ref(index)),
        status,
        gpa,
    }
}

/// Generate a school record
pub fn generate_school(index: u64) -> School {
    let mut rng = seeded(EntityKind::School, index);

    let founder: String = LastName(EN).fake_with_rng(&mut rng);
    let name_type = pick(&mut rng, &SCHOOL_TYPES);
    let building: String = BuildingNumber(EN).fake_with_rng(&mut rng);
    let street: String = StreetName(EN).fake_with_rng(&mut rng);
    let city: String = CityName(EN).fake_with_rng(&mut rng);
    let state: String = StateAbbr(EN).fake_with_rng(&mut rng);
    let zip_code: String = ZipCode(EN).fake_with_rng(&mut rng);
    let phone: String = PhoneNumber(EN).fake_with_rng(&mut rng);
    let principal: String = Name(EN).fake_with_rng(&mut rng);
    let student_count = rng.random_range(100..=2000u32);
    let teacher_count = rng.random_range(10..=100u32);
    let founded_year = rng.random_range(1900..=2020u16);
    let school_type = pick(&mut rng, &SCHOOL_TYPES).to_string();
    let rating = round_to(rng.random_range(3.0..=5.0), 1);

    School {
        id: stable_id(EntityKind::School, index),
        school_id: format!("SCH{index:04}"),
        name: format!("{founder} {name_type} School"),
        address: format!("{building} {street}"),
        city,
        state,
        zip_code,
        phone,
        email: format!("admin@school{index}.edu"),
        principal,
        student_count,
        teacher_count,
        founded_year,
        school_type,
        village_id: stable_id(EntityKind::Village, village_ref(index)),
        rating,
    }
}

/// Generate a village record
pub fn generate_village(index: u64) -> Village {
    let mut rng = seeded(EntityKind::Village, index);

    let town: String = CityName(EN).fake_with_rng(&mut rng);
    let population = rng.random_range(1000..=50_000u32);
    let area_sq_km = round_to(rng.random_range(10.0..=500.0), 2);
    let district: String = CityName(EN).fake_with_rng(&mut rng);
    let state: String = StateName(EN).fake_with_rng(&mut rng);
    let postal_code: String = ZipCode(EN).fake_with_rng(&mut rng);
    let mayor: String = Name(EN).fake_with_rng(&mut rng);
    let established_year = rng.random_range(1700..=1950u16);
    let schools_count = rng.random_range(1..=10u8);
    let literacy_rate = round_to(rng.random_range(70.0..=99.9), 1);
    let coordinates = Coordinates {
        latitude: round_to(rng.random_range(-90.0..=90.0), 6),
        longitude: round_to(rng.random_range(-180.0..=180.0), 6),
    };

    Village {
        id: stable_id(EntityKind::Village, index),
        village_id: format!("VIL{index:03}"),
        name: format!("{town} Village"),
        population,
        area_sq_km,
        district,
        state,
        country: "USA".to_string(),
        postal_code,
        mayor,
        established_year,
        schools_count,
        literacy_rate,
        coordinates,
    }
}

fn seeded(kind: EntityKind, index: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(index.wrapping_add(kind.seed_offset()))
}

fn pick<'a>(rng: &mut ChaCha8Rng, choices: &[&'a str]) -> &'a str {
    choices[rng.random_range(0..choices.len())]
}

fn enrollment_date(rng: &mut ChaCha8Rng) -> NaiveDate {
    let (year, month, day) = REFERENCE_DATE;
    let reference = NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default();
    let days_before = rng.random_range(0..=ENROLLMENT_WINDOW_DAYS);
    reference
        .checked_sub_days(Days::new(days_before))
        .unwrap_or(reference)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
