//! Generator module
//!
//! Deterministic synthetic records for students, schools and villages.
//!
//! Every record is a pure function of its `(kind, index)` pair: the index,
//! shifted by a per-kind offset, seeds a fresh ChaCha RNG, and all random
//! fields are drawn from that RNG. Cross-references between kinds are plain
//! modular arithmetic over the index, so a student always points at the same
//! school and village no matter when or where it is generated.

mod records;
mod synth;

pub use records::{Coordinates, Record, School, Student, Village};
pub use synth::{
    generate, generate_school, generate_student, generate_village, school_ref, stable_id,
    village_ref, REFERENCE_DATE, SCHOOL_POOL, STABLE_ID_LEN, VILLAGE_POOL,
};
