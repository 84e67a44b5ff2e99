//! Operations on the students-api surface.

pub mod todos;
