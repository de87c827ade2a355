pub mod face_geometry;
pub mod landmark_schema;
pub mod region;
