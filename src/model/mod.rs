pub mod course;
pub mod filter_state;
pub mod grid;
