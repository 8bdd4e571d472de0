pub mod feedback;
pub mod ordering;
pub mod result;
pub mod shuffle;
