/// Constraint violation counting
pub mod conflicts;
/// Placement type holding one column per row
pub mod placement;

pub use placement::Placement;
