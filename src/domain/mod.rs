// ============================================================================
// Domain Models Module
// Input description consumed by the grid solver
// ============================================================================

pub mod input;

pub use input::SimulationInput;
