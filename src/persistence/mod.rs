// ============================================================================
// Persistence Module
// Text snapshots and raw binary state for the solver's current buffer
// ============================================================================
//
// Both forms operate directly on the solver's row-major buffer. The text
// snapshot renders real values and round-trips through the truncating
// constructor; the binary state dumps the raw storage bytes with no header,
// no dimensions, and no endianness normalization - callers track grid shape
// and fixed-point instantiation out-of-band.

mod snapshot;
mod state;
