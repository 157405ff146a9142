// Centralized configuration for field evaluation parameters

// ====================
// Physical Constants
// ====================
/// Coulomb's constant k in N·m²/C².
pub const COULOMB_CONSTANT: f64 = 8.987_551_792_3e9;
/// Minimum charge-to-point distance in meters. Contributions closer than this
/// are regularized instead of dividing by a vanishing r.
pub const MIN_DISTANCE: f64 = 1.0e-9;

// ====================
// Default Grid
// ====================
pub const DEFAULT_XMIN: f64 = -2.0; // Default evaluation window, meters
pub const DEFAULT_XMAX: f64 = 2.0;
pub const DEFAULT_YMIN: f64 = -2.0;
pub const DEFAULT_YMAX: f64 = 2.0;
pub const DEFAULT_NX: usize = 60; // Default lattice resolution
pub const DEFAULT_NY: usize = 60;

// ====================
// Scenario Defaults
// ====================
/// Default plate polarity multiplier (the LCD scenario flips this to -1).
pub const DEFAULT_POLARITY: f64 = 1.0;

// ====================
// Threading/Parallelism
// ====================
pub const MIN_THREADS: usize = 3; // Minimum number of threads to use
pub const THREADS_LEAVE_FREE: usize = 2; // Number of logical cores to leave free

// ====================
// Output
// ====================
pub const DEFAULT_OUTPUT_DIR: &str = "out"; // Exported field maps land here
