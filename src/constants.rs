//! Tuning constants for the stockpile display and the day cycle
//!
//! Everything that would otherwise be a magic number lives here.

use bevy::prelude::*;

// ============================================================================
// STOCKPILE DISPLAY
// ============================================================================

/// Quantities at or above this value show the overflow label
pub const LABEL_THRESHOLD: i64 = 6;

/// Number of apple slots in the demo stockpile
pub const DEFAULT_SLOT_COUNT: usize = 5;

/// Apples held by the demo stockpile when the scene starts
pub const DEFAULT_INITIAL_APPLES: i64 = 3;

/// Horizontal distance between two slot sprites (world units)
pub const SLOT_SPACING: f32 = 28.0;

/// Edge length of a slot sprite (world units)
pub const SLOT_SIZE: f32 = 22.0;

/// Vertical offset of the overflow label above the slots
pub const LABEL_OFFSET_Y: f32 = 32.0;

/// Font size of the overflow label
pub const LABEL_FONT_SIZE: f32 = 20.0;

/// Apple red
pub const APPLE_COLOR: Color = Color::srgb(0.8, 0.1, 0.1);

/// Step used by PageUp/PageDown
pub const LARGE_STEP: i64 = 5;

// ============================================================================
// DAY CYCLE
// ============================================================================

/// Seconds spent in each day phase
pub const PHASE_LENGTH_SECS: f64 = 10.0;

/// Number of phases in a full day
pub const PHASES_PER_DAY: i64 = 4;
