use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Wait between closing the lightbox and opening the booking form, so the
/// lightbox close transition can finish first.
pub const LIGHTBOX_HANDOFF_MS: u32 = 100;

/// Horizontal distance one click on a gallery arrow scrolls.
pub const GALLERY_SCROLL_STEP_PX: f64 = 200.0;

// Card stack tuning
pub const STACK_SENSITIVITY: f64 = 180.0;
pub const STACK_POINTER_SCALE: f64 = 20.0;
pub const STACK_DEPTH_STEP: f64 = 0.1;
pub const STACK_MAX_TILT_DEG: f64 = 5.0;
pub const STACK_HOVER_TRANSITION: &str = "transform 0.1s ease-out";
pub const STACK_RESET_TRANSITION: &str = "transform 0.3s ease-out";

/// Page offset past which the header switches to its solid style.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;
