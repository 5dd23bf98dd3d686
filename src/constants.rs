// Browser-side settings. Simulation tuning lives in `sim::constants`.

// Element the effect paints into when the page does not name one.
pub const DEFAULT_CANVAS_ID: &str = "vbCanvas";

// Console verbosity for the `log` facade.
pub const LOG_LEVEL: log::Level = log::Level::Info;

// Backing-store ratio is clamped so very dense displays do not allocate huge
// canvases.
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 3.0;
