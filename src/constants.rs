// Visual and DOM constants used by the web frontend.

// Canvas backing sizes (CSS may scale them)
pub const LAB_CANVAS_SIZE: (u32, u32) = (800, 600);
pub const COMPARE_CANVAS_SIZE: (u32, u32) = (800, 500);

// Reference grid (world units)
pub const GRID_SPACING: f64 = 40.0;
pub const GRID_EXTENT: f64 = 1000.0; // lines span [-EXTENT, EXTENT]
pub const GRID_LINE_WIDTH: f64 = 1.0;
pub const GRID_COLOR: &str = "#e2e8f0";

// Markers
pub const TARGET_RADIUS: f64 = 16.0;
pub const TARGET_COLOR: &str = "#2563eb";
pub const CAMERA_RADIUS: f64 = 6.0;
pub const CAMERA_COLOR: &str = "#10b981";

// Mount points; the page provides one of these
pub const LAB_ROOT_ID: &str = "camera-lab";
pub const COMPARE_ROOT_ID: &str = "compare";

// Messages
pub const CANVAS_HINT: &str = "Move your mouse. Click to add shake.";
pub const SHARE_COPIED_PREFIX: &str = "Share URL copied to clipboard!\n";
pub const INVALID_URL_MESSAGE: &str = "Invalid URL!";
