/// DOM element ids and page-level settings used by the web frontend.
///
/// Button ids live with `bandfield_core::Button`; everything else the page
/// must provide is listed here.
// Canvases
pub const VISUALIZER_CANVAS_ID: &str = "visualizer";
pub const HISTOGRAM_CANVAS_ID: &str = "histogram";

// Inputs
pub const PROGRESS_RANGE_ID: &str = "audioRange";
pub const TRACK_SELECT_ID: &str = "audioSelect";

// Both canvases share the viewport height
pub const CANVAS_HEIGHT_FRACTION: f64 = 0.5;

// Frame statistics are logged this often
pub const FRAME_LOG_INTERVAL_SEC: f64 = 5.0;

// GPU clear color (transparent so the page background shows through)
pub const SCENE_CLEAR_ALPHA: f64 = 0.0;

pub const DOM_IDS: [&str; 4] = [
    VISUALIZER_CANVAS_ID,
    HISTOGRAM_CANVAS_ID,
    PROGRESS_RANGE_ID,
    TRACK_SELECT_ID,
];
