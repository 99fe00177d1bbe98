/// Default detection threshold, in multiples of the background standard deviation
pub const DEFAULT_THRESHOLD: f64 = 5.0;
/// Default minimum centroid separation between events in the same frame (pixels)
pub const DEFAULT_MIN_DISTANCE: usize = 3;
/// Default CSV output path
pub const DEFAULT_OUTPUT_PATH: &str = "events.csv";
/// Upper bound on worker threads for the parallel detector
pub const MAX_THREADS: usize = 1024;
