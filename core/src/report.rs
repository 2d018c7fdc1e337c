use serde::Serialize;

/// Machine-readable record of one kernel run: the computed numeric results
/// in print order plus the measured wall-clock time.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub kernel: &'static str,
    pub values: Vec<i64>,
    pub elapsed_ms: f64,
}
