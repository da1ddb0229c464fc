use crate::lookup::LookupPipeline;
use std::path::PathBuf;
use std::sync::Mutex;

pub struct AppState {
    pub pipeline: Mutex<LookupPipeline>,
    /// Where the map artifact is written and served from.
    pub map_path: PathBuf,
}
