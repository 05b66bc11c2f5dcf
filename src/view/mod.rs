mod render;
mod state;

use std::sync::Arc;
use tokio::sync::RwLock;

pub use render::{PageRenderer, DEFAULT_CENTER, DEFAULT_ZOOM, TILE_ATTRIBUTION};
pub use state::{Submission, UiState, ViewState};

pub type SharedView = Arc<RwLock<ViewState>>;

pub fn shared() -> SharedView {
    Arc::new(RwLock::new(ViewState::new()))
}
