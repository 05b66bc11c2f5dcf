use axum::extract::{Extension, Json};

use crate::view::{SharedView, UiState};

pub async fn find(Extension(view): Extension<SharedView>) -> Json<UiState> {
    let state = view.read().await.state().clone();

    state.into()
}
