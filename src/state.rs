use crate::templates::TemplateStore;
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AppState {
    templates: Arc<TemplateStore>,
}

impl AppState {
    pub fn create(templates: TemplateStore) -> Self {
        Self {
            templates: Arc::new(templates),
        }
    }
}

impl FromRef<AppState> for Arc<TemplateStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.templates.clone()
    }
}
