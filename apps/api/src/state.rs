use switchyard_application::ServiceHandler;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub services: ServiceHandler,
}
