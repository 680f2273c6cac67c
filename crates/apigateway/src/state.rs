use prometheus_client::registry::Registry;
use registration::{
    config::FormCatalog,
    di::{DependenciesInject, DependenciesInjectDeps},
};
use shared::utils::DynClock;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
}

impl AppState {
    pub fn new(catalog: FormCatalog, clock: DynClock) -> Self {
        let mut registry = Registry::default();

        let di_container =
            DependenciesInject::new(DependenciesInjectDeps { catalog, clock }, &mut registry);

        Self {
            di_container,
            registry: Arc::new(Mutex::new(registry)),
        }
    }
}
