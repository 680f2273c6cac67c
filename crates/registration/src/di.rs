use crate::{
    abstract_trait::{DynFormRepository, DynFormService, DynRegisterService, DynRegistrationRepository},
    config::FormCatalog,
    repository::{InMemoryFormRepository, InMemoryRegistrationRepository},
    service::{FormService, FormServiceDeps, RegisterService, RegisterServiceDeps},
};
use prometheus_client::registry::Registry;
use shared::utils::DynClock;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub form_service: DynFormService,
    pub register_service: DynRegisterService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("form_service", &"FormService")
            .field("register_service", &"RegisterService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub catalog: FormCatalog,
    pub clock: DynClock,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps { catalog, clock } = deps;

        let forms: DynFormRepository = Arc::new(InMemoryFormRepository::new(catalog));
        let registrations: DynRegistrationRepository =
            Arc::new(InMemoryRegistrationRepository::new());

        let form_service = Arc::new(FormService::new(
            FormServiceDeps {
                forms: forms.clone(),
            },
            registry,
        )) as DynFormService;

        let register_service = Arc::new(RegisterService::new(
            RegisterServiceDeps {
                forms,
                registrations,
                clock,
            },
            registry,
        )) as DynRegisterService;

        Self {
            form_service,
            register_service,
        }
    }
}
