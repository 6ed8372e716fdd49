use crate::core::client::{ClientInitParam, ClientOption};
use crate::core::runtime::RuntimeSettings;

/// Anything that can say which service to dial and how.
pub trait ClientParamProvider {
    fn client_init_param(&self) -> ClientInitParam;

    /// Options applied after the ones derived from the init param.
    fn extra_options(&self) -> Vec<ClientOption> {
        Vec::new()
    }

    fn runtime_settings(&self) -> RuntimeSettings {
        RuntimeSettings::default()
    }
}
