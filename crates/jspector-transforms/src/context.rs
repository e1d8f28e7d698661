//! Options shared by every pass of a single transform run.

use jspector_emitter::PrinterOptions;
use serde::Deserialize;

/// Names baked into the generated code.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProxyNames {
    /// Binding that holds the runtime, e.g. `Proxy` in `new Proxy.Variable()`.
    pub namespace: String,
    /// Module specifier passed to `require` by the client import.
    pub runtime_module: String,
}

impl Default for ProxyNames {
    fn default() -> Self {
        Self {
            namespace: "Proxy".to_string(),
            runtime_module: "jspector".to_string(),
        }
    }
}

impl ProxyNames {
    pub const VARIABLE_TYPE: &'static str = "Variable";
    pub const FUNCTION_TYPE: &'static str = "Function";

    /// Whether `object.property` names one of the proxy constructors.
    #[must_use]
    pub fn is_proxy_type(&self, object: &str, property: &str) -> bool {
        object == self.namespace
            && (property == Self::VARIABLE_TYPE || property == Self::FUNCTION_TYPE)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransformOptions {
    /// Prepend `const <namespace> = require('<module>');` to the program.
    pub inject_client: bool,
    #[serde(flatten)]
    pub names: ProxyNames,
    /// Also unwrap bare identifier call arguments that name a variable proxy.
    pub unwrap_call_arguments: bool,
    pub printer: PrinterOptions,
}

impl TransformOptions {
    #[must_use]
    pub fn with_client(mut self, inject_client: bool) -> Self {
        self.inject_client = inject_client;
        self
    }
}
