//! Algorithm selection and the dispatcher that shields the host from module
//! failures.

use crate::attributes::GraphAttributes;
use crate::module::{LayeredLayout, LayoutModule};

pub type ModuleFactory = fn() -> Box<dyn LayoutModule>;

struct ModuleEntry {
    id: &'static str,
    factory: ModuleFactory,
}

/// Maps algorithm identifiers to zero-argument factories, built once at
/// startup. Adding a module means adding one entry, never touching dispatch
/// logic.
pub struct ModuleRegistry {
    entries: Vec<ModuleEntry>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// All built-in modules.
    pub fn with_default_modules() -> Self {
        let mut reg = Self::new();
        reg.add("layered", || Box::new(LayeredLayout::new()));
        reg.add("layered-quick", || Box::new(LayeredLayout::quick()));
        reg
    }

    pub fn add(&mut self, id: &'static str, factory: ModuleFactory) {
        self.entries.push(ModuleEntry { id, factory });
    }

    /// Instantiates the module registered under `id`, returning the
    /// registered id alongside so callers can keep the canonical spelling.
    pub fn create(&self, id: &str) -> Option<(&'static str, Box<dyn LayoutModule>)> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| (entry.id, (entry.factory)()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.id)
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::with_default_modules()
    }
}

/// Owns exactly one concrete layout module at a time and replaces it
/// atomically on selection change: the new module is constructed first, so a
/// failed selection never leaves the dispatcher without a usable module.
///
/// Every failure a module reports is recoverable: `call` converts it to its
/// category diagnostic, logs it, and leaves the previous drawing untouched.
pub struct GraphLayout {
    registry: ModuleRegistry,
    module: Box<dyn LayoutModule>,
    algorithm: &'static str,
    enabled: bool,
    last_diagnostic: Option<String>,
}

impl GraphLayout {
    pub const DEFAULT_ALGORITHM: &'static str = "layered";

    pub fn new() -> Self {
        Self::with_registry(ModuleRegistry::with_default_modules(), Self::DEFAULT_ALGORITHM)
            .expect("default registry must contain the default algorithm")
    }

    /// A dispatcher over a custom registry. Returns `None` when `initial` is
    /// not registered, since the dispatcher must always hold a module.
    pub fn with_registry(registry: ModuleRegistry, initial: &str) -> Option<Self> {
        let (algorithm, module) = registry.create(initial)?;
        Some(Self {
            registry,
            module,
            algorithm,
            enabled: true,
            last_diagnostic: None,
        })
    }

    pub fn algorithm(&self) -> &str {
        self.algorithm
    }

    /// Selects the active algorithm. Selecting the current one is a no-op and
    /// an unrecognized identifier leaves the module unchanged; both return
    /// `false`. Returns `true` only when the module actually changed;
    /// callers treat that as the change notification.
    pub fn set_algorithm(&mut self, id: &str) -> bool {
        if id == self.algorithm {
            return false;
        }
        let Some((algorithm, module)) = self.registry.create(id) else {
            return false;
        };
        self.module = module;
        self.algorithm = algorithm;
        true
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        if enabled == self.enabled {
            return false;
        }
        self.enabled = enabled;
        true
    }

    /// Diagnostic of the most recent failed `call`, cleared by the next
    /// successful one.
    pub fn last_diagnostic(&self) -> Option<&str> {
        self.last_diagnostic.as_deref()
    }

    /// Runs the active module. On success the attributes hold the new
    /// drawing; on failure they are left exactly as they were and the
    /// categorized diagnostic is recorded and logged. Unrecognized failure
    /// kinds fall through to the `Unknown` categories, so nothing a module
    /// reports can escalate out of this method.
    pub fn call(&mut self, attrs: &mut GraphAttributes) {
        if !self.enabled {
            return;
        }

        let mut scratch = attrs.clone();
        match self.module.call(&mut scratch) {
            Ok(()) => {
                *attrs = scratch;
                self.last_diagnostic = None;
            }
            Err(err) => {
                let mut diagnostic = err.to_string();
                if let Some(detail) = err.detail() {
                    diagnostic.push_str(&format!(" ({detail})"));
                }
                tracing::warn!(algorithm = self.algorithm, "{diagnostic}");
                self.last_diagnostic = Some(diagnostic);
            }
        }
    }
}

impl Default for GraphLayout {
    fn default() -> Self {
        Self::new()
    }
}
