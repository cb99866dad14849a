use anyhow::Result;

use crate::backend::{Backend, LogBackend};

use super::{options::UiOptions, runtime::App};

/// Entry point for the dashboard UI. Construct one, optionally swap in a
/// backend or tweak [`UiOptions`], then call [`run`](Self::run) to take over
/// the terminal until the user quits.
///
/// ```no_run
/// use finboard::Finboard;
///
/// fn main() -> anyhow::Result<()> {
///     Finboard::new().run()
/// }
/// ```
pub struct Finboard {
    backend: Box<dyn Backend>,
    options: UiOptions,
}

impl Default for Finboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Finboard {
    pub fn new() -> Self {
        Self {
            backend: Box::new(LogBackend),
            options: UiOptions::default(),
        }
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_backend(mut self, backend: impl Backend + 'static) -> Self {
        self.backend = Box::new(backend);
        self
    }

    pub fn run(self) -> Result<()> {
        App::new(self.backend, self.options).run()
    }
}
