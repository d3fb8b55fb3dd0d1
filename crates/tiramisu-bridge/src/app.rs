//! The host-side application object: one widget, one registry.

use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, info};

use tiramisu_common::{BridgeError, HandlerError, TiramisuError, Value};

use crate::dispatch::{self, RESERVED_PREFIX};
use crate::preload::PreloadSource;
use crate::registry::Registry;
use crate::widget::RenderWidget;

/// Bridge behavior options.
#[derive(Debug, Clone)]
pub struct TiramisuOptions {
    /// Runtime script injected into every page.
    pub preload: PreloadSource,
    /// Whether to expose `window.tiramisu.fs`.
    pub fs_api: bool,
}

impl Default for TiramisuOptions {
    fn default() -> Self {
        Self {
            preload: PreloadSource::Embedded,
            fs_api: true,
        }
    }
}

/// A page host exposing named host functions to its script.
///
/// ```no_run
/// use serde_json::json;
/// use tiramisu_bridge::{arg_as, RenderWidget, Tiramisu, TiramisuOptions};
///
/// fn setup<W: RenderWidget>(widget: W) -> Tiramisu<W> {
///     let mut app = Tiramisu::new(widget, TiramisuOptions::default());
///     app.bind("double", |args| {
///         let n: i64 = arg_as(args, 0)?;
///         Ok(json!(n * 2))
///     });
///     app
/// }
/// ```
pub struct Tiramisu<W: RenderWidget> {
    widget: W,
    registry: Arc<Registry>,
    preload: Cow<'static, str>,
    fs_api: bool,
}

impl<W: RenderWidget> Tiramisu<W> {
    /// Wrap `widget`.
    ///
    /// # Panics
    ///
    /// Panics if the configured preload script cannot be read.
    pub fn new(widget: W, options: TiramisuOptions) -> Self {
        let preload = options.preload.load();
        Self {
            widget,
            registry: Arc::new(Registry::new()),
            preload,
            fs_api: options.fs_api,
        }
    }

    /// Install the page runtime into the current page. Call once when the
    /// widget is ready, before the event loop starts delivering calls.
    pub fn start(&mut self) -> Result<(), TiramisuError> {
        info!("starting bridge");
        self.load_runtime()
    }

    /// Expose `handler` to page script under `name`.
    ///
    /// Reachable as `window.tiramisu.invoke(name, ...)` and directly as
    /// `window[name](...)`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is already bound, or if it starts with the
    /// `__TIRAMISU_` prefix the page runtime keeps for its own bindings.
    pub fn bind<F>(&mut self, name: &str, handler: F)
    where
        F: Fn(&[Value]) -> Result<Value, HandlerError> + Send + Sync + 'static,
    {
        if dispatch::is_reserved(name) {
            panic!("function {name} uses the reserved prefix {RESERVED_PREFIX}");
        }
        self.registry.register(name, handler);
        self.widget.bind_raw(
            name,
            dispatch::named_callback(Arc::clone(&self.registry), name.to_string()),
        );
    }

    /// Call a bound function from the host side.
    pub fn invoke(&self, name: &str, args: &[Value]) -> Result<Value, BridgeError> {
        self.registry.invoke(name, args)
    }

    /// Evaluate `js` in the current page.
    pub fn eval(&mut self, js: &str) -> Result<(), TiramisuError> {
        self.widget.eval_script(js)
    }

    /// Replace the page with `html` and reinstall the runtime, so bound
    /// functions stay callable without being registered again.
    pub fn html(&mut self, html: &str) -> Result<(), TiramisuError> {
        debug!(len = html.len(), "loading html");
        self.widget.set_html(html)?;
        self.load_runtime()
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    fn load_runtime(&mut self) -> Result<(), TiramisuError> {
        dispatch::install(&mut self.widget, &self.registry, &self.preload, self.fs_api)
    }
}
