//! The single raw binding every named page call is funneled through.
//!
//! Page script calls `window.tiramisu.invoke(name, ...args)`, which the
//! preload script forwards to the raw binding [`INVOKE_BINDING`] as
//! `(name, ...args)`. The first argument selects the registered handler and
//! the rest are passed through untouched.

use std::sync::Arc;

use tracing::{debug, info};

use tiramisu_common::{BridgeError, TiramisuError, Value};

use crate::args::arg_as;
use crate::builtins;
use crate::registry::Registry;
use crate::widget::{RawCallback, RenderWidget};

/// Widget-level id of the dispatch entry point.
pub const INVOKE_BINDING: &str = "__TIRAMISU_INTERNAL_invoke";

/// Prefix of every raw binding the page runtime owns.
pub const RESERVED_PREFIX: &str = "__TIRAMISU_";

/// Whether `id` belongs to the page runtime rather than the application.
pub fn is_reserved(id: &str) -> bool {
    id.starts_with(RESERVED_PREFIX)
}

/// Raw bindings `install` puts on every page.
pub fn runtime_bindings(fs_api: bool) -> Vec<&'static str> {
    let mut ids = vec![INVOKE_BINDING];
    if fs_api {
        ids.extend(builtins::BINDINGS);
    }
    ids
}

/// Route a raw `(name, ...args)` call to the registry.
///
/// A missing or non-string name is reported as an argument error.
pub fn dispatch(registry: &Registry, args: &[Value]) -> Result<Value, BridgeError> {
    let name: String = arg_as(args, 0)?;
    let result = registry.invoke(&name, &args[1..]);
    match &result {
        Ok(_) => debug!(name = %name, argc = args.len() - 1, "call resolved"),
        Err(e) => debug!(name = %name, error = %e, "call rejected"),
    }
    result
}

/// Raw callback that dispatches into `registry`.
pub fn invoke_callback(registry: Arc<Registry>) -> RawCallback {
    Arc::new(move |args: &[Value]| dispatch(&registry, args))
}

/// Raw callback forwarding directly to the handler named `name`.
pub fn named_callback(registry: Arc<Registry>, name: String) -> RawCallback {
    Arc::new(move |args: &[Value]| registry.invoke(&name, args))
}

/// Install the page runtime into the widget's current page.
///
/// Evaluates the preload script, binds every registered function under its
/// own name, then binds the dispatch entry point plus the filesystem
/// helpers when `fs_api` is set. Runtime bindings go last so they win over
/// any registry entry sharing their id. Called once at startup and again
/// whenever new content is loaded, since a fresh document may have lost
/// its bindings.
pub fn install<W>(
    widget: &mut W,
    registry: &Arc<Registry>,
    preload: &str,
    fs_api: bool,
) -> Result<(), TiramisuError>
where
    W: RenderWidget + ?Sized,
{
    widget.eval_script(preload)?;
    for name in registry.names() {
        let callback = named_callback(Arc::clone(registry), name.clone());
        widget.bind_raw(&name, callback);
    }
    widget.bind_raw(INVOKE_BINDING, invoke_callback(Arc::clone(registry)));
    if fs_api {
        builtins::install(widget);
    }
    info!(functions = registry.len(), fs_api, "bridge runtime installed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockWidget;
    use serde_json::json;
    use tiramisu_common::ArgError;

    fn registry() -> Arc<Registry> {
        let registry = Arc::new(Registry::new());
        registry.register("sum", |args| {
            let total: f64 = args.iter().filter_map(Value::as_f64).sum();
            Ok(json!(total))
        });
        registry
    }

    #[test]
    fn forwards_remaining_args() {
        let out = dispatch(&registry(), &[json!("sum"), json!(1), json!(2.5)]).unwrap();
        assert_eq!(out, json!(3.5));
    }

    #[test]
    fn name_only_forwards_no_args() {
        let out = dispatch(&registry(), &[json!("sum")]).unwrap();
        assert_eq!(out, json!(0.0));
    }

    #[test]
    fn zero_args_is_reported() {
        let err = dispatch(&registry(), &[]).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::Arg(ArgError::OutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn non_string_name_is_reported() {
        for bad in [json!(1), json!(null), json!(["sum"]), json!({"name": "sum"})] {
            let err = dispatch(&registry(), &[bad]).unwrap_err();
            assert!(matches!(err, BridgeError::Arg(ArgError::Coerce { index: 0, .. })));
        }
    }

    #[test]
    fn unknown_name_is_not_found() {
        let err = dispatch(&registry(), &[json!("nope")]).unwrap_err();
        assert_eq!(err.to_string(), "function nope not found");
    }

    #[test]
    fn install_evaluates_preload_then_binds() {
        let mut widget = MockWidget::new();
        install(&mut widget, &registry(), "/* preload */", false).unwrap();

        assert_eq!(widget.scripts(), ["/* preload */"]);
        assert!(widget.is_bound(INVOKE_BINDING));
        assert!(!widget.is_bound(builtins::READ_FILE_BINDING));
        assert_eq!(widget.page_invoke("sum", &[json!(2), json!(2)]).unwrap(), json!(4.0));
        assert_eq!(widget.call("sum", &[json!(1), json!(2)]).unwrap(), json!(3.0));
    }

    #[test]
    fn runtime_bindings_win_over_registry_entries() {
        let registry = registry();
        registry.register(INVOKE_BINDING, |_| Ok(json!("shadowed")));

        let mut widget = MockWidget::new();
        install(&mut widget, &registry, "", false).unwrap();
        assert_eq!(widget.page_invoke("sum", &[json!(1)]).unwrap(), json!(1.0));
    }

    #[test]
    fn reserved_ids() {
        assert!(is_reserved(INVOKE_BINDING));
        assert!(is_reserved(builtins::EXISTS_BINDING));
        assert!(!is_reserved("hello"));
        assert!(!is_reserved("TIRAMISU_hello"));
    }

    #[test]
    fn runtime_bindings_follow_fs_api() {
        assert_eq!(runtime_bindings(false), vec![INVOKE_BINDING]);
        let all = runtime_bindings(true);
        assert_eq!(all.len(), 4);
        assert!(all.iter().all(|id| is_reserved(id)));
    }

    #[test]
    fn install_with_fs_api_binds_helpers() {
        let mut widget = MockWidget::new();
        install(&mut widget, &registry(), "", true).unwrap();

        assert!(widget.is_bound(builtins::READ_FILE_BINDING));
        assert!(widget.is_bound(builtins::READ_DIR_BINDING));
        assert!(widget.is_bound(builtins::EXISTS_BINDING));
    }

    #[test]
    fn named_callback_skips_name_argument() {
        let callback = named_callback(registry(), "sum".into());
        assert_eq!(callback(&[json!(1), json!(1)]).unwrap(), json!(2.0));
    }
}
