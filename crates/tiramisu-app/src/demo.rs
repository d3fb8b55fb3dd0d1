//! The bundled demo: a `hello` host function and a page that calls it.

use tiramisu_bridge::{RenderWidget, Tiramisu};
use tiramisu_common::{HandlerError, Value};

/// Page shown when no `--html` file is given.
pub const DEMO_PAGE: &str = include_str!("../assets/index.html");

/// Greets its single argument, or the world when called without one.
pub fn hello(args: &[Value]) -> Result<Value, HandlerError> {
    let greeting = match args {
        [] => "Hello, World!".to_string(),
        [Value::String(who)] => format!("Hello, {who}!"),
        [other] => format!("Hello, {other}!"),
        _ => "Hello, unknown!".to_string(),
    };
    Ok(Value::String(greeting))
}

/// Register the demo functions on `host`.
pub fn bind<W: RenderWidget>(host: &mut Tiramisu<W>) {
    host.bind("hello", hello);
}
