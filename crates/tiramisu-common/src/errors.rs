use std::path::PathBuf;

/// Error type returned by host-side handlers.
///
/// Boxed so handlers can `?` any error type they encounter.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failure to read or convert a positional call argument.
#[derive(Debug, thiserror::Error)]
pub enum ArgError {
    #[error("arg {index} out of range [0..{}]", last_index(.len))]
    OutOfRange { index: usize, len: usize },

    #[error("cannot convert arg[{index}] -> {target}: {source}")]
    Coerce {
        index: usize,
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

fn last_index(len: &usize) -> i64 {
    *len as i64 - 1
}

/// Recoverable call failures. These are reported back to the page as
/// rejected calls and never abort the process.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("function {name} not found")]
    NotFound { name: String },

    #[error("error invoking function {name}: {source}")]
    Handler {
        name: String,
        #[source]
        source: HandlerError,
    },

    #[error(transparent)]
    Arg(#[from] ArgError),

    #[error("binding {0} not found")]
    BindingNotFound(String),

    #[error("{context}: {source}")]
    Fs {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Failures of the native window or webview.
#[derive(Debug, thiserror::Error)]
pub enum TiramisuError {
    #[error("webview error: {0}")]
    WebView(String),

    #[error("window error: {0}")]
    Window(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("window.width = 5".into());
        assert_eq!(err.to_string(), "config validation error: window.width = 5");
    }

    #[test]
    fn arg_out_of_range_display() {
        let err = ArgError::OutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "arg 3 out of range [0..1]");

        // Empty argument lists render an upper bound of -1.
        let err = ArgError::OutOfRange { index: 0, len: 0 };
        assert_eq!(err.to_string(), "arg 0 out of range [0..-1]");
    }

    #[test]
    fn arg_coerce_display() {
        let source = serde_json::from_str::<String>("1").unwrap_err();
        let err = ArgError::Coerce {
            index: 0,
            target: "alloc::string::String",
            source,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("cannot convert arg[0] -> alloc::string::String: "));
    }

    #[test]
    fn bridge_error_display() {
        let err = BridgeError::NotFound {
            name: "missing".into(),
        };
        assert_eq!(err.to_string(), "function missing not found");

        let err = BridgeError::Handler {
            name: "hello".into(),
            source: "boom".into(),
        };
        assert_eq!(err.to_string(), "error invoking function hello: boom");

        let err = BridgeError::BindingNotFound("__x".into());
        assert_eq!(err.to_string(), "binding __x not found");

        let err = BridgeError::Fs {
            context: "error reading file /nope".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "error reading file /nope: no such file");
    }

    #[test]
    fn bridge_error_keeps_handler_source() {
        use std::error::Error as _;

        let err = BridgeError::Handler {
            name: "hello".into(),
            source: "boom".into(),
        };
        assert_eq!(err.source().map(|s| s.to_string()), Some("boom".into()));
    }

    #[test]
    fn arg_error_is_transparent_in_bridge_error() {
        let err: BridgeError = ArgError::OutOfRange { index: 0, len: 0 }.into();
        assert!(matches!(err, BridgeError::Arg(_)));
        assert_eq!(err.to_string(), "arg 0 out of range [0..-1]");
    }

    #[test]
    fn tiramisu_error_display() {
        let err = TiramisuError::WebView("build failed".into());
        assert_eq!(err.to_string(), "webview error: build failed");

        let err = TiramisuError::Window("no display".into());
        assert_eq!(err.to_string(), "window error: no display");
    }
}
