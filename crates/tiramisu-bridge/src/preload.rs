//! The page-side runtime script injected into every loaded page.
//!
//! It defines `window.tiramisu.invoke(name, ...args)` and the `fs` helpers
//! on top of the raw widget bindings. Typings live in
//! `runtime/index.d.ts`.

use std::borrow::Cow;
use std::path::PathBuf;

/// The bundled runtime script.
pub const PRELOAD_SCRIPT: &str = include_str!("../runtime/preload.js");

/// Where the runtime script comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PreloadSource {
    /// The script compiled into this crate.
    #[default]
    Embedded,
    /// A script on disk, replacing the bundled one.
    File(PathBuf),
}

impl PreloadSource {
    pub fn try_load(&self) -> std::io::Result<Cow<'static, str>> {
        match self {
            Self::Embedded => Ok(Cow::Borrowed(PRELOAD_SCRIPT)),
            Self::File(path) => std::fs::read_to_string(path).map(Cow::Owned),
        }
    }

    /// Load the runtime script.
    ///
    /// # Panics
    ///
    /// Panics if the script cannot be read. Without it pages have no way
    /// to reach the host, so the installation is unusable.
    pub fn load(&self) -> Cow<'static, str> {
        match self.try_load() {
            Ok(script) => script,
            Err(e) => match self {
                Self::File(path) => {
                    panic!("failed to read preload script {}: {e}", path.display())
                }
                Self::Embedded => panic!("failed to read preload script: {e}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_script_defines_page_api() {
        assert!(PRELOAD_SCRIPT.contains("window.tiramisu"));
        assert!(PRELOAD_SCRIPT.contains(crate::dispatch::INVOKE_BINDING));
        assert!(PRELOAD_SCRIPT.contains(crate::builtins::READ_FILE_BINDING));
        assert!(PRELOAD_SCRIPT.contains(crate::builtins::READ_DIR_BINDING));
        assert!(PRELOAD_SCRIPT.contains(crate::builtins::EXISTS_BINDING));
    }

    #[test]
    fn embedded_is_default() {
        assert_eq!(PreloadSource::default(), PreloadSource::Embedded);
        assert_eq!(PreloadSource::Embedded.load(), PRELOAD_SCRIPT);
    }

    #[test]
    fn file_override_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preload.js");
        std::fs::write(&path, "window.custom = true;").unwrap();

        let script = PreloadSource::File(path).load();
        assert_eq!(script, "window.custom = true;");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = PreloadSource::File(PathBuf::from("/tmp/nonexistent_tiramisu_preload.js"));
        assert!(source.try_load().is_err());
    }

    #[test]
    #[should_panic(expected = "failed to read preload script")]
    fn missing_file_panics_on_load() {
        PreloadSource::File(PathBuf::from("/tmp/nonexistent_tiramisu_preload.js")).load();
    }
}
