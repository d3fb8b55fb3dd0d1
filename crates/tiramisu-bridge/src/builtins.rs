//! Filesystem helpers exposed to every page as `window.tiramisu.fs`.

use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use tiramisu_common::{BridgeError, Value};

use crate::args::arg_as;
use crate::widget::RenderWidget;

pub const READ_FILE_BINDING: &str = "__TIRAMISU_FILESYSTEM_readFile";
pub const READ_DIR_BINDING: &str = "__TIRAMISU_FILESYSTEM_readDir";
pub const EXISTS_BINDING: &str = "__TIRAMISU_FILESYSTEM_exists";

/// Every filesystem binding id.
pub const BINDINGS: [&str; 3] = [READ_FILE_BINDING, READ_DIR_BINDING, EXISTS_BINDING];

/// Bind the filesystem helpers on `widget`.
pub fn install<W: RenderWidget + ?Sized>(widget: &mut W) {
    widget.bind_raw(READ_FILE_BINDING, Arc::new(read_file));
    widget.bind_raw(READ_DIR_BINDING, Arc::new(read_dir));
    widget.bind_raw(EXISTS_BINDING, Arc::new(exists));
}

/// `readFile(path) -> string`
pub fn read_file(args: &[Value]) -> Result<Value, BridgeError> {
    let path: String = arg_as(args, 0)?;
    std::fs::read_to_string(&path)
        .map(Value::String)
        .map_err(|source| BridgeError::Fs {
            context: format!("error reading file {path}"),
            source,
        })
}

/// `readDir(path) -> string[]`, entry names sorted.
pub fn read_dir(args: &[Value]) -> Result<Value, BridgeError> {
    let path: String = arg_as(args, 0)?;
    let fs_err = |source| BridgeError::Fs {
        context: format!("error reading directory {path}"),
        source,
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(&path).map_err(fs_err)? {
        let entry = entry.map_err(fs_err)?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(Value::from(names))
}

/// `exists(path) -> bool`
pub fn exists(args: &[Value]) -> Result<Value, BridgeError> {
    let path: String = arg_as(args, 0)?;
    match std::fs::metadata(Path::new(&path)) {
        Ok(_) => Ok(Value::Bool(true)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Value::Bool(false)),
        Err(source) => Err(BridgeError::Fs {
            context: format!("error checking existence of {path}"),
            source,
        }),
    }
}
