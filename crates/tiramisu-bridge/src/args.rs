//! Positional argument access for handlers.
//!
//! Page calls arrive as a list of loosely-typed JSON values. Handlers pull
//! out what they need with [`arg`] or convert on demand with [`arg_as`].

use std::any::{Any, TypeId};

use serde::de::DeserializeOwned;

use tiramisu_common::{ArgError, Value};

/// Borrow the argument at `index`.
pub fn arg(args: &[Value], index: usize) -> Result<&Value, ArgError> {
    args.get(index).ok_or(ArgError::OutOfRange {
        index,
        len: args.len(),
    })
}

/// Convert the argument at `index` into `T`.
///
/// Asking for a [`Value`] hands back the argument untouched; every other
/// type goes through serde's structural conversion, so a JSON object can
/// become a struct and a JSON number any integer type it fits in.
pub fn arg_as<T>(args: &[Value], index: usize) -> Result<T, ArgError>
where
    T: DeserializeOwned + 'static,
{
    let value = arg(args, index)?;

    if TypeId::of::<T>() == TypeId::of::<Value>() {
        let boxed: Box<dyn Any> = Box::new(value.clone());
        if let Ok(direct) = boxed.downcast::<T>() {
            return Ok(*direct);
        }
    }

    T::deserialize(value).map_err(|source| ArgError::Coerce {
        index,
        target: std::any::type_name::<T>(),
        source,
    })
}
