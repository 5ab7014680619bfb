use crate::collection::Collection;
use crate::common::Value;
use crate::errors::{CollectError, CollectResult, ErrorKind};
use indexmap::IndexMap;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A named operation registered at runtime.
///
/// Receives the collection it is called on and the call arguments.
pub type MacroFn<T> = dyn Fn(&Collection<T>, &[Value]) -> Value + Send + Sync;

/// Registry of named operations callable on collections of `T`.
///
/// # Purpose
/// New operations are normally added with an extension trait implemented
/// for `Collection<T>`. When the set of operations is only known at runtime
/// (names read from configuration, plugins), register closures here and
/// invoke them with [`Collection::call_macro`].
///
/// # Characteristics
/// - **Cloneable**: closures are shared through `Arc`
/// - **Ordered**: names are kept in registration order
/// - **Thread-safe**: closures must be `Send + Sync`
///
/// # Usage
/// ```rust
/// use stacks_collect::collection::MacroRegistry;
/// use stacks_collect::{collect, val};
///
/// let mut registry = MacroRegistry::<i32>::new();
/// registry.register("double_sum", |c, _| val!(c.sum() * 2.0));
///
/// let result = collect(vec![1, 2, 3]).call_macro(&registry, "double_sum", &[]);
/// assert_eq!(result.unwrap(), val!(12));
/// ```
pub struct MacroRegistry<T> {
    macros: IndexMap<String, Arc<MacroFn<T>>>,
}

impl<T> MacroRegistry<T> {
    pub fn new() -> Self {
        MacroRegistry {
            macros: IndexMap::new(),
        }
    }

    /// Registers `f` under `name`, replacing any earlier registration.
    pub fn register<F>(&mut self, name: &str, f: F) -> &mut Self
    where
        F: Fn(&Collection<T>, &[Value]) -> Value + Send + Sync + 'static,
    {
        if self.macros.insert(name.to_string(), Arc::new(f)).is_some() {
            log::debug!("Macro {} re-registered", name);
        }
        self
    }

    /// Removes the macro registered under `name`. Returns whether one was.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.macros.shift_remove(name).is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.macros.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.macros.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.macros.len()
    }

    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
    }

    fn lookup(&self, name: &str) -> CollectResult<Arc<MacroFn<T>>> {
        match self.macros.get(name) {
            Some(f) => Ok(Arc::clone(f)),
            None => {
                log::error!("No macro registered as {}", name);
                Err(CollectError::new(
                    &format!("No macro registered as {}", name),
                    ErrorKind::UnknownMacro,
                ))
            }
        }
    }
}

impl<T> Default for MacroRegistry<T> {
    fn default() -> Self {
        MacroRegistry::new()
    }
}

impl<T> Clone for MacroRegistry<T> {
    fn clone(&self) -> Self {
        MacroRegistry {
            macros: self.macros.clone(),
        }
    }
}

impl<T> Debug for MacroRegistry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MacroRegistry")
            .field("macros", &self.names())
            .finish()
    }
}

impl<T> Collection<T> {
    /// Calls the macro registered as `name` on this collection.
    ///
    /// # Errors
    ///
    /// Returns `UnknownMacro` if nothing is registered under `name`.
    pub fn call_macro(
        &self,
        registry: &MacroRegistry<T>,
        name: &str,
        args: &[Value],
    ) -> CollectResult<Value> {
        let f = registry.lookup(name)?;
        Ok(f(self, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{collect, val};

    trait Summary {
        fn describe(&self) -> String;
    }

    impl Summary for Collection<i32> {
        fn describe(&self) -> String {
            format!("{} items, total {}", self.count(), self.sum())
        }
    }

    #[test]
    fn test_extension_trait() {
        assert_eq!(collect(vec![1, 2]).describe(), "2 items, total 3");
    }

    #[test]
    fn test_call_macro_with_args() {
        let mut registry = MacroRegistry::new();
        registry.register("scaled", |c: &Collection<i32>, args| {
            let factor = args.first().and_then(Value::as_f64).unwrap_or(1.0);
            val!(c.sum() * factor)
        });
        let c = collect(vec![1, 2, 3]);
        assert_eq!(c.call_macro(&registry, "scaled", &[val!(10)]).unwrap(), val!(60));
        assert_eq!(c.call_macro(&registry, "scaled", &[]).unwrap(), val!(6));
    }

    #[test]
    fn test_unknown_macro() {
        let registry = MacroRegistry::<i32>::new();
        let err = collect(vec![1]).call_macro(&registry, "missing", &[]).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::UnknownMacro);
    }

    #[test]
    fn test_register_replace_and_unregister() {
        let mut registry = MacroRegistry::<i32>::new();
        registry
            .register("a", |_, _| val!(1))
            .register("b", |_, _| val!(2))
            .register("a", |_, _| val!(3));
        assert_eq!(registry.names(), vec!["a", "b"]);
        assert_eq!(collect(vec![0]).call_macro(&registry, "a", &[]).unwrap(), val!(3));

        let copy = registry.clone();
        assert!(registry.unregister("a"));
        assert!(!registry.unregister("a"));
        assert!(!registry.contains("a"));
        assert!(copy.contains("a"));
        assert_eq!(registry.len(), 1);
    }
}
