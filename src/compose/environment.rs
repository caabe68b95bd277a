//! Persistent name-to-value environment for do-notation.
//!
//! An [`Environment`] is a cons list of `(name, value)` bindings. Binding a
//! name returns a new environment that shares every existing node with the
//! old one, so each branch of a List computation extends its own copy in
//! O(1) without disturbing its siblings.
//!
//! Lookups walk from the most recent binding, which is how a later binding
//! of the same name shadows an earlier one.
//!
//! # Examples
//!
//! ```rust
//! use monadic::compose::Environment;
//!
//! let outer = Environment::new().bind("x", 1).bind("y", 2);
//! let inner = outer.bind("x", 10);
//!
//! assert_eq!(inner.lookup("x"), Ok(&10));
//! assert_eq!(outer.lookup("x"), Ok(&1));
//! assert!(inner.lookup("z").is_err());
//! ```

use std::fmt;
use std::rc::Rc;

use crate::error::{MonadError, MonadResult};

struct Node<V> {
    name: Rc<str>,
    value: V,
    next: Option<Rc<Self>>,
}

/// An immutable mapping from names to values bound so far.
pub struct Environment<V> {
    head: Option<Rc<Node<V>>>,
    length: usize,
}

impl<V> Environment<V> {
    /// Creates an environment with no bindings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Returns a new environment with `name` bound to `value`.
    ///
    /// `self` is left unchanged.
    #[must_use]
    pub fn bind(&self, name: impl Into<Rc<str>>, value: V) -> Self {
        Self {
            head: Some(Rc::new(Node {
                name: name.into(),
                value,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns the most recent value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&V> {
        self.iter()
            .find(|(bound, _)| *bound == name)
            .map(|(_, value)| value)
    }

    /// Returns the most recent value bound to `name`.
    ///
    /// # Errors
    ///
    /// Returns [`MonadError::UnboundName`] when `name` has not been bound.
    pub fn lookup(&self, name: &str) -> MonadResult<&V> {
        self.get(name).ok_or_else(|| {
            tracing::debug!(name, "lookup of unbound name");
            MonadError::unbound(name)
        })
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of bindings, shadowed ones included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if nothing has been bound.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Iterates over `(name, value)` pairs, most recent first.
    pub fn iter(&self) -> EnvironmentIter<'_, V> {
        EnvironmentIter {
            current: self.head.as_deref(),
        }
    }
}

impl<V> Clone for Environment<V> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

impl<V> Default for Environment<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for Environment<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator over the bindings of an [`Environment`].
pub struct EnvironmentIter<'a, V> {
    current: Option<&'a Node<V>>,
}

impl<'a, V> Iterator for EnvironmentIter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            (&*node.name, &node.value)
        })
    }
}

impl<'a, V> IntoIterator for &'a Environment<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = EnvironmentIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
