use super::{DocumentRoot, ThemeContextValue, FORCED_THEME};
use crate::error::{Error, Result};
use std::cell::{Cell, RefCell};
use std::marker::PhantomData;

thread_local! {
    static CONTEXT_STACK: RefCell<Vec<(u64, ThemeContextValue)>> = const { RefCell::new(Vec::new()) };
    static NEXT_SCOPE_ID: Cell<u64> = const { Cell::new(0) };
}

/// Provider component pinned to [`FORCED_THEME`].
#[derive(Debug)]
pub struct ThemeProvider {
    value: ThemeContextValue,
}

impl ThemeProvider {
    pub fn new() -> Self {
        Self {
            value: ThemeContextValue {
                theme: FORCED_THEME,
            },
        }
    }

    pub fn value(&self) -> ThemeContextValue {
        self.value
    }

    /// Applies the theme class to `root` and makes the context visible to
    /// `use_theme` until the returned scope is dropped.
    pub fn mount<R>(&self, root: &mut R) -> ThemeScope
    where
        R: DocumentRoot + ?Sized,
    {
        root.remove_class(self.value.theme.opposite().class_name());
        root.add_class(self.value.theme.class_name());
        tracing::debug!(theme = %self.value.theme, "applied theme class to document root");

        let id = NEXT_SCOPE_ID.with(|next| {
            let id = next.get();
            next.set(id.wrapping_add(1));
            id
        });
        let depth = CONTEXT_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            stack.push((id, self.value));
            stack.len()
        });
        tracing::trace!(id, depth, "theme provider mounted");

        ThemeScope {
            id,
            depth,
            _not_send: PhantomData,
        }
    }

    /// Mounts, runs `children` inside the provider, then unmounts.
    pub fn render<R, F, T>(&self, root: &mut R, children: F) -> T
    where
        R: DocumentRoot + ?Sized,
        F: FnOnce() -> T,
    {
        let _scope = self.mount(root);
        children()
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Mounted provider. Dropping it unmounts this provider only.
#[must_use = "the provider is unmounted as soon as the scope is dropped"]
#[derive(Debug)]
pub struct ThemeScope {
    id: u64,
    depth: usize,
    _not_send: PhantomData<*const ()>,
}

impl ThemeScope {
    /// Nesting depth at mount time, 1 for the outermost.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Drop for ThemeScope {
    fn drop(&mut self) {
        CONTEXT_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            if let Some(pos) = stack.iter().rposition(|(id, _)| *id == self.id) {
                stack.remove(pos);
            }
        });
        tracing::trace!(id = self.id, "theme provider unmounted");
    }
}

/// Returns the innermost theme context on the current thread.
pub fn use_theme() -> Result<ThemeContextValue> {
    let value = CONTEXT_STACK.with(|stack| stack.borrow().last().map(|(_, value)| *value));
    value.ok_or_else(|| {
        tracing::warn!("use_theme called outside of a ThemeProvider");
        Error::ThemeProviderMissing
    })
}
