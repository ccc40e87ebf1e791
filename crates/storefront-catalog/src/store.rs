//! Reducer store for the storefront's shared selection.
//!
//! Pages receive a [`Store`] instead of reaching for global state, so tests
//! can hand in a recording fake.

use crate::catalog::{Category, Product};

/// Actions accepted by the store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    /// Make `product` the current item shown by the detail view.
    SetItem(Product),
    /// Select the active category filter.
    SetCategory(Category),
}

/// Snapshot of the shared selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    pub category: Option<Category>,
    pub current_item: Option<Product>,
}

impl StoreState {
    /// Apply one action, producing the next state.
    pub fn reduce(mut self, action: StoreAction) -> Self {
        match action {
            StoreAction::SetItem(product) => self.current_item = Some(product),
            StoreAction::SetCategory(category) => self.category = Some(category),
        }
        self
    }
}

/// Read and write access to the shared selection.
pub trait Store {
    /// Current snapshot.
    fn state(&self) -> &StoreState;

    /// Apply an action.
    fn dispatch(&mut self, action: StoreAction);

    /// Active category, if one is selected.
    fn category(&self) -> Option<&Category> {
        self.state().category.as_ref()
    }
}

/// In-memory store backed by [`StoreState::reduce`].
#[derive(Debug, Default)]
pub struct AppStore {
    state: StoreState,
}

impl AppStore {
    /// Consume the store, returning its final state.
    pub fn into_state(self) -> StoreState {
        self.state
    }
}

impl Store for AppStore {
    fn state(&self) -> &StoreState {
        &self.state
    }

    fn dispatch(&mut self, action: StoreAction) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Store that records every dispatched action.
    #[derive(Debug, Default)]
    pub struct RecordingStore {
        pub state: StoreState,
        pub dispatched: Vec<StoreAction>,
    }

    impl RecordingStore {
        pub fn with_category(slug: &str) -> Self {
            Self {
                state: StoreState {
                    category: Some(Category::new(slug)),
                    current_item: None,
                },
                dispatched: Vec::new(),
            }
        }
    }

    impl Store for RecordingStore {
        fn state(&self) -> &StoreState {
            &self.state
        }

        fn dispatch(&mut self, action: StoreAction) {
            self.dispatched.push(action.clone());
            self.state = std::mem::take(&mut self.state).reduce(action);
        }
    }

    #[test]
    fn test_reduce_set_category() {
        let state = StoreState::default().reduce(StoreAction::SetCategory(Category::new("beauty")));
        assert_eq!(state.category, Some(Category::new("beauty")));
        assert_eq!(state.current_item, None);
    }

    #[test]
    fn test_app_store_dispatch() {
        let mut store = AppStore::default();
        assert!(store.category().is_none());

        store.dispatch(StoreAction::SetCategory(Category::new("laptops")));
        store.dispatch(StoreAction::SetCategory(Category::new("tablets")));
        assert_eq!(store.category().map(|c| c.slug.as_str()), Some("tablets"));

        let item = Product::from_json(r#"{"id": 9, "title": "Tab"}"#).unwrap();
        store.dispatch(StoreAction::SetItem(item.clone()));

        let state = store.into_state();
        assert_eq!(state.current_item, Some(item));
        assert_eq!(state.category, Some(Category::new("tablets")));
    }
}
