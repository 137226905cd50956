//! Registry types for feature slices.
//!
//! A slice is built once at startup and stored type-erased in the API state; handlers
//! downcast it back to the concrete type.

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Feature state shareable across request handlers.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Exposes the slice for downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// A type-erased, initialized slice together with its registry key.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub name: &'static str,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), name: std::any::type_name::<T>(), state: Box::new(state) }
    }

    /// Borrows the slice as `T` if that is its concrete type.
    #[must_use]
    pub fn downcast_ref<T: FeatureSlice>(&self) -> Option<&T> {
        self.state.as_any().downcast_ref::<T>()
    }
}
