use std::any::{Any, TypeId};

use dashmap::mapref::one::{MappedRef, MappedRefMut};
use dashmap::DashMap;

type AnyEntry = Box<dyn Any + Send + Sync>;

pub type ContextRef<'a, T> = MappedRef<'a, TypeId, AnyEntry, T>;
pub type ContextRefMut<'a, T> = MappedRefMut<'a, TypeId, AnyEntry, T>;

/// Type-keyed state shared across plugin hooks for one request. Created per
/// execution and dropped with the result.
#[derive(Default)]
pub struct PluginContext {
    inner: DashMap<TypeId, AnyEntry>,
}

impl PluginContext {
    pub fn contains<T: Any + Send + Sync>(&self) -> bool {
        self.inner.contains_key(&TypeId::of::<T>())
    }

    pub fn insert<T: Any + Send + Sync>(&self, value: T) -> Option<Box<T>> {
        self.inner
            .insert(TypeId::of::<T>(), Box::new(value))
            .and_then(|entry| entry.downcast::<T>().ok())
    }

    pub fn remove<T: Any + Send + Sync>(&self) -> Option<Box<T>> {
        self.inner
            .remove(&TypeId::of::<T>())
            .and_then(|(_, entry)| entry.downcast::<T>().ok())
    }

    /// Holds a read lock on the entry until the returned guard is dropped.
    pub fn get_ref<T: Any + Send + Sync>(&self) -> Option<ContextRef<'_, T>> {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.try_map(|boxed| boxed.downcast_ref::<T>()).ok())
    }

    /// Holds a write lock on the entry until the returned guard is dropped.
    pub fn get_mut<T: Any + Send + Sync>(&self) -> Option<ContextRefMut<'_, T>> {
        self.inner
            .get_mut(&TypeId::of::<T>())
            .and_then(|entry| entry.try_map(|boxed| boxed.downcast_mut::<T>()).ok())
    }
}
