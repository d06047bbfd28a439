pub mod context_map;

pub use context_map::{ContextMap, ContextMapEntry, ContextMapStore, StoreError, CONTEXT_MAP_KEY};
