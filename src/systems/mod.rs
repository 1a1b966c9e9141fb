pub mod debounce;
pub mod lookup;
pub mod reveal;
