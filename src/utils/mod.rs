pub mod debounce;
pub mod error;
pub mod format;
pub mod forms;
pub mod logger;
pub mod notify;
pub mod validation;
