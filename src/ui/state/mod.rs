mod app;
mod dispatcher;

pub use app::App;
pub(crate) use dispatcher::{LookupEvent, QueryDispatcher};
