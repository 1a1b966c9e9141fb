mod event_loop;

pub use event_loop::run;
