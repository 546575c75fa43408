//! Core building blocks: invocation parameters, input path resolution and
//! bind-mount construction. These are pure helpers consumed by the
//! `invoker` module and hold no process state.
pub mod mount;
pub mod params;
pub mod path;
