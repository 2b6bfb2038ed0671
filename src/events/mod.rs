pub mod click;
pub mod pointer;

pub use click::wire_link_interceptor;
pub use pointer::{wire_pointer_handlers, PointerWiring};
