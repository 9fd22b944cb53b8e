pub mod generator;
pub mod index;

pub use generator::{EndpointIndexGenerator, EndpointsError, emit_index};
pub use index::{EndpointGroup, EndpointIndex, build_index};
