pub mod markers;
pub use markers::*;

pub mod flatten;
pub use flatten::*;

pub mod named_params;
pub use named_params::*;
