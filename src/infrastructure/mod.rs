//! Concrete storage backends for the order aggregate.

pub mod in_memory;
