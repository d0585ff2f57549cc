pub mod entities;
pub mod generative;
pub mod knowledge_base;
pub mod ports;
pub mod prompt;
pub mod resolver;
pub mod schema;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
