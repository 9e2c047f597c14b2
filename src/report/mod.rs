pub mod model;
pub mod parser;
pub mod render;

pub use model::*;
pub use parser::is_safe_to_upgrade;
pub use render::to_pretty_json;
