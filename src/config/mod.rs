pub mod credentials;
pub mod types;

pub use types::*;
pub use credentials::{load_api_key, load_dotenv, load_dotenv_from, redact_credentials};
