pub mod form_validator;
pub mod url_validator;

pub use url_validator::{UrlValidationError, normalize_long_url};
