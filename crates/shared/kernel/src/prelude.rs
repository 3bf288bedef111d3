pub use crate::debounce::Debouncer;
pub use crate::http::{ApiClient, HttpError, HttpErrorExt};
pub use crate::navigation::Navigator;
pub use portal_domain::config::ClientConfig;
pub use portal_domain::route::Route;
