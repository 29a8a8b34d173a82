pub mod constants;
pub mod text_utils;
pub mod url_utils;

pub use constants::*;
pub use text_utils::{find_integer_in_text, text_after_at, text_before_at};
pub use url_utils::{page_url, resolve_job_link};
