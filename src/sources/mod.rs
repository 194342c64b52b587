pub mod file;
pub mod http;
pub mod payload;
pub mod traits;

pub use file::FileSource;
pub use http::HttpSource;
pub use payload::PropertyPayload;
pub use traits::PropertySource;
