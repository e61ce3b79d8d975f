//! Convert identifiers between snake_case and camelCase while keeping
//! common initialisms such as `ID`, `HTTP` or `URL` intact.
//!
//! ```
//! assert_eq!(snaker::to_snake("HelloHTTPSConnectionID"), "hello_https_connection_id");
//! assert_eq!(snaker::to_upper_camel("project_id"), "ProjectID");
//! assert_eq!(snaker::to_lower_camel("https_id"), "httpsID");
//! ```

pub mod case;
pub mod config;
pub mod initialism;
pub mod pipeline;
pub mod split;

pub use case::{to_camel, to_lower_camel, to_snake, to_upper_camel, Case};
pub use initialism::INITIALISMS;
pub use split::{split, split_camel, split_snake};
