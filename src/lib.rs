pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::{Envelope, RequestDescriptor, Verb};
pub use frameworks::cli::run_with_config;
pub use frameworks::client::{default_helper, request};
pub use use_cases::RequestHelper;
