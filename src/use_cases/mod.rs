// Use cases layer: the single request workflow.

pub mod request;

pub use request::{RequestHelper, SUCCESS_STATUS, diagnostic_line};
