// Interface adapters: wire constants and the HTTP client behind the transport port.

pub mod clients;
pub mod protocol;
