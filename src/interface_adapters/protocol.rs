// Wire-level constants shared by the HTTP adapter and its tests.

// Media type declared for both the request payload and the accepted response.
pub const JSON_MEDIA_TYPE: &str = "application/json";
