pub mod clock;
pub mod request_id;

pub use clock::request_clock_middleware;
pub use request_id::{request_id_middleware, REQUEST_ID_HEADER};
