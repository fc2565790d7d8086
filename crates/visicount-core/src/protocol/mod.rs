//! Wire types exchanged with the handler.
//!
//! - `event`: the inbound, proxy-integration style request description.
//! - `response`: the outbound `{statusCode, headers, body}` object and the JSON
//!   bodies it can carry.
//!
//! Unknown inbound fields are tolerated; only `httpMethod` is ever inspected.

pub mod event;
pub mod response;

pub use event::{Event, Method};
pub use response::{HandlerResponse, MessageBody, SuccessBody};
