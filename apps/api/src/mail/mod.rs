// Templated transactional email: render a fixed HTML body, build the MIME
// message, dispatch it over a fresh SMTP session.

pub mod handlers;
pub mod kind;
pub mod message;
pub mod service;
pub mod template;
pub mod templates;
pub mod transport;
