/// Server-rendered pages
pub mod albums;
pub mod layout;
pub mod secret;
pub mod signin;
