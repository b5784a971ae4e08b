pub mod bitmap;
pub mod layout;
pub mod resolve;
