pub mod canvas;
pub mod composite;
pub mod encode;
