pub mod dial;
pub mod hands;
pub mod icons;
pub mod paths;
pub mod preview;
pub mod theme;
pub mod weather;
