pub mod misc;
pub mod modal;
pub mod shortcuts;
pub mod skeleton;
pub mod spinner;
pub mod svg;
