pub mod sample;
pub mod simulate;
