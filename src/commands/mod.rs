pub mod quiz;
pub mod roster;
