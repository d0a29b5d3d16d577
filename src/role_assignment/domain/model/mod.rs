pub mod commands;
pub mod enums;
pub mod results;
pub mod value_objects;
