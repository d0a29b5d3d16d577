pub mod callable;
pub mod rest;
