pub mod backend;
pub mod basic;
pub mod composite;
pub mod frame;
