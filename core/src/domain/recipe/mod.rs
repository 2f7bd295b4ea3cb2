pub mod catalog;
pub mod entities;
pub mod helpers;
pub mod matcher;
pub mod ports;
pub mod schema;
pub mod services;
pub mod value_objects;
