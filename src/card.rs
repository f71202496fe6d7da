//! Card records from the external card database and the token fields derived from them.

pub mod derive;
pub mod model;
pub mod resolver;
