#[macro_use]
extern crate serde;
#[macro_use]
extern crate rocket;
#[cfg(test)]
#[macro_use]
extern crate serde_json;

pub mod routes;
