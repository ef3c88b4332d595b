#![doc = "The `taskwarden` library crate."]
#![doc = ""]
#![doc = "Authorization-aware task management: the credential service, the"]
#![doc = "task authorization/mutation engine and the query dispatcher, plus"]
#![doc = "the storage contract, HTTP routing and error taxonomy the main"]
#![doc = "binary (`main.rs`) wires together."]

pub mod auth;
pub mod config;
pub mod either;
pub mod error;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod services;
pub mod storage;
