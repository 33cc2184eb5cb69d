// Salesdesk - sales-rep data API with an AI question endpoint
// Library exports

pub mod config;
pub mod providers;
pub mod retrieval;
pub mod server;
pub mod store;
