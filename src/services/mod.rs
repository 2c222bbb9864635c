pub mod auth;
pub mod details;
pub mod enrichment;
pub mod feed;
pub mod providers;
pub mod recommendations;
