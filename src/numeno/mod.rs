//! Clients for the Numeno Admin and Article Recommender APIs

pub mod admin;
pub mod art_rec;
pub mod client;
pub mod pagination;

pub use admin::AdminClient;
pub use art_rec::ArtRecClient;
pub use client::NumenoClient;
pub use pagination::{ArticleSource, collect_articles};
