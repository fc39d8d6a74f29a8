mod client;

pub use client::OrderClient;
