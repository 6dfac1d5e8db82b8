pub mod client;

pub use client::ChecklistClient;
