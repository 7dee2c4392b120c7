pub mod client;
pub mod image;
pub mod types;

pub use client::ImagenHttpClient;
pub use image::ImagenImageClient;
