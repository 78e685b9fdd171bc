mod color;
mod config;
