pub mod classify;
pub mod config;
pub mod init;
pub mod paint;
pub mod quantize;
pub mod replay;
