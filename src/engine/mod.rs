mod async_engine;
mod lock_order;
mod summary;
mod transfer_service;

pub use async_engine::AsyncEngine;
pub use summary::TransferSummary;
pub use transfer_service::TransferService;
