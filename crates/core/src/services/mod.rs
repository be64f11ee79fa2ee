pub mod insight_service;
pub mod merge_service;
pub mod portfolio_service;
