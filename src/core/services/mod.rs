pub mod transfer_service;
pub mod validation;
