// Service clients

pub mod asset_service;
