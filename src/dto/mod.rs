pub mod connection_dto;
pub mod notification_dto;
pub mod profile_dto;
