pub mod connection;
pub mod doctor_profile;
pub mod notification;
