pub mod category;
pub mod company;
pub mod enrollment;
pub mod field;
pub mod package;
pub mod service;
pub mod whatsapp;
