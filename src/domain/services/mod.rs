pub mod iban;
pub mod phone;
pub mod schedule;
pub mod slug;
pub mod text;
