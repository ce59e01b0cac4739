pub mod expenses;
pub mod form;
pub mod home;
