pub mod complaint;
pub mod demographics;
pub mod diagnosis;
pub mod history;
pub mod patient;
