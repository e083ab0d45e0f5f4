pub mod record;
pub mod responses;
