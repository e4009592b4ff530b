pub mod provider;
pub mod record;
