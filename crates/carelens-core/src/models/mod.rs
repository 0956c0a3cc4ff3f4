pub mod answers;
pub mod filter;
pub mod provider;
pub mod question;
pub mod report;
pub mod tier;
