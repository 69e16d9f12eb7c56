pub mod account_reader;
pub mod account_writer;
pub mod payment_reader;
pub mod result_writer;
