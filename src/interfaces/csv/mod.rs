pub mod confirmation_writer;
pub mod dining_reader;
