pub mod baggage_reader;
