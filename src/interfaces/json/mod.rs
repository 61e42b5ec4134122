pub mod intent_reader;
