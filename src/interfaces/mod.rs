pub mod subconverter;
