pub mod bundle_writer;
