mod header;

pub use header::HeaderFile;
