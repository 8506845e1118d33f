use std::path::Path;

pub trait FileName {
    /// The final component of the path, or `"unknown"` when it has none or it is not valid UTF-8.
    fn string_file_name(&self) -> &str;
}

impl FileName for Path {
    fn string_file_name(&self) -> &str {
        self.file_name().and_then(|s| s.to_str()).unwrap_or("unknown")
    }
}
