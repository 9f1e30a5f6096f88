use graphpath_core::graph::AlgorithmSelection;

/// Parse an algorithm selection from string
pub fn parse_algorithm(s: &str) -> std::result::Result<AlgorithmSelection, String> {
    s.parse::<AlgorithmSelection>().map_err(|e| e.to_string())
}

/// Reject an empty path separator
pub fn parse_separator(s: &str) -> std::result::Result<String, String> {
    if s.is_empty() {
        Err("separator must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}
