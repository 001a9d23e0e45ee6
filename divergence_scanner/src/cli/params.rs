/// Splits a comma-separated symbol list, trimming whitespace and dropping
/// empty segments. Case and de-duplication are handled by config
/// normalization, not here.
pub fn split_symbols(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
