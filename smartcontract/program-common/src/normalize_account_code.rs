/// Perform input sanitization on account codes with a single heap allocation for the output string
/// to minimize the overhead when using the validation in instruction handlers
pub fn normalize_account_code(val: &str) -> Result<String, &'static str> {
    val.chars()
        .try_fold(String::with_capacity(val.len()), |mut code, char| {
            if char.is_alphanumeric()
                || char.is_whitespace()
                || char == '_'
                || char == '-'
                || char == ':'
            {
                code.push(if char.is_whitespace() { '_' } else { char })
            } else {
                return Err("name must be alphanumeric");
            }
            Ok(code)
        })
}
