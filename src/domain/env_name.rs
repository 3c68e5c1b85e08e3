//! Mapping of template parameter names onto environment variable names.

/// Convert a mixed-case word into its upper-snake-case environment variable name.
///
/// Every uppercase letter after the first character gets its own `_`, so runs
/// of capitals are not collapsed: `HTTPServer` becomes `H_T_T_P_SERVER`.
/// Environment variable names consulted by script injection are derived from
/// this exact form.
pub fn to_env_var_name(word: &str) -> String {
    let mut result = String::with_capacity(word.len() + 4);
    for (i, c) in word.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            result.push('_');
        }
        result.extend(c.to_uppercase());
    }
    result
}
