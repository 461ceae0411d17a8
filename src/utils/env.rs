/// Replace `${VAR}` references with environment values, leaving unknown
/// references untouched.
pub fn substitute_env_vars(content: &str) -> String {
    let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}
