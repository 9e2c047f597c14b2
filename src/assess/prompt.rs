/// Build the per-package question sent to the AI service.
pub fn build_prompt(package: &str) -> String {
    format!(
        "Search for any known bugs or issues that could break the upgrade of the Arch Linux package '{}'.\n\
         Return a JSON object with keys 'safe' (boolean) and 'reason' (string).\n\
         'safe' should be true if there are no known issues, and false otherwise.\n\
         'reason' should be a brief explanation of why it is safe or unsafe.",
        package
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_package() {
        let prompt = build_prompt("linux 6.9.1-1 -> 6.9.2-1");
        assert!(prompt.contains("'linux 6.9.1-1 -> 6.9.2-1'"));
    }

    #[test]
    fn test_prompt_requests_json_shape() {
        let prompt = build_prompt("vim");
        assert!(prompt.contains("'safe' (boolean)"));
        assert!(prompt.contains("'reason' (string)"));
        assert_eq!(prompt.lines().count(), 4);
    }
}
