// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

pub mod config;     // config loading + runtime builder
pub mod detection;  // insertion event detectors
pub mod errors;     // error handling
pub mod observability;
pub mod output;     // CSV results
pub mod stack;      // TIFF stack loading
pub mod traits;     // detector abstraction

#[cfg(test)]
mod contributing_tests {
    const CONTRIBUTING: &str = include_str!("../CONTRIBUTING.md");

    fn top_level_sections() -> Vec<&'static str> {
        CONTRIBUTING
            .lines()
            .filter_map(|line| line.strip_prefix("## "))
            .collect()
    }

    #[test]
    fn test_guidelines_have_five_sections() {
        assert_eq!(
            top_level_sections(),
            vec![
                "Welcome",
                "Code Style",
                "Pull Request Process",
                "Issue Reporting",
                "License"
            ]
        );
    }

    #[test]
    fn test_license_section_names_mit() {
        let license = CONTRIBUTING
            .split("## License")
            .nth(1)
            .expect("License section present");
        assert!(license.contains("MIT"));
    }
}
