/// Solution aggregate: the distinct packages used by its member projects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    name: String,
    packages: Vec<String>,
}

impl Solution {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            packages: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Distinct package names in first-seen order
    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    /// Records a package name. Returns false if it was already present.
    pub fn add_package(&mut self, package_name: &str) -> bool {
        if self.packages.iter().any(|p| p == package_name) {
            return false;
        }
        self.packages.push(package_name.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_package_keeps_first_seen_order() {
        let mut solution = Solution::new("Shop.sln");
        assert!(solution.add_package("Serilog"));
        assert!(solution.add_package("AutoMapper"));
        assert!(!solution.add_package("Serilog"));

        assert_eq!(solution.name(), "Shop.sln");
        assert_eq!(solution.packages(), &["Serilog", "AutoMapper"]);
    }
}
