//! Line-oriented fact extraction for project descriptor files.
//!
//! Each line yields at most one fact. Recognizers run in a fixed priority
//! order and the first match wins. Elements spanning several lines are not
//! recognized.

use crate::hierarchy::domain::{PackageReference, ProjectReference};
use once_cell::sync::Lazy;
use regex::Regex;

/// `<PackageReference Include="X" Version="1.0" />` and the legacy
/// `<Reference Include="X, Version=1.0, Culture=...">` form. The version
/// stops at the first comma or quote.
static RE_PACKAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)^.*<(?:Package)?Reference Include="(.*?)"?,? Version="?(.*?)(?:,|")"#)
        .unwrap()
});

static RE_ROOT_NAMESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^.*<RootNamespace>(.*?)</RootNamespace>").unwrap());

static RE_TARGET_FRAMEWORK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^.*<(?:TargetFramework|TargetFrameworkVersion)>(.*?)</(?:TargetFramework|TargetFrameworkVersion)>",
    )
    .unwrap()
});

/// Directory prefix (up to the last separator) and trailing file name
static RE_PROJECT_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)^.*ProjectReference Include="(?:([^"]*)[\\/])?([^"\\/]*)""#).unwrap()
});

/// One structured fact found on a descriptor line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineFact {
    Package(PackageReference),
    RootNamespace(String),
    TargetFramework(String),
    ProjectReference(ProjectReference),
}

type Recognizer = fn(&str) -> Option<LineFact>;

/// Recognizers in priority order
const RECOGNIZERS: [Recognizer; 4] = [
    recognize_package,
    recognize_root_namespace,
    recognize_target_framework,
    recognize_project_reference,
];

/// Extracts the fact on `line`, if any
pub fn extract_line_fact(line: &str) -> Option<LineFact> {
    RECOGNIZERS.iter().find_map(|recognize| recognize(line))
}

fn recognize_package(line: &str) -> Option<LineFact> {
    let captures = RE_PACKAGE.captures(line)?;
    Some(LineFact::Package(PackageReference::new(
        &captures[1],
        &captures[2],
    )))
}

fn recognize_root_namespace(line: &str) -> Option<LineFact> {
    let captures = RE_ROOT_NAMESPACE.captures(line)?;
    Some(LineFact::RootNamespace(captures[1].to_string()))
}

fn recognize_target_framework(line: &str) -> Option<LineFact> {
    let captures = RE_TARGET_FRAMEWORK.captures(line)?;
    Some(LineFact::TargetFramework(captures[1].to_string()))
}

fn recognize_project_reference(line: &str) -> Option<LineFact> {
    let captures = RE_PROJECT_REFERENCE.captures(line)?;
    let file_name = captures.get(2)?.as_str();
    if file_name.is_empty() {
        return None;
    }
    let directory = captures.get(1).map(|m| m.as_str()).unwrap_or("");
    Some(LineFact::ProjectReference(ProjectReference::new(
        directory, file_name,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(name: &str, version: &str) -> Option<LineFact> {
        Some(LineFact::Package(PackageReference::new(name, version)))
    }

    #[test]
    fn test_package_reference() {
        let line = r#"    <PackageReference Include="Newtonsoft.Json" Version="13.0.1" />"#;
        assert_eq!(extract_line_fact(line), package("Newtonsoft.Json", "13.0.1"));
    }

    #[test]
    fn test_legacy_reference_truncates_at_comma() {
        let line = r#"    <Reference Include="log4net, Version=1.2.10.0, Culture=neutral, PublicKeyToken=692fbea5521e1304, processorArchitecture=MSIL">"#;
        assert_eq!(extract_line_fact(line), package("log4net", "1.2.10.0"));
    }

    #[test]
    fn test_package_reference_is_case_insensitive() {
        let line = r#"<packagereference include="Dapper" version="2.1.35" />"#;
        assert_eq!(extract_line_fact(line), package("Dapper", "2.1.35"));
    }

    #[test]
    fn test_reference_without_version_is_ignored() {
        let line = r#"    <Reference Include="System.Xml" />"#;
        assert_eq!(extract_line_fact(line), None);
    }

    #[test]
    fn test_root_namespace() {
        let line = "    <RootNamespace>Company.Product</RootNamespace>";
        assert_eq!(
            extract_line_fact(line),
            Some(LineFact::RootNamespace("Company.Product".to_string()))
        );
    }

    #[test]
    fn test_target_framework_synonyms() {
        assert_eq!(
            extract_line_fact("<TargetFramework>net8.0</TargetFramework>"),
            Some(LineFact::TargetFramework("net8.0".to_string()))
        );
        assert_eq!(
            extract_line_fact("<TargetFrameworkVersion>v4.7.2</TargetFrameworkVersion>"),
            Some(LineFact::TargetFramework("v4.7.2".to_string()))
        );
    }

    #[test]
    fn test_project_reference_splits_on_last_separator() {
        let line = r#"    <ProjectReference Include="..\..\lib\Core\Core.csproj" />"#;
        assert_eq!(
            extract_line_fact(line),
            Some(LineFact::ProjectReference(ProjectReference::new(
                r"..\..\lib\Core",
                "Core.csproj"
            )))
        );
    }

    #[test]
    fn test_project_reference_with_forward_slashes() {
        let line = r#"<ProjectReference Include="../Core/Core.csproj">"#;
        assert_eq!(
            extract_line_fact(line),
            Some(LineFact::ProjectReference(ProjectReference::new(
                "../Core",
                "Core.csproj"
            )))
        );
    }

    #[test]
    fn test_project_reference_in_same_directory() {
        let line = r#"<ProjectReference Include="Core.csproj" />"#;
        assert_eq!(
            extract_line_fact(line),
            Some(LineFact::ProjectReference(ProjectReference::new(
                "",
                "Core.csproj"
            )))
        );
    }

    #[test]
    fn test_package_rule_wins_over_later_rules() {
        let line = r#"<PackageReference Include="A" Version="1.0" /><RootNamespace>X</RootNamespace>"#;
        assert_eq!(extract_line_fact(line), package("A", "1.0"));
    }

    #[test]
    fn test_unrelated_lines_are_ignored() {
        assert_eq!(extract_line_fact("<Project Sdk=\"Microsoft.NET.Sdk\">"), None);
        assert_eq!(extract_line_fact(""), None);
        assert_eq!(extract_line_fact("  <Nullable>enable</Nullable>"), None);
    }

    #[test]
    fn test_multi_line_package_reference_is_not_recognized() {
        assert_eq!(
            extract_line_fact(r#"<PackageReference Include="Serilog">"#),
            None
        );
        assert_eq!(extract_line_fact("  <Version>3.1.1</Version>"), None);
    }
}
