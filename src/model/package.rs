//! Package summary model
//!
//! The subset of package metadata the changelog viewer needs. Owned by the
//! caller and handed to components read-only.

use serde::Deserialize;

/// Kind of repository a package comes from
///
/// Serialized as the numeric code used by the package API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "u8")]
pub enum RepositoryKind {
    Helm,
    Falco,
    Opa,
    Olm,
    TbAction,
    Krew,
    HelmPlugin,
    TektonTask,
    KedaScaler,
    CoreDns,
    Keptn,
    TektonPipeline,
}

impl RepositoryKind {
    /// Kinds whose packages never show changelog UI
    pub const WITHOUT_CHANGELOG: [RepositoryKind; 3] = [
        RepositoryKind::Krew,
        RepositoryKind::Falco,
        RepositoryKind::HelmPlugin,
    ];

    /// Whether changelog UI is suppressed for this kind
    pub fn hides_changelog(self) -> bool {
        Self::WITHOUT_CHANGELOG.contains(&self)
    }

    /// Human readable name
    pub fn label(self) -> &'static str {
        match self {
            Self::Helm => "Helm chart",
            Self::Falco => "Falco rules",
            Self::Opa => "OPA policies",
            Self::Olm => "OLM operator",
            Self::TbAction => "Tinkerbell action",
            Self::Krew => "Krew kubectl plugin",
            Self::HelmPlugin => "Helm plugin",
            Self::TektonTask => "Tekton task",
            Self::KedaScaler => "KEDA scaler",
            Self::CoreDns => "CoreDNS plugin",
            Self::Keptn => "Keptn integration",
            Self::TektonPipeline => "Tekton pipeline",
        }
    }
}

impl TryFrom<u8> for RepositoryKind {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        let kind = match code {
            0 => Self::Helm,
            1 => Self::Falco,
            2 => Self::Opa,
            3 => Self::Olm,
            4 => Self::TbAction,
            5 => Self::Krew,
            6 => Self::HelmPlugin,
            7 => Self::TektonTask,
            8 => Self::KedaScaler,
            9 => Self::CoreDns,
            10 => Self::Keptn,
            11 => Self::TektonPipeline,
            other => return Err(format!("unknown repository kind: {}", other)),
        };
        Ok(kind)
    }
}

/// Repository a package belongs to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    #[serde(default)]
    pub repository_id: Option<String>,
    pub kind: RepositoryKind,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub user_alias: Option<String>,
    #[serde(default)]
    pub organization_name: Option<String>,
}

/// Package metadata relevant to changelog display
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSummary {
    pub package_id: String,
    pub name: String,
    #[serde(default)]
    pub normalized_name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub app_version: Option<String>,
    #[serde(default)]
    pub has_changelog: bool,
    pub repository: Repository,
}

impl PackageSummary {
    /// Minimal package in a repository of the given kind
    pub fn new(package_id: impl Into<String>, name: impl Into<String>, kind: RepositoryKind) -> Self {
        let name = name.into();
        Self {
            package_id: package_id.into(),
            normalized_name: Some(name.clone()),
            name,
            display_name: None,
            description: None,
            version: None,
            app_version: None,
            has_changelog: true,
            repository: Repository {
                repository_id: None,
                kind,
                name: "stable".to_string(),
                url: None,
                user_alias: None,
                organization_name: None,
            },
        }
    }

    /// Display name, falling back to the package name
    pub fn title(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Whether this package may show changelog UI at all
    pub fn supports_changelog(&self) -> bool {
        !self.repository.kind.hides_changelog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_kinds() {
        assert!(RepositoryKind::Krew.hides_changelog());
        assert!(RepositoryKind::Falco.hides_changelog());
        assert!(RepositoryKind::HelmPlugin.hides_changelog());
        assert!(!RepositoryKind::Helm.hides_changelog());
        assert!(!RepositoryKind::Olm.hides_changelog());
    }

    #[test]
    fn test_kind_from_code() {
        assert_eq!(RepositoryKind::try_from(0), Ok(RepositoryKind::Helm));
        assert_eq!(RepositoryKind::try_from(5), Ok(RepositoryKind::Krew));
        assert!(RepositoryKind::try_from(42).is_err());
    }

    #[test]
    fn test_deserialize_package() {
        let json = r#"{
            "packageId": "id",
            "name": "test",
            "normalizedName": "test",
            "displayName": "Pretty name",
            "description": "desc",
            "appVersion": "1.0.0",
            "hasChangelog": true,
            "repository": {
                "repositoryId": "0acb228c-17ab-4e50-85e9-ffc7102ea423",
                "kind": 0,
                "name": "stable",
                "url": "repoUrl",
                "userAlias": "user"
            }
        }"#;
        let pkg: PackageSummary = serde_json::from_str(json).unwrap();
        assert_eq!(pkg.package_id, "id");
        assert_eq!(pkg.title(), "Pretty name");
        assert!(pkg.has_changelog);
        assert_eq!(pkg.repository.kind, RepositoryKind::Helm);
        assert!(pkg.supports_changelog());
    }

    #[test]
    fn test_deserialize_unknown_kind_fails() {
        let json = r#"{"packageId": "id", "name": "x", "repository": {"kind": 99, "name": "r"}}"#;
        assert!(serde_json::from_str::<PackageSummary>(json).is_err());
    }

    #[test]
    fn test_title_falls_back_to_name() {
        let pkg = PackageSummary::new("id", "nginx", RepositoryKind::Helm);
        assert_eq!(pkg.title(), "nginx");
    }
}
