//! GitHub release metadata and selection policy.

use crate::bundler::HostArch;
use serde::Deserialize;

/// GitHub REST API root.
pub const GITHUB_API: &str = "https://api.github.com";

/// Repository publishing the sfx binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSource {
    /// API root, normally [`GITHUB_API`].
    pub api_base: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
}

impl Default for ReleaseSource {
    fn default() -> Self {
        Self {
            api_base: GITHUB_API.to_string(),
            owner: "touchifyapp".to_string(),
            repo: "sfx".to_string(),
        }
    }
}

impl ReleaseSource {
    /// URL listing the repository's releases, newest first.
    ///
    /// Asks for the largest page GitHub serves so older pinned tags are found.
    pub fn releases_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/releases?per_page=100",
            self.api_base.trim_end_matches('/'),
            self.owner,
            self.repo
        )
    }
}

/// One release as returned by the GitHub API.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// Downloadable file attached to a release.
#[derive(Debug, Clone, Deserialize)]
pub struct Asset {
    pub name: String,
    pub browser_download_url: String,
}

impl Release {
    /// Finds the asset called `name`.
    pub fn asset(&self, name: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.name == name)
    }
}

/// Archive name published for a toolchain bucket, e.g. `sfx-x64.zip`.
pub fn asset_name(target: HostArch) -> String {
    format!("sfx-{}.zip", target.as_str())
}

/// Which release the installer takes its binaries from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReleasePolicy {
    /// Newest published release that is neither a draft nor a prerelease.
    #[default]
    Latest,
    /// Release whose tag matches this version, with or without a `v` prefix.
    Pinned(String),
}

impl ReleasePolicy {
    /// Picks a release from a newest-first listing.
    pub fn select<'a>(&self, releases: &'a [Release]) -> Option<&'a Release> {
        match self {
            Self::Latest => releases.iter().find(|r| !r.draft && !r.prerelease),
            Self::Pinned(version) => releases
                .iter()
                .find(|r| !r.draft && tag_matches(&r.tag_name, version)),
        }
    }
}

impl std::fmt::Display for ReleasePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Latest => f.write_str("latest release"),
            Self::Pinned(version) => write!(f, "release {version}"),
        }
    }
}

fn tag_matches(tag: &str, version: &str) -> bool {
    let tag = tag.trim_start_matches('v');
    let version = version.trim_start_matches('v');

    match (semver::Version::parse(tag), semver::Version::parse(version)) {
        (Ok(a), Ok(b)) => a == b,
        _ => tag == version,
    }
}
