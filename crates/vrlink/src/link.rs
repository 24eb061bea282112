//! Link resolution: media reference in, launch request out.

use crate::media::{MediaKind, MediaLink};
use crate::registry::{PackageLookup, PackageRegistry};
use crate::request::{LaunchAction, LaunchCategory, LaunchRequest};

const VIEWER_SCHEME: &str = "oculus";
const MEDIA_SOURCE_SEGMENT: &str = "fb";

const WEB_SCHEME: &str = "https";
const WEB_AUTHORITY: &str = "m.facebook.com";

/// Resolves a media link to the launch request the host should dispatch.
///
/// Targets the native viewer application for the link's media kind when it
/// is installed and falls back to the mobile site otherwise. Returns `None`
/// for an absent link or an empty media id; the registry is not queried in
/// that case.
pub fn resolve(registry: &dyn PackageRegistry, link: Option<&MediaLink>) -> Option<LaunchRequest> {
    let link = link?;
    if link.media_id.is_empty() {
        return None;
    }

    if is_app_installed(registry, link.kind.viewer_package()) {
        Some(viewer_request(link))
    } else {
        Some(web_fallback_request(link))
    }
}

/// Whether the registry reports the package as installed.
///
/// A backend failure counts as not installed, so resolution falls open to
/// the web fallback instead of surfacing the error.
pub fn is_app_installed(registry: &dyn PackageRegistry, package_id: &str) -> bool {
    match registry.lookup(package_id) {
        Ok(PackageLookup::Found(_)) => true,
        Ok(PackageLookup::NotFound) => false,
        Err(error) => {
            tracing::debug!("package lookup failed for {package_id}: {error}");
            false
        }
    }
}

/// True when the link is present and points at video content.
pub fn is_video_link(link: Option<&MediaLink>) -> bool {
    matches!(link, Some(link) if link.kind == MediaKind::Video)
}

fn viewer_request(link: &MediaLink) -> LaunchRequest {
    LaunchRequest {
        action: LaunchAction::View,
        categories: vec![LaunchCategory::Default],
        target_package: Some(link.kind.viewer_package().to_string()),
        uri: format!(
            "{VIEWER_SCHEME}://{}/{MEDIA_SOURCE_SEGMENT}/{}",
            link.kind.uri_authority(),
            urlencoding::encode(&link.media_id),
        ),
    }
}

fn web_fallback_request(link: &MediaLink) -> LaunchRequest {
    LaunchRequest {
        action: LaunchAction::View,
        categories: vec![LaunchCategory::Default, LaunchCategory::Browsable],
        target_package: None,
        uri: format!(
            "{WEB_SCHEME}://{WEB_AUTHORITY}/{}",
            urlencoding::encode(&link.media_id),
        ),
    }
}
