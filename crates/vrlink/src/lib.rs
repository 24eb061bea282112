//! Deep-link resolution for immersive media content.
//!
//! Given a media id and its kind (360 video or 360 photo), this crate
//! decides whether the content should open in its native viewer application
//! or on the mobile site, and builds the launch request the host
//! application dispatches. Installed-application state comes in through the
//! [`PackageRegistry`] seam; the crate performs no dispatch itself.

pub mod error;
pub mod link;
pub mod media;
pub mod registry;
pub mod request;

pub use crate::error::{RegistryError, Result};
pub use crate::link::{is_app_installed, is_video_link, resolve};
pub use crate::media::{MediaKind, MediaLink, PHOTO_VIEWER_PACKAGE, VIDEO_VIEWER_PACKAGE};
pub use crate::registry::{InstalledPackages, PackageLookup, PackageMetadata, PackageRegistry};
pub use crate::request::{LaunchAction, LaunchCategory, LaunchRequest};
