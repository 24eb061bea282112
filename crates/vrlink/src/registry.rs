//! Installed-package lookup trait and in-memory implementation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Metadata reported by a registry for an installed package.
///
/// Presence of an entry is the signal; every field beyond the id may be
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub package_id: String,
    pub version_name: Option<String>,
}

impl PackageMetadata {
    pub fn new(package_id: impl Into<String>) -> Self {
        Self {
            package_id: package_id.into(),
            version_name: None,
        }
    }
}

/// Outcome of a registry lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageLookup {
    Found(PackageMetadata),
    NotFound,
}

/// Host-platform seam for the installed-package metadata query.
///
/// Implementations answer "is an application with this package id present
/// on the device?". `NotFound` is the normal negative answer; `Err` is a
/// backend failure, which resolution treats the same way.
pub trait PackageRegistry: Send + Sync {
    fn lookup(&self, package_id: &str) -> Result<PackageLookup>;
}

// --- Memory implementation ---

/// In-memory package table.
///
/// Hosts mirror the platform's installed-package state into it; tests drive
/// it directly. Lookups never fail.
#[derive(Debug, Default)]
pub struct InstalledPackages {
    packages: HashMap<String, PackageMetadata>,
}

impl InstalledPackages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a package, returning any previously registered metadata.
    pub fn register(&mut self, metadata: PackageMetadata) -> Option<PackageMetadata> {
        self.packages.insert(metadata.package_id.clone(), metadata)
    }

    pub fn unregister(&mut self, package_id: &str) -> Option<PackageMetadata> {
        self.packages.remove(package_id)
    }

    pub fn is_registered(&self, package_id: &str) -> bool {
        self.packages.contains_key(package_id)
    }
}

impl PackageRegistry for InstalledPackages {
    fn lookup(&self, package_id: &str) -> Result<PackageLookup> {
        Ok(match self.packages.get(package_id) {
            Some(metadata) => PackageLookup::Found(metadata.clone()),
            None => PackageLookup::NotFound,
        })
    }
}
