//! Mod manifest (`ModInfo.xml`) parsing.
//!
//! The manifest root element carries the mod identity as attributes:
//!
//! ```xml
//! <mod installerSystemVersion="1.0.1.0" unique="GalaxyMod" displayName="Galaxy Mod"
//!      dllsBuild="2.5.20" isExperimental="false" />
//! ```
//!
//! Required attributes must be present and valid. Optional attributes may be
//! absent, but a present optional attribute must still parse.

mod error;
mod version;

pub use error::{ManifestAttributeError, ManifestError};
pub use version::{ModVersion, VersionParseError};

/// Identity of a mod, as declared by its manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModIdentity {
    /// Stable internal id
    pub unique: String,
    pub display_name: String,
    pub description: Option<String>,
    pub mod_version: Option<ModVersion>,
    /// Manifest schema version
    pub installer_system_version: ModVersion,
    /// Minimum runtime (ModAPI DLLs) build required
    pub dlls_build: ModVersion,
    pub can_disable_mod: bool,
    pub has_custom_installer: bool,
    pub is_experimental: bool,
    pub requires_galaxy_reset: bool,
    pub causes_save_data_dependency: bool,
}

impl ModIdentity {
    /// Parses a manifest document.
    pub fn from_xml(text: &str) -> Result<Self, ManifestError> {
        let document = roxmltree::Document::parse(text)?;
        Ok(Self::from_element(document.root_element())?)
    }

    /// Reads the identity from the manifest's root element.
    pub fn from_element(element: roxmltree::Node<'_, '_>) -> Result<Self, ManifestAttributeError> {
        let mut attributes = Attributes {
            element,
            unique: None,
        };

        // Schema version first; attribute rules may depend on it later.
        let installer_system_version = attributes.version("installerSystemVersion")?;

        let unique = attributes.string("unique")?;
        attributes.unique = Some(unique.clone());

        Ok(Self {
            unique,
            display_name: attributes.string("displayName")?,
            description: attributes.optional_string("description"),
            mod_version: attributes.optional_version("modVersion")?,
            installer_system_version,
            dlls_build: attributes.version("dllsBuild")?,
            can_disable_mod: attributes.optional_bool("canDisableMod")?,
            has_custom_installer: attributes.optional_bool("hasCustomInstaller")?,
            is_experimental: attributes.optional_bool("isExperimental")?,
            requires_galaxy_reset: attributes.optional_bool("requiresGalaxyReset")?,
            causes_save_data_dependency: attributes.optional_bool("causesSaveDataDependency")?,
        })
    }
}

struct Attributes<'a, 'input> {
    element: roxmltree::Node<'a, 'input>,
    unique: Option<String>,
}

impl Attributes<'_, '_> {
    fn optional_string(&self, name: &'static str) -> Option<String> {
        self.element.attribute(name).map(str::to_string)
    }

    fn string(&self, name: &'static str) -> Result<String, ManifestAttributeError> {
        let value = self
            .optional_string(name)
            .ok_or_else(|| ManifestAttributeError::Missing {
                attribute: name,
                unique: self.unique.clone(),
            })?;

        if value.trim().is_empty() {
            return Err(ManifestAttributeError::Empty {
                attribute: name,
                unique: self.unique.clone(),
            });
        }
        Ok(value)
    }

    fn version(&self, name: &'static str) -> Result<ModVersion, ManifestAttributeError> {
        let value = self.string(name)?;
        self.parse_version(name, value)
    }

    fn optional_version(
        &self,
        name: &'static str,
    ) -> Result<Option<ModVersion>, ManifestAttributeError> {
        self.optional_string(name)
            .map(|value| self.parse_version(name, value))
            .transpose()
    }

    fn optional_bool(&self, name: &'static str) -> Result<bool, ManifestAttributeError> {
        match self.optional_string(name) {
            None => Ok(false),
            Some(value) => self.parse_bool(name, value),
        }
    }

    fn parse_version(
        &self,
        name: &'static str,
        value: String,
    ) -> Result<ModVersion, ManifestAttributeError> {
        value
            .parse()
            .map_err(|_| ManifestAttributeError::InvalidVersion {
                attribute: name,
                value,
                unique: self.unique.clone(),
            })
    }

    fn parse_bool(&self, name: &'static str, value: String) -> Result<bool, ManifestAttributeError> {
        match value.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(ManifestAttributeError::InvalidBool {
                attribute: name,
                value,
                unique: self.unique.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::manifest_xml;

    const REQUIRED: [&str; 4] = ["installerSystemVersion", "unique", "displayName", "dllsBuild"];

    fn manifest_without(attribute: &str) -> String {
        let attributes = [
            ("installerSystemVersion", "1.0.1.0"),
            ("unique", "GalaxyMod"),
            ("displayName", "Galaxy Mod"),
            ("dllsBuild", "2.5.20"),
        ]
        .iter()
        .filter(|(name, _)| *name != attribute)
        .map(|(name, value)| format!(r#"{}="{}""#, name, value))
        .collect::<Vec<_>>()
        .join(" ");
        format!("<mod {} />", attributes)
    }

    fn attribute_error(xml: &str) -> ManifestAttributeError {
        match ModIdentity::from_xml(xml) {
            Err(ManifestError::Attribute(e)) => e,
            other => panic!("expected attribute error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_minimal_manifest() {
        let identity = ModIdentity::from_xml(&manifest_xml("")).unwrap();

        assert_eq!(identity.unique, "TestMod");
        assert_eq!(identity.display_name, "Test Mod");
        assert_eq!(identity.installer_system_version.to_string(), "1.0.1.0");
        assert_eq!(identity.dlls_build.to_string(), "2.5.20");
        assert_eq!(identity.description, None);
        assert_eq!(identity.mod_version, None);
        assert!(!identity.can_disable_mod);
        assert!(!identity.has_custom_installer);
        assert!(!identity.is_experimental);
        assert!(!identity.requires_galaxy_reset);
        assert!(!identity.causes_save_data_dependency);
    }

    #[test]
    fn test_parse_full_manifest() {
        let xml = manifest_xml(
            r#"description="Adds things" modVersion="1.3" canDisableMod="true"
               hasCustomInstaller="true" isExperimental="true" requiresGalaxyReset="false"
               causesSaveDataDependency="true""#,
        );
        let identity = ModIdentity::from_xml(&xml).unwrap();

        assert_eq!(identity.description.as_deref(), Some("Adds things"));
        assert_eq!(identity.mod_version, Some(ModVersion::new(1, 3)));
        assert!(identity.can_disable_mod);
        assert!(identity.has_custom_installer);
        assert!(identity.is_experimental);
        assert!(!identity.requires_galaxy_reset);
        assert!(identity.causes_save_data_dependency);
    }

    #[test]
    fn test_child_elements_are_ignored() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
            <mod installerSystemVersion="1.0.1.0" unique="Nested" displayName="Nested"
                 dllsBuild="2.5.20">
                <prerequisite>Nested.package</prerequisite>
            </mod>"#;
        let identity = ModIdentity::from_xml(xml).unwrap();
        assert_eq!(identity.unique, "Nested");
    }

    #[test]
    fn test_missing_required_attributes() {
        for attribute in REQUIRED {
            let err = attribute_error(&manifest_without(attribute));
            assert!(
                matches!(err, ManifestAttributeError::Missing { .. }),
                "{:?}",
                err
            );
            assert_eq!(err.attribute(), attribute);
        }
    }

    #[test]
    fn test_missing_error_names_unique_once_known() {
        let err = attribute_error(&manifest_without("installerSystemVersion"));
        assert_eq!(err.unique(), None);

        let err = attribute_error(&manifest_without("displayName"));
        assert_eq!(err.unique(), Some("GalaxyMod"));
        assert_eq!(err.to_string(), "Missing displayName in Mod Identity for GalaxyMod");
    }

    #[test]
    fn test_empty_unique_is_rejected() {
        let xml = r#"<mod installerSystemVersion="1.0.1.0" unique=" " displayName="X" dllsBuild="2.5.20" />"#;
        let err = attribute_error(xml);
        assert!(matches!(err, ManifestAttributeError::Empty { attribute: "unique", .. }));
    }

    #[test]
    fn test_invalid_required_version() {
        let xml = r#"<mod installerSystemVersion="1.0.1.0" unique="GalaxyMod" displayName="X" dllsBuild="latest" />"#;
        let err = attribute_error(xml);
        assert_eq!(
            err,
            ManifestAttributeError::InvalidVersion {
                attribute: "dllsBuild",
                value: "latest".to_string(),
                unique: Some("GalaxyMod".to_string()),
            }
        );
        assert_eq!(err.to_string(), "Invalid dllsBuild latest in Mod Identity for GalaxyMod");
    }

    #[test]
    fn test_version_attributes_tolerate_padding() {
        let xml = r#"<mod installerSystemVersion="1.0.1.0" unique="GalaxyMod" displayName="X" dllsBuild="2.5.20 " modVersion=" 1.4" />"#;
        let identity = ModIdentity::from_xml(xml).unwrap();
        assert_eq!(identity.dlls_build.to_string(), "2.5.20");
        assert_eq!(identity.mod_version, Some(ModVersion::new(1, 4)));
    }

    #[test]
    fn test_malformed_optional_version_still_fails() {
        let err = attribute_error(&manifest_xml(r#"modVersion="v1.0""#));
        assert_eq!(err.attribute(), "modVersion");
    }

    #[test]
    fn test_boolean_is_case_sensitive() {
        let err = attribute_error(&manifest_xml(r#"isExperimental="True""#));
        assert_eq!(
            err,
            ManifestAttributeError::InvalidBool {
                attribute: "isExperimental",
                value: "True".to_string(),
                unique: Some("TestMod".to_string()),
            }
        );
    }

    #[test]
    fn test_not_well_formed_xml() {
        let result = ModIdentity::from_xml("<mod unique=\"x\">");
        assert!(matches!(result, Err(ManifestError::Xml(_))));

        let result = ModIdentity::from_xml("");
        assert!(matches!(result, Err(ManifestError::Xml(_))));
    }
}
