//! Metadata plan derived from `affects` edges
//!
//! When a component affects another one, some of its physical state ends
//! up in the metadata of the affected component: a stage moves the image,
//! a lens changes the pixel size, a light source sets the input
//! wavelength. Which metadata a consumer must keep updated depends on the
//! role of the affecting component.

use std::fmt;

use serde::Serialize;

use crate::models::Topology;

pub const ROLE_STAGE: &str = "stage";
pub const ROLE_LENS: &str = "lens";
pub const ROLE_LIGHT: &str = "light";
pub const ROLE_CCD: &str = "ccd";

/// Metadata entry kept up to date on an affected component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataKind {
    /// Stage position along `x` and `y`
    Position,
    /// Sensor pixel size times binning divided by magnification
    PixelSize,
    LensMagnification,
    LensName,
    /// Wavelength range of the active emissions
    InputWavelength,
    /// Power times the sum of active emissions
    LightPower,
}

impl MetadataKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataKind::Position => "position",
            MetadataKind::PixelSize => "pixel_size",
            MetadataKind::LensMagnification => "lens_magnification",
            MetadataKind::LensName => "lens_name",
            MetadataKind::InputWavelength => "input_wavelength",
            MetadataKind::LightPower => "light_power",
        }
    }
}

impl fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata `target` receives from `source`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataBinding {
    pub source: String,
    pub source_role: String,
    pub target: String,
    pub updates: Vec<MetadataKind>,
}

/// `affects` edge that produces no binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEdge {
    pub source: String,
    pub target: String,
    pub reason: String,
    /// Whether the author should look at it
    pub warn: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetadataPlan {
    pub bindings: Vec<MetadataBinding>,
    pub skipped: Vec<SkippedEdge>,
}

impl MetadataPlan {
    pub fn warnings(&self) -> impl Iterator<Item = &SkippedEdge> {
        self.skipped.iter().filter(|s| s.warn)
    }

    /// Bindings updating `target`, in document order of their source.
    pub fn bindings_for<'a>(&'a self, target: &'a str) -> impl Iterator<Item = &'a MetadataBinding> + 'a {
        self.bindings.iter().filter(move |b| b.target == target)
    }
}

/// Walk every `affects` edge of `topology` and classify it by source role.
pub fn plan_metadata(topology: &Topology) -> MetadataPlan {
    let mut plan = MetadataPlan::default();

    for source in topology {
        for target_name in &source.affects {
            let Some(target) = topology.component(target_name) else {
                tracing::debug!(source = %source.name, target = %target_name, "skipping affects edge to undefined component");
                continue;
            };

            let role = source.role.as_deref().unwrap_or_default();
            let updates = match role {
                ROLE_STAGE => vec![MetadataKind::Position],
                ROLE_LENS if target.has_role(ROLE_CCD) => vec![
                    MetadataKind::LensName,
                    MetadataKind::PixelSize,
                    MetadataKind::LensMagnification,
                ],
                ROLE_LENS => {
                    let target_role = target.role.as_deref().unwrap_or("component without role");
                    tracing::debug!(lens = %source.name, target = %target.name, "lens affects a non-ccd component");
                    plan.skipped.push(SkippedEdge {
                        source: source.name.clone(),
                        target: target.name.clone(),
                        reason: format!(
                            "does not know what to do with a lens in front of a {}",
                            target_role
                        ),
                        warn: true,
                    });
                    continue;
                }
                ROLE_LIGHT => vec![MetadataKind::InputWavelength, MetadataKind::LightPower],
                _ => {
                    tracing::debug!(source = %source.name, target = %target.name, "not observing component");
                    plan.skipped.push(SkippedEdge {
                        source: source.name.clone(),
                        target: target.name.clone(),
                        reason: if role.is_empty() {
                            "source has no role".to_string()
                        } else {
                            format!("no metadata is derived from role '{}'", role)
                        },
                        warn: false,
                    });
                    continue;
                }
            };

            plan.bindings.push(MetadataBinding {
                source: source.name.clone(),
                source_role: role.to_string(),
                target: target.name.clone(),
                updates,
            });
        }
    }

    plan
}
