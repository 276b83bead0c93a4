//! Deterministic mapping from plot identities to output paths.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::PathLayout;

/// Dataset name meaning "all datasets combined".
pub const DATASET_WILDCARD: &str = "*";

/// Directory segment the wildcard resolves to.
const WILDCARD_SEGMENT: &str = "all";

/// Image formats every figure is exported in.
pub const EXPORT_FORMATS: [ImageFormat; 2] = [ImageFormat::Svg, ImageFormat::Png];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
        }
    }
}

/// Labels identifying what a figure depicts, used purely for output naming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotIdentity {
    pub classifier: String,
    pub metric: Option<String>,
    pub dataset: String,
    pub kind: String,
}

impl PlotIdentity {
    pub fn new(
        classifier: impl Into<String>,
        metric: Option<&str>,
        dataset: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            classifier: classifier.into(),
            metric: metric.map(str::to_string),
            dataset: dataset.into(),
            kind: kind.into(),
        }
    }

    /// Identity of a single-panel diagonal plot for one dataset.
    pub fn diagonal(
        classifier: impl Into<String>,
        metric: Option<&str>,
        dataset: impl Into<String>,
    ) -> Self {
        Self::new(classifier, metric, dataset, "diagonal")
    }

    /// Identity of a faceted grid over all datasets.
    pub fn grid(classifier: impl Into<String>, metric: Option<&str>) -> Self {
        Self::new(classifier, metric, DATASET_WILDCARD, "grid")
    }
}

/// Resolver joining a plots root with identity segments.
///
/// Resolution is a pure function of its inputs: any string is accepted as a
/// segment and no filesystem checks are performed here.
#[derive(Debug, Clone)]
pub struct PlotPaths {
    root: PathBuf,
    layout: PathLayout,
}

impl PlotPaths {
    pub fn new(root: impl Into<PathBuf>, layout: PathLayout) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    /// Destination path for one identity and format.
    pub fn resolve(&self, identity: &PlotIdentity, format: ImageFormat) -> PathBuf {
        let mut path = self.root.join(&identity.classifier);
        if self.layout == PathLayout::Nested {
            if let Some(metric) = &identity.metric {
                path.push(metric);
            }
        }
        let dataset = if identity.dataset == DATASET_WILDCARD {
            WILDCARD_SEGMENT
        } else {
            identity.dataset.as_str()
        };
        path.push(dataset);
        path.push(format!("{}.{}", identity.kind, format.extension()));
        path
    }
}
