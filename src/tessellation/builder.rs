use crate::error::Result;
use crate::math::Point3;

use super::cap_faces::{CapTriangulator, EarcutTriangulator};
use super::{
    RibbonMesh, RibbonParams, RibbonStyle, TessellateRibbon, TessellateTube, TessellateTwoRail,
};

/// Stateful mesh builder for a polyline shape.
///
/// Holds the polyline, the meshing parameters, and the produced mesh
/// buffers, and rebuilds the mesh synchronously on every mutation. Each
/// rebuild computes fresh buffers from scratch and publishes them with a
/// single assignment, so a reader never observes a half-written mesh.
///
/// A polyline of fewer than 2 points clears the mesh; the empty state lasts
/// until the next mutation supplies usable geometry.
pub struct RibbonBuilder {
    points: Vec<Point3>,
    params: RibbonParams,
    style: RibbonStyle,
    triangulator: Box<dyn CapTriangulator>,
    mesh: RibbonMesh,
}

impl RibbonBuilder {
    /// Creates a builder with the default ear-clipping cap triangulator and
    /// builds the initial mesh.
    ///
    /// # Errors
    ///
    /// Propagates mesh construction failures.
    pub fn new(points: Vec<Point3>, params: RibbonParams, style: RibbonStyle) -> Result<Self> {
        Self::with_triangulator(points, params, style, Box::new(EarcutTriangulator))
    }

    /// Creates a builder with an injected cap triangulator.
    ///
    /// # Errors
    ///
    /// Propagates mesh construction failures.
    pub fn with_triangulator(
        points: Vec<Point3>,
        params: RibbonParams,
        style: RibbonStyle,
        triangulator: Box<dyn CapTriangulator>,
    ) -> Result<Self> {
        let mut builder = Self {
            points,
            params,
            style,
            triangulator,
            mesh: RibbonMesh::default(),
        };
        builder.rebuild()?;
        Ok(builder)
    }

    /// Replaces the polyline and rebuilds the mesh.
    ///
    /// # Errors
    ///
    /// Propagates mesh construction failures.
    pub fn set_points(&mut self, points: Vec<Point3>) -> Result<()> {
        self.points = points;
        self.rebuild()
    }

    /// Replaces the ribbon width and rebuilds the mesh.
    ///
    /// # Errors
    ///
    /// Propagates mesh construction failures.
    pub fn set_width(&mut self, width: f64) -> Result<()> {
        self.params.width = width;
        self.rebuild()
    }

    /// Replaces the mesh style and rebuilds the mesh.
    ///
    /// # Errors
    ///
    /// Propagates mesh construction failures.
    pub fn set_style(&mut self, style: RibbonStyle) -> Result<()> {
        self.style = style;
        self.rebuild()
    }

    /// Returns the current mesh buffers.
    #[must_use]
    pub fn mesh(&self) -> &RibbonMesh {
        &self.mesh
    }

    /// Returns the current polyline.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the current meshing parameters.
    #[must_use]
    pub fn params(&self) -> RibbonParams {
        self.params
    }

    /// Returns the current mesh style.
    #[must_use]
    pub fn style(&self) -> RibbonStyle {
        self.style
    }

    fn rebuild(&mut self) -> Result<()> {
        let mesh = if self.points.len() < 2 {
            RibbonMesh::default()
        } else {
            match self.style {
                RibbonStyle::TwoRailRibbon => {
                    TessellateTwoRail::new(self.points.clone(), self.params).execute()
                }
                RibbonStyle::CenterOffsetRibbon => {
                    TessellateRibbon::new(self.points.clone(), self.params)
                        .execute(self.triangulator.as_ref())?
                }
                RibbonStyle::TriangularTube => {
                    TessellateTube::new(self.points.clone(), self.params).execute()
                }
            }
        };
        self.mesh = mesh;
        Ok(())
    }
}
