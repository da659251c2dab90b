//! Surface material tags reported by hits.

/// Material of the surface a probe hit.
///
/// `Air` doubles as the miss sentinel: a trace that finds nothing reports it,
/// and backends should not return it for real geometry.
///
/// # Example
///
/// ```
/// use shapetrace::scene::Material;
///
/// let floor = Material::Wood;
///
/// assert!(!floor.is_air());
/// assert_eq!(Material::default(), Material::Air);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Material {
    #[default]
    Air,
    Plastic,
    Wood,
    Concrete,
    Metal,
    Glass,
    Water,
    Ground,
    /// Host-defined material
    Custom(u16),
}

impl Material {
    pub fn is_air(&self) -> bool {
        matches!(self, Self::Air)
    }
}
