/// Axis-aligned lon/lat box in decimal degrees (`[lon, lat]`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb2 {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl Aabb2 {
    pub fn new(min: [f64; 2], max: [f64; 2]) -> Self {
        Aabb2 { min, max }
    }

    pub fn from_point(p: [f64; 2]) -> Self {
        Aabb2 { min: p, max: p }
    }

    /// Smallest box containing every point, or `None` when empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = [f64; 2]>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut out = Self::from_point(first);
        for p in iter {
            out.extend(p);
        }
        Some(out)
    }

    pub fn extend(&mut self, p: [f64; 2]) {
        self.min[0] = self.min[0].min(p[0]);
        self.min[1] = self.min[1].min(p[1]);
        self.max[0] = self.max[0].max(p[0]);
        self.max[1] = self.max[1].max(p[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::Aabb2;

    #[test]
    fn empty_input_has_no_bounds() {
        assert_eq!(Aabb2::from_points(Vec::<[f64; 2]>::new()), None);
    }

    #[test]
    fn bounds_cover_all_points() {
        let b = Aabb2::from_points([[18.6, 40.7], [-1.5, 52.0], [10.0, 45.0]]).unwrap();
        assert_eq!(b.min, [-1.5, 40.7]);
        assert_eq!(b.max, [18.6, 52.0]);
    }
}
