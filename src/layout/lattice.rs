//! Crystal lattice diagrams for doped and intrinsic silicon.

use rand::Rng;

use crate::config::LayoutConfig;
use crate::math::{p2, Scalar, P2, V2};
use crate::params::DopingType;
use crate::physics::{CarrierResult, IntrinsicResult};

use super::primitive::{AtomKind, Canvas, DrawablePrimitive, PointRole, StrokeRole};
use super::uniform;

/// Square grid of atom sites, rows and columns counted from 1.
#[derive(Debug, Clone, Copy)]
struct Lattice {
    grid: usize,
    spacing: Scalar,
}

impl Lattice {
    fn fit(canvas: Canvas, grid: usize) -> Self {
        let spacing = canvas.width().min(canvas.height()) / (grid as Scalar + 1.0);
        Self { grid, spacing }
    }

    fn site(&self, row: usize, col: usize) -> P2 {
        p2(col as Scalar * self.spacing, row as Scalar * self.spacing)
    }

    fn sites(&self) -> impl Iterator<Item = (usize, usize)> {
        let grid = self.grid;
        (1..=grid).flat_map(move |row| (1..=grid).map(move |col| (row, col)))
    }

    /// Bonds to the right and downward neighbours, trimmed by the atom radius.
    fn bonds_from(&self, row: usize, col: usize, radius: Scalar, out: &mut Vec<DrawablePrimitive>) {
        let at = self.site(row, col);
        if col < self.grid {
            out.push(DrawablePrimitive::segment(
                p2(at.x + radius, at.y),
                p2(at.x + self.spacing - radius, at.y),
                StrokeRole::Bond,
            ));
        }
        if row < self.grid {
            out.push(DrawablePrimitive::segment(
                p2(at.x, at.y + radius),
                p2(at.x, at.y + self.spacing - radius),
                StrokeRole::Bond,
            ));
        }
    }

    /// Uniform position anywhere across the grid.
    fn scatter<R: Rng>(&self, rng: &mut R) -> P2 {
        let span = self.grid as Scalar;
        p2(
            (1.0 + uniform(rng, 0.0, span)) * self.spacing,
            (1.0 + uniform(rng, 0.0, span)) * self.spacing,
        )
    }
}

pub(super) fn doping_layout<R: Rng>(
    result: &CarrierResult,
    canvas: Canvas,
    config: &LayoutConfig,
    rng: &mut R,
) -> Vec<DrawablePrimitive> {
    let lattice = Lattice::fit(canvas, config.doping_grid);
    let dopant = AtomKind::dopant(result.doping_type);
    let mut out = Vec::new();

    for (row, col) in lattice.sites() {
        let kind = if (row, col) == config.dopant_site {
            dopant
        } else {
            lattice.bonds_from(row, col, config.atom_radius, &mut out);
            AtomKind::Silicon
        };
        out.push(DrawablePrimitive::point(lattice.site(row, col), PointRole::Atom(kind)));
    }

    for _ in 0..result.thermal_pairs {
        out.push(DrawablePrimitive::point(lattice.scatter(rng), PointRole::Electron));
        out.push(DrawablePrimitive::point(lattice.scatter(rng), PointRole::Hole));
    }

    let site = lattice.site(config.dopant_site.0, config.dopant_site.1);
    let jitter = config.dopant_jitter;
    let carrier = site + V2::new(uniform(rng, -jitter, jitter), uniform(rng, -jitter, jitter));
    let role = match result.doping_type {
        DopingType::NType => PointRole::Electron,
        DopingType::PType => PointRole::Hole,
    };
    out.push(DrawablePrimitive::point(carrier, role));
    out
}

pub(super) fn intrinsic_layout<R: Rng>(
    result: &IntrinsicResult,
    canvas: Canvas,
    config: &LayoutConfig,
    rng: &mut R,
) -> Vec<DrawablePrimitive> {
    let lattice = Lattice::fit(canvas, config.intrinsic_grid);
    let mut out = Vec::new();

    for (row, col) in lattice.sites() {
        lattice.bonds_from(row, col, config.atom_radius, &mut out);
        out.push(DrawablePrimitive::point(
            lattice.site(row, col),
            PointRole::Atom(AtomKind::Silicon),
        ));
    }

    if lattice.grid == 0 {
        return out;
    }
    let wobble = lattice.spacing / 4.0;
    for _ in 0..result.pair_count {
        let row = rng.gen_range(1..=lattice.grid);
        let col = rng.gen_range(1..=lattice.grid);
        let centre = lattice.site(row, col)
            + V2::new(uniform(rng, -wobble, wobble), uniform(rng, -wobble, wobble));
        let offset = V2::new(0.0, config.pair_offset);
        out.push(DrawablePrimitive::point(centre - offset, PointRole::Electron));
        out.push(DrawablePrimitive::point(centre + offset, PointRole::Hole));
    }
    out
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::layout::primitive::points_with_role;
    use crate::params::{DopingSetup, IntrinsicSetup};
    use crate::physics::{evaluate_doping, evaluate_intrinsic};

    fn canvas() -> Canvas {
        Canvas::new(420.0, 420.0).expect("canvas")
    }

    fn doping(doping_type: DopingType, temperature: Scalar, seed: u64) -> Vec<DrawablePrimitive> {
        let result = evaluate_doping(&DopingSetup {
            doping_type,
            exponent: 5.0,
            temperature,
        })
        .expect("valid");
        let mut rng = StdRng::seed_from_u64(seed);
        doping_layout(&result, canvas(), &LayoutConfig::default(), &mut rng)
    }

    fn count_atoms(prims: &[DrawablePrimitive], kind: AtomKind) -> usize {
        points_with_role(prims, PointRole::Atom(kind)).len()
    }

    #[test]
    fn n_type_lattice_has_one_donor_and_an_extra_electron() {
        let prims = doping(DopingType::NType, 300.0, 3);
        assert_eq!(count_atoms(&prims, AtomKind::Donor), 1);
        assert_eq!(count_atoms(&prims, AtomKind::Silicon), 35);
        assert_eq!(count_atoms(&prims, AtomKind::Acceptor), 0);

        // 300 K is half way up the slider: two thermal pairs
        let electrons = points_with_role(&prims, PointRole::Electron);
        let holes = points_with_role(&prims, PointRole::Hole);
        assert_eq!(electrons.len(), 3);
        assert_eq!(holes.len(), 2);

        // spacing = 420 / 7
        let donor = points_with_role(&prims, PointRole::Atom(AtomKind::Donor))[0];
        assert_relative_eq!(donor.x, 180.0);
        assert_relative_eq!(donor.y, 180.0);
        let extra = electrons[electrons.len() - 1];
        assert!((extra.x - donor.x).abs() <= 15.0);
        assert!((extra.y - donor.y).abs() <= 15.0);
    }

    #[test]
    fn p_type_lattice_has_acceptor_and_no_bonds_from_it() {
        let prims = doping(DopingType::PType, 100.0, 9);
        assert_eq!(count_atoms(&prims, AtomKind::Acceptor), 1);
        assert_eq!(points_with_role(&prims, PointRole::Hole).len(), 1);
        assert!(points_with_role(&prims, PointRole::Electron).is_empty());
        // 2·6·5 bonds minus the two leaving the dopant site
        let bonds = prims.iter().filter(|p| p.stroke() == Some(StrokeRole::Bond)).count();
        assert_eq!(bonds, 58);
    }

    #[test]
    fn thermal_carriers_stay_inside_the_lattice() {
        let prims = doping(DopingType::NType, 500.0, 11);
        let max = 7.0 * 60.0;
        for p in points_with_role(&prims, PointRole::Hole) {
            assert!((60.0..=max).contains(&p.x) && (60.0..=max).contains(&p.y));
        }
    }

    #[test]
    fn intrinsic_pairs_split_around_a_lattice_site() {
        let result = evaluate_intrinsic(&IntrinsicSetup { temperature: 500.0 }).expect("valid");
        let mut rng = StdRng::seed_from_u64(5);
        let prims = intrinsic_layout(&result, canvas(), &LayoutConfig::default(), &mut rng);
        assert_eq!(count_atoms(&prims, AtomKind::Silicon), 25);

        let electrons = points_with_role(&prims, PointRole::Electron);
        let holes = points_with_role(&prims, PointRole::Hole);
        assert_eq!(electrons.len(), result.pair_count);
        assert_eq!(holes.len(), result.pair_count);
        for (e, h) in electrons.iter().zip(&holes) {
            assert_relative_eq!(e.x, h.x);
            assert_relative_eq!(h.y - e.y, 30.0, epsilon = 1.0e-9);
        }
    }

    #[test]
    fn seeded_lattice_is_reproducible() {
        assert_eq!(
            doping(DopingType::NType, 400.0, 77),
            doping(DopingType::NType, 400.0, 77)
        );
    }
}
