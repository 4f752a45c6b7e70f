pub mod convolve;
pub mod normalize;

pub const KERNEL_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    None,
    Horizontal,
    Vertical,
    DiagonalPositive,
    DiagonalNegative,
    All,
}

/// 3x3 grid of coefficients to be multiplied by the samples it slides over.
/// The wanted pattern is encoded as an arrangement of 1s, so the samples
/// under the pattern keep their value in the output
pub struct FilterDef {
    kind: FilterKind,
    name: &'static str,
    id: &'static str,
    weights: Option<[[f32; KERNEL_SIZE]; KERNEL_SIZE]>,
}

// Weight rows are y, columns are x. `None` passes the image through,
// `All` stands for "apply every concrete filter separately"; neither
// carries a grid. The order is the order of the selection menu
static FILTERS: [FilterDef; 6] = [
    FilterDef {
        kind: FilterKind::None,
        name: "None",
        id: "non",
        weights: None,
    },
    FilterDef {
        kind: FilterKind::Horizontal,
        name: "Horizontal",
        id: "hor",
        weights: Some([
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            [0.0, 0.0, 0.0],
        ]),
    },
    FilterDef {
        kind: FilterKind::Vertical,
        name: "Vertical",
        id: "ver",
        weights: Some([
            [0.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ]),
    },
    FilterDef {
        kind: FilterKind::DiagonalPositive,
        name: "Diagonal Positive",
        id: "diapos",
        weights: Some([
            [0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0],
            [1.0, 0.0, 0.0],
        ]),
    },
    FilterDef {
        kind: FilterKind::DiagonalNegative,
        name: "Diagonal Negative",
        id: "dianeg",
        weights: Some([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ]),
    },
    FilterDef {
        kind: FilterKind::All,
        name: "All",
        id: "all",
        weights: None,
    },
];

impl FilterDef {
    pub fn kind(&self) -> FilterKind { self.kind }

    pub fn name(&self) -> &'static str { self.name }

    /// First 3 characters of each word of the name, used as the
    /// file name suffix and the lookup key
    pub fn id(&self) -> &'static str { self.id }

    pub fn w(&self) -> usize { KERNEL_SIZE }
    pub fn h(&self) -> usize { KERNEL_SIZE }

    pub fn has_weights(&self) -> bool { self.weights.is_some() }

    /// Coefficient at (x, y); a coordinate outside the kernel yields
    /// a neutral 0 and a diagnostic instead of failing the filter call
    pub fn weight(&self, x: usize, y: usize) -> f32 {
        match self.weights {
            Some(ref weights) if x < KERNEL_SIZE && y < KERNEL_SIZE => weights[y][x],
            _ => {
                log::error!("weight ({}, {}) is not within bounds of filter '{}'", x, y, self.name);
                0_f32
            }
        }
    }
}

pub fn all_filters() -> &'static [FilterDef] {
    &FILTERS
}

/// Filters that carry a weight grid, in registry order.
/// `None` and `All` are left out by construction
pub fn concrete_filters() -> impl Iterator<Item = &'static FilterDef> {
    FILTERS.iter().filter(|f| f.has_weights())
}

pub fn get_filter(id: &str) -> Option<&'static FilterDef> {
    FILTERS.iter().find(|f| f.id == id)
}

pub fn filter_exists(id: &str) -> bool {
    get_filter(id).is_some()
}

pub fn get_filter_by_kind(kind: FilterKind) -> &'static FilterDef {
    FILTERS.iter().find(|f| f.kind == kind).unwrap()
}
