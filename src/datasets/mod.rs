mod anscombe;
mod datasaurus;

pub use anscombe::*;
pub use datasaurus::*;

/// A named pair of equally long series
///
/// Anscombe's Quartet and the Datasaurus Dozen share near-identical summary
/// statistics across very different shapes, which makes them fixtures with
/// published correlation values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dataset {
    /// Short name of the sample
    pub name: &'static str,
    /// What the sample looks like when plotted
    pub description: &'static str,
    /// Source of the data
    pub attribution: &'static str,
    /// Independent variable
    pub x: &'static [f64],
    /// Dependent variable, paired with `x` by index
    pub y: &'static [f64],
}

impl Dataset {
    /// Returns the number of pairs
    pub const fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns `true` when the dataset holds no pairs
    pub const fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterates over the `(x, y)` pairs
    ///
    /// # Examples
    ///
    /// ```
    /// use correlation_stats::datasets::ANSCOMBE_I;
    ///
    /// let first = ANSCOMBE_I.pairs().next();
    /// assert_eq!(first, Some((10.0, 8.04)));
    /// ```
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// A named group of related datasets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datasets {
    /// Name of the collection
    pub name: &'static str,
    /// What the collection demonstrates
    pub description: &'static str,
    /// Source of the collection
    pub attribution: &'static str,
    /// Member datasets
    pub data: &'static [Dataset],
}

/// Anscombe's Quartet followed by eleven of the Datasaurus shapes
pub const EXAMPLE_DATASETS: Datasets = Datasets {
    name: "Statistical Visualization Examples",
    description: "A collection of famous datasets that demonstrate why data visualization is crucial in statistical analysis. These datasets have nearly identical summary statistics but very different distributions when plotted.",
    attribution: "Collection curated for educational purposes in statistical analysis and data visualization",
    data: &[
        ANSCOMBE_I,
        ANSCOMBE_II,
        ANSCOMBE_III,
        ANSCOMBE_IV,
        DATASAURUS_DINO,
        DATASAURUS_SLANT_DOWN,
        DATASAURUS_SLANT_UP,
        DATASAURUS_WIDE_LINES,
        DATASAURUS_H_LINES,
        DATASAURUS_V_LINES,
        DATASAURUS_X_SHAPE,
        DATASAURUS_STAR,
        DATASAURUS_HIGH_LINES,
        DATASAURUS_DOTS,
        DATASAURUS_CIRCLE,
    ],
};
