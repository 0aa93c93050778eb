use super::{Dataset, Datasets};

const ANSCOMBE_ATTRIBUTION: &str = "Anscombe, F. J. (1973). Graphs in Statistical Analysis. The American Statistician, 27(1), 17-21. doi:10.1080/00031305.1973.10478966";

/// Anscombe I
pub const ANSCOMBE_I: Dataset = Dataset {
    name: "Anscombe I",
    description: "First dataset from Anscombe's Quartet (1973). Shows a clear linear relationship with some scatter. All four Anscombe datasets have identical statistical properties: mean of X ≈ 9, mean of Y ≈ 7.5, variance of X ≈ 11, variance of Y ≈ 4.1, correlation ≈ 0.816.",
    attribution: ANSCOMBE_ATTRIBUTION,
    x: &[
        10.0, 8.0, 13.0, 9.0, 11.0, 14.0, 6.0, 4.0, 12.0, 7.0, 5.0,
    ],
    y: &[
        8.04, 6.95, 7.58, 8.81, 8.33, 9.96, 7.24, 4.26, 10.84, 4.82, 5.68,
    ],
};

/// Anscombe II
pub const ANSCOMBE_II: Dataset = Dataset {
    name: "Anscombe II",
    description: "Second dataset from Anscombe's Quartet (1973). Shows a perfect quadratic relationship. Despite the non-linear pattern, it has identical statistical properties to the other Anscombe datasets: mean of X ≈ 9, mean of Y ≈ 7.5, variance of X ≈ 11, variance of Y ≈ 4.1, correlation ≈ 0.816.",
    attribution: ANSCOMBE_ATTRIBUTION,
    x: &[
        10.0, 8.0, 13.0, 9.0, 11.0, 14.0, 6.0, 4.0, 12.0, 7.0, 5.0,
    ],
    y: &[
        9.14, 8.14, 8.74, 8.77, 9.26, 8.10, 6.13, 3.10, 9.13, 7.26, 4.74,
    ],
};

/// Anscombe III
pub const ANSCOMBE_III: Dataset = Dataset {
    name: "Anscombe III",
    description: "Third dataset from Anscombe's Quartet (1973). Shows a perfect linear relationship with one significant outlier. This demonstrates how outliers can affect statistical measures while maintaining identical summary statistics: mean of X ≈ 9, mean of Y ≈ 7.5, variance of X ≈ 11, variance of Y ≈ 4.1, correlation ≈ 0.816.",
    attribution: ANSCOMBE_ATTRIBUTION,
    x: &[
        10.0, 8.0, 13.0, 9.0, 11.0, 14.0, 6.0, 4.0, 12.0, 7.0, 5.0,
    ],
    y: &[
        7.46, 6.77, 12.74, 7.11, 7.81, 8.84, 6.08, 5.39, 8.15, 6.42, 5.73,
    ],
};

/// Anscombe IV
pub const ANSCOMBE_IV: Dataset = Dataset {
    name: "Anscombe IV",
    description: "Fourth dataset from Anscombe's Quartet (1973). Shows no relationship between X and Y except for one extreme outlier. This demonstrates how a single outlier can create misleading correlation statistics: mean of X ≈ 9, mean of Y ≈ 7.5, variance of X ≈ 11, variance of Y ≈ 4.1, correlation ≈ 0.816.",
    attribution: ANSCOMBE_ATTRIBUTION,
    x: &[
        8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 19.0, 8.0, 8.0, 8.0,
    ],
    y: &[
        6.58, 5.76, 7.71, 8.84, 8.47, 7.04, 5.25, 12.50, 5.56, 7.91, 6.89,
    ],
};

/// Anscombe's Quartet
///
/// Mean of x ≈ 9, mean of y ≈ 7.5 and r ≈ 0.816 in every member.
pub const ANSCOMBE_QUARTET: Datasets = Datasets {
    name: "Anscombe's Quartet",
    description: "The complete collection of Anscombe's four famous datasets (1973). Each dataset has nearly identical statistical properties (mean, variance, correlation) but very different distributions when plotted. This demonstrates the critical importance of data visualization alongside statistical analysis.",
    attribution: ANSCOMBE_ATTRIBUTION,
    data: &[
        ANSCOMBE_I,
        ANSCOMBE_II,
        ANSCOMBE_III,
        ANSCOMBE_IV,
    ],
};
